//! Predicate registry tests: registration, replacement and standard tags.

use overload::{
    Membership, MembershipPredicate, PredicateRegistry, TypeTag, Value, args,
    logging::traced_registry,
    predicates::{any_of, instance_of},
    tags::{Int, MatrixSize, Number, Real, standard_registry},
};

mod common;
use common::{REGISTRY, TEXT, UNREGISTERED, int, real};

struct Positive;

impl Membership for Positive {
    fn contains(value: &Value) -> bool {
        overload::tags::as_f64(value).is_some_and(|v| v > 0.0)
    }
}

#[test]
fn test_shared_registry_contents() {
    assert!(REGISTRY.has_predicate(Int::tag()));
    assert!(REGISTRY.has_predicate(Real::tag()));
    assert!(REGISTRY.has_predicate(Number::tag()));
    assert!(REGISTRY.has_predicate(MatrixSize::tag()));
    assert!(REGISTRY.has_predicate(TEXT));
    assert!(!REGISTRY.has_predicate(UNREGISTERED));
}

#[test]
fn test_reregistration_changes_dispatch() {
    let mut registry = standard_registry();
    let arguments = args![2.5];

    let outcome = arguments
        .session(&registry)
        .signature([int()], || "int")
        .unwrap()
        .finish();
    assert!(outcome.is_unmatched());

    // Widen `Int` to every number.
    let previous = registry.register_predicate(int(), MembershipPredicate::of::<Number>());
    assert!(previous.is_some());

    let outcome = arguments
        .session(&registry)
        .signature([int()], || "int")
        .unwrap()
        .finish();
    assert_eq!(outcome.into_output(), Some("int"));
}

#[test]
fn test_user_membership_type() {
    let registry = overload::tags::standard_builder()
        .register_type::<Positive>()
        .build();
    let arguments = args![-1, 2];

    let outcome = arguments
        .session(&registry)
        .signature([Positive::tag(), Positive::tag()], || "both positive")
        .unwrap()
        .signature([int(), Positive::tag()], || "int, positive")
        .unwrap()
        .finish();

    assert_eq!(outcome.into_output(), Some("int, positive"));
}

#[test]
fn test_named_tags_with_combinators() {
    const TEXT_OR_BYTES: TypeTag = TypeTag::named("text or bytes");

    let registry = PredicateRegistry::builder()
        .register_predicate(
            TEXT_OR_BYTES,
            any_of([instance_of::<String>(), instance_of::<Vec<u8>>()]),
        )
        .build();

    let accepts = |arguments: overload::Arguments| {
        arguments
            .session(&registry)
            .signature([TEXT_OR_BYTES], || ())
            .unwrap()
            .is_matched()
    };

    assert!(accepts(args![String::from("hello")]));
    assert!(accepts(args![vec![1_u8, 2, 3]]));
    assert!(!accepts(args![42]));
}

#[test]
fn test_traced_registry_dispatches_identically() {
    let registry = traced_registry(&standard_registry());
    let arguments = args![2.5, 1];

    let outcome = arguments
        .session(&registry)
        .signature([int()], || 'B')
        .unwrap()
        .signature([real(), int()], || 'C')
        .unwrap()
        .finish();

    assert_eq!(outcome.into_output(), Some('C'));
}
