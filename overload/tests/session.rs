//! Dispatch session tests: first-fit chaining over captured arguments.

use overload::{
    InvalidSignatureError, MembershipPredicate, Outcome, OverloadError, PredicateRegistry,
    Session, SessionState, Signature, args,
    tags::{Int, Real},
    testing::{CallLog, CountingPredicate},
};

mod common;
use common::{REGISTRY, TEXT, UNREGISTERED, int, number, real};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_longest_signature_matches_first() {
    let log = CallLog::new();
    let arguments = args![1, 2, 2.5, 4];

    let outcome = Session::begin(&REGISTRY, &arguments)
        .signature([int(), int(), real(), int()], log.handler("A", ()))
        .unwrap()
        .signature([int()], log.handler("B", ()))
        .unwrap()
        .finish();

    assert_eq!(outcome.matched_signature(), Some(0));
    assert_eq!(log.calls(), vec!["A"], "Only the first matching signature should run");
}

#[test]
fn test_arity_guard_fires_before_predicates() {
    let counter = CountingPredicate::new();
    let mut registry = PredicateRegistry::new();
    registry.register_predicate(int(), counter.wrap(MembershipPredicate::of::<Int>()));
    registry.register_predicate(real(), counter.wrap(MembershipPredicate::of::<Real>()));

    let log = CallLog::new();
    let arguments = args![1];

    let result = Session::begin(&registry, &arguments)
        .signature([int(), int(), real(), int()], log.handler("A", ()));

    assert_eq!(
        result.err(),
        Some(InvalidSignatureError::ArityOverflow {
            arity: 4,
            available: 1
        })
    );
    assert_eq!(counter.count(), 0, "No predicate should be evaluated");
    assert_eq!(log.count(), 0);
}

#[test]
fn test_falls_through_to_later_signature() {
    let log = CallLog::new();
    let arguments = args![2.5, 1];

    let outcome = arguments
        .session(&REGISTRY)
        .signature([int()], log.handler("B", 'B'))
        .unwrap()
        .signature([real(), int()], log.handler("C", 'C'))
        .unwrap()
        .otherwise(log.handler("D", 'D'));

    assert_eq!(
        outcome,
        Outcome::Matched {
            signature: 1,
            output: 'C'
        }
    );
    assert_eq!(log.calls(), vec!["C"]);
}

#[test]
fn test_fallback_with_no_arguments() {
    let log = CallLog::new();
    let arguments = args![];

    let outcome = arguments.session(&REGISTRY).otherwise(log.handler("D", 4));

    assert_eq!(outcome, Outcome::Fallback(4));
    assert_eq!(log.calls(), vec!["D"]);
}

#[test]
fn test_invalid_signature_ends_session() {
    let log = CallLog::new();
    let arguments = args![1, 1];

    let result = arguments
        .session(&REGISTRY)
        .signature([int(), int(), real(), int()], log.handler("A", ()));

    // The session was consumed by the error; nothing remains to chain onto.
    let Err(err) = result else {
        panic!("Arity overflow should be rejected");
    };
    assert_eq!(
        err,
        InvalidSignatureError::ArityOverflow {
            arity: 4,
            available: 2
        }
    );
    assert_eq!(log.count(), 0, "No handler should have run");
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_at_most_one_handler_runs() {
    let log = CallLog::new();
    let arguments = args![3, 4];

    arguments
        .session(&REGISTRY)
        .signature([number(), number()], log.handler("number, number", ()))
        .unwrap()
        .signature([int(), int()], log.handler("int, int", ()))
        .unwrap()
        .signature([int()], log.handler("int", ()))
        .unwrap()
        .signature(Signature::default(), log.handler("empty", ()))
        .unwrap()
        .otherwise(log.handler("fallback", ()));

    assert_eq!(log.calls(), vec!["number, number"]);
}

#[test]
fn test_first_fit_not_best_fit() {
    let log = CallLog::new();
    let arguments = args![1, 2];

    arguments
        .session(&REGISTRY)
        .signature([int()], log.handler("int", ()))
        .unwrap()
        .signature([int(), int()], log.handler("int, int", ()))
        .unwrap()
        .finish();

    assert_eq!(
        log.calls(),
        vec!["int"],
        "The less specific signature wins when it comes first"
    );
}

#[test]
fn test_prefix_only_matching() {
    let arguments = args![1, "not a number", 2.5];

    let outcome = arguments
        .session(&REGISTRY)
        .signature([int()], || "int")
        .unwrap()
        .finish();

    assert_eq!(outcome.into_output(), Some("int"));
}

#[test]
fn test_predicates_not_evaluated_after_match() {
    let counter = CountingPredicate::new();
    let registry = PredicateRegistry::builder()
        .register_predicate(int(), counter.wrap(MembershipPredicate::of::<Int>()))
        .build();
    let arguments = args![1, 2];

    let session = arguments
        .session(&registry)
        .signature([int()], || ())
        .unwrap();
    assert_eq!(counter.count(), 1);

    let session = session
        .signature([int(), int()], || ())
        .unwrap()
        .signature([int()], || ())
        .unwrap();
    assert_eq!(counter.count(), 1);
    assert_eq!(session.signature_count(), 3);
}

#[test]
fn test_predicate_evaluation_short_circuits() {
    let counter = CountingPredicate::new();
    let registry = PredicateRegistry::builder()
        .register_predicate(int(), counter.wrap(MembershipPredicate::of::<Int>()))
        .build();
    let arguments = args![0.5, 1, 2];

    let session = arguments
        .session::<()>(&registry)
        .signature([int(), int(), int()], || ())
        .unwrap();

    assert!(!session.is_matched());
    assert_eq!(counter.count(), 1, "Evaluation should stop at position 0");
}

#[test]
fn test_fallback_skipped_after_match() {
    let log = CallLog::new();
    let arguments = args!["text"];

    let outcome = arguments
        .session(&REGISTRY)
        .signature([TEXT], log.handler("text", 1))
        .unwrap()
        .otherwise(log.handler("fallback", 2));

    assert!(outcome.is_matched());
    assert_eq!(log.calls(), vec!["text"]);
}

#[test]
fn test_no_match_without_fallback_is_silent() {
    let log = CallLog::new();
    let arguments = args!["text"];

    let outcome = arguments
        .session(&REGISTRY)
        .signature([int()], log.handler("int", ()))
        .unwrap()
        .finish();

    assert!(outcome.is_unmatched());
    assert_eq!(log.count(), 0);
    assert!(matches!(outcome.require(), Err(OverloadError::Unmatched)));
}

#[test]
fn test_unregistered_tag_guard() {
    let arguments = args![1, 2];

    let result = arguments
        .session(&REGISTRY)
        .signature([int(), UNREGISTERED], || ());

    assert_eq!(
        result.err(),
        Some(InvalidSignatureError::UnregisteredTag {
            position: 1,
            tag: UNREGISTERED
        })
    );
}

#[test]
fn test_unregistered_tag_rejected_even_after_match() {
    let arguments = args![1];

    let result = arguments
        .session(&REGISTRY)
        .signature([int()], || ())
        .unwrap()
        .signature([UNREGISTERED], || ());

    assert!(matches!(
        result,
        Err(InvalidSignatureError::UnregisteredTag { position: 0, .. })
    ));
}

#[test]
fn test_tag_registered_after_arguments_captured() {
    let arguments = args![7];
    let mut registry = PredicateRegistry::new();
    registry.register_type::<Int>();

    let session = Session::begin(&registry, &arguments)
        .signature([int()], || "late")
        .unwrap();

    assert_eq!(
        session.state(),
        &SessionState::Matched {
            signature: 0,
            output: "late"
        }
    );
}

#[test]
fn test_invalid_signature_converts_to_overload_error() {
    fn dispatch() -> Result<&'static str, OverloadError> {
        let arguments = args![1];
        arguments
            .session(&REGISTRY)
            .signature([int(), int()], || "two")?
            .otherwise(|| "fallback")
            .require()
    }

    assert!(matches!(
        dispatch(),
        Err(OverloadError::InvalidSignature(
            InvalidSignatureError::ArityOverflow { .. }
        ))
    ));
}
