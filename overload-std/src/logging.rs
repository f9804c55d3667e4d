//! Logging predicates - observability for membership tests.

use overload_core::{MembershipPredicate, PredicateRegistry, TypeTag, Value};

/// Wrap `predicate` so every evaluation is logged under `tag`.
///
/// The wrapped predicate returns exactly what `predicate` returns. Logging uses
/// `tracing` at `DEBUG` when the `tracing` feature is enabled and is a no-op
/// otherwise.
///
/// # Example
///
/// ```rust,ignore
/// let int = traced(Int::tag(), MembershipPredicate::of::<Int>());
/// registry.register_predicate(Int::tag(), int);
/// ```
pub fn traced(tag: TypeTag, predicate: MembershipPredicate) -> MembershipPredicate {
    MembershipPredicate::new(move |value: &Value| {
        let accepted = predicate.test(value);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(tag = %tag, accepted, "Membership test");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = tag;
        }

        accepted
    })
}

/// A copy of `registry` whose predicates are all wrapped with [`traced`].
pub fn traced_registry(registry: &PredicateRegistry) -> PredicateRegistry {
    let mut traced_registry = PredicateRegistry::new();
    for tag in registry.tags() {
        if let Some(predicate) = registry.predicate(tag) {
            traced_registry.register_predicate(tag, traced(tag, predicate.clone()));
        }
    }
    traced_registry
}
