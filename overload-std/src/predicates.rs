//! Predicate combinators.
//!
//! Building blocks for membership predicates that are not worth a dedicated
//! marker type.

use overload_core::{MembershipPredicate, Value};
use std::any::Any;

/// Accepts values of exactly type `T`.
pub fn instance_of<T: Any>() -> MembershipPredicate {
    MembershipPredicate::new(|value| value.is::<T>())
}

/// Accepts values of type `T` for which `test` returns `true`.
pub fn instance_where<T, F>(test: F) -> MembershipPredicate
where
    T: Any,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    MembershipPredicate::new(move |value| value.downcast_ref::<T>().is_some_and(&test))
}

/// Accepts values equal to `expected`.
pub fn equal_to<T>(expected: T) -> MembershipPredicate
where
    T: Any + PartialEq + Send + Sync,
{
    instance_where(move |value: &T| *value == expected)
}

/// Accepts every value.
pub fn anything() -> MembershipPredicate {
    MembershipPredicate::new(|_| true)
}

/// Accepts values every predicate accepts.
pub fn all_of(predicates: impl IntoIterator<Item = MembershipPredicate>) -> MembershipPredicate {
    let predicates: Vec<_> = predicates.into_iter().collect();
    MembershipPredicate::new(move |value: &Value| predicates.iter().all(|p| p.test(value)))
}

/// Accepts values at least one predicate accepts.
pub fn any_of(predicates: impl IntoIterator<Item = MembershipPredicate>) -> MembershipPredicate {
    let predicates: Vec<_> = predicates.into_iter().collect();
    MembershipPredicate::new(move |value: &Value| predicates.iter().any(|p| p.test(value)))
}
