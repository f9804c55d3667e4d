//! Membership predicates.

use crate::{tag::Membership, value::Value};
use std::{fmt, sync::Arc};

/// A boolean test deciding whether a value belongs to a type tag.
///
/// Predicates are expected to be pure: no side effects, and the same answer
/// for the same value. Cloning is cheap (the function is shared).
#[derive(Clone)]
pub struct MembershipPredicate {
    test: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl MembershipPredicate {
    /// Wrap a function as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// The predicate of a [`Membership`] type.
    pub fn of<T: Membership>() -> Self {
        Self::new(T::contains)
    }

    /// Evaluate the predicate against a value.
    pub fn test(&self, value: &Value) -> bool {
        (self.test)(value)
    }

    /// A predicate accepting values this one rejects.
    pub fn negate(self) -> Self {
        Self::new(move |value| !self.test(value))
    }
}

impl fmt::Debug for MembershipPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembershipPredicate").finish_non_exhaustive()
    }
}
