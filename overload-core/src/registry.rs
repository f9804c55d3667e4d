//! # Predicate Registry
//!
//! Associates each [`TypeTag`] with its [`MembershipPredicate`].
//!
//! The registry is an explicit object rather than process-wide state. The
//! intended lifecycle is: build it once at application setup (usually with
//! [`RegistryBuilder`]), then share it read-only with every dispatch. Sessions
//! borrow it immutably, so it cannot change while a call is being dispatched.

use crate::{
    predicate::MembershipPredicate,
    tag::{Membership, TypeTag},
    value::Value,
};
use std::{collections::HashMap, fmt};

/// The table of membership predicates, keyed by tag.
#[derive(Clone, Default)]
pub struct PredicateRegistry {
    predicates: HashMap<TypeTag, MembershipPredicate>,
}

impl PredicateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Attach a predicate function to `tag`.
    ///
    /// See [`register_predicate`](Self::register_predicate).
    pub fn register<F>(&mut self, tag: TypeTag, test: F) -> Option<MembershipPredicate>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.register_predicate(tag, MembershipPredicate::new(test))
    }

    /// Attach `predicate` to `tag`, replacing any predicate already attached.
    ///
    /// Returns the replaced predicate.
    pub fn register_predicate(
        &mut self,
        tag: TypeTag,
        predicate: MembershipPredicate,
    ) -> Option<MembershipPredicate> {
        let previous = self.predicates.insert(tag, predicate);

        #[cfg(feature = "tracing")]
        {
            if previous.is_some() {
                tracing::debug!(tag = %tag, "Replaced membership predicate");
            } else {
                tracing::trace!(tag = %tag, "Registered membership predicate");
            }
        }

        previous
    }

    /// Register a [`Membership`] type under its own tag.
    pub fn register_type<T: Membership>(&mut self) -> Option<MembershipPredicate> {
        self.register_predicate(T::tag(), MembershipPredicate::of::<T>())
    }

    /// Whether `tag` currently has a predicate attached.
    pub fn has_predicate(&self, tag: TypeTag) -> bool {
        self.predicates.contains_key(&tag)
    }

    /// The predicate attached to `tag`.
    pub fn predicate(&self, tag: TypeTag) -> Option<&MembershipPredicate> {
        self.predicates.get(&tag)
    }

    /// Evaluate the predicate of `tag` against `value`.
    ///
    /// Returns `None` if `tag` has no predicate.
    pub fn test(&self, tag: TypeTag, value: &Value) -> Option<bool> {
        self.predicate(tag).map(|predicate| predicate.test(value))
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// The registered tags, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.predicates.keys().copied()
    }
}

impl fmt::Debug for PredicateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.predicates.keys()).finish()
    }
}

/// Builder for constructing a [`PredicateRegistry`].
#[derive(Default)]
pub struct RegistryBuilder {
    registry: PredicateRegistry,
}

impl RegistryBuilder {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            registry: PredicateRegistry::new(),
        }
    }

    /// Register a predicate function.
    pub fn register<F>(mut self, tag: TypeTag, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.registry.register(tag, test);
        self
    }

    /// Register a predicate.
    pub fn register_predicate(mut self, tag: TypeTag, predicate: MembershipPredicate) -> Self {
        self.registry.register_predicate(tag, predicate);
        self
    }

    /// Register a [`Membership`] type.
    pub fn register_type<T: Membership>(mut self) -> Self {
        self.registry.register_type::<T>();
        self
    }

    /// Build the registry.
    pub fn build(self) -> PredicateRegistry {
        self.registry
    }
}
