//! Distributed tag registration via `inventory`.
//!
//! Tags can be submitted next to their definitions anywhere in the program
//! with [`submit_type_tag!`](crate::submit_type_tag) and gathered into one
//! registry at startup with [`collected_registry`].
//!
//! ```rust,ignore
//! struct Even;
//! impl Membership for Even { ... }
//!
//! overload_std::submit_type_tag!(Even);
//!
//! let registry = collected_registry();
//! assert!(registry.has_predicate(Even::tag()));
//! ```

use overload_core::{PredicateRegistry, TypeTag, Value};

/// A tag and predicate submitted for collection.
pub struct TagRegistration {
    /// Produces the tag.
    pub tag: fn() -> TypeTag,
    /// The membership predicate.
    pub predicate: fn(&Value) -> bool,
}

impl TagRegistration {
    /// Create a registration entry.
    pub const fn new(tag: fn() -> TypeTag, predicate: fn(&Value) -> bool) -> Self {
        Self { tag, predicate }
    }
}

inventory::collect!(TagRegistration);

/// Register every submitted tag into `registry`.
///
/// Collection order is unspecified; if the same tag is submitted twice, which
/// predicate wins is unspecified too.
pub fn register_collected(registry: &mut PredicateRegistry) {
    for registration in inventory::iter::<TagRegistration> {
        registry.register((registration.tag)(), registration.predicate);
    }
}

/// A registry holding every submitted tag.
pub fn collected_registry() -> PredicateRegistry {
    let mut registry = PredicateRegistry::new();
    register_collected(&mut registry);
    registry
}

/// Submits a [`Membership`](overload_core::Membership) type for collection.
#[macro_export]
macro_rules! submit_type_tag {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::collected::TagRegistration::new(
                <$ty as $crate::overload_core::Membership>::tag,
                <$ty as $crate::overload_core::Membership>::contains,
            )
        }
    };
}
