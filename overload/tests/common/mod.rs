#![allow(dead_code)]

use lazy_static::lazy_static;
use overload::{
    Membership, PredicateRegistry, TypeTag, Value,
    tags::{Int, MatrixSize, Number, Real, standard_builder},
};

// ============================================================================
// Shared Registry
// ============================================================================

/// A tag that is never registered.
pub const UNREGISTERED: TypeTag = TypeTag::named("unregistered");

/// Strings.
pub const TEXT: TypeTag = TypeTag::named("text");

lazy_static! {
    /// The standard tags plus `TEXT`, built once for every test.
    pub static ref REGISTRY: PredicateRegistry = standard_builder()
        .register(TEXT, |value: &Value| value.is::<&str>() || value.is::<String>())
        .build();
}

pub fn int() -> TypeTag {
    Int::tag()
}

pub fn real() -> TypeTag {
    Real::tag()
}

pub fn number() -> TypeTag {
    Number::tag()
}

pub fn matrix() -> TypeTag {
    MatrixSize::tag()
}
