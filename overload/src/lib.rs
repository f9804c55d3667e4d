//! # overload - Runtime Overload Dispatch by Membership Predicates
//!
//! `overload` selects one behavior variant for a call by testing the call's
//! actual argument values against ordered candidate signatures. Every position
//! of a signature names a [`TypeTag`], and every tag owns a runtime
//! [`MembershipPredicate`]. The first candidate whose predicates all accept
//! their arguments wins; a fallback runs when nothing matched.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use overload::prelude::*;
//! use overload::tags::{Int, Real, standard_registry};
//!
//! let registry = standard_registry();
//!
//! fn foo(registry: &PredicateRegistry, arguments: Arguments) -> Result<i32, InvalidSignatureError> {
//!     Ok(arguments
//!         .session(registry)
//!         .signature(tags![Int, Int, Real, Int], || 1)?
//!         .signature(tags![Real, Int], || 2)?
//!         .signature(tags![Int], || 3)?
//!         .otherwise(|| 4)
//!         .into_output()
//!         .unwrap_or_default())
//! }
//!
//! assert_eq!(foo(&registry, args![2.5, 1])?, 2);
//! ```
//!
//! Candidates are tried in the order they are chained. List them from the most
//! specific to the least specific: the engine never compares specificity.
//!
//! ## Reusable Overload Sets
//!
//! [`OverloadSet`] holds the candidates once and dispatches them on every
//! call, validating the whole table before running anything and reporting
//! unreachable candidates through [`OverloadSet::shadowed`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use overload_core::{
    // Call-site capture
    Argument,
    Arguments,
    // Overload sets
    ArityPolicy,
    // Errors
    InvalidSignatureError,
    // Tags and predicates
    Membership,
    MembershipPredicate,
    // Session
    Outcome,
    OverloadError,
    OverloadSet,
    PredicateRegistry,
    RegistryBuilder,
    Session,
    SessionState,
    Shadowing,
    Signature,
    TypeTag,
    Value,
    // Macros
    args,
    tags,
};

/// Standard tags.
pub mod tags {
    pub use overload_std::tags::{
        Int, MatrixSize, Number, Real, as_f64, is_integer_primitive, register_standard,
        standard_builder, standard_registry,
    };
}

/// Predicate combinators.
pub mod predicates {
    #![allow(clippy::wildcard_imports)]
    pub use overload_std::predicates::*;
}

/// Traced predicates.
pub mod logging {
    #![allow(clippy::wildcard_imports)]
    pub use overload_std::logging::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use overload_std::testing::*;
}

/// Distributed tag registration.
#[cfg(feature = "inventory")]
pub mod collected {
    #![allow(clippy::wildcard_imports)]
    pub use overload_std::collected::*;
    pub use overload_std::submit_type_tag;
}

/// Prelude module - common imports for overload dispatch.
///
/// # Usage
///
/// ```rust,ignore
/// use overload::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Arguments, InvalidSignatureError, Membership, MembershipPredicate, Outcome,
        OverloadError, OverloadSet, PredicateRegistry, Session, Signature, TypeTag, Value, args,
        tags,
    };
}

#[cfg(feature = "macros")]
pub use overload_macros::TypeTag;

#[cfg(feature = "inventory")]
pub use inventory;
