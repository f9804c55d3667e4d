//! Error types for overload dispatch.
//!
//! - [`InvalidSignatureError`] - A candidate signature was declared wrongly
//! - [`OverloadError`] - Top-level error type

use crate::tag::TypeTag;
use thiserror::Error;

/// A signature violates the structural preconditions of dispatch.
///
/// This is a programming mistake in how candidates were declared, not a data
/// condition. A [`Session`](crate::Session) that reports it is consumed and
/// cannot be chained further.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSignatureError {
    /// A tag in the signature has no membership predicate registered.
    #[error("type tag `{tag}` at position {position} has no membership predicate registered")]
    UnregisteredTag {
        /// Position of the tag in the signature.
        position: usize,
        /// The offending tag.
        tag: TypeTag,
    },

    /// The signature examines more positions than the call supplied.
    #[error("signature has arity {arity} but the call supplied {available} argument(s)")]
    ArityOverflow {
        /// Number of tags in the signature.
        arity: usize,
        /// Number of actual arguments.
        available: usize,
    },
}

/// Top-level error type for overload dispatch.
#[derive(Error, Debug)]
pub enum OverloadError {
    /// A candidate signature is invalid.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] InvalidSignatureError),

    /// No signature matched and no fallback produced a result.
    #[error("no signature matched the arguments and no fallback was registered")]
    Unmatched,
}
