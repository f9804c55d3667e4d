//! # overload-core
//!
//! Core types for runtime, predicate-based overload dispatch.
//!
//! Given a call's actual argument values, the engine selects and runs exactly
//! one behavior variant from an ordered set of candidate signatures. Whether a
//! signature applies is decided per position by runtime membership predicates,
//! not by static types.
//!
//! This crate has minimal dependencies and is meant to be imported by code that
//! only declares tags or dispatches calls, without the standard tags of
//! `overload-std`.
//!
//! # Building Blocks
//!
//! ## Type Tags ([`TypeTag`], [`Membership`])
//!
//! Opaque identifiers naming a runtime-checkable "type". A tag is either a Rust
//! marker type implementing [`Membership`] or a named constant.
//!
//! ## Predicate Registry ([`PredicateRegistry`])
//!
//! Attaches one [`MembershipPredicate`] to each tag. Built once at setup and
//! shared read-only by every dispatch.
//!
//! ## Dispatch Session ([`Session`])
//!
//! Per-call state. Candidate signatures are chained onto it and evaluated
//! eagerly, first-fit, in registration order; at most one handler runs. A
//! fallback runs through [`Session::otherwise`] when nothing matched.
//!
//! ## Overload Set ([`OverloadSet`])
//!
//! A reusable table of candidates with a single evaluation entry point, for
//! call sites that dispatch the same overloads repeatedly.
//!
//! ## Call-site Adapter ([`Arguments`], [`args!`])
//!
//! Captures a call's positional arguments.
//!
//! # Error Types
//!
//! - [`InvalidSignatureError`] - A signature was declared wrongly
//! - [`OverloadError`] - Top-level error type

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod predicate;
mod registry;
mod session;
mod set;
mod signature;
mod tag;
mod value;

// Re-exports
pub use error::{InvalidSignatureError, OverloadError};
pub use predicate::MembershipPredicate;
pub use registry::{PredicateRegistry, RegistryBuilder};
pub use session::{Outcome, Session, SessionState};
pub use set::{ArityPolicy, OverloadSet, Shadowing};
pub use signature::Signature;
pub use tag::{Membership, TypeTag};
pub use value::{Argument, Arguments, Value};
