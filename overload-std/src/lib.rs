//! # overload-std
//!
//! Standard implementations for the overload dispatch engine.
//!
//! This crate provides:
//! - **Standard tags**: [`Int`](tags::Int), [`Real`](tags::Real),
//!   [`Number`](tags::Number), [`MatrixSize`](tags::MatrixSize)
//! - **Predicate combinators**: [`predicates`]
//! - **Logging**: traced predicates and registries
//! - **Testing utilities**: [`testing`]
//! - **Distributed registration**: `collected` (feature `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use overload_core;

// Modules
pub mod logging;
pub mod predicates;
pub mod tags;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collected;

#[cfg(feature = "inventory")]
pub use inventory;
