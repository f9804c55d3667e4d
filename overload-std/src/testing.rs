//! Testing utilities for overload dispatch.
//!
//! # Features
//!
//! - [`CallLog`]: Records which labelled handlers ran, in order
//! - [`CountingPredicate`]: Counts how often predicates are evaluated

use overload_core::{Arguments, MembershipPredicate, Value};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// Records the labels of handlers as they run.
///
/// Clones share the same log.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
///
/// arguments
///     .session(&registry)
///     .signature(tags![Int], log.handler("int", ()))?
///     .otherwise(log.handler("fallback", ()));
///
/// assert_eq!(log.calls(), vec!["int"]);
/// ```
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` directly.
    pub fn record(&self, label: &'static str) {
        self.calls.lock().unwrap().push(label);
    }

    /// A session handler that records `label` and returns `output`.
    pub fn handler<T>(&self, label: &'static str, output: T) -> impl FnOnce() -> T + use<T> {
        let log = self.clone();
        move || {
            log.record(label);
            output
        }
    }

    /// An overload-set handler that records `label` and returns a clone of
    /// `output`.
    pub fn overload<T>(
        &self,
        label: &'static str,
        output: T,
    ) -> impl Fn(&Arguments) -> T + Send + Sync + use<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let log = self.clone();
        move |_: &Arguments| {
            log.record(label);
            output.clone()
        }
    }

    /// The recorded labels, oldest first.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

// ============================================================================
// Counting Predicate
// ============================================================================

/// Counts predicate evaluations.
///
/// Clones share the same counter, so one counter can watch several
/// predicates.
#[derive(Clone, Default)]
pub struct CountingPredicate {
    count: Arc<AtomicUsize>,
}

impl CountingPredicate {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `predicate` so each evaluation increments this counter.
    pub fn wrap(&self, predicate: MembershipPredicate) -> MembershipPredicate {
        let count = self.count.clone();
        MembershipPredicate::new(move |value: &Value| {
            count.fetch_add(1, Ordering::SeqCst);
            predicate.test(value)
        })
    }

    /// Number of evaluations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
