//! # Dispatch Session
//!
//! Ordered first-fit matching against one immutable set of actual arguments.
//!
//! A session is created per call, receives candidate signatures through
//! chained [`Session::signature`] calls, and evaluates each one eagerly as it
//! is registered. The first signature whose predicates all accept their
//! arguments runs its handler; every later signature is still validated but
//! never evaluated. [`Session::otherwise`] runs a fallback only if nothing
//! matched.
//!
//! Matching is first-fit, not best-fit: list candidates from the most specific
//! (largest arity, narrowest predicates) to the least specific.
//!
//! # State Machine
//!
//! ```text
//! Unmatched --(signature matches)--> Matched
//! Unmatched --(otherwise)----------> Outcome::Fallback
//! Unmatched --(finish)-------------> Outcome::Unmatched
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let arguments = args![2.5, 1];
//! let outcome = Session::begin(&registry, &arguments)
//!     .signature(tags![Int], || 3)?
//!     .signature(tags![Real, Int], || 2)?
//!     .otherwise(|| 4);
//! assert_eq!(outcome.into_output(), Some(2));
//! ```

use crate::{
    error::{InvalidSignatureError, OverloadError},
    registry::PredicateRegistry,
    signature::Signature,
    value::Arguments,
};

/// The explicit state of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<T> {
    /// No signature has matched yet.
    Unmatched,
    /// A signature matched and its handler ran.
    Matched {
        /// Registration index of the matching signature.
        signature: usize,
        /// What the handler returned.
        output: T,
    },
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A signature matched and its handler ran.
    Matched {
        /// Registration index of the matching signature.
        signature: usize,
        /// What the handler returned.
        output: T,
    },
    /// Nothing matched and the fallback ran.
    Fallback(T),
    /// Nothing matched and no fallback was supplied. This is a valid outcome.
    Unmatched,
}

impl<T> Outcome<T> {
    /// Returns `true` if a signature matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }

    /// Returns `true` if the fallback ran.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    /// Returns `true` if no handler ran at all.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, Outcome::Unmatched)
    }

    /// Registration index of the matching signature.
    pub fn matched_signature(&self) -> Option<usize> {
        match self {
            Outcome::Matched { signature, .. } => Some(*signature),
            _ => None,
        }
    }

    /// The handler's output, if a handler ran.
    pub fn output(&self) -> Option<&T> {
        match self {
            Outcome::Matched { output, .. } | Outcome::Fallback(output) => Some(output),
            Outcome::Unmatched => None,
        }
    }

    /// Consume the outcome, returning the handler's output if a handler ran.
    pub fn into_output(self) -> Option<T> {
        match self {
            Outcome::Matched { output, .. } | Outcome::Fallback(output) => Some(output),
            Outcome::Unmatched => None,
        }
    }

    /// The handler's output, or [`OverloadError::Unmatched`].
    pub fn require(self) -> Result<T, OverloadError> {
        self.into_output().ok_or(OverloadError::Unmatched)
    }
}

impl<T> From<SessionState<T>> for Outcome<T> {
    fn from(state: SessionState<T>) -> Self {
        match state {
            SessionState::Unmatched => Outcome::Unmatched,
            SessionState::Matched { signature, output } => Outcome::Matched { signature, output },
        }
    }
}

/// Per-call dispatch state.
///
/// `T` is the value every handler returns (often `()`).
#[must_use = "a session does nothing unless signatures are chained onto it"]
pub struct Session<'r, 'a, T> {
    registry: &'r PredicateRegistry,
    arguments: &'a Arguments,
    state: SessionState<T>,
    registered: usize,
}

impl<'r, 'a, T> Session<'r, 'a, T> {
    /// Begin dispatching over `arguments`.
    pub fn begin(registry: &'r PredicateRegistry, arguments: &'a Arguments) -> Self {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                arguments = ?arguments.type_names(),
                "Dispatch session started"
            );
        }

        Self {
            registry,
            arguments,
            state: SessionState::Unmatched,
            registered: 0,
        }
    }

    /// Register a candidate signature and evaluate it.
    ///
    /// Fails with [`InvalidSignatureError`] if the signature has more tags
    /// than there are arguments, or if a tag has no predicate. The session is
    /// consumed by the failure.
    ///
    /// If an earlier signature already matched, this one is accepted without
    /// evaluating its predicates and `handler` is dropped uncalled. Otherwise,
    /// if every predicate accepts its argument, `handler` runs exactly once and
    /// the session becomes matched.
    pub fn signature<S, F>(mut self, tags: S, handler: F) -> Result<Self, InvalidSignatureError>
    where
        S: Into<Signature>,
        F: FnOnce() -> T,
    {
        let signature = tags.into();
        let index = self.registered;
        self.registered += 1;

        signature.validate(self.registry, self.arguments.len())?;

        if self.is_matched() {
            #[cfg(feature = "tracing")]
            {
                tracing::trace!(signature = index, "Skipped signature, session already matched");
            }
            return Ok(self);
        }

        if signature.matches(self.registry, self.arguments) {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(signature = index, tags = %signature, "Signature matched");
            }
            let output = handler();
            self.state = SessionState::Matched {
                signature: index,
                output,
            };
        }

        Ok(self)
    }

    /// Run `fallback` if no signature matched, and end the session.
    pub fn otherwise<F>(self, fallback: F) -> Outcome<T>
    where
        F: FnOnce() -> T,
    {
        match self.state {
            SessionState::Unmatched => {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(
                        signatures = self.registered,
                        "No signature matched, running fallback"
                    );
                }
                Outcome::Fallback(fallback())
            }
            matched => matched.into(),
        }
    }

    /// End the session without a fallback.
    pub fn finish(self) -> Outcome<T> {
        self.state.into()
    }

    /// Returns `true` once a signature has matched.
    pub fn is_matched(&self) -> bool {
        matches!(self.state, SessionState::Matched { .. })
    }

    /// The current state.
    pub fn state(&self) -> &SessionState<T> {
        &self.state
    }

    /// The captured arguments.
    pub fn arguments(&self) -> &'a Arguments {
        self.arguments
    }

    /// Number of signatures registered so far.
    pub fn signature_count(&self) -> usize {
        self.registered
    }
}

impl Arguments {
    /// Begin a [`Session`] over these arguments.
    pub fn session<'r, T>(&self, registry: &'r PredicateRegistry) -> Session<'r, '_, T> {
        Session::begin(registry, self)
    }
}
