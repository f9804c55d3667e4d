//! # Overload Sets
//!
//! A declarative, reusable alternative to chaining a [`Session`] at every call
//! site. An [`OverloadSet`] holds the full ordered list of candidates plus an
//! optional fallback, and [`OverloadSet::dispatch`] evaluates them through a
//! single entry point:
//!
//! 1. every candidate is validated before any predicate runs, so a badly
//!    declared set fails the same way no matter which arguments arrive;
//! 2. candidates are then tried first-fit, in declaration order;
//! 3. the fallback runs if none matched.
//!
//! Declaration order still decides the winner. [`OverloadSet::shadowed`]
//! reports candidates that an earlier candidate makes unreachable.
//!
//! [`Session`]: crate::Session

use crate::{
    error::InvalidSignatureError,
    registry::PredicateRegistry,
    session::Outcome,
    signature::Signature,
    value::Arguments,
};
use std::fmt;

type OverloadHandler<T> = Box<dyn Fn(&Arguments) -> T + Send + Sync>;

/// How an [`OverloadSet`] treats candidates with more tags than the call has
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArityPolicy {
    /// Report [`InvalidSignatureError::ArityOverflow`] (default).
    #[default]
    Strict,
    /// Treat the candidate as non-matching for this call.
    Skip,
}

/// A candidate that can never be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowing {
    /// Index of the unreachable candidate.
    pub shadowed: usize,
    /// Index of the earlier candidate whose tags are a prefix of its tags.
    pub by: usize,
}

struct Overload<T> {
    signature: Signature,
    handler: OverloadHandler<T>,
}

/// An ordered table of candidate signatures with an optional fallback.
///
/// Handlers receive the call's [`Arguments`].
///
/// # Example
///
/// ```rust,ignore
/// let describe = OverloadSet::new()
///     .signature(tags![Int, Int], |_| "two ints")
///     .signature(tags![Int], |_| "int")
///     .otherwise(|_| "something else");
///
/// let outcome = describe.dispatch(&registry, &args![1, 2])?;
/// assert_eq!(outcome.into_output(), Some("two ints"));
/// ```
pub struct OverloadSet<T> {
    candidates: Vec<Overload<T>>,
    fallback: Option<OverloadHandler<T>>,
    arity: ArityPolicy,
}

impl<T> Default for OverloadSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OverloadSet<T> {
    /// Create an empty set with [`ArityPolicy::Strict`].
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            fallback: None,
            arity: ArityPolicy::Strict,
        }
    }

    /// Set the arity policy.
    pub fn with_arity_policy(mut self, policy: ArityPolicy) -> Self {
        self.arity = policy;
        self
    }

    /// The arity policy.
    pub fn arity_policy(&self) -> ArityPolicy {
        self.arity
    }

    /// Append a candidate.
    pub fn signature<S, F>(mut self, tags: S, handler: F) -> Self
    where
        S: Into<Signature>,
        F: Fn(&Arguments) -> T + Send + Sync + 'static,
    {
        let signature = tags.into();

        #[cfg(feature = "tracing")]
        {
            let index = self.candidates.len();
            if let Some(by) = self
                .candidates
                .iter()
                .position(|earlier| earlier.signature.is_prefix_of(&signature))
            {
                tracing::warn!(
                    candidate = index,
                    tags = %signature,
                    shadowed_by = by,
                    "Overload candidate can never be selected"
                );
            }
        }

        self.candidates.push(Overload {
            signature,
            handler: Box::new(handler),
        });
        self
    }

    /// Set the fallback, replacing any previous one.
    pub fn otherwise<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&Arguments) -> T + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Returns `true` if a fallback is set.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// The candidate signatures, in declaration order.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> + '_ {
        self.candidates.iter().map(|candidate| &candidate.signature)
    }

    /// Candidates that can never be selected, each paired with the first
    /// earlier candidate that hides it.
    pub fn shadowed(&self) -> Vec<Shadowing> {
        self.candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                self.candidates[..index]
                    .iter()
                    .position(|earlier| earlier.signature.is_prefix_of(&candidate.signature))
                    .map(|by| Shadowing {
                        shadowed: index,
                        by,
                    })
            })
            .collect()
    }

    /// Validate every candidate against a call with `available` arguments.
    pub fn validate(
        &self,
        registry: &PredicateRegistry,
        available: usize,
    ) -> Result<(), InvalidSignatureError> {
        for candidate in &self.candidates {
            match self.arity {
                ArityPolicy::Strict => candidate.signature.validate(registry, available)?,
                ArityPolicy::Skip => candidate.signature.validate_tags(registry)?,
            }
        }
        Ok(())
    }

    /// Select and run at most one handler for `arguments`.
    ///
    /// No handler runs if validation fails.
    pub fn dispatch(
        &self,
        registry: &PredicateRegistry,
        arguments: &Arguments,
    ) -> Result<Outcome<T>, InvalidSignatureError> {
        self.validate(registry, arguments.len())?;

        for (index, candidate) in self.candidates.iter().enumerate() {
            if candidate.signature.matches(registry, arguments) {
                #[cfg(feature = "tracing")]
                {
                    tracing::debug!(
                        signature = index,
                        tags = %candidate.signature,
                        "Overload candidate matched"
                    );
                }
                return Ok(Outcome::Matched {
                    signature: index,
                    output: (candidate.handler)(arguments),
                });
            }
        }

        Ok(match &self.fallback {
            Some(fallback) => Outcome::Fallback(fallback(arguments)),
            None => Outcome::Unmatched,
        })
    }
}

impl<T> fmt::Debug for OverloadSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadSet")
            .field(
                "signatures",
                &self.signatures().map(ToString::to_string).collect::<Vec<_>>(),
            )
            .field("fallback", &self.has_fallback())
            .field("arity", &self.arity)
            .finish()
    }
}
