//! Signatures: ordered lists of type tags.
//!
//! A signature of arity `k` only looks at the first `k` actual arguments.
//! Trailing arguments are ignored.

use crate::{
    error::InvalidSignatureError, registry::PredicateRegistry, tag::TypeTag, value::Arguments,
};
use std::fmt;

/// The ordered tag list of a candidate overload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    tags: Vec<TypeTag>,
}

impl Signature {
    /// Create a signature from tags, in positional order.
    pub fn new(tags: impl IntoIterator<Item = TypeTag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Number of positions this signature examines.
    pub fn arity(&self) -> usize {
        self.tags.len()
    }

    /// The tags, in positional order.
    pub fn tags(&self) -> &[TypeTag] {
        &self.tags
    }

    /// Check that every tag has a predicate in `registry`.
    pub fn validate_tags(&self, registry: &PredicateRegistry) -> Result<(), InvalidSignatureError> {
        match self
            .tags
            .iter()
            .position(|tag| !registry.has_predicate(*tag))
        {
            Some(position) => Err(InvalidSignatureError::UnregisteredTag {
                position,
                tag: self.tags[position],
            }),
            None => Ok(()),
        }
    }

    /// Check the structural preconditions against a call with `available`
    /// actual arguments.
    ///
    /// Arity is checked before tags.
    pub fn validate(
        &self,
        registry: &PredicateRegistry,
        available: usize,
    ) -> Result<(), InvalidSignatureError> {
        if self.arity() > available {
            return Err(InvalidSignatureError::ArityOverflow {
                arity: self.arity(),
                available,
            });
        }
        self.validate_tags(registry)
    }

    /// Evaluate the predicates position by position, left to right.
    ///
    /// Stops at the first predicate that rejects its argument. A tag without a
    /// predicate, or a position past the end of `arguments`, never matches;
    /// call [`validate`](Self::validate) first to report those as errors.
    pub fn matches(&self, registry: &PredicateRegistry, arguments: &Arguments) -> bool {
        if self.arity() > arguments.len() {
            return false;
        }

        for (position, (tag, argument)) in self.tags.iter().zip(arguments).enumerate() {
            let accepted = registry
                .test(*tag, argument.value())
                .unwrap_or(false);

            #[cfg(feature = "tracing")]
            {
                tracing::trace!(
                    position,
                    tag = %tag,
                    argument = argument.type_name(),
                    accepted,
                    "Evaluated membership predicate"
                );
            }
            #[cfg(not(feature = "tracing"))]
            {
                let _ = position;
            }

            if !accepted {
                return false;
            }
        }
        true
    }

    /// Whether this signature's tags are a prefix of `other`'s.
    ///
    /// If so, and this signature is tried first, `other` can never be
    /// selected: any arguments matching `other` also match this one.
    pub fn is_prefix_of(&self, other: &Signature) -> bool {
        other.tags.starts_with(&self.tags)
    }
}

impl From<Vec<TypeTag>> for Signature {
    fn from(tags: Vec<TypeTag>) -> Self {
        Self { tags }
    }
}

impl From<&[TypeTag]> for Signature {
    fn from(tags: &[TypeTag]) -> Self {
        Self::new(tags.iter().copied())
    }
}

impl<const N: usize> From<[TypeTag; N]> for Signature {
    fn from(tags: [TypeTag; N]) -> Self {
        Self::new(tags)
    }
}

impl<const N: usize> From<&[TypeTag; N]> for Signature {
    fn from(tags: &[TypeTag; N]) -> Self {
        Self::new(tags.iter().copied())
    }
}

impl FromIterator<TypeTag> for Signature {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tag}")?;
        }
        f.write_str(")")
    }
}
