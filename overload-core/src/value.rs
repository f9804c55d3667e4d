//! # Call-site Adapter
//!
//! Captures the actual positional arguments of a call so a
//! [`Session`](crate::Session) can dispatch over them.
//!
//! Arguments are arbitrary owned values. Each one is stored type-erased as a
//! [`Value`] together with the name of the Rust type it was created from, so
//! predicates can downcast and diagnostics can say what was passed.
//!
//! ```rust,ignore
//! let arguments = args![1, 2, 2.5, 4];
//! assert_eq!(arguments.len(), 4);
//! ```

use std::{any::Any, fmt, slice};

/// A type-erased argument value, as seen by membership predicates.
pub type Value = dyn Any + Send + Sync;

/// A single captured argument.
pub struct Argument {
    value: Box<Value>,
    type_name: &'static str,
}

impl Argument {
    /// Capture a value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Capture an already type-erased value.
    ///
    /// The concrete type name is unknown in this case.
    pub fn from_boxed(value: Box<Value>) -> Self {
        Self {
            value,
            type_name: "dyn Any",
        }
    }

    /// The type-erased value.
    pub fn value(&self) -> &Value {
        self.value.as_ref()
    }

    /// Name of the Rust type this argument was captured from.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the argument holds a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value().is::<T>()
    }

    /// Downcast the argument to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value().downcast_ref::<T>()
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Argument").field(&self.type_name).finish()
    }
}

/// The ordered, immutable list of actual arguments for one call.
#[derive(Debug, Default)]
pub struct Arguments {
    values: Vec<Argument>,
}

impl Arguments {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a value.
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.push(Argument::new(value));
    }

    /// Append an already captured argument.
    pub fn push_argument(&mut self, argument: Argument) {
        self.values.push(argument);
    }

    /// Number of captured arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no arguments were captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The argument at `index`.
    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.values.get(index)
    }

    /// The type-erased value at `index`.
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index).map(Argument::value)
    }

    /// Iterate over the arguments in call order.
    pub fn iter(&self) -> slice::Iter<'_, Argument> {
        self.values.iter()
    }

    /// Type names of all arguments, in call order.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.values.iter().map(Argument::type_name).collect()
    }
}

impl From<Vec<Argument>> for Arguments {
    fn from(values: Vec<Argument>) -> Self {
        Self { values }
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Captures positional arguments into an [`Arguments`] list.
///
/// # Example
///
/// ```rust,ignore
/// let arguments = args![1, 2.5, "text"];
/// assert_eq!(arguments.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Arguments::new()
    };
    ($($value:expr),+ $(,)?) => {
        <$crate::Arguments as ::core::iter::FromIterator<$crate::Argument>>::from_iter([
            $($crate::Argument::new($value)),+
        ])
    };
}
