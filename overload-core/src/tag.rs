//! Type tags and the membership protocol.
//!
//! A [`TypeTag`] names a runtime-checkable "type" for dispatch purposes. It is
//! only an identifier: the test deciding whether a value belongs to it lives in
//! a [`PredicateRegistry`](crate::PredicateRegistry).

use crate::value::Value;
use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum TagId {
    Type(TypeId),
    Named(&'static str),
}

/// An opaque identifier naming a runtime-checkable type.
///
/// Tags are either derived from a Rust type ([`TypeTag::of`]) or declared as
/// named constants ([`TypeTag::named`]). Equality and hashing only consider
/// the identity, never the display name.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TagId,
    name: &'static str,
}

impl TypeTag {
    /// The tag identified by the Rust type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TagId::Type(TypeId::of::<T>()),
            name: std::any::type_name::<T>(),
        }
    }

    /// A tag identified by a name.
    ///
    /// Two named tags with the same name are the same tag.
    pub const fn named(name: &'static str) -> Self {
        Self {
            id: TagId::Named(name),
            name,
        }
    }

    /// The full name of this tag.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The name without the module path of its outermost type.
    ///
    /// Generic arguments keep their paths, and names that do not start with a
    /// path (tuples, references, slices) are returned unchanged.
    pub fn short_name(&self) -> &'static str {
        match self.id {
            TagId::Named(name) => name,
            TagId::Type(_) => {
                let name = self.name;
                let path_end = name
                    .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
                    .unwrap_or(name.len());
                match name[..path_end].rfind("::") {
                    Some(sep) => &name[sep + 2..],
                    None => name,
                }
            }
        }
    }

    /// Returns `true` for tags created with [`TypeTag::named`].
    pub fn is_named(&self) -> bool {
        matches!(self.id, TagId::Named(_))
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// The membership protocol for marker types.
///
/// Implementing `Membership` lets a type act as a dispatch tag: its tag is
/// [`TypeTag::of::<Self>()`](TypeTag::of) and its predicate is
/// [`Membership::contains`]. Implementing the trait does not register
/// anything; call
/// [`PredicateRegistry::register_type`](crate::PredicateRegistry::register_type).
///
/// # Example
///
/// ```rust,ignore
/// struct Even;
///
/// impl Membership for Even {
///     fn contains(value: &Value) -> bool {
///         value.downcast_ref::<i64>().is_some_and(|v| v % 2 == 0)
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a dispatch tag",
    label = "missing `Membership` implementation",
    note = "Implement `Membership` (or derive `TypeTag`) to give `{Self}` a membership predicate."
)]
pub trait Membership: 'static {
    /// Whether `value` belongs to this type.
    fn contains(value: &Value) -> bool;

    /// The tag identifying this type.
    fn tag() -> TypeTag
    where
        Self: Sized,
    {
        TypeTag::of::<Self>()
    }
}

/// Builds an array of [`TypeTag`]s from [`Membership`] types.
///
/// ```rust,ignore
/// session.signature(tags![Int, Real], || "int, real")?;
/// ```
#[macro_export]
macro_rules! tags {
    () => {{
        let tags: [$crate::TypeTag; 0] = [];
        tags
    }};
    ($($ty:ty),+ $(,)?) => {
        [$(<$ty as $crate::Membership>::tag()),+]
    };
}
