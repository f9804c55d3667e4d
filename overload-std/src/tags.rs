//! Standard numeric and matrix tags.
//!
//! | Tag | Accepts |
//! |-----|---------|
//! | [`Int`] | Integer primitives, and finite floats without a fractional part |
//! | [`Real`] | Finite floats with a nonzero fractional part |
//! | [`Number`] | Any numeric primitive |
//! | [`MatrixSize`] | [`MatrixSize`] values |
//!
//! `Int` and `Real` are disjoint: `2.0_f64` is an `Int`, `2.5_f64` is a
//! `Real`, and both are `Number`s. NaN and infinities are only `Number`s;
//! a plain "remainder by one is nonzero" test would count them as `Real`.

use overload_core::{Membership, PredicateRegistry, RegistryBuilder, Value};

macro_rules! widen {
    ($value:expr => $($ty:ty),+) => {
        $(
            if let Some(v) = $value.downcast_ref::<$ty>() {
                return Some(*v as f64);
            }
        )+
    };
}

macro_rules! is_any_of {
    ($value:expr => $($ty:ty),+) => {
        false $(|| $value.is::<$ty>())+
    };
}

/// The value as an `f64`, if it is a numeric primitive.
///
/// Wide integers may lose precision.
pub fn as_f64(value: &Value) -> Option<f64> {
    widen!(value => f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    None
}

/// Whether the value is an integer primitive.
pub fn is_integer_primitive(value: &Value) -> bool {
    is_any_of!(value => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize)
}

fn as_float(value: &Value) -> Option<f64> {
    if let Some(v) = value.downcast_ref::<f64>() {
        Some(*v)
    } else {
        value.downcast_ref::<f32>().map(|v| f64::from(*v))
    }
}

/// Whole numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

impl Membership for Int {
    fn contains(value: &Value) -> bool {
        is_integer_primitive(value)
            || as_float(value).is_some_and(|v| v.is_finite() && v.fract() == 0.0)
    }
}

/// Numbers with a nonzero fractional part.
#[derive(Debug, Clone, Copy, Default)]
pub struct Real;

impl Membership for Real {
    fn contains(value: &Value) -> bool {
        as_float(value).is_some_and(|v| v.is_finite() && v.fract() != 0.0)
    }
}

/// Any numeric primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number;

impl Membership for Number {
    fn contains(value: &Value) -> bool {
        as_f64(value).is_some()
    }
}

/// The dimensions of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatrixSize {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl MatrixSize {
    /// Create a matrix size.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether the matrix is square.
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl Membership for MatrixSize {
    fn contains(value: &Value) -> bool {
        value.is::<MatrixSize>()
    }
}

/// Register [`Int`], [`Real`], [`Number`] and [`MatrixSize`].
pub fn register_standard(registry: &mut PredicateRegistry) {
    registry.register_type::<Int>();
    registry.register_type::<Real>();
    registry.register_type::<Number>();
    registry.register_type::<MatrixSize>();
}

/// A builder preloaded with the standard tags.
pub fn standard_builder() -> RegistryBuilder {
    RegistryBuilder::new()
        .register_type::<Int>()
        .register_type::<Real>()
        .register_type::<Number>()
        .register_type::<MatrixSize>()
}

/// A registry holding only the standard tags.
pub fn standard_registry() -> PredicateRegistry {
    standard_builder().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int() {
        assert!(Int::contains(&1_i32));
        assert!(Int::contains(&7_u64));
        assert!(Int::contains(&2.0_f64));
        assert!(!Int::contains(&2.5_f64));
        assert!(!Int::contains(&f64::NAN));
        assert!(!Int::contains(&f64::INFINITY));
        assert!(!Int::contains(&"1"));
    }

    #[test]
    fn test_real() {
        assert!(Real::contains(&2.5_f64));
        assert!(Real::contains(&-0.25_f32));
        assert!(!Real::contains(&3.0_f64));
        assert!(!Real::contains(&3_i32));
        assert!(!Real::contains(&f64::NAN));
    }

    #[test]
    fn test_non_finite_floats_are_only_numbers() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(!Int::contains(&value));
            assert!(!Real::contains(&value));
            assert!(Number::contains(&value));
        }
    }

    #[test]
    fn test_number() {
        assert!(Number::contains(&1_u8));
        assert!(Number::contains(&2.5_f64));
        assert!(Number::contains(&f64::NAN));
        assert!(!Number::contains(&"2"));
        assert!(!Number::contains(&MatrixSize::new(2, 2)));
    }

    #[test]
    fn test_matrix_size() {
        assert!(MatrixSize::contains(&MatrixSize::new(2, 3)));
        assert!(!MatrixSize::contains(&(2_usize, 3_usize)));
        assert!(MatrixSize::new(3, 3).is_square());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(as_f64(&3_i16), Some(3.0));
        assert_eq!(as_f64(&1.5_f32), Some(1.5));
        assert_eq!(as_f64(&'c'), None);
    }

    #[test]
    fn test_standard_registry() {
        let registry = standard_registry();
        assert_eq!(registry.len(), 4);
        assert!(registry.has_predicate(Int::tag()));
        assert!(registry.has_predicate(MatrixSize::tag()));

        let mut registry = PredicateRegistry::new();
        register_standard(&mut registry);
        assert_eq!(registry.len(), 4);
    }
}
