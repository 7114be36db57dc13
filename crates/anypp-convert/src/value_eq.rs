//! Value equality for points and literals.
//!
//! `value_eq` compares values the way a conversion round trip should be
//! judged: NaN components are equal to each other. `PartialEq` stays IEEE
//! semantics, so `Point::new(f64::NAN, 0.0, 0.0)` is not `==` to itself.
//!
//! # Compared exactly
//!
//! - Point names and their order in a `PointSet`
//! - Finite and infinite components, including sign
//! - Literal variants and array nesting

use crate::{Literal, Point, PointSet};

/// Trait for NaN-tolerant equality comparison.
pub trait ValueEq {
    /// Compare two values, treating NaN as equal to NaN.
    fn value_eq(&self, other: &Self) -> bool;
}

impl ValueEq for f64 {
    fn value_eq(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self == other
    }
}

impl ValueEq for Point {
    fn value_eq(&self, other: &Self) -> bool {
        self.x.value_eq(&other.x) && self.y.value_eq(&other.y) && self.z.value_eq(&other.z)
    }
}

impl ValueEq for PointSet {
    fn value_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((n1, p1), (n2, p2))| n1 == n2 && p1.value_eq(p2))
    }
}

impl ValueEq for Literal {
    fn value_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::None, Literal::None) => true,
            (Literal::Scalar(a), Literal::Scalar(b)) => a.value_eq(b),
            (Literal::Str(a), Literal::Str(b)) => a == b,
            (Literal::Array(a), Literal::Array(b)) => vec_value_eq(a, b),
            _ => false,
        }
    }
}

fn vec_value_eq<T: ValueEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.value_eq(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_points_are_equal() {
        let a = Point::new(1.0, f64::NAN, 3.0);
        let b = Point::new(1.0, f64::NAN, 3.0);
        assert_ne!(a, b);
        assert!(a.value_eq(&b));
    }

    #[test]
    fn test_order_matters() {
        let a: PointSet = [("p", Point::default()), ("q", Point::default())]
            .into_iter()
            .collect();
        let b: PointSet = [("q", Point::default()), ("p", Point::default())]
            .into_iter()
            .collect();
        assert!(!a.value_eq(&b));
    }

    #[test]
    fn test_different_names_not_equal() {
        let a: PointSet = [("p", Point::default())].into_iter().collect();
        let b: PointSet = [("P", Point::default())].into_iter().collect();
        assert!(!a.value_eq(&b));
    }

    #[test]
    fn test_nested_literals() {
        let a = Literal::Array(vec![
            Literal::Scalar(f64::NAN),
            Literal::Array(vec![Literal::Str("x".into())]),
        ]);
        assert!(a.value_eq(&a.clone()));
        assert!(!a.value_eq(&Literal::Array(vec![Literal::Scalar(f64::NAN)])));
    }
}
