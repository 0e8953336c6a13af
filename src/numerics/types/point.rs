// src/numerics/types/point.rs
// Points are tuples with w = 1.

use super::tuple::Tuple;

/// Build a point, i.e. a tuple with `w = 1`.
pub const fn point(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 1.0)
}

/// The origin of world space.
pub const ORIGIN: Tuple = point(0.0, 0.0, 0.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creates_tuple_with_w1() {
        let p = point(4.0, -4.0, 3.0);
        assert_eq!(p, Tuple::new(4.0, -4.0, 3.0, 1.0));
        assert!(p.is_point());
    }

    #[test]
    fn test_origin() {
        assert!(ORIGIN.is_point());
        assert_eq!(ORIGIN.x, 0.0);
    }
}
