// src/numerics/types/traits.rs
// Approximate comparison shared by the numeric value types.

/// Returns true when `a` and `b` differ by strictly less than `epsilon`.
#[inline]
pub fn approx(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// ApproxEq is implemented by every value type whose `==` is tolerant of
/// floating point error.
///
/// Note: `PartialEq` on `Tuple`, `Color` and `Matrix4` delegates here, so
/// `==` on those types is *not* transitive. Use exact field comparison when
/// bit-for-bit equality matters.
pub trait ApproxEq {
    /// Largest difference per component that still counts as equal.
    const EPSILON: f64;

    fn approx_eq(&self, other: &Self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_is_strict() {
        assert!(approx(1.0, 1.0 + 0.5e-5, 1e-5));
        assert!(!approx(1.0, 1.0 + 2e-5, 1e-5));
        assert!(approx(-3.0, -3.0, 0.0002));
    }
}
