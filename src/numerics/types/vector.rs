// src/numerics/types/vector.rs
// Vectors are tuples with w = 0. Geometric operations live here.

use super::tuple::Tuple;

/// Build a vector, i.e. a tuple with `w = 0`.
pub const fn vector(x: f64, y: f64, z: f64) -> Tuple {
    Tuple::new(x, y, z, 0.0)
}

impl Tuple {
    /// Euclidean length over all four components.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Unit-length copy of `self`.
    ///
    /// A zero-length input produces NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Cross product of the xyz parts. Always returns a vector.
    pub fn cross(&self, other: &Self) -> Self {
        vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Reflect `self` around `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * 2.0 * self.dot(normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_creates_tuple_with_w0() {
        assert_eq!(vector(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 0.0));
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert!((vector(1.0, 2.0, 3.0).magnitude() - 14.0_f64.sqrt()).abs() < 1e-12);
        assert!((vector(-1.0, -2.0, -3.0).magnitude() - 14.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(vector(4.0, 0.0, 0.0).normalize(), vector(1.0, 0.0, 0.0));
        let n = vector(1.0, 2.0, 3.0).normalize();
        assert_eq!(n, vector(0.26726, 0.53452, 0.80178));
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dot_and_cross() {
        let a = vector(1.0, 2.0, 3.0);
        let b = vector(2.0, 3.0, 4.0);
        assert_eq!(a.dot(&b), 20.0);
        assert_eq!(a.cross(&b), vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a), vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn test_reflect() {
        let v = vector(1.0, -1.0, 0.0);
        let n = vector(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(&n), vector(1.0, 1.0, 0.0));

        let half = 2.0_f64.sqrt() / 2.0;
        let v = vector(0.0, -1.0, 0.0);
        let n = vector(half, half, 0.0);
        assert_eq!(v.reflect(&n), vector(1.0, 0.0, 0.0));
    }
}
