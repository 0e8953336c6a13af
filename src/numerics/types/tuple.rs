// src/numerics/types/tuple.rs
// Homogeneous coordinate value shared by points and vectors.

use core::ops::{Add, Div, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::traits::{approx, ApproxEq};

/// Tuple is a 4-component homogeneous coordinate.
///
/// `w == 1.0` marks a point and `w == 0.0` marks a vector. Both kinds share
/// this single type; use [`point`](super::point::point) and
/// [`vector`](super::vector::vector) to build them.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    /// Construct a new Tuple
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }
}

impl ApproxEq for Tuple {
    const EPSILON: f64 = 0.00001;

    fn approx_eq(&self, other: &Self) -> bool {
        approx(self.x, other.x, Self::EPSILON)
            && approx(self.y, other.y, Self::EPSILON)
            && approx(self.z, other.z, Self::EPSILON)
            && self.w == other.w
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Add for Tuple {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl Sub for Tuple {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

impl Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar, self.w * scalar)
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar, self.w / scalar)
    }
}

// Conversions between Tuple and arrays [f64; 4]

impl From<[f64; 4]> for Tuple {
    fn from(array: [f64; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl From<Tuple> for [f64; 4] {
    fn from(t: Tuple) -> Self {
        [t.x, t.y, t.z, t.w]
    }
}
