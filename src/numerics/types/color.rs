// src/numerics/types/color.rs

use core::ops::{Add, Mul, Sub};
use serde::{Deserialize, Serialize};

use super::traits::{approx, ApproxEq};

/// Linear RGB color. Channels are unbounded until they are quantized for
/// output.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }

    /// Copy of `self` with every NaN channel replaced by `replacement`.
    pub fn with_nan_replaced(self, replacement: f64) -> Self {
        let fix = |c: f64| if c.is_nan() { replacement } else { c };
        Self::new(fix(self.red), fix(self.green), fix(self.blue))
    }

    pub fn has_nan(&self) -> bool {
        self.red.is_nan() || self.green.is_nan() || self.blue.is_nan()
    }
}

impl ApproxEq for Color {
    const EPSILON: f64 = 0.00001;

    fn approx_eq(&self, other: &Self) -> bool {
        approx(self.red, other.red, Self::EPSILON)
            && approx(self.green, other.green, Self::EPSILON)
            && approx(self.blue, other.blue, Self::EPSILON)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.red + other.red, self.green + other.green, self.blue + other.blue)
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.red - other.red, self.green - other.green, self.blue - other.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.red * scalar, self.green * scalar, self.blue * scalar)
    }
}

// Hadamard product
impl Mul for Color {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.red * other.red, self.green * other.green, self.blue * other.blue)
    }
}
