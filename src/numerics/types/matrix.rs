// src/numerics/types/matrix.rs
// Row-major 4x4 matrix with cofactor-expansion determinant and inverse.

use core::fmt;
use core::ops::{Add, Index, IndexMut, Mul, Sub};
use serde::{Deserialize, Serialize};

use super::traits::{approx, ApproxEq};
use super::tuple::Tuple;

/// Number of rows (and columns) of a `Matrix4`.
pub const DIM: usize = 4;

type Cells = [[f64; DIM]; DIM];

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix is not invertible: determinant is zero")]
    Singular,
}

/// Matrix4 is a fixed 4x4 matrix of `f64` cells, stored row-major.
///
/// Every arithmetic operator returns a fresh matrix. Cells can be written
/// in place only through [`Matrix4::set`] or `IndexMut`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Matrix4 {
    data: Cells,
}

impl Matrix4 {
    /// Construct a new matrix from 4 rows
    pub const fn new(r0: [f64; 4], r1: [f64; 4], r2: [f64; 4], r3: [f64; 4]) -> Self {
        Self { data: [r0, r1, r2, r3] }
    }

    pub const fn from_rows(data: [[f64; 4]; 4]) -> Self {
        Self { data }
    }

    pub const fn zero() -> Self {
        Self { data: [[0.0; DIM]; DIM] }
    }

    pub const fn identity() -> Self {
        Self::new(
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        )
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [f64; 4] {
        check_index(idx, 0);
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [f64; 4] {
        check_index(0, idx);
        [self.data[0][idx], self.data[1][idx], self.data[2][idx], self.data[3][idx]]
    }

    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.data
    }

    /// Read cell `(row, col)`.
    ///
    /// # Panics
    /// If `row` or `col` is not in `0..4`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        check_index(row, col);
        self.data[row][col]
    }

    /// Overwrite cell `(row, col)`.
    ///
    /// # Panics
    /// If `row` or `col` is not in `0..4`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        check_index(row, col);
        self.data[row][col] = value;
    }

    pub fn transpose(&self) -> Self {
        let mut out = Self::zero();
        for i in 0..DIM {
            for j in 0..DIM {
                out.data[j][i] = self.data[i][j];
            }
        }
        out
    }

    /// Determinant of the 3x3 submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> f64 {
        check_index(row, col);
        determinant_of(&submatrix(&self.data, DIM, row, col), DIM - 1)
    }

    /// Signed minor: `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> f64 {
        sign(row + col) * self.minor(row, col)
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f64 {
        (0..DIM).map(|col| self.data[0][col] * self.cofactor(0, col)).sum()
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Inverse via the adjugate, or `MatrixError::Singular` when the
    /// determinant is exactly zero.
    ///
    /// Writing `cofactor(row, col)` into cell `(col, row)` folds the
    /// adjugate's transpose into the division pass.
    pub fn try_inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!(matrix = %self, "refusing to invert singular matrix");
            return Err(MatrixError::Singular);
        }

        let mut out = Self::zero();
        for row in 0..DIM {
            for col in 0..DIM {
                out.data[col][row] = self.cofactor(row, col) / det;
            }
        }
        Ok(out)
    }

    /// Inverse of a matrix the caller knows to be invertible.
    ///
    /// # Panics
    /// If the matrix is singular. Use [`Matrix4::try_inverse`] when that is
    /// a legitimate runtime outcome.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

#[inline]
fn check_index(row: usize, col: usize) {
    assert!(
        row < DIM && col < DIM,
        "Matrix4 index ({row}, {col}) out of bounds"
    );
}

#[inline]
fn sign(i: usize) -> f64 {
    if i % 2 == 0 { 1.0 } else { -1.0 }
}

/// Copy of the leading `n`x`n` block of `cells` with `row` and `col`
/// removed, packed into the top-left `(n-1)`x`(n-1)` corner.
fn submatrix(cells: &Cells, n: usize, row: usize, col: usize) -> Cells {
    let mut out = [[0.0; DIM]; DIM];
    for (r_out, r) in (0..n).filter(|&r| r != row).enumerate() {
        for (c_out, c) in (0..n).filter(|&c| c != col).enumerate() {
            out[r_out][c_out] = cells[r][c];
        }
    }
    out
}

/// Determinant of the leading `n`x`n` block of `cells`.
fn determinant_of(cells: &Cells, n: usize) -> f64 {
    match n {
        0 => 1.0,
        1 => cells[0][0],
        2 => cells[0][0] * cells[1][1] - cells[0][1] * cells[1][0],
        _ => (0..n)
            .map(|col| sign(col) * cells[0][col] * determinant_of(&submatrix(cells, n, 0, col), n - 1))
            .sum(),
    }
}

impl ApproxEq for Matrix4 {
    const EPSILON: f64 = 0.0002;

    fn approx_eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(&a, &b)| approx(a, b, Self::EPSILON))
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        check_index(row, col);
        &self.data[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix4 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        check_index(row, col);
        &mut self.data[row][col]
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "({} {} {} {})", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

impl Add for Matrix4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..DIM {
            for j in 0..DIM {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix4 { data: result }
    }
}

impl Sub for Matrix4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..DIM {
            for j in 0..DIM {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix4 { data: result }
    }
}

impl Mul<f64> for Matrix4 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        let mut result = self.data;
        for i in 0..DIM {
            for j in 0..DIM {
                result[i][j] = self.data[i][j] * scalar;
            }
        }
        Matrix4 { data: result }
    }
}

impl Mul<Matrix4> for f64 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        rhs * self
    }
}

impl Mul<Tuple> for Matrix4 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        let d = &self.data;
        Tuple {
            x: d[0][0] * rhs.x + d[0][1] * rhs.y + d[0][2] * rhs.z + d[0][3] * rhs.w,
            y: d[1][0] * rhs.x + d[1][1] * rhs.y + d[1][2] * rhs.z + d[1][3] * rhs.w,
            z: d[2][0] * rhs.x + d[2][1] * rhs.y + d[2][2] * rhs.z + d[2][3] * rhs.w,
            w: d[3][0] * rhs.x + d[3][1] * rhs.y + d[3][2] * rhs.z + d[3][3] * rhs.w,
        }
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut result = [[0.0; DIM]; DIM];
        for i in 0..DIM {
            for j in 0..DIM {
                result[i][j] = (0..DIM).map(|k| self.data[i][k] * rhs.data[k][j]).sum();
            }
        }
        Matrix4 { data: result }
    }
}
