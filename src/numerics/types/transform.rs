// src/numerics/types/transform.rs
// Named transformation builders. Each starts from identity and overwrites
// the cells that define the transform.

use super::matrix::Matrix4;
use super::tuple::Tuple;

impl Matrix4 {
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::identity();
        m.set(0, 3, x);
        m.set(1, 3, y);
        m.set(2, 3, z);
        m
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::identity();
        m.set(0, 0, x);
        m.set(1, 1, y);
        m.set(2, 2, z);
        m
    }

    /// Rotation about the x axis by `radians`, right-handed.
    pub fn rotation_x(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity();
        m.set(1, 1, cos);
        m.set(1, 2, -sin);
        m.set(2, 1, sin);
        m.set(2, 2, cos);
        m
    }

    /// Rotation about the y axis by `radians`, right-handed.
    pub fn rotation_y(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity();
        m.set(0, 0, cos);
        m.set(0, 2, sin);
        m.set(2, 0, -sin);
        m.set(2, 2, cos);
        m
    }

    /// Rotation about the z axis by `radians`, right-handed.
    pub fn rotation_z(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Self::identity();
        m.set(0, 0, cos);
        m.set(0, 1, -sin);
        m.set(1, 0, sin);
        m.set(1, 1, cos);
        m
    }

    /// Shear where `xy` moves x in proportion to y, `xz` moves x in
    /// proportion to z, and so on.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        let mut m = Self::identity();
        m.set(0, 1, xy);
        m.set(0, 2, xz);
        m.set(1, 0, yx);
        m.set(1, 2, yz);
        m.set(2, 0, zx);
        m.set(2, 1, zy);
        m
    }

    /// World-to-eye transform for a camera at `from` looking at `to`.
    ///
    /// `up` only needs to point roughly upward; it is re-orthogonalized
    /// against the viewing direction.
    pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Self {
        let forward = (to - from).normalize();
        let left = forward.cross(&up.normalize());
        let true_up = left.cross(&forward);
        let orientation = Self::new(
            [left.x, left.y, left.z, 0.0],
            [true_up.x, true_up.y, true_up.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        );
        orientation * Self::translation(-from.x, -from.y, -from.z)
    }

    /// Compose so that `self` is applied first and `next` second.
    ///
    /// `a.then(b).then(c)` equals `c * b * a`.
    pub fn then(self, next: Self) -> Self {
        next * self
    }
}
