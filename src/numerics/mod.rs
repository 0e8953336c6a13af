// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod color;
    pub mod matrix;
    pub mod point;
    pub mod traits;
    pub mod transform;
    pub mod tuple;
    pub mod vector;
}

pub use types::color::Color;
pub use types::matrix::{Matrix4, MatrixError};
pub use types::point::point;
pub use types::traits::ApproxEq;
pub use types::tuple::Tuple;
pub use types::vector::vector;
