//! Serialization of finished canvases into in-memory images.
//!
//! Public submodules:
//! - ppm (PpmEncoder, PpmConfig)
//! - raster (hand-off to the `image` crate)

pub mod ppm;
pub mod raster;

pub use ppm::{PpmConfig, PpmConfigError, PpmEncoder};
pub use raster::{to_rgb_image, RasterError};
