pub mod canvas;
pub mod io;
pub mod numerics;
pub mod physics;

pub use canvas::{Canvas, CanvasError};
pub use io::ppm::{PpmConfig, PpmEncoder};
pub use numerics::{point, vector, Color, Matrix4, Tuple};
