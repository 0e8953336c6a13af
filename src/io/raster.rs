use image::{Rgb, RgbImage};

use super::ppm::quantize;
use crate::canvas::Canvas;

/// Errors raised while handing a canvas to the `image` crate
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RasterError {
    #[error("Canvas {width}x{height} exceeds the image buffer limits")]
    TooLarge { width: usize, height: usize },
}

/// `image` addresses pixels with `u32` and the whole RGB buffer with `usize`.
fn raster_dimensions(width: usize, height: usize) -> Result<(u32, u32), RasterError> {
    let too_large = RasterError::TooLarge { width, height };
    let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(too_large);
    };
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .map(|_| (w, h))
        .ok_or(too_large)
}

/// Convert `canvas` to an 8-bit RGB buffer owned by the `image` crate.
///
/// Channels are quantized exactly like the PPM encoder with a max color
/// value of 255, so the two outputs agree pixel for pixel. Persisting the
/// buffer (PNG, etc.) is left to the caller.
pub fn to_rgb_image(canvas: &Canvas) -> Result<RgbImage, RasterError> {
    let (width, height) = raster_dimensions(canvas.width(), canvas.height())?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let color = canvas.pixel_at(x as usize, y as usize);
        // quantize(.., 255) never exceeds u8::MAX
        Rgb(color.channels().map(|c| quantize(c, 255) as u8))
    }))
}
