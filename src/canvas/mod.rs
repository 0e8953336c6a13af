//! Canvas: a fixed-size, row-major grid of colors.
//!
//! Reads are strict and panic outside the grid. Writes are permissive:
//! anything outside the grid is dropped, since projected geometry routinely
//! lands off-screen.

use serde::{Deserialize, Serialize};

use crate::numerics::Color;

/// Value written in place of a NaN channel.
pub const NAN_REPLACEMENT: f64 = 1.0;

/// Errors that can occur while creating or restoring a canvas
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid canvas dimensions {width}x{height}: both must be non-zero and the pixel buffer addressable")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Snapshot encode failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Snapshot decode failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Snapshot is inconsistent: {0}")]
    Snapshot(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCanvas")]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

/// Unvalidated wire form; every deserialized canvas passes through
/// `TryFrom<RawCanvas>`.
#[derive(Deserialize)]
struct RawCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl TryFrom<RawCanvas> for Canvas {
    type Error = CanvasError;

    fn try_from(raw: RawCanvas) -> Result<Self, Self::Error> {
        let expected = pixel_count(raw.width, raw.height)?;
        if raw.pixels.len() != expected {
            return Err(CanvasError::Snapshot(format!(
                "{} pixels for a {}x{} canvas",
                raw.pixels.len(),
                raw.width,
                raw.height
            )));
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            pixels: raw.pixels,
        })
    }
}

/// Number of pixels in a `width` x `height` grid.
///
/// Rejects zero sides and grids whose buffer size in bytes would not fit
/// in `isize`.
fn pixel_count(width: usize, height: usize) -> Result<usize, CanvasError> {
    let invalid = CanvasError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    width
        .checked_mul(height)
        .filter(|n| {
            n.checked_mul(std::mem::size_of::<Color>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(invalid)
}

impl Canvas {
    /// Create a black canvas.
    ///
    /// # Panics
    /// If `width` or `height` is zero, or the pixel buffer would overflow.
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(canvas) => canvas,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Color::black(); count],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Color stored at `(x, y)`.
    ///
    /// # Panics
    /// If `(x, y)` lies outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} canvas",
            self.width,
            self.height
        );
        self.pixels[self.offset(x, y)]
    }

    /// Checked read; `None` outside the canvas.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.pixels[self.offset(x, y)])
    }

    /// Store `color` at `(x, y)`.
    ///
    /// Coordinates outside the canvas are ignored. NaN channels are stored
    /// as [`NAN_REPLACEMENT`].
    pub fn write_pixel(&mut self, x: i64, y: i64, color: Color) {
        let (Ok(ux), Ok(uy)) = (usize::try_from(x), usize::try_from(y)) else {
            tracing::trace!(x, y, "ignoring write at negative coordinate");
            return;
        };
        if ux >= self.width || uy >= self.height {
            tracing::trace!(x, y, width = self.width, height = self.height, "ignoring write outside canvas");
            return;
        }

        let color = if color.has_nan() {
            tracing::trace!(x, y, "replacing NaN color channel");
            color.with_nan_replaced(NAN_REPLACEMENT)
        } else {
            color
        };

        let i = self.offset(ux, uy);
        self.pixels[i] = color;
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let color = color.with_nan_replaced(NAN_REPLACEMENT);
        self.pixels.fill(color);
    }

    /// All pixels, row-major, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.width)
    }

    /// Encode the canvas into an in-memory binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, CanvasError> {
        Ok(bincode::serde::encode_to_vec(self, bincode::config::standard())?)
    }

    /// Restore a canvas from [`Canvas::to_snapshot`] output.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, CanvasError> {
        let (raw, _): (RawCanvas, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
        Canvas::try_from(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_canvas() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert_eq!(c.pixels().len(), 200);
        assert!(c.pixels().iter().all(|&p| p == Color::black()));
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert!(matches!(
            Canvas::try_new(0, 3),
            Err(CanvasError::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(Canvas::try_new(3, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "Invalid canvas dimensions")]
    fn test_new_with_zero_dimension_panics() {
        Canvas::new(0, 0);
    }

    #[test]
    fn test_write_pixel() {
        let mut c = Canvas::new(10, 20);
        let red = Color::new(1.0, 0.0, 0.0);
        c.write_pixel(2, 3, red);

        assert_eq!(c.pixel_at(2, 3), red);
        for y in 0..20 {
            for x in 0..10 {
                if (x, y) != (2, 3) {
                    assert_eq!(c.pixel_at(x, y), Color::black());
                }
            }
        }
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut c = Canvas::new(4, 4);
        let white = Color::new(1.0, 1.0, 1.0);
        c.write_pixel(-1, 0, white);
        c.write_pixel(0, -1, white);
        c.write_pixel(4, 0, white);
        c.write_pixel(0, 4, white);
        c.write_pixel(i64::MAX, i64::MIN, white);
        assert!(c.pixels().iter().all(|&p| p == Color::black()));
    }

    #[test]
    fn test_nan_channels_become_one() {
        let mut c = Canvas::new(2, 2);
        c.write_pixel(1, 1, Color::new(f64::NAN, 0.25, f64::NAN));
        let p = c.pixel_at(1, 1);
        assert_eq!(p.red, 1.0);
        assert_eq!(p.green, 0.25);
        assert_eq!(p.blue, 1.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_at_out_of_bounds_panics() {
        let c = Canvas::new(3, 3);
        c.pixel_at(3, 0);
    }

    #[test]
    fn test_checked_get() {
        let c = Canvas::new(3, 2);
        assert_eq!(c.get(2, 1), Some(Color::black()));
        assert_eq!(c.get(3, 1), None);
        assert_eq!(c.get(0, 2), None);
    }

    #[test]
    fn test_fill_and_rows() {
        let mut c = Canvas::new(3, 2);
        let grey = Color::new(0.5, 0.5, 0.5);
        c.fill(grey);
        let rows: Vec<&[Color]> = c.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.len() == 3 && r.iter().all(|&p| p == grey)));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut c = Canvas::new(3, 2);
        c.write_pixel(1, 0, Color::new(0.1, 0.2, 0.3));

        let bytes = c.to_snapshot().unwrap();
        let restored = Canvas::from_snapshot(&bytes).unwrap();

        assert_eq!(restored.width(), 3);
        assert_eq!(restored.height(), 2);
        assert_eq!(restored.pixel_at(1, 0), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_inconsistent_snapshot_is_rejected() {
        let bytes = forge(2, 2, 3);
        assert!(matches!(Canvas::from_snapshot(&bytes), Err(CanvasError::Snapshot(_))));
    }

    #[derive(Serialize)]
    struct Forged {
        width: usize,
        height: usize,
        pixels: Vec<Color>,
    }

    fn forge(width: usize, height: usize, pixels: usize) -> Vec<u8> {
        let forged = Forged { width, height, pixels: vec![Color::black(); pixels] };
        bincode::serde::encode_to_vec(&forged, bincode::config::standard()).unwrap()
    }

    #[test]
    fn test_overflowing_snapshot_dimensions_are_rejected() {
        for (width, height) in [(1usize << 63, 2), (usize::MAX, usize::MAX), (1 << 62, 2)] {
            assert!(matches!(
                Canvas::from_snapshot(&forge(width, height, 0)),
                Err(CanvasError::InvalidDimensions { .. })
            ));
        }
        assert!(matches!(
            Canvas::from_snapshot(&forge(0, 5, 0)),
            Err(CanvasError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_serde_deserialize_is_validated() {
        let config = bincode::config::standard();
        let decode = |bytes: &[u8]| bincode::serde::decode_from_slice::<Canvas, _>(bytes, config);

        assert!(decode(&forge(0, 2, 0)).is_err());
        assert!(decode(&forge(1 << 63, 2, 0)).is_err());
        assert!(decode(&forge(2, 2, 3)).is_err());

        let (canvas, _) = decode(&forge(2, 2, 4)).unwrap();
        assert_eq!(canvas.rows().count(), 2);
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert!(matches!(
            Canvas::try_new(usize::MAX, 2),
            Err(CanvasError::InvalidDimensions { width: usize::MAX, height: 2 })
        ));
        assert!(Canvas::try_new(1 << 32, 1 << 32).is_err());
        assert!(Canvas::try_new(isize::MAX as usize, 1).is_err());
    }

    #[test]
    fn test_fill_replaces_nan_channels() {
        let mut c = Canvas::new(2, 2);
        c.fill(Color::new(f64::NAN, 0.5, f64::NAN));
        assert!(c.pixels().iter().all(|p| !p.has_nan()));
        assert_eq!(c.pixel_at(1, 0), Color::new(1.0, 0.5, 1.0));
    }
}
