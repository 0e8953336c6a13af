//! Plain-text PPM (`P3`) encoder.
//!
//! Layout:
//!
//! ```text
//! P3
//! <width> <height>
//! <max color value>
//! <row 0 channel values, wrapped>
//! ...
//! <row H-1 channel values, wrapped>
//! ```
//!
//! Every line, including the last pixel line, ends with `\n`.

use std::fmt::Write as _;

use crate::canvas::Canvas;

/// Magic number of the ASCII PPM flavor.
pub const MAGIC: &str = "P3";

/// Errors raised while building a [`PpmConfig`]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PpmConfigError {
    #[error("Unknown parameter '{0}'")]
    UnknownParameter(String),

    #[error("Malformed parameter '{0}': expected key=value")]
    Malformed(String),

    #[error("Invalid value '{value}' for parameter '{key}'")]
    InvalidValue { key: String, value: String },

    #[error("Max color value must be non-zero")]
    ZeroMaxColor,

    #[error("Wrap threshold {wrap} plus {digits} digits exceeds line limit {line_limit}")]
    LineBudget { wrap: usize, digits: usize, line_limit: usize },
}

/// Output settings for [`PpmEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PpmConfig {
    /// Largest channel value written; also printed on the third header line.
    pub max_color_value: u16,

    /// A separating space becomes a line break once the current line has
    /// grown past this many characters.
    pub wrap_threshold: usize,

    /// Hard upper bound on the length of any pixel line.
    pub max_line_length: usize,
}

impl Default for PpmConfig {
    /// 255 max color, break after 65 characters, 70 character hard limit.
    fn default() -> Self {
        Self {
            max_color_value: 255,
            wrap_threshold: 65,
            max_line_length: 70,
        }
    }
}

impl PpmConfig {
    pub fn new(max_color_value: u16, wrap_threshold: usize, max_line_length: usize) -> Result<Self, PpmConfigError> {
        let config = Self {
            max_color_value,
            wrap_threshold,
            max_line_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a comma-separated `key=value` list on top of the defaults.
    ///
    /// Recognized keys: `max_color`, `wrap`, `line_limit`. An empty string
    /// yields the default configuration.
    pub fn from_parameters(parameters: &str) -> Result<Self, PpmConfigError> {
        let mut config = Self::default();

        for entry in parameters.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .ok_or_else(|| PpmConfigError::Malformed(entry.to_string()))?;

            let invalid = || PpmConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "max_color" => config.max_color_value = value.parse().map_err(|_| invalid())?,
                "wrap" => config.wrap_threshold = value.parse().map_err(|_| invalid())?,
                "line_limit" => config.max_line_length = value.parse().map_err(|_| invalid())?,
                other => return Err(PpmConfigError::UnknownParameter(other.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that wrapping can never produce a line over the hard limit.
    ///
    /// A break fires on the first space past `wrap_threshold`, so a line
    /// can overshoot the threshold by at most one channel value.
    pub fn validate(&self) -> Result<(), PpmConfigError> {
        if self.max_color_value == 0 {
            return Err(PpmConfigError::ZeroMaxColor);
        }
        let digits = self.max_color_value.to_string().len();
        let widest = self.wrap_threshold.checked_add(digits);
        if widest.map_or(true, |n| n > self.max_line_length) {
            return Err(PpmConfigError::LineBudget {
                wrap: self.wrap_threshold,
                digits,
                line_limit: self.max_line_length,
            });
        }
        Ok(())
    }
}

/// Scale a channel by `max + 1`, clamp to `[0, max]`, then truncate.
///
/// Clamping happens before truncation, so 1.0 maps to `max` and anything
/// negative maps to 0.
pub fn quantize(channel: f64, max: u16) -> u16 {
    let scaled = channel * (f64::from(max) + 1.0);
    // NaN survives clamp; the cast maps it to 0
    scaled.clamp(0.0, f64::from(max)) as u16
}

#[derive(Debug, Clone, Default)]
pub struct PpmEncoder {
    config: PpmConfig,
}

impl PpmEncoder {
    pub fn new(config: PpmConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PpmConfig {
        &self.config
    }

    /// Serialize `canvas` into a fresh PPM string.
    pub fn encode(&self, canvas: &Canvas) -> String {
        let mut out = self.header(canvas);
        let mut line = String::with_capacity(canvas.width() * 12);

        for row in canvas.rows() {
            line.clear();
            for (i, color) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                let max = self.config.max_color_value;
                let [r, g, b] = color.channels().map(|c| quantize(c, max));
                let _ = write!(line, "{r} {g} {b}");
            }
            self.push_wrapped(&mut out, &line);
            out.push('\n');
        }

        tracing::debug!(
            width = canvas.width(),
            height = canvas.height(),
            bytes = out.len(),
            "encoded canvas as PPM"
        );
        out
    }

    fn header(&self, canvas: &Canvas) -> String {
        format!(
            "{MAGIC}\n{} {}\n{}\n",
            canvas.width(),
            canvas.height(),
            self.config.max_color_value
        )
    }

    /// Copy `line` into `out`, turning a space into a newline whenever the
    /// running character count since the last break exceeds the threshold.
    fn push_wrapped(&self, out: &mut String, line: &str) {
        let mut count = 0usize;
        for ch in line.chars() {
            count += 1;
            if ch == ' ' && count > self.config.wrap_threshold {
                out.push('\n');
                count = 0;
            } else {
                out.push(ch);
            }
        }
    }
}

impl Canvas {
    /// Encode with the default [`PpmConfig`].
    pub fn to_ppm(&self) -> String {
        PpmEncoder::default().encode(self)
    }
}
