//! RGB triples stored as `"R,G,B"` text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why an `"R,G,B"` string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRgbError {
    #[error("expected 3 components, found {0}")]
    ComponentCount(usize),

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("{0} is outside 0-255")]
    OutOfRange(i64),
}

/// An opaque color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_tuple(t: (u8, u8, u8)) -> Self {
        Self::new(t.0, t.1, t.2)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Composite with an alpha channel (unmultiplied).
    pub fn with_alpha(self, alpha: u8) -> eframe::egui::Color32 {
        eframe::egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Parse exactly three comma-separated integers in [0, 255].
    /// Whitespace around each component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(ParseRgbError::ComponentCount(parts.len()));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            let t = part.trim();
            let v: i64 = t
                .parse()
                .map_err(|_| ParseRgbError::NotAnInteger(t.to_string()))?;
            *slot = u8::try_from(v).map_err(|_| ParseRgbError::OutOfRange(v))?;
        }
        Ok(Self::from(channels))
    }
}
