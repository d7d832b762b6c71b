use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// 8-bit sRGB color.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hex color {0:?} (expected #rgb or #rrggbb)")]
pub struct ColorParseError(pub String);

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs `0xRRGGBB`.
    #[inline]
    pub const fn from_u32(c: u32) -> Self {
        Self {
            r: ((c >> 16) & 0xFF) as u8,
            g: ((c >> 8) & 0xFF) as u8,
            b: (c & 0xFF) as u8,
        }
    }

    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).map_err(|_| err())?;
                Ok(Rgb::from_u32(v))
            }
            3 => {
                let v = u32::from_str_radix(hex, 16).map_err(|_| err())?;
                let expand = |n: u32| ((n & 0xF) * 17) as u8;
                Ok(Rgb::new(expand(v >> 8), expand(v >> 4), expand(v)))
            }
            _ => Err(err()),
        }
    }

    /// Multiplies each channel by `f`, saturating at 0 and 255.
    pub fn scale(self, f: f32) -> Rgb {
        let ch = |c: u8| (c as f32 * f).round().clamp(0.0, 255.0) as u8;
        Rgb::new(ch(self.r), ch(self.g), ch(self.b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
