use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// A `#RRGGBB` color as the drawing surface expects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(hex: &str) -> DomainResult<Self> {
        let digits = hex.strip_prefix('#').ok_or_else(|| {
            DomainError::InvalidColorFormat(format!("'{hex}' must start with '#'"))
        })?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidColorFormat(format!(
                "'{hex}' must be in #RRGGBB form"
            )));
        }

        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let channel = |range: Range<usize>| {
            self.0
                .get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(0)
        };
        RgbColor::new(channel(1..3), channel(3..5), channel(5..7))
    }

    #[must_use]
    pub fn from_rgb(color: RgbColor) -> Self {
        Self(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
