//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use palette::convert::FromColorUnclamped;
use palette::{IntoColor, Oklch, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TokenError};

/// Out-of-range tolerance when deciding whether an OKLCH colour fits sRGB.
const GAMUT_EPSILON: f32 = 1e-4;

/// Bisection rounds for chroma reduction during gamut mapping.
const GAMUT_ITERATIONS: usize = 24;

/// An opaque 8-bit sRGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse any supported colour notation.
    ///
    /// Accepts, in order of precedence:
    /// - hex: `#RGB`, `#RRGGBB` (the `#` is optional)
    /// - CSS named colours: `rebeccapurple`, `teal`
    /// - component triplets: `rgb(59, 130, 246)`, `59,130,246`, `59 130 246`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TokenError::InvalidColor {
                message: "empty colour value".to_string(),
                help: Some(SUPPORTED_FORMATS.to_string()),
            });
        }

        if s.starts_with('#') {
            return Self::from_hex(s);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(named) = palette::named::from_str(&lower) {
            return Ok(Self::rgb(named.red, named.green, named.blue));
        }

        if lower.starts_with("rgb(") || lower.contains(',') || lower.contains(' ') {
            return Self::from_components(&lower);
        }

        Self::from_hex(s).map_err(|_| TokenError::InvalidColor {
            message: format!("unrecognised colour: {}", s),
            help: Some(SUPPORTED_FORMATS.to_string()),
        })
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` (expanded to 6 digits) and `#RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                let digits = hex
                    .chars()
                    .map(parse_hex_digit)
                    .collect::<Result<Vec<u8>>>()?;
                let (r, g, b) = (digits[0], digits[1], digits[2]);
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Parse a component triplet such as `rgb(59, 130, 246)` or `59 130 246`.
    fn from_components(s: &str) -> Result<Self> {
        let inner = s
            .strip_prefix("rgb(")
            .map(|rest| rest.strip_suffix(')').unwrap_or(rest))
            .unwrap_or(s);

        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.len() != 3 {
            return Err(TokenError::InvalidColor {
                message: format!("expected 3 components, got {}: {}", parts.len(), s),
                help: Some("Use rgb(r, g, b) with each component in 0-255".to_string()),
            });
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = part.parse::<u8>().map_err(|_| TokenError::InvalidColor {
                message: format!("component out of range: {}", part),
                help: Some("Each component must be an integer in 0-255".to_string()),
            })?;
        }

        Ok(Self::rgb(channels[0], channels[1], channels[2]))
    }

    /// Convert to a floating point sRGB colour.
    pub fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Quantise a floating point sRGB colour, clamping out-of-range channels.
    pub fn from_srgb(rgb: Srgb<f32>) -> Self {
        Self::rgb(
            (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Convert to OKLCH.
    pub fn to_oklch(self) -> Oklch {
        self.to_srgb().into_color()
    }

    /// Perceptual lightness in OKLCH, in `0.0..=1.0`.
    pub fn lightness(self) -> f32 {
        self.to_oklch().l
    }

    /// Map an OKLCH colour into sRGB.
    ///
    /// Lightness and hue are held; chroma is reduced by bisection until the
    /// colour fits the sRGB gamut.
    pub fn from_oklch(lch: Oklch) -> Self {
        let l = lch.l.clamp(0.0, 1.0);
        let chroma = lch.chroma.max(0.0);

        let candidate = Oklch::new(l, chroma, lch.hue);
        if in_gamut(candidate) {
            return Self::from_srgb(Srgb::from_color_unclamped(candidate));
        }

        let (mut lo, mut hi) = (0.0f32, chroma);
        for _ in 0..GAMUT_ITERATIONS {
            let mid = (lo + hi) * 0.5;
            if in_gamut(Oklch::new(l, mid, lch.hue)) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        tracing::trace!(l, from = chroma, to = lo, "reduced chroma to fit sRGB");
        Self::from_srgb(Srgb::from_color_unclamped(Oklch::new(l, lo, lch.hue)))
    }

    /// Convert to RGB tuple.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

const SUPPORTED_FORMATS: &str =
    "Use #RGB, #RRGGBB, a CSS colour name, or rgb(r, g, b)";

fn in_gamut(lch: Oklch) -> bool {
    let rgb: Srgb<f32> = Srgb::from_color_unclamped(lch);
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

fn invalid_hex(s: &str) -> TokenError {
    TokenError::InvalidColor {
        message: format!("invalid hex colour: {}", s),
        help: Some("Use #RGB or #RRGGBB format".to_string()),
    }
}

impl FromStr for Colour {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| TokenError::InvalidColor {
            message: format!("invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| TokenError::InvalidColor {
        message: format!("invalid hex byte: {}", s),
        help: None,
    })
}
