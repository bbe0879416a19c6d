//! WCAG 2.1 relative luminance, contrast ratio and accessibility tiers.

use std::fmt;
use std::str::FromStr;

use palette::LinSrgb;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

use super::Colour;

/// Compute the relative luminance of a colour per WCAG 2.1.
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`, in `0.0..=1.0`.
pub fn relative_luminance(colour: Colour) -> f64 {
    let lin: LinSrgb = colour.to_srgb().into_linear();
    0.2126 * f64::from(lin.red) + 0.7152 * f64::from(lin.green) + 0.0722 * f64::from(lin.blue)
}

/// Compute the WCAG 2.1 contrast ratio between two colours.
///
/// Always in `1.0..=21.0` regardless of argument order.
pub fn contrast_ratio(a: Colour, b: Colour) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG conformance tier for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accessibility {
    /// 4.5:1
    #[default]
    #[serde(rename = "AA", alias = "aa")]
    Aa,
    /// 7:1
    #[serde(rename = "AAA", alias = "aaa")]
    Aaa,
}

impl Accessibility {
    /// Minimum contrast ratio required by this tier.
    pub fn min_ratio(self) -> f64 {
        match self {
            Accessibility::Aa => 4.5,
            Accessibility::Aaa => 7.0,
        }
    }

    /// Whether a colour can carry white or black text at this tier.
    pub fn is_met_by(self, colour: Colour) -> bool {
        let min = self.min_ratio();
        contrast_ratio(colour, Colour::WHITE) >= min || contrast_ratio(colour, Colour::BLACK) >= min
    }
}

impl FromStr for Accessibility {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(Accessibility::Aa),
            "AAA" => Ok(Accessibility::Aaa),
            _ => Err(TokenError::Parse {
                message: format!("unknown accessibility level: {}", s),
                help: Some("Use AA or AAA".to_string()),
            }),
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessibility::Aa => write!(f, "AA"),
            Accessibility::Aaa => write!(f, "AAA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(approx_eq(relative_luminance(Colour::BLACK), 0.0, 0.001));
        assert!(approx_eq(relative_luminance(Colour::WHITE), 1.0, 0.001));
    }

    #[test]
    fn test_luminance_primaries() {
        assert!(approx_eq(relative_luminance(Colour::rgb(255, 0, 0)), 0.2126, 0.001));
        assert!(approx_eq(relative_luminance(Colour::rgb(0, 255, 0)), 0.7152, 0.001));
        assert!(approx_eq(relative_luminance(Colour::rgb(0, 0, 255)), 0.0722, 0.001));
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio(Colour::BLACK, Colour::WHITE);
        assert!(approx_eq(ratio, 21.0, 0.01), "B/W contrast: {ratio}");
    }

    #[test]
    fn test_contrast_symmetric_and_identity() {
        let a = Colour::rgb(0x3b, 0x82, 0xf6);
        let b = Colour::rgb(0x11, 0x22, 0x33);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!(approx_eq(contrast_ratio(a, a), 1.0, 1e-9));
    }

    #[test]
    fn test_known_contrast_value() {
        // #767676 is the classic lightest grey passing AA on white.
        let ratio = contrast_ratio(Colour::rgb(0x76, 0x76, 0x76), Colour::WHITE);
        assert!(ratio >= 4.5 && ratio < 4.6, "ratio: {ratio}");
    }

    #[test]
    fn test_accessibility_thresholds() {
        assert_eq!(Accessibility::Aa.min_ratio(), 4.5);
        assert_eq!(Accessibility::Aaa.min_ratio(), 7.0);
    }

    #[test]
    fn test_is_met_by() {
        assert!(Accessibility::Aaa.is_met_by(Colour::BLACK));
        assert!(Accessibility::Aaa.is_met_by(Colour::WHITE));
        // Mid grey sits between the AAA thresholds for both text colours.
        assert!(!Accessibility::Aaa.is_met_by(Colour::rgb(0x77, 0x77, 0x77)));
        assert!(Accessibility::Aa.is_met_by(Colour::rgb(0x77, 0x77, 0x77)));
    }

    #[test]
    fn test_parse_accessibility() {
        assert_eq!("AA".parse::<Accessibility>().unwrap(), Accessibility::Aa);
        assert_eq!("aaa".parse::<Accessibility>().unwrap(), Accessibility::Aaa);
        assert!("A".parse::<Accessibility>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Accessibility::Aaa).unwrap(), "\"AAA\"");
        let aa: Accessibility = serde_yaml::from_str("AA").unwrap();
        assert_eq!(aa, Accessibility::Aa);
    }
}
