//! Modular typography scales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, TokenError};

/// Longest scale the generator will produce.
pub const MAX_STEPS: usize = 64;

/// Root font size used for rem conversion.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Named modular-scale ratios.
const RATIO_PRESETS: &[(&str, f64)] = &[
    ("minor-second", 1.067),
    ("major-second", 1.125),
    ("minor-third", 1.2),
    ("major-third", 1.25),
    ("perfect-fourth", 1.333),
    ("augmented-fourth", 1.414),
    ("perfect-fifth", 1.5),
    ("golden-ratio", 1.618),
];

/// A scale ratio, written as a number or a preset name such as `major-third`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ScaleRatio(pub f64);

impl ScaleRatio {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Preset name for this ratio, if it is one.
    pub fn preset_name(self) -> Option<&'static str> {
        RATIO_PRESETS
            .iter()
            .find(|(_, r)| *r == self.0)
            .map(|(name, _)| *name)
    }

    /// All known presets.
    pub fn presets() -> impl Iterator<Item = (&'static str, ScaleRatio)> {
        RATIO_PRESETS.iter().map(|(name, r)| (*name, ScaleRatio(*r)))
    }
}

impl From<f64> for ScaleRatio {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl FromStr for ScaleRatio {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<f64>() {
            return Ok(Self(value));
        }

        let key = s.to_ascii_lowercase().replace([' ', '_'], "-");
        RATIO_PRESETS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, r)| Self(*r))
            .ok_or_else(|| TokenError::Parse {
                message: format!("unknown scale ratio: {}", s),
                help: Some(format!(
                    "Use a number or one of: {}",
                    RATIO_PRESETS
                        .iter()
                        .map(|(name, _)| *name)
                        .collect::<Vec<_>>()
                        .join(", ")
                )),
            })
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preset_name() {
            Some(name) => write!(f, "{} ({})", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ScaleRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Options for [`create_typography_scale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyScaleOptions {
    /// Size of step 0 in px.
    pub base: f64,
    pub ratio: ScaleRatio,
    pub steps: usize,
}

impl Default for TypographyScaleOptions {
    fn default() -> Self {
        Self {
            base: 16.0,
            ratio: ScaleRatio(1.25),
            steps: 8,
        }
    }
}

impl TypographyScaleOptions {
    pub fn new(base: f64, ratio: impl Into<ScaleRatio>, steps: usize) -> Self {
        Self {
            base,
            ratio: ratio.into(),
            steps,
        }
    }
}

/// One size in a scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TypeScaleStep {
    pub index: usize,
    pub size_px: f64,
}

impl TypeScaleStep {
    /// Size in rem against a 16px root, rounded to 4 decimals.
    pub fn rem(&self) -> f64 {
        round_to(self.size_px / ROOT_FONT_SIZE_PX, 4)
    }
}

/// An ordered, strictly increasing sequence of font sizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyScale {
    base: f64,
    ratio: f64,
    steps: Vec<TypeScaleStep>,
}

impl TypographyScale {
    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn steps(&self) -> &[TypeScaleStep] {
        &self.steps
    }

    /// Sizes in px, in step order.
    pub fn sizes(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.size_px).collect()
    }

    pub fn get(&self, index: usize) -> Option<&TypeScaleStep> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeScaleStep> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Generate a modular scale: step `i` is `base * ratio^i`, rounded to 0.01px.
pub fn create_typography_scale(options: &TypographyScaleOptions) -> Result<TypographyScale> {
    let TypographyScaleOptions { base, ratio, steps } = *options;
    let ratio = ratio.value();

    if !base.is_finite() || base <= 0.0 {
        return Err(invalid_scale(format!("base must be a positive number, got {}", base)));
    }
    if !ratio.is_finite() || ratio <= 1.0 {
        return Err(TokenError::InvalidScaleParameters {
            message: format!("ratio must be greater than 1, got {}", ratio),
            help: Some("A ratio of 1 or less gives a flat or shrinking scale".to_string()),
        });
    }
    if steps == 0 || steps > MAX_STEPS {
        return Err(invalid_scale(format!(
            "step count must be 1-{}, got {}",
            MAX_STEPS, steps
        )));
    }

    let sizes: Vec<TypeScaleStep> = (0..steps)
        .map(|i| TypeScaleStep {
            index: i,
            size_px: round_to(base * ratio.powi(i as i32), 2),
        })
        .collect();

    if let Some(last) = sizes.last() {
        if !last.size_px.is_finite() {
            return Err(invalid_scale(format!(
                "step {} overflows ({} * {}^{})",
                last.index, base, ratio, last.index
            )));
        }
    }

    if let Some(first) = sizes.first().filter(|s| s.size_px <= 0.0) {
        return Err(TokenError::InvalidScaleParameters {
            message: format!("base {} rounds to {}px", base, first.size_px),
            help: Some("Use a base of at least 0.01px".to_string()),
        });
    }

    if let Some(w) = sizes.windows(2).find(|w| w[1].size_px <= w[0].size_px) {
        return Err(TokenError::InvalidScaleParameters {
            message: format!(
                "steps {} and {} both round to {}px",
                w[0].index, w[1].index, w[1].size_px
            ),
            help: Some("Use a larger ratio or base".to_string()),
        });
    }

    tracing::debug!(base, ratio, steps, "generated typography scale");

    Ok(TypographyScale {
        base,
        ratio,
        steps: sizes,
    })
}

fn invalid_scale(message: String) -> TokenError {
    TokenError::InvalidScaleParameters {
        message,
        help: None,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
