//! tailords - Design token generator
//!
//! Derives a consistent set of design tokens from a few seed parameters:
//! colour shades from a base colour under a WCAG contrast constraint, and a
//! modular typography scale from a base size and ratio. Generation is pure and
//! deterministic; the same options always produce the same tokens.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod tokens;
pub mod types;
pub mod validation;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{Config, CONFIG_FILENAME};
pub use error::{Result, TokenError};
pub use generate::{
    create_typography_scale, generate_color_palette, ColorPalette, ColorPaletteOptions,
    ColorShade, LightnessRange, ScaleRatio, TypeScaleStep, TypographyScale,
    TypographyScaleOptions,
};
pub use tokens::{
    assemble, generate_tokens, DesignToken, TokenCategory, TokenConsumer, TokenSet, TokenValue,
};
pub use types::{contrast_ratio, relative_luminance, Accessibility, Colour};
pub use validation::{validate_options, Diagnostic, Severity, ValidationResult};
