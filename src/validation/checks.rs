//! Validation checks for generator options.
//!
//! Each check returns a `ValidationResult` listing every problem it finds,
//! rather than stopping at the first one like the generators do.

use crate::error::TokenError;
use crate::generate::{
    create_typography_scale, generate_color_palette, is_valid_name, ColorPaletteOptions,
    TypographyScaleOptions, MAX_SHADES, MAX_STEPS,
};
use crate::tokens::color_token_name;
use crate::types::Colour;

use super::warning::{Diagnostic, ValidationResult};

/// Ratios above this make very few usable steps.
const STEEP_RATIO: f64 = 2.0;

/// Sizes above this are rarely useful as text.
const LARGE_SIZE_PX: f64 = 256.0;

/// Check palette options, then try generating to catch accessibility failures.
pub fn check_palette(options: &ColorPaletteOptions) -> ValidationResult {
    let mut result = ValidationResult::new();

    let base = match Colour::parse(&options.base_color) {
        Ok(base) => Some(base),
        Err(err) => {
            result.push(
                Diagnostic::from_error("tailords::validate::invalid-color", &err)
                    .on("palette.base_color"),
            );
            None
        }
    };

    if options.shades == 0 || options.shades > MAX_SHADES {
        result.push(
            Diagnostic::error(
                "tailords::validate::shade-count",
                format!("Shade count {} is out of range", options.shades),
            )
            .on("palette.shades")
            .with_help(format!("Use between 1 and {} shades", MAX_SHADES)),
        );
    }

    let range = options.lightness;
    if !(range.darkest >= 0.0 && range.darkest < range.lightest && range.lightest <= 1.0) {
        result.push(
            Diagnostic::error(
                "tailords::validate::lightness-range",
                format!(
                    "Lightness range {}..{} is empty or outside 0..1",
                    range.darkest, range.lightest
                ),
            )
            .on("palette.lightness")
            .with_help("Set darkest below lightest, both between 0 and 1"),
        );
    }

    if let Some(name) = options.name.as_deref().filter(|n| !is_valid_name(n)) {
        result.push(
            Diagnostic::error(
                "tailords::validate::palette-name",
                format!("Palette name {:?} cannot be used in token names", name),
            )
            .on("palette.name")
            .with_help("Use lowercase letters, digits, '-' or '_'"),
        );
    }

    let Some(base) = base else {
        return result;
    };
    if result.has_errors() {
        return result;
    }

    match generate_color_palette(options) {
        Err(err) => {
            let diagnostic = match err {
                TokenError::AccessibilityUnsatisfiable { .. } => {
                    Diagnostic::from_error("tailords::validate::accessibility", &err)
                        .on("palette.accessibility")
                }
                TokenError::InvalidPaletteOptions { .. } => {
                    Diagnostic::from_error("tailords::validate::palette", &err)
                        .on("palette.lightness")
                }
                _ => Diagnostic::from_error("tailords::validate::palette", &err),
            };
            result.push(diagnostic);
        }
        Ok(palette) if palette.len() == 1 => {
            if palette.anchor_shade().color != base {
                result.push(
                    Diagnostic::warning(
                        "tailords::validate::base-adjusted",
                        format!(
                            "Base colour {} does not meet {}; using {} instead",
                            base,
                            options.accessibility,
                            palette.anchor_shade().color
                        ),
                    )
                    .with_help("Pick a lighter or darker base to keep it unchanged"),
                );
            }
        }
        Ok(palette) => {
            let midpoint = (palette.len() - 1) / 2;
            if palette.anchor() != midpoint {
                result.push(
                    Diagnostic::warning(
                        "tailords::validate::anchor-moved",
                        format!(
                            "Base colour {} sits at {} instead of {}",
                            base,
                            color_token_name(palette.name(), palette.anchor()),
                            color_token_name(palette.name(), midpoint)
                        ),
                    )
                    .with_help("The base is too light or too dark for the lightness range"),
                );
            }
        }
    }

    result
}

/// Check typography scale options, then try generating to catch rounding collapse.
pub fn check_typography(options: &TypographyScaleOptions) -> ValidationResult {
    let mut result = ValidationResult::new();
    let ratio = options.ratio.value();

    if !(options.base.is_finite() && options.base > 0.0) {
        result.push(
            Diagnostic::error(
                "tailords::validate::scale-base",
                format!("Base size {} must be a positive number", options.base),
            )
            .on("typography.base")
            .with_help("Typical base sizes are 14-18px"),
        );
    }

    if !(ratio.is_finite() && ratio > 1.0) {
        result.push(
            Diagnostic::error(
                "tailords::validate::scale-ratio",
                format!("Ratio {} must be greater than 1", ratio),
            )
            .on("typography.ratio")
            .with_help("Try major-third (1.25) or perfect-fourth (1.333)"),
        );
    }

    if options.steps == 0 || options.steps > MAX_STEPS {
        result.push(
            Diagnostic::error(
                "tailords::validate::scale-steps",
                format!("Step count {} is out of range", options.steps),
            )
            .on("typography.steps")
            .with_help(format!("Use between 1 and {} steps", MAX_STEPS)),
        );
    }

    if result.has_errors() {
        return result;
    }

    if ratio > STEEP_RATIO {
        result.push(
            Diagnostic::warning(
                "tailords::validate::steep-ratio",
                format!("Ratio {} grows sizes very quickly", ratio),
            )
            .on("typography.ratio"),
        );
    }

    match create_typography_scale(options) {
        Err(err) => result.push(Diagnostic::from_error("tailords::validate::scale-precision", &err)),
        Ok(scale) => {
            if let Some(step) = scale.iter().find(|s| s.size_px > LARGE_SIZE_PX) {
                result.push(Diagnostic::warning(
                    "tailords::validate::large-size",
                    format!(
                        "Step {} is {}px; later steps are larger than {}px",
                        step.index, step.size_px, LARGE_SIZE_PX
                    ),
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Accessibility;

    #[test]
    fn test_default_palette_is_clean() {
        assert!(check_palette(&ColorPaletteOptions::default()).is_ok());
    }

    #[test]
    fn test_palette_reports_every_problem() {
        let options = ColorPaletteOptions {
            base_color: "#12".to_string(),
            shades: 0,
            name: Some("Brand Blue".to_string()),
            ..Default::default()
        }
        .with_lightness(0.2, 0.8);

        let result = check_palette(&options);
        assert_eq!(result.error_count(), 4);
        for option in ["palette.base_color", "palette.shades", "palette.lightness", "palette.name"] {
            assert_eq!(result.for_option(option).count(), 1, "missing {option}");
        }
        for code in [
            "tailords::validate::invalid-color",
            "tailords::validate::shade-count",
            "tailords::validate::lightness-range",
            "tailords::validate::palette-name",
        ] {
            assert_eq!(result.with_code(code).count(), 1, "missing {code}");
        }
    }

    #[test]
    fn test_palette_unsatisfiable() {
        let options =
            ColorPaletteOptions::new("#808080", 3, Accessibility::Aaa).with_lightness(0.62, 0.52);
        let result = check_palette(&options);
        assert_eq!(result.with_code("tailords::validate::accessibility").count(), 1);
    }

    #[test]
    fn test_palette_range_too_narrow() {
        let options =
            ColorPaletteOptions::new("#808080", 32, Accessibility::Aa).with_lightness(0.5, 0.4);
        let result = check_palette(&options);

        assert_eq!(result.with_code("tailords::validate::palette").count(), 1);
        assert_eq!(result.with_code("tailords::validate::accessibility").count(), 0);
        assert_eq!(result.for_option("palette.lightness").count(), 1);
    }

    #[test]
    fn test_palette_anchor_moved() {
        let result = check_palette(&ColorPaletteOptions::new("black", 9, Accessibility::Aa));
        assert!(!result.has_errors());
        let warning = result
            .with_code("tailords::validate::anchor-moved")
            .next()
            .unwrap();
        assert_eq!(warning.message, "Base colour #000000 sits at color-000000-900 instead of color-000000-500");
    }

    #[test]
    fn test_single_shade_adjusted() {
        let result = check_palette(&ColorPaletteOptions::new("#777777", 1, Accessibility::Aaa));
        assert_eq!(result.with_code("tailords::validate::base-adjusted").count(), 1);
    }

    #[test]
    fn test_default_typography_is_clean() {
        assert!(check_typography(&TypographyScaleOptions::default()).is_ok());
    }

    #[test]
    fn test_typography_reports_every_problem() {
        let result = check_typography(&TypographyScaleOptions::new(-1.0, 0.5, 0));
        assert_eq!(result.error_count(), 3);
    }

    #[test]
    fn test_typography_warnings() {
        let result = check_typography(&TypographyScaleOptions::new(16.0, 3.0, 6));
        assert!(!result.has_errors());
        assert_eq!(result.with_code("tailords::validate::steep-ratio").count(), 1);
        assert_eq!(result.with_code("tailords::validate::large-size").count(), 1);
    }

    #[test]
    fn test_typography_precision() {
        let result = check_typography(&TypographyScaleOptions::new(1.0, 1.0001, 3));
        assert_eq!(result.with_code("tailords::validate::scale-precision").count(), 1);
    }
}
