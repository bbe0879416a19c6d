//! Option validation for preview and CLI front ends.
//!
//! Generators fail on the first problem; these checks collect every problem
//! with a set of options as diagnostics, plus warnings for options that work
//! but probably do not do what the user meant. Used by `tailords validate`
//! and `tailords tokens`.

mod checks;
mod warning;

pub use checks::{check_palette, check_typography};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::generate::{ColorPaletteOptions, TypographyScaleOptions};
use crate::output::Printer;

/// Run all validation checks against a pair of options.
pub fn validate_options(
    palette: &ColorPaletteOptions,
    typography: &TypographyScaleOptions,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(check_palette(palette));
    result.merge(check_typography(typography));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!("{}[{}]: {}", printer.severity(d.severity), printer.dim(&d.code), d.message);
        if let Some(option) = d.option {
            eprintln!("  {} {}", printer.cyan("-->"), option);
        }
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.cyan("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Accessibility;

    #[test]
    fn test_validate_defaults() {
        let result = validate_options(
            &ColorPaletteOptions::default(),
            &TypographyScaleOptions::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_merges_both_sides() {
        let result = validate_options(
            &ColorPaletteOptions::new("nope", 9, Accessibility::Aa),
            &TypographyScaleOptions::new(16.0, 1.0, 8),
        );
        assert_eq!(result.error_count(), 2);
    }

    #[test]
    fn test_serialises_for_preview_tooling() {
        let result = validate_options(
            &ColorPaletteOptions::default(),
            &TypographyScaleOptions::new(16.0, 1.0, 8),
        );
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();

        assert_eq!(json[0]["severity"], "error");
        assert_eq!(json[0]["code"], "tailords::validate::scale-ratio");
        assert_eq!(json[0]["option"], "typography.ratio");
    }
}
