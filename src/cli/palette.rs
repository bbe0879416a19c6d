//! Palette command implementation.

use clap::Args;

use crate::error::{Result, TokenError};
use crate::generate::{generate_color_palette, ColorPalette, ColorPaletteOptions};
use crate::output::{plural, Printer};
use crate::tokens::color_token_name;
use crate::types::Accessibility;

/// Generate colour shades from a base colour
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Base colour (#RRGGBB, #RGB, CSS name, or rgb(r, g, b))
    #[arg(required = true)]
    pub color: String,

    /// Number of shades
    #[arg(long, short, default_value = "9")]
    pub shades: usize,

    /// Contrast tier at least one shade must meet (AA or AAA)
    #[arg(long, short, default_value = "AA")]
    pub accessibility: Accessibility,

    /// Palette name used in token names
    #[arg(long)]
    pub name: Option<String>,

    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let mut options = ColorPaletteOptions::new(&args.color, args.shades, args.accessibility);
    options.name = args.name;

    printer.status(
        "Generating",
        &format!(
            "{} of {} ({})",
            plural(options.shades, "shade"),
            args.color,
            options.accessibility
        ),
    );
    let palette = generate_color_palette(&options)?;

    if args.json {
        let json = serde_json::to_string_pretty(&palette).map_err(|e| TokenError::Parse {
            message: format!("Failed to serialise palette: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for line in palette_lines(&palette, printer) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// One line per shade: swatch, token name, hex, and both text contrasts.
fn palette_lines(palette: &ColorPalette, printer: &Printer) -> Vec<String> {
    palette
        .iter()
        .map(|shade| {
            let marker = if shade.index == palette.anchor() { "*" } else { " " };
            let pass = if shade.meets(palette.accessibility()) {
                palette.accessibility().to_string()
            } else {
                "-".to_string()
            };
            format!(
                "{}{}{:<20} {}  white {:>5.2}  black {:>5.2}  {}",
                printer.swatch(shade.color),
                marker,
                color_token_name(palette.name(), shade.index),
                shade.color,
                shade.contrast_with_white,
                shade.contrast_with_black,
                pass
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lines() {
        let options =
            ColorPaletteOptions::new("#3b82f6", 3, Accessibility::Aa).with_name("blue");
        let palette = generate_color_palette(&options).unwrap();
        let lines = palette_lines(&palette, &Printer::plain());

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" color-blue-100"));
        assert!(lines[1].starts_with("*color-blue-200"));
        assert!(lines[1].contains("#3b82f6"));
    }

    #[test]
    fn test_run_rejects_bad_colour() {
        let args = PaletteArgs {
            color: "#nothex".to_string(),
            shades: 9,
            accessibility: Accessibility::Aa,
            name: None,
            json: false,
        };
        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, TokenError::InvalidColor { .. }));
    }
}
