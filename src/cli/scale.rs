//! Scale command implementation.

use clap::Args;

use crate::error::{Result, TokenError};
use crate::generate::{create_typography_scale, ScaleRatio, TypographyScale, TypographyScaleOptions};
use crate::output::{plural, Printer};
use crate::tokens::font_size_token_name;

/// Generate a modular typography scale
#[derive(Args, Debug)]
pub struct ScaleArgs {
    /// Size of the first step in px
    #[arg(long, short, default_value = "16")]
    pub base: f64,

    /// Scale ratio: a number or a preset such as major-third
    #[arg(long, short, default_value = "1.25")]
    pub ratio: ScaleRatio,

    /// Number of steps
    #[arg(long, short, default_value = "8")]
    pub steps: usize,

    /// Print the scale as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScaleArgs, printer: &Printer) -> Result<()> {
    let options = TypographyScaleOptions::new(args.base, args.ratio, args.steps);

    printer.status(
        "Generating",
        &format!(
            "{} from {}px at {}",
            plural(options.steps, "step"),
            options.base,
            options.ratio
        ),
    );
    let scale = create_typography_scale(&options)?;

    if args.json {
        let json = serde_json::to_string_pretty(&scale).map_err(|e| TokenError::Parse {
            message: format!("Failed to serialise scale: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for line in scale_lines(&scale) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn scale_lines(scale: &TypographyScale) -> Vec<String> {
    scale
        .iter()
        .map(|step| {
            format!(
                "{:<12} {:>8}px {:>8}rem",
                font_size_token_name(step.index),
                step.size_px,
                step.rem()
            )
        })
        .collect()
}
