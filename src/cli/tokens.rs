//! Tokens command implementation.
//!
//! Loads tailords.yaml (if present), applies flag overrides, validates, and
//! prints the assembled token set.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::Result;
use crate::generate::ScaleRatio;
use crate::output::{display_path, plural, Printer};
use crate::tokens::{generate_tokens, TokenCategory, TokenConsumer, TokenSet};
use crate::types::Accessibility;
use crate::validation::{print_diagnostics, validate_options};

/// Generate the full token set from tailords.yaml and flags
#[derive(Args, Debug)]
pub struct TokensArgs {
    /// Config file
    #[arg(long, short, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: Overrides,

    /// Print tokens as JSON
    #[arg(long)]
    pub json: bool,
}

/// Flags that override values from the config file.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// Base colour
    #[arg(long)]
    pub color: Option<String>,

    /// Number of shades
    #[arg(long)]
    pub shades: Option<usize>,

    /// Contrast tier (AA or AAA)
    #[arg(long)]
    pub accessibility: Option<Accessibility>,

    /// Palette name used in token names
    #[arg(long)]
    pub name: Option<String>,

    /// Base font size in px
    #[arg(long)]
    pub base: Option<f64>,

    /// Scale ratio: a number or a preset such as major-third
    #[arg(long)]
    pub ratio: Option<ScaleRatio>,

    /// Number of typography steps
    #[arg(long)]
    pub steps: Option<usize>,
}

impl Overrides {
    /// Apply every set flag on top of `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(color) = self.color {
            config.palette.base_color = color;
        }
        if let Some(shades) = self.shades {
            config.palette.shades = shades;
        }
        if let Some(accessibility) = self.accessibility {
            config.palette.accessibility = accessibility;
        }
        if let Some(name) = self.name {
            config.palette.name = Some(name);
        }
        if let Some(base) = self.base {
            config.typography.base = base;
        }
        if let Some(ratio) = self.ratio {
            config.typography.ratio = ratio;
        }
        if let Some(steps) = self.steps {
            config.typography.steps = steps;
        }
        config
    }
}

pub fn run(args: TokensArgs, printer: &Printer) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    if args.config.exists() {
        printer.info("Loaded", &display_path(&args.config));
    }
    let config = args.overrides.apply(config);

    let diagnostics = validate_options(&config.palette, &config.typography);
    print_diagnostics(&diagnostics, printer);

    let tokens = generate_tokens(&config.palette, &config.typography)?;

    if args.json {
        println!("{}", tokens.to_json()?);
    } else {
        let mut table = TokenTable::default();
        table.consume(&tokens);
        print!("{}", table.into_string());
    }

    printer.success(
        "Generated",
        &format!(
            "{} ({} colour, {} typography)",
            plural(tokens.len(), "token"),
            tokens.category(TokenCategory::Color).count(),
            tokens.category(TokenCategory::Typography).count()
        ),
    );

    if diagnostics.has_warnings() {
        printer.warning(
            "Warning",
            &plural(diagnostics.warning_count(), "warning"),
        );
    }

    Ok(())
}

/// Plain-text table of `name  category  value` lines.
#[derive(Debug, Default)]
pub struct TokenTable {
    out: String,
}

impl TokenTable {
    pub fn into_string(self) -> String {
        self.out
    }
}

impl TokenConsumer for TokenTable {
    type Output = ();

    fn consume(&mut self, tokens: &TokenSet) {
        let width = tokens.names().map(str::len).max().unwrap_or(0);
        for token in tokens.iter() {
            self.out.push_str(&format!(
                "{:<width$}  {:<10}  {}\n",
                token.name,
                token.category.to_string(),
                token.value,
                width = width
            ));
        }
    }
}
