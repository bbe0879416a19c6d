//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{Result, TokenError};
use crate::output::{display_path, plural, Printer, Tone};
use crate::validation::{print_diagnostics, validate_options, Severity};

use super::tokens::Overrides;

/// Check options and report every problem at once
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Config file
    #[arg(long, short, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    #[command(flatten)]
    pub overrides: Overrides,

    /// Print diagnostics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    printer.status("Checking", &display_path(&args.config));
    let config = args.overrides.apply(config);

    let result = validate_options(&config.palette, &config.typography);

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| TokenError::Parse {
            message: format!("Failed to serialise diagnostics: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        print_diagnostics(&result, printer);
    }

    match result.worst() {
        Some(Severity::Error) => {
            printer.emit(Tone::Failure, "Rejected", &display_path(&args.config));
            return Err(TokenError::Validation {
                message: result.summary(),
                help: Some(format!("Fix the options in {}", CONFIG_FILENAME)),
            });
        }
        Some(Severity::Warning) => {
            printer.warning("Passed", &plural(result.warning_count(), "warning"))
        }
        None => printer.success("Passed", "no problems found"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args_for(yaml: &str) -> (tempfile::TempDir, ValidateArgs) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, yaml).unwrap();
        let args = ValidateArgs {
            config: path,
            overrides: Overrides::default(),
            json: false,
        };
        (dir, args)
    }

    #[test]
    fn test_valid_config_passes() {
        let (_dir, args) = args_for("palette:\n  base_color: \"#10b981\"\n");
        assert!(run(args, &Printer::plain()).is_ok());
    }

    #[test]
    fn test_invalid_config_fails_with_counts() {
        let (_dir, args) = args_for("palette:\n  shades: 0\ntypography:\n  ratio: 1\n");
        let err = run(args, &Printer::plain()).unwrap_err();

        match err {
            TokenError::Validation { message, .. } => assert_eq!(message, "2 errors, 0 warnings"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
