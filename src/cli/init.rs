//! Init command implementation.
//!
//! Writes a `tailords.yaml` holding the default seed options, or options taken
//! from flags.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{Result, TokenError};
use crate::output::{display_path, Printer};
use crate::validation::validate_options;

use super::tokens::Overrides;

/// Write a starter tailords.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing tailords.yaml
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub overrides: Overrides,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(TokenError::Validation {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = args.overrides.apply(Config::default());

    // Never write a config that cannot generate.
    let result = validate_options(&config.palette, &config.typography);
    if let Some(first) = result.iter().find(|d| d.severity == crate::validation::Severity::Error) {
        return Err(TokenError::Validation {
            message: first.message.clone(),
            help: first.help.clone(),
        });
    }

    let yaml = config.to_yaml()?;
    fs::write(&config_path, &yaml).map_err(|e| TokenError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.success("Created", &display_path(&config_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init_args(path: PathBuf, force: bool) -> InitArgs {
        InitArgs {
            path,
            force,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();
        run(init_args(dir.path().to_path_buf(), false), &Printer::plain()).unwrap();

        let written = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "palette: {}\n").unwrap();

        let err = run(init_args(dir.path().to_path_buf(), false), &Printer::plain()).unwrap_err();
        assert!(matches!(err, TokenError::Validation { .. }));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "palette: {}\n").unwrap();

        let mut args = init_args(dir.path().to_path_buf(), true);
        args.overrides.color = Some("teal".to_string());
        run(args, &Printer::plain()).unwrap();

        let written = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(written.palette.base_color, "teal");
    }

    #[test]
    fn test_init_rejects_invalid_options() {
        let dir = tempdir().unwrap();
        let mut args = init_args(dir.path().to_path_buf(), false);
        args.overrides.steps = Some(0);

        assert!(run(args, &Printer::plain()).is_err());
        assert!(!dir.path().join(CONFIG_FILENAME).exists());
    }
}
