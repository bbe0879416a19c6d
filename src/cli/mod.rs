pub mod completions;
pub mod init;
pub mod palette;
pub mod scale;
pub mod tokens;
pub mod validate;

use clap::{Parser, Subcommand};

/// tailords - Design token generator
#[derive(Parser, Debug)]
#[command(name = "tailords")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate colour shades from a base colour
    Palette(palette::PaletteArgs),

    /// Generate a modular typography scale
    Scale(scale::ScaleArgs),

    /// Generate the full token set from tailords.yaml and flags
    Tokens(tokens::TokensArgs),

    /// Check options and report every problem at once
    Validate(validate::ValidateArgs),

    /// Write a starter tailords.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
