use clap::Parser;
use miette::Result;
use tailords::cli::{Cli, Commands};
use tailords::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TAILORDS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Palette(args) => tailords::cli::palette::run(args, &printer)?,
        Commands::Scale(args) => tailords::cli::scale::run(args, &printer)?,
        Commands::Tokens(args) => tailords::cli::tokens::run(args, &printer)?,
        Commands::Validate(args) => tailords::cli::validate::run(args, &printer)?,
        Commands::Init(args) => tailords::cli::init::run(args, &printer)?,
        Commands::Completions(args) => tailords::cli::completions::run(args)?,
    }

    Ok(())
}
