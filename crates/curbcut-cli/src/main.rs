//! Curbcut CLI - Command-line interface for the Curbcut accessibility checker
//!
//! Validates the semantics of HTML element trees against ARIA rules.

mod commands;
mod output;

use clap::Parser;
use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "curbcut",
    author,
    version,
    about = "Accessibility semantic validation for HTML",
    long_about = "Curbcut validates the semantics of HTML documents for assistive technology.\n\n\
                  It checks ARIA roles, states, and properties, resolves accessible names,\n\
                  and flags structural problems such as skipped heading levels and\n\
                  duplicated landmarks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => args.run(),
        Commands::Init(args) => args.run(),
        Commands::Explain(args) => args.run(),
    }
}
