//! Command-line interface for the docsearch tool.

use std::process::ExitCode;

use clap::Parser;
use docsearch::cli::{args::Cli, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    commands::run(cli.command)
}
