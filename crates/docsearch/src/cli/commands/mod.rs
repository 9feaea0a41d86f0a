//! Command implementations and dispatch.

pub mod recent;
pub mod search;
pub mod serve;

use std::process::ExitCode;

use super::args::Commands;

/// Dispatches to the selected subcommand.
pub fn run(command: Commands) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(&cmd),
        Commands::Serve(cmd) => serve::run(&cmd),
        Commands::Recent(cmd) => recent::run(&cmd),
    }
}
