//! Implementation of `docsearch serve`.

use std::{process::ExitCode, sync::Arc};

use docsearch_index::DocumentIndex;
use docsearch_server::{ServerConfig, StaticMeta, run_server};
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::cli::args::ServeCommand;

/// Loads the index and metadata, then runs the query endpoint.
pub fn run(cmd: &ServeCommand) -> ExitCode {
    init_tracing();

    let index = match DocumentIndex::load(&cmd.index) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let meta = match &cmd.meta {
        Some(path) => match StaticMeta::load(path) {
            Ok(meta) => meta,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => StaticMeta::default(),
    };

    let mut config = ServerConfig::from_env();
    if let Some(addr) = &cmd.addr {
        config = config.with_addr(addr);
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runtime.block_on(run_server(Arc::new(index), Arc::new(meta), config)) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Installs a stderr log subscriber filtered by `RUST_LOG` (default `info`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}
