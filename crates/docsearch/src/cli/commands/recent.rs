//! Implementation of `docsearch recent`.

use std::{path::PathBuf, process::ExitCode};

use docsearch_session::RecentSearchStore;

use crate::cli::args::{RecentAction, RecentCommand};

/// Dispatches recent-search store actions.
pub fn run(cmd: &RecentCommand) -> ExitCode {
    match &cmd.action {
        RecentAction::Ls { store, json } => run_ls(store.as_ref(), *json),
        RecentAction::Rm { id, store } => run_rm(*id, store.as_ref()),
    }
}

/// Opens the store at an explicit path or the default location.
fn open_store(path: Option<&PathBuf>) -> Result<RecentSearchStore, ExitCode> {
    let result = match path {
        Some(path) => RecentSearchStore::open(path),
        None => match RecentSearchStore::open_default() {
            Some(result) => result,
            None => {
                eprintln!("error: could not determine home directory");
                return Err(ExitCode::FAILURE);
            }
        },
    };

    result.map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Lists recent searches, most recent first.
fn run_ls(path: Option<&PathBuf>, json: bool) -> ExitCode {
    let store = match open_store(path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    if json {
        match serde_json::to_string_pretty(store.entries()) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize entries: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if store.is_empty() {
        println!("No recent searches.");
        return ExitCode::SUCCESS;
    }

    for entry in store.entries() {
        println!("{:>4}  {:<24}  {}", entry.id, entry.label, entry.url);
    }

    ExitCode::SUCCESS
}

/// Removes an entry by id. Removing an unknown id is not an error.
fn run_rm(id: u64, path: Option<&PathBuf>) -> ExitCode {
    let mut store = match open_store(path) {
        Ok(store) => store,
        Err(code) => return code,
    };

    match store.remove(id) {
        Ok(true) => println!("Removed {id}"),
        Ok(false) => println!("No entry with id {id}"),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
