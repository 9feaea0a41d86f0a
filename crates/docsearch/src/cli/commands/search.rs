//! Implementation of `docsearch search`.

use std::process::ExitCode;

use docsearch_index::{DocumentIndex, SearchField, SearchOptions, reconcile};

use crate::cli::args::SearchCommand;

/// Fields searched by the CLI.
const FIELDS: &[SearchField] = &[SearchField::Title, SearchField::Content];

/// Queries the index and prints matching sections.
pub fn run(cmd: &SearchCommand) -> ExitCode {
    let index = match DocumentIndex::load(&cmd.index) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let query = cmd.query.join(" ");
    let options = SearchOptions::default()
        .with_limit(cmd.limit)
        .with_offset(cmd.offset);

    let hits = index.search(&query, FIELDS, &options);
    let results = reconcile(hits);

    if cmd.json {
        let body = serde_json::json!({
            "total": results.len(),
            "results": results,
        });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize results: {e}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    if results.is_empty() {
        println!("No results found.");
        return ExitCode::SUCCESS;
    }

    for result in &results {
        println!("{:>3}. {} [{}]", result.id, result.title, result.page_title);
        println!("     {}", result.url);
    }

    ExitCode::SUCCESS
}
