//! The `docsearch` command-line tool.

#![warn(missing_docs)]

pub mod cli;
