//! CLI support for the `docsearch` binary.

pub mod args;
pub mod commands;
