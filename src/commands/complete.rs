use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::todo_file;

/// Execute the `complete` action: mark the Nth incomplete item complete in
/// the repository at the current working directory. The raw argument is
/// validated down in the mutator, before any file is read.
pub fn run(raw_ordinal: &str) -> Result<()> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;

    let line = todo_file::complete_item(&cwd, raw_ordinal)?;

    println!("{}", format!("Completed: {line}").green());
    Ok(())
}
