use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::todo_file;

/// Execute the `add` action: append an incomplete item to the todo file of
/// the repository at the current working directory.
pub fn run(text: &str) -> Result<()> {
    let cwd = env::current_dir().context("Failed to resolve current directory")?;

    todo_file::add_item(&cwd, text)?;

    println!("{}", format!("Added: {text}").green());
    Ok(())
}
