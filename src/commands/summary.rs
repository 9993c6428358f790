use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::RULE_WIDTH;
use crate::locator;
use crate::parser::{self, TodoCounts};
use crate::todo_file;

/// Execute the `summary` action: aggregate todo counts across every
/// repository found under `path`. All counts default to zero.
pub fn run(path: &Path) -> Result<()> {
    let repos = locator::find_repositories(path, true)
        .with_context(|| format!("Invalid scan path: {}", path.display()))?;

    let mut with_todos = 0usize;
    let mut totals = TodoCounts::default();

    for repo in &repos {
        if let Some(content) = todo_file::read(repo)? {
            with_todos += 1;
            let counts = parser::count_content(&content);
            totals.incomplete += counts.incomplete;
            totals.complete += counts.complete;
        }
    }

    let incomplete_colored = if totals.incomplete == 0 {
        totals.incomplete.to_string().green()
    } else if totals.incomplete <= 10 {
        totals.incomplete.to_string().yellow()
    } else {
        totals.incomplete.to_string().red()
    };

    println!("{}", "Todo summary".bold());
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("  {:<26} {}", "Repositories scanned:", repos.len());
    println!("  {:<26} {}", "With TODO.md:", with_todos);
    println!("  {:<26} {}", "Incomplete todos:", incomplete_colored);
    println!("  {:<26} {}", "Complete todos:", totals.complete);
    println!("  {:<26} {}", "Total todos:", totals.total());

    Ok(())
}
