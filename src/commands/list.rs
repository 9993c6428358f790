use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::commands::RULE_WIDTH;
use crate::locator;
use crate::todo_file;

/// Execute the `list` action: render the todo file of every repository found
/// under `path`. Repositories without a TODO.md emit nothing.
pub fn run(path: &Path) -> Result<()> {
    let repos = locator::find_repositories(path, true)
        .with_context(|| format!("Invalid scan path: {}", path.display()))?;

    let rule = "-".repeat(RULE_WIDTH);
    let mut rendered = 0usize;

    for repo in &repos {
        let Some(content) = todo_file::read(repo)? else {
            continue;
        };

        let name = repo
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| repo.display().to_string());

        println!(
            "{} {}",
            name.bold(),
            format!("({})", repo.display()).dimmed()
        );
        println!("{rule}");
        print!("{}", todo_file::render_lines(&content));
        println!("{rule}");
        println!();

        rendered += 1;
    }

    if rendered == 0 {
        println!("{}", "No TODO.md files found".yellow());
    }

    Ok(())
}
