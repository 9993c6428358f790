mod cli;
mod commands;
mod error;
mod locator;
mod parser;
mod todo_file;

use anyhow::Result;
use clap::Parser;

use cli::{Action, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.path.clone();

    match cli.action() {
        Action::List => {
            commands::list::run(&path)?;
        }
        Action::Add(text) => {
            commands::add::run(&text)?;
        }
        Action::Complete(ordinal) => {
            commands::complete::run(&ordinal)?;
        }
        Action::Summary => {
            commands::summary::run(&path)?;
        }
    }

    Ok(())
}
