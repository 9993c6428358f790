use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("{} is not a git repository (no .git directory)", .0.display())]
    NotARepository(PathBuf),

    #[error("No TODO.md in {}. Use --add to create one.", .0.display())]
    TodoFileMissing(PathBuf),

    #[error("Invalid todo number '{0}': expected a positive integer")]
    InvalidArgument(String),

    #[error("No incomplete todo #{requested} ({available} incomplete items); it may already be complete")]
    InvalidOrAlreadyComplete { requested: usize, available: usize },
}
