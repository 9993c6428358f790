use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repo-todos")]
#[command(about = "List, add, complete, and summarize TODO.md checklists across git repositories")]
#[command(version)]
#[command(group(ArgGroup::new("action").args(["list", "add", "complete", "summary"])))]
pub struct Cli {
    /// List todos from every repository under PATH (the default action)
    #[arg(short, long)]
    pub list: bool,

    /// Append a new incomplete todo to the current repository
    #[arg(short, long, value_name = "TEXT")]
    pub add: Option<String>,

    /// Mark the Nth incomplete todo complete in the current repository
    #[arg(short, long, value_name = "N")]
    pub complete: Option<String>,

    /// Print aggregate todo counts for every repository under PATH
    #[arg(short, long)]
    pub summary: bool,

    /// Root to scan for list/summary (ignored by add/complete)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// The single action a run performs. The flags are mutually exclusive; no
/// action flag at all means `List`.
#[derive(Debug)]
pub enum Action {
    List,
    Add(String),
    Complete(String),
    Summary,
}

impl Cli {
    pub fn action(self) -> Action {
        if let Some(text) = self.add {
            Action::Add(text)
        } else if let Some(ordinal) = self.complete {
            Action::Complete(ordinal)
        } else if self.summary {
            Action::Summary
        } else {
            Action::List
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_list_over_current_dir() {
        let cli = Cli::parse_from(["repo-todos"]);
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(matches!(cli.action(), Action::List));
    }

    #[test]
    fn test_explicit_list_with_path() {
        let cli = Cli::parse_from(["repo-todos", "-l", "/tmp/work"]);
        assert_eq!(cli.path, PathBuf::from("/tmp/work"));
        assert!(matches!(cli.action(), Action::List));
    }

    #[test]
    fn test_add_takes_text() {
        let cli = Cli::parse_from(["repo-todos", "-a", "Write tests"]);
        match cli.action() {
            Action::Add(text) => assert_eq!(text, "Write tests"),
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_takes_raw_argument() {
        // Validation happens later so a bad value fails as InvalidArgument,
        // not as a usage error
        let cli = Cli::parse_from(["repo-todos", "--complete", "abc"]);
        assert!(matches!(cli.action(), Action::Complete(n) if n == "abc"));
    }

    #[test]
    fn test_summary_flag() {
        let cli = Cli::parse_from(["repo-todos", "-s"]);
        assert!(matches!(cli.action(), Action::Summary));
    }

    #[test]
    fn test_actions_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["repo-todos", "-s", "-l"]).is_err());
        assert!(Cli::try_parse_from(["repo-todos", "-a", "x", "-c", "1"]).is_err());
    }

    #[test]
    fn test_add_requires_argument() {
        assert!(Cli::try_parse_from(["repo-todos", "--add"]).is_err());
        assert!(Cli::try_parse_from(["repo-todos", "--complete"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["repo-todos", "--bogus"]).is_err());
    }
}
