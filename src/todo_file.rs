use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TodoError;
use crate::locator;
use crate::parser::{self, LineKind, INCOMPLETE_MARKER};

/// Fixed relative path of the todo file under a repository root.
pub const TODO_FILE_NAME: &str = "TODO.md";

/// Header written when `add` creates a fresh todo file.
const NEW_FILE_HEADER: &str = "# Project Todos\n\n";

static ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("ORDINAL_RE pattern must be valid"));

pub fn todo_path(repo_root: &Path) -> PathBuf {
    repo_root.join(TODO_FILE_NAME)
}

/// Read a repository's todo file, or None if it has no todo file.
pub fn read(repo_root: &Path) -> Result<Option<String>, TodoError> {
    let path = todo_path(repo_root);
    if !path.is_file() {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(&path)?))
}

/// Render todo file content for display. Incomplete lines get a right-aligned
/// width-3 ordinal; every other line gets a 4-space indent. Original line
/// text is preserved exactly. Pure; the caller supplies the envelope.
pub fn render_lines(content: &str) -> String {
    let mut out = String::new();
    let mut counter = 0usize;

    for line in content.lines() {
        match parser::classify(line) {
            LineKind::Incomplete => {
                counter += 1;
                out.push_str(&format!("{:>3} {}\n", counter, line));
            }
            _ => {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }

    out
}

/// Append a new incomplete item to the repository's todo file, creating the
/// file (with its header) if it does not exist yet.
///
/// The text is taken literally; an embedded newline would break the
/// one-line-per-record format. Known limitation, matching the file's
/// hand-editable nature.
pub fn add_item(repo_root: &Path, text: &str) -> Result<(), TodoError> {
    if !locator::is_repository(repo_root) {
        return Err(TodoError::NotARepository(repo_root.to_path_buf()));
    }

    let path = todo_path(repo_root);
    let mut content = if path.is_file() {
        fs::read_to_string(&path)?
    } else {
        NEW_FILE_HEADER.to_string()
    };

    // Keep one record per line even if the existing file lacks a final newline
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(INCOMPLETE_MARKER);
    content.push(' ');
    content.push_str(text);
    content.push('\n');

    fs::write(&path, content)?;
    Ok(())
}

/// Mark the n-th incomplete item complete, where `raw_ordinal` is the user's
/// argument and n counts only currently-incomplete lines, top to bottom.
/// Returns the modified line's full text.
///
/// The ordinal is validated before any file is touched. An ordinal beyond
/// the incomplete count fails the same way whether it points past the end or
/// at an item someone already completed; only incomplete lines are ever
/// looked at, so the two cases are indistinguishable here.
pub fn complete_item(repo_root: &Path, raw_ordinal: &str) -> Result<String, TodoError> {
    let ordinal = parse_ordinal(raw_ordinal)?;

    if !locator::is_repository(repo_root) {
        return Err(TodoError::NotARepository(repo_root.to_path_buf()));
    }
    let path = todo_path(repo_root);
    if !path.is_file() {
        return Err(TodoError::TodoFileMissing(repo_root.to_path_buf()));
    }

    let content = fs::read_to_string(&path)?;
    let incomplete = parser::incomplete_line_indices(&content);
    if ordinal > incomplete.len() {
        return Err(TodoError::InvalidOrAlreadyComplete {
            requested: ordinal,
            available: incomplete.len(),
        });
    }
    let target = incomplete[ordinal - 1];

    // split('\n') keeps a trailing empty element for a final newline, so the
    // rejoin below reproduces the file byte-for-byte apart from the one edit.
    let mut lines: Vec<String> = content.split('\n').map(String::from).collect();
    let completed = lines[target].replacen("[ ]", "[x]", 1);
    lines[target] = completed.clone();

    fs::write(&path, lines.join("\n"))?;
    Ok(completed)
}

/// Validate a raw ordinal argument (`^[1-9][0-9]*$`) and parse it.
pub fn parse_ordinal(raw: &str) -> Result<usize, TodoError> {
    if !ORDINAL_RE.is_match(raw) {
        return Err(TodoError::InvalidArgument(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| TodoError::InvalidArgument(raw.to_string()))
}
