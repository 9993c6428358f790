/// Leading marker for an incomplete checklist item.
pub const INCOMPLETE_MARKER: &str = "- [ ]";
/// Leading marker for a completed checklist item (lowercase x only).
pub const COMPLETE_MARKER: &str = "- [x]";

/// Classification of a single TODO.md line.
///
/// Classification looks only at the leading marker; the rest of the line is
/// free text. `- [X]` (uppercase) deliberately does not match either marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Incomplete,
    Complete,
    Other,
}

/// Classify a single line by its leading checkbox marker.
/// This is a pure function with no IO; renderer, mutator, and summarizer all
/// go through it so the marker semantics stay in one place.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(INCOMPLETE_MARKER) {
        LineKind::Incomplete
    } else if line.starts_with(COMPLETE_MARKER) {
        LineKind::Complete
    } else {
        LineKind::Other
    }
}

/// Incomplete/complete item counts for one todo file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub incomplete: usize,
    pub complete: usize,
}

impl TodoCounts {
    pub fn total(&self) -> usize {
        self.incomplete + self.complete
    }
}

/// Count incomplete and complete items in a todo file's content.
pub fn count_content(content: &str) -> TodoCounts {
    let mut counts = TodoCounts::default();
    for line in content.lines() {
        match classify(line) {
            LineKind::Incomplete => counts.incomplete += 1,
            LineKind::Complete => counts.complete += 1,
            LineKind::Other => {}
        }
    }
    counts
}

/// Zero-based indices (into a `split('\n')` view of `content`) of every
/// incomplete line, in file order. The ordinal the user types is the 1-based
/// position within this list, recomputed on every operation.
pub fn incomplete_line_indices(content: &str) -> Vec<usize> {
    content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| classify(line) == LineKind::Incomplete)
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_incomplete() {
        assert_eq!(classify("- [ ] buy milk"), LineKind::Incomplete);
        assert_eq!(classify("- [ ]"), LineKind::Incomplete);
    }

    #[test]
    fn test_classify_complete() {
        assert_eq!(classify("- [x] shipped"), LineKind::Complete);
    }

    #[test]
    fn test_uppercase_x_is_other() {
        // Only lowercase x counts as complete
        assert_eq!(classify("- [X] shouted"), LineKind::Other);
    }

    #[test]
    fn test_spacing_sensitive() {
        assert_eq!(classify("-[ ] no space after dash"), LineKind::Other);
        assert_eq!(classify("- [] no inner space"), LineKind::Other);
        assert_eq!(classify("- [  ] two inner spaces"), LineKind::Other);
        assert_eq!(classify("  - [ ] indented"), LineKind::Other);
    }

    #[test]
    fn test_prose_and_blank_are_other() {
        assert_eq!(classify("# Project Todos"), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
        assert_eq!(classify("just some prose"), LineKind::Other);
    }

    #[test]
    fn test_marker_text_may_contain_brackets() {
        assert_eq!(classify("- [ ] fix the [ ] rendering"), LineKind::Incomplete);
    }

    #[test]
    fn test_count_content() {
        let content = "# Project Todos\n\n- [ ] one\n- [x] two\n- [ ] three\nnotes\n";
        let counts = count_content(content);
        assert_eq!(counts.incomplete, 2);
        assert_eq!(counts.complete, 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_count_empty() {
        assert_eq!(count_content(""), TodoCounts::default());
    }

    #[test]
    fn test_incomplete_line_indices() {
        let content = "# Project Todos\n\n- [ ] one\n- [x] done\n- [ ] two\n";
        assert_eq!(incomplete_line_indices(content), vec![2, 4]);
    }
}
