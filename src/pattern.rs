//! Task marker recognition.
//!
//! A list item is a task item when its rendered content opens with a
//! literal `[ ]` or `[x]` token. The token may be preceded by a leftover
//! list prefix (a bullet character or a `1.`-style ordinal) and must be
//! followed by whitespace, so inline text like `[x]y` is never mistaken
//! for a checkbox. Matching is case sensitive: only `x` marks completion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::task::TaskState;

/// Literal marker for an incomplete task.
pub const INCOMPLETE_MARKER: &str = "[ ]";

/// Literal marker for a complete task.
pub const COMPLETE_MARKER: &str = "[x]";

/// Anchored at content start: optional bullet or numeric-dot ordinal,
/// optional whitespace, one marker token, then a whitespace boundary.
static ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[-+*]|\d+\.)?\s*(\[[ x]\])\s").expect("item pattern is valid"));

/// A marker token located in list item content.
///
/// Carries the matched completion state together with the byte range of
/// the token itself, so the caller can splice a replacement over exactly
/// the marker and keep everything around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub state: TaskState,
    pub start: usize,
    pub end: usize,
}

impl MarkerMatch {
    /// The literal token that matched.
    pub fn token(&self) -> &'static str {
        match self.state {
            TaskState::Complete => COMPLETE_MARKER,
            TaskState::Incomplete => INCOMPLETE_MARKER,
        }
    }
}

/// Recognize a task marker in rendered list item content.
///
/// Trailing whitespace is ignored; the anchor means only the first line
/// of the content can match. Returns `None` when the content is not a
/// task item, in which case the node must be left untouched.
pub fn match_task_item(content: &str) -> Option<MarkerMatch> {
    let caps = ITEM_PATTERN.captures(content.trim_end())?;
    let marker = caps.get(1)?;
    let state = if marker.as_str() == COMPLETE_MARKER {
        TaskState::Complete
    } else {
        TaskState::Incomplete
    };
    Some(MarkerMatch {
        state,
        start: marker.start(),
        end: marker.end(),
    })
}

/// Whether rendered text opens with a bare marker token.
///
/// This is the looser check used for candidate list selection; full item
/// recognition (prefix handling, whitespace boundary) stays with
/// [`match_task_item`].
pub fn begins_with_marker(text: &str) -> bool {
    let text = text.trim_start();
    text.starts_with(INCOMPLETE_MARKER) || text.starts_with(COMPLETE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_marker() {
        let m = match_task_item("[ ] buy milk").expect("should match");
        assert_eq!(m.state, TaskState::Incomplete);
        assert_eq!((m.start, m.end), (0, 3));
    }

    #[test]
    fn test_complete_marker() {
        let m = match_task_item("[x] drink milk").expect("should match");
        assert_eq!(m.state, TaskState::Complete);
        assert_eq!(m.token(), "[x]");
    }

    #[test]
    fn test_capital_x_is_not_complete() {
        assert!(match_task_item("[X] done").is_none());
    }

    #[test]
    fn test_marker_requires_whitespace_boundary() {
        assert!(match_task_item("[x]done").is_none());
        assert!(match_task_item("[ ]y").is_none());
    }

    #[test]
    fn test_marker_must_anchor_at_start() {
        assert!(match_task_item("a[x]b").is_none());
        assert!(match_task_item("see [x] above").is_none());
    }

    #[test]
    fn test_bare_marker_without_content_is_not_an_item() {
        // Trailing whitespace is trimmed first, so nothing follows the token.
        assert!(match_task_item("[x]").is_none());
        assert!(match_task_item("[ ]  ").is_none());
    }

    #[test]
    fn test_bullet_prefixes() {
        for content in ["- [ ] task", "* [ ] task", "+ [ ] task"] {
            let m = match_task_item(content).expect("bullet prefix should match");
            assert_eq!(m.state, TaskState::Incomplete);
            assert_eq!(&content[m.start..m.end], "[ ]");
        }
    }

    #[test]
    fn test_ordinal_prefix() {
        let m = match_task_item("12. [x] task").expect("ordinal prefix should match");
        assert_eq!(m.state, TaskState::Complete);
        assert_eq!((m.start, m.end), (4, 7));
    }

    #[test]
    fn test_leading_whitespace_allowed() {
        assert!(match_task_item("  [x] indented").is_some());
    }

    #[test]
    fn test_match_range_addresses_token_only() {
        let content = "[ ] buy <strong>milk</strong>";
        let m = match_task_item(content).expect("should match");
        assert_eq!(&content[..m.start], "");
        assert_eq!(&content[m.end..], " buy <strong>milk</strong>");
    }

    #[test]
    fn test_only_first_token_matches() {
        let content = "[ ] [x] both";
        let m = match_task_item(content).expect("should match");
        assert_eq!(m.state, TaskState::Incomplete);
        assert_eq!((m.start, m.end), (0, 3));
    }

    #[test]
    fn test_begins_with_marker() {
        assert!(begins_with_marker("[ ] a"));
        assert!(begins_with_marker("\n  [x] a"));
        assert!(!begins_with_marker("[X] a"));
        assert!(!begins_with_marker("plain text"));
    }
}
