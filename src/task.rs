//! Task item records produced by the filter.

use serde::Serialize;

/// Completion state of a recognized task item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Incomplete,
    Complete,
}

/// One recognized task-list entry.
///
/// Constructed once per matched list item during the rewrite pass and
/// immutable afterwards. `source_text` is the inner content of the list
/// item (or of its first paragraph) exactly as it stood before rewriting,
/// marker token and trailing content included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskItem {
    pub state: TaskState,
    pub source_text: String,
}

impl TaskItem {
    pub fn new(state: TaskState, source_text: impl Into<String>) -> Self {
        TaskItem {
            state,
            source_text: source_text.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == TaskState::Complete
    }
}
