//! Task-list post-processing for rendered Markdown HTML
//!
//!     This crate is a single filter stage for an HTML rendering pipeline: it
//!     finds lists whose items carry literal task markers (`[ ]`, `[x]`) left
//!     behind by a Markdown renderer, swaps each marker for inert checkbox
//!     markup in place, and reports a document-ordered record of every item it
//!     recognized. Markdown parsing and HTML sanitization happen upstream;
//!     checkbox interactivity belongs to the presentation layer downstream.
//!
//! Architecture
//!
//!     - pattern: recognizes a task marker at the start of list item content
//!       and reports its state and position. Pure string logic.
//!     - dom: the TreeAccess capability trait (structural queries, class
//!       attribute access, inner content read/replace) plus the rcdom backend.
//!       The filter never touches a DOM library directly.
//!     - filter: candidate list selection, the in-place rewrite pass, and the
//!       top-level orchestration that ties them together.
//!     - task: the TaskItem records handed back to the caller.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # FilterError for decoder/serializer faults
//!     ├── task.rs             # TaskState, TaskItem records
//!     ├── pattern.rs          # marker constants, compiled item pattern
//!     ├── dom
//!     │   ├── mod.rs          # TreeAccess trait
//!     │   └── rcdom.rs        # html5ever/rcdom backend
//!     ├── filter
//!     │   ├── mod.rs          # rewrite_task_lists, filter_fragment
//!     │   ├── select.rs       # candidate list selection
//!     │   └── rewrite.rs      # per-list rewrite and classing
//!     └── lib.rs
//!
//! Behavior notes
//!
//!     A list qualifies when its first item opens with a marker, in bare or
//!     paragraph-wrapped form; items are then checked one by one, so task and
//!     non-task items can share a list. Non-matching items are left byte for
//!     byte alone and never recorded. Running the filter over its own output
//!     is a no-op: checkbox markup does not look like a marker.
//!
//!     All content spliced into the tree goes through the same UTF-8 decoder
//!     as the caller's input, which keeps hand-built replacement markup and
//!     tree-native content on one consistent encoding.
//!
//!     This is a pure lib: one synchronous pass over a caller-owned tree, no
//!     I/O, no shared state between calls. The compiled pattern is the only
//!     process-wide value and is immutable after initialization.

pub mod dom;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod task;

pub use error::FilterError;
pub use filter::{filter_fragment, rewrite_task_lists, FilteredHtml};
pub use task::{TaskItem, TaskState};
