//! Task-list filter pipeline stage.
//!
//! Turns rendered HTML lists whose items carry literal `[ ]` / `[x]`
//! markers into checkbox markup, and collects a record per recognized
//! item. Runs after Markdown rendering and sanitization; both are
//! upstream collaborators this stage never performs itself.
//!
//! # Markup contract
//!
//! | Node | Change |
//! |------|--------|
//! | `ul` / `ol` (candidate) | gains class `task-list` |
//! | matched `li` | gains class `task-list-item` |
//! | marker token | replaced by `<input type="checkbox" class="task-list-item-checkbox" [checked="checked"] disabled="disabled" />` |
//!
//! Class merges keep pre-existing tokens and never duplicate. The
//! `checked` attribute is present for complete items and absent
//! otherwise; `disabled` is always present. Everything around the marker
//! token, list prefixes before it and inline content after it, survives
//! untouched.
//!
//! # Processing order
//!
//! Selection runs once over the document; each selected list is then
//! rewritten item by item. Mutation happens against snapshots in reverse
//! document order (items within a list, and lists within the document),
//! while the record collection is assembled in forward document order.
//! Rewriting a matched item replaces the whole inner content of its
//! target node with a re-parsed fragment, so a nested candidate list must
//! already be in final form by then; back-to-front list processing
//! guarantees that.

pub mod rewrite;
pub mod select;

pub use rewrite::{CHECKBOX_CLASS, ITEM_CLASS, LIST_CLASS};

use crate::dom::rcdom::{self, RcDomTree};
use crate::dom::TreeAccess;
use crate::error::FilterError;
use crate::task::TaskItem;

/// Rewrite every qualifying task list under `root`, in place.
///
/// Returns the recognized items; lists earlier in the document contribute
/// their records before later lists, and within a list records follow
/// item order. A document without qualifying lists comes back untouched
/// with an empty collection, which is success, not an error.
pub fn rewrite_task_lists<T: TreeAccess>(
    tree: &T,
    root: &T::Node,
) -> Result<Vec<TaskItem>, FilterError> {
    let lists = select::candidate_lists(tree, root);

    let mut collected = vec![Vec::new(); lists.len()];
    for (index, list) in lists.iter().enumerate().rev() {
        collected[index] = rewrite::rewrite_list(tree, list)?;
    }

    Ok(collected.into_iter().flatten().collect())
}

/// Result of filtering an HTML fragment string.
#[derive(Debug)]
pub struct FilteredHtml {
    /// The fragment with task lists rewritten.
    pub html: String,
    /// Recognized items in document order.
    pub items: Vec<TaskItem>,
}

/// Parse an HTML fragment, rewrite its task lists, serialize it back.
///
/// Convenience entry point for string-to-string pipelines. Callers that
/// already hold an rcdom tree use [`rewrite_task_lists`] directly and
/// keep the mutated tree.
pub fn filter_fragment(html: &str) -> Result<FilteredHtml, FilterError> {
    let root = rcdom::parse_html_fragment(html)?;
    let items = rewrite_task_lists(&RcDomTree, &root)?;
    let html = rcdom::serialize_children(&root)?;
    Ok(FilteredHtml { html, items })
}
