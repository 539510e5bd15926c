//! In-place rewriting of one candidate list.

use crate::dom::TreeAccess;
use crate::error::FilterError;
use crate::pattern::{self, MarkerMatch};
use crate::task::{TaskItem, TaskState};

/// Class token applied to a rewritten list container.
pub const LIST_CLASS: &str = "task-list";

/// Class token applied to each rewritten list item.
pub const ITEM_CLASS: &str = "task-list-item";

/// Class carried by every generated checkbox control.
pub const CHECKBOX_CLASS: &str = "task-list-item-checkbox";

/// Rewrite one qualifying list, returning its task items in document order.
///
/// Children are walked over a snapshot in reverse document order, so
/// replacing one item's content never invalidates the handle of a
/// not-yet-visited earlier sibling; records are inserted at the front to
/// restore forward order. An item either matches and is classified and
/// rewritten in one step, or is left entirely alone.
pub fn rewrite_list<T: TreeAccess>(tree: &T, list: &T::Node) -> Result<Vec<TaskItem>, FilterError> {
    let mut items = Vec::new();
    add_class(tree, list, LIST_CLASS);

    for child in tree.children(list).iter().rev() {
        if tree.element_name(child).as_deref() != Some("li") {
            continue;
        }

        // Loose items carry their text in a paragraph, tight items directly.
        let target = match tree.first_child_element(child, "p") {
            Some(paragraph) => paragraph,
            None => child.clone(),
        };

        let content = tree.inner_content(&target)?;
        let marker = match pattern::match_task_item(&content) {
            Some(marker) => marker,
            None => continue,
        };

        tree.set_inner_content(&target, &replace_marker(&content, &marker))?;
        add_class(tree, child, ITEM_CLASS);
        items.insert(0, TaskItem::new(marker.state, content));
    }

    Ok(items)
}

/// Splice checkbox markup over exactly the matched token range; the list
/// prefix before it and the content after it survive unchanged.
fn replace_marker(content: &str, marker: &MarkerMatch) -> String {
    format!(
        "{}{}{}",
        &content[..marker.start],
        checkbox_markup(marker.state),
        &content[marker.end..]
    )
}

/// The inert checkbox control substituted for a marker token.
///
/// `checked` is present only for complete items (presence, not value, is
/// what consumers key on) and `disabled` is always present; interactivity
/// belongs to the presentation layer.
fn checkbox_markup(state: TaskState) -> String {
    let checked = match state {
        TaskState::Complete => " checked=\"checked\"",
        TaskState::Incomplete => "",
    };
    format!(
        "<input type=\"checkbox\" class=\"{}\"{} disabled=\"disabled\" />",
        CHECKBOX_CLASS, checked
    )
}

/// Merge a class token into an element's class list, keeping existing
/// tokens and skipping duplicates.
fn add_class<T: TreeAccess>(tree: &T, node: &T::Node, class: &str) {
    let existing = tree.attribute(node, "class").unwrap_or_default();
    if existing.split_whitespace().any(|token| token == class) {
        return;
    }
    let merged = if existing.trim().is_empty() {
        class.to_string()
    } else {
        format!("{} {}", existing.trim_end(), class)
    };
    tree.set_attribute(node, "class", &merged);
}
