//! Candidate list selection.

use crate::dom::TreeAccess;
use crate::pattern;

const LIST_ELEMENTS: [&str; 2] = ["ul", "ol"];

/// Find list containers whose first item opens with a task marker.
///
/// Both bare text (`<li>[x] …`) and paragraph-wrapped (`<li><p>[x] …`)
/// first items qualify; upstream renderers differ on whether loose item
/// text gets a paragraph. Lists come back in document order, each at most
/// once. Selection only nominates a list; every item is still checked
/// individually during rewriting, so a qualifying list may hold a mix of
/// task and non-task items.
pub fn candidate_lists<T: TreeAccess>(tree: &T, root: &T::Node) -> Vec<T::Node> {
    tree.descendant_elements(root, &LIST_ELEMENTS)
        .into_iter()
        .filter(|list| first_item_opens_with_marker(tree, list))
        .collect()
}

fn first_item_opens_with_marker<T: TreeAccess>(tree: &T, list: &T::Node) -> bool {
    let item = match tree.first_child_element(list, "li") {
        Some(item) => item,
        None => return false,
    };
    if pattern::begins_with_marker(&tree.leading_text(&item)) {
        return true;
    }
    match tree.first_child_element(&item, "p") {
        Some(paragraph) => pattern::begins_with_marker(&tree.leading_text(&paragraph)),
        None => false,
    }
}
