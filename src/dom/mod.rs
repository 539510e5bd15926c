//! Tree access abstraction.
//!
//! The filter needs only a narrow slice of a DOM: structural queries over
//! lists and their children, class attribute read/write, and inner content
//! read/replace. [`TreeAccess`] captures those capabilities so the
//! selection and rewrite logic stays independent of the parsing library.
//! One backend ships: [`rcdom::RcDomTree`], an adapter over
//! `markup5ever_rcdom` handles.

pub mod rcdom;

pub use rcdom::RcDomTree;

use crate::error::FilterError;

/// Capabilities the filter requires from a document tree.
///
/// Implementors hand out cheap node handles; mutation goes through the
/// tree, never through the handle itself.
pub trait TreeAccess {
    /// Handle to one node. Clones refer to the same underlying node.
    type Node: Clone;

    /// Lowercase element name, `None` for non-element nodes.
    fn element_name(&self, node: &Self::Node) -> Option<String>;

    /// Direct children in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Elements under `root` (inclusive) whose name is in `names`, in
    /// document order.
    fn descendant_elements(&self, root: &Self::Node, names: &[&str]) -> Vec<Self::Node>;

    /// Concatenated text of the node's leading text children, stopping at
    /// the first child element.
    fn leading_text(&self, node: &Self::Node) -> String;

    /// Attribute value, `None` when absent or not an element.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Set an attribute, replacing any existing value.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    /// The node's inner content, serialized to markup.
    fn inner_content(&self, node: &Self::Node) -> Result<String, FilterError>;

    /// Replace the node's children with `content`, re-parsed as a UTF-8
    /// content fragment.
    ///
    /// Hand-built markup must pass through the same decoder as the
    /// surrounding tree before it is attached; assigning it as raw text
    /// would let the two sides disagree on encoding.
    fn set_inner_content(&self, node: &Self::Node, content: &str) -> Result<(), FilterError>;

    /// First direct child element with the given name.
    fn first_child_element(&self, node: &Self::Node, name: &str) -> Option<Self::Node> {
        self.children(node)
            .into_iter()
            .find(|child| self.element_name(child).as_deref() == Some(name))
    }
}
