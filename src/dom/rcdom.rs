//! `rcdom` backend for the tree access interface.
//!
//! Fragments are parsed in body context through html5ever's UTF-8 decoder
//! and serialized back with the stock HTML serializer. The same decoder
//! path is used both for caller input and for the checkbox markup spliced
//! in during rewriting, so every piece of content in the tree went through
//! one consistent encoding.

use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_fragment, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute,
    LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::dom::TreeAccess;
use crate::error::FilterError;

/// Parse an HTML fragment from UTF-8 text.
///
/// Returns the synthetic root element the fragment parser wraps the
/// content in; the fragment's own nodes are its children.
pub fn parse_html_fragment(html: &str) -> Result<Handle, FilterError> {
    let parser = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), LocalName::from("body")),
        Vec::new(),
        false,
    );
    let dom = parser
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| FilterError::ParseError(format!("HTML fragment parsing failed: {}", e)))?;

    let root = dom
        .document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { .. }))
        .cloned();
    let root =
        root.ok_or_else(|| FilterError::ParseError("fragment has no root element".to_string()))?;

    // markup5ever_rcdom's `Node` destructor recursively empties the child list
    // of every descendant once the owning `RcDom` is dropped. Detach the
    // returned subtree from the document before this function returns, so that
    // dropping `dom` does not gut the nodes we hand back to the caller.
    root.parent.set(None);
    dom.document.children.borrow_mut().clear();
    Ok(root)
}

/// Serialize a node's children back to markup.
pub fn serialize_children(node: &Handle) -> Result<String, FilterError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| FilterError::SerializationError(format!("HTML serialization failed: {}", e)))?;

    String::from_utf8(output)
        .map_err(|e| FilterError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}

/// Stateless adapter implementing [`TreeAccess`] over rcdom handles.
pub struct RcDomTree;

impl TreeAccess for RcDomTree {
    type Node = Handle;

    fn element_name(&self, node: &Handle) -> Option<String> {
        match &node.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    fn children(&self, node: &Handle) -> Vec<Handle> {
        node.children.borrow().iter().cloned().collect()
    }

    fn descendant_elements(&self, root: &Handle, names: &[&str]) -> Vec<Handle> {
        let mut found = Vec::new();
        collect_elements(root, names, &mut found);
        found
    }

    fn leading_text(&self, node: &Handle) -> String {
        let mut text = String::new();
        for child in node.children.borrow().iter() {
            match &child.data {
                NodeData::Text { contents } => text.push_str(&contents.borrow()),
                NodeData::Element { .. } => break,
                _ => {}
            }
        }
        text
    }

    fn attribute(&self, node: &Handle, name: &str) -> Option<String> {
        match &node.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == name)
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    fn set_attribute(&self, node: &Handle, name: &str, value: &str) {
        if let NodeData::Element { attrs, .. } = &node.data {
            let mut attrs = attrs.borrow_mut();
            if let Some(existing) = attrs.iter_mut().find(|attr| &*attr.name.local == name) {
                existing.value = value.to_string().into();
            } else {
                attrs.push(Attribute {
                    name: QualName::new(None, ns!(), LocalName::from(name)),
                    value: value.to_string().into(),
                });
            }
        }
    }

    fn inner_content(&self, node: &Handle) -> Result<String, FilterError> {
        serialize_children(node)
    }

    fn set_inner_content(&self, node: &Handle, content: &str) -> Result<(), FilterError> {
        let fragment = parse_html_fragment(content)?;
        // Move the parsed nodes out of `fragment` rather than cloning them: the
        // `RcDom` destructor (see `parse_html_fragment`) recursively empties the
        // child lists of everything still reachable from `fragment`, so leaving
        // the spliced nodes parented there would gut their own descendants once
        // `fragment` is dropped at the end of this function.
        let new_children: Vec<Handle> = fragment.children.borrow_mut().drain(..).collect();

        let mut children = node.children.borrow_mut();
        children.clear();
        children.extend(new_children);
        Ok(())
    }
}

/// Pre-order walk collecting matching elements, `root` included.
fn collect_elements(root: &Handle, names: &[&str], found: &mut Vec<Handle>) {
    if let NodeData::Element { name, .. } = &root.data {
        if names.iter().any(|n| &*name.local == *n) {
            found.push(root.clone());
        }
    }
    for child in root.children.borrow().iter() {
        collect_elements(child, names, found);
    }
}
