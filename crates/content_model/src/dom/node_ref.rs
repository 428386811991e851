// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::fmt;

use super::node::{DomNode, ElementNode, NodeHandle};
use super::{Fragment, Style};

/// A read-only view of one node together with the fragment it lives in.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    fragment: &'a Fragment,
    handle: NodeHandle,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(fragment: &'a Fragment, handle: NodeHandle) -> Self {
        Self { fragment, handle }
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn fragment(&self) -> &'a Fragment {
        self.fragment
    }

    pub fn node(&self) -> &'a DomNode {
        self.fragment.get_node(self.handle)
    }

    pub fn as_element(&self) -> Option<&'a ElementNode> {
        self.node().as_element()
    }

    /// Lower-cased tag name, `None` for non-elements.
    pub fn tag(&self) -> Option<&'a str> {
        self.as_element().map(|e| e.tag())
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.as_element().and_then(|e| e.get_attr(name))
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.as_element().is_some_and(|e| e.has_class(class_name))
    }

    pub fn style(&self) -> Style {
        self.as_element().map(|e| e.style()).unwrap_or_default()
    }

    pub fn text(&self) -> Option<&'a str> {
        match self.node() {
            DomNode::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    pub fn is_whitespace_text(&self) -> bool {
        self.text()
            .is_some_and(|t| t.chars().all(|c| c.is_ascii_whitespace()))
    }

    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let fragment = self.fragment;
        self.node()
            .children()
            .iter()
            .map(move |&h| NodeRef::new(fragment, h))
    }

    /// All nodes below this one in document order, excluding itself.
    pub fn descendants(&self) -> Descendants<'a> {
        let stack = self.node().children().iter().rev().copied().collect();
        Descendants {
            fragment: self.fragment,
            stack,
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        self.descendants().filter_map(|n| n.text()).collect()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.fragment, other.fragment)
            && self.handle == other.handle
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle)
            .field("node", self.node())
            .finish()
    }
}

pub struct Descendants<'a> {
    fragment: &'a Fragment,
    stack: Vec<NodeHandle>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.stack.pop()?;
        let children = self.fragment.children(handle);
        self.stack.extend(children.iter().rev().copied());
        Some(NodeRef::new(self.fragment, handle))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Fragment {
        // <div class="a">x<b>y</b></div>z
        let mut fragment = Fragment::new();
        let root = fragment.document_handle();
        let div = fragment
            .create_element("div", vec![("class".into(), "a".into())]);
        let x = fragment.create_text("x");
        let b = fragment.create_element("b", vec![]);
        let y = fragment.create_text("y");
        let z = fragment.create_text("z");
        fragment.append_child(root, div);
        fragment.append_child(div, x);
        fragment.append_child(div, b);
        fragment.append_child(b, y);
        fragment.append_child(root, z);
        fragment
    }

    #[test]
    fn descendants_are_in_document_order() {
        let fragment = sample();
        let names: Vec<String> = fragment
            .root()
            .descendants()
            .map(|n| {
                n.tag()
                    .map(str::to_owned)
                    .or(n.text().map(|t| format!("#{t}")))
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(names, vec!["div", "#x", "b", "#y", "#z"]);
    }

    #[test]
    fn text_content_concatenates() {
        let fragment = sample();
        assert_eq!(fragment.root().text_content(), "xyz");
    }

    #[test]
    fn node_refs_compare_by_fragment_and_handle() {
        let fragment = sample();
        let other = sample();
        let h = fragment.children(fragment.document_handle())[0];
        assert_eq!(fragment.node(h), fragment.node(h));
        assert_ne!(fragment.node(h), other.node(h));
    }
}
