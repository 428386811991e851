// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::node::{
    CommentNode, DocumentNode, DomNode, ElementNode, NodeHandle, TextNode,
};
use super::NodeRef;

/// An owned HTML tree.
///
/// All nodes live in one list owned by the fragment and parents refer to
/// their children by [`NodeHandle`]. Detaching a node only removes it from
/// its parent's children, so nodes dropped by a rewrite stay in the arena as
/// garbage and are simply never reached from the document node.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    nodes: Vec<DomNode>,
    document_handle: NodeHandle,
}

impl Default for Fragment {
    fn default() -> Self {
        Self::new()
    }
}

impl Fragment {
    pub fn new() -> Self {
        Self {
            nodes: vec![DomNode::Document(DocumentNode::default())],
            document_handle: NodeHandle(0),
        }
    }

    /// Parse an HTML snippet the way a browser parses `innerHTML`.
    #[cfg(feature = "sys")]
    pub fn parse_html(html: &str) -> Self {
        super::parser::FragmentCreator::parse(html)
    }

    pub fn document_handle(&self) -> NodeHandle {
        self.document_handle
    }

    pub fn root(&self) -> NodeRef<'_> {
        self.node(self.document_handle)
    }

    pub fn node(&self, handle: NodeHandle) -> NodeRef<'_> {
        NodeRef::new(self, handle)
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        handle.0 < self.nodes.len()
    }

    pub fn get_node(&self, handle: NodeHandle) -> &DomNode {
        &self.nodes[handle.0]
    }

    pub fn get_mut_node(&mut self, handle: NodeHandle) -> &mut DomNode {
        &mut self.nodes[handle.0]
    }

    pub fn element(&self, handle: NodeHandle) -> Option<&ElementNode> {
        self.get_node(handle).as_element()
    }

    pub fn element_mut(&mut self, handle: NodeHandle) -> Option<&mut ElementNode> {
        self.get_mut_node(handle).as_element_mut()
    }

    pub fn children(&self, handle: NodeHandle) -> &[NodeHandle] {
        self.get_node(handle).children()
    }

    pub(crate) fn add_node(&mut self, node: DomNode) -> NodeHandle {
        self.nodes.push(node);
        NodeHandle(self.nodes.len() - 1)
    }

    pub fn create_element(
        &mut self,
        tag: &str,
        attrs: Vec<(String, String)>,
    ) -> NodeHandle {
        self.add_node(DomNode::Element(ElementNode::new(tag, attrs)))
    }

    pub fn create_text(&mut self, content: &str) -> NodeHandle {
        self.add_node(DomNode::Text(TextNode {
            content: content.to_owned(),
        }))
    }

    pub fn create_comment(&mut self, content: &str) -> NodeHandle {
        self.add_node(DomNode::Comment(CommentNode {
            content: content.to_owned(),
        }))
    }

    pub fn append_child(&mut self, parent: NodeHandle, child: NodeHandle) {
        match self.get_mut_node(parent).children_mut() {
            Some(children) => children.push(child),
            None => panic!("Appending a child to a leaf node {parent:?}"),
        }
    }

    /// Replace the children of `parent`. Nodes that are no longer referenced
    /// become garbage.
    pub fn replace_children(
        &mut self,
        parent: NodeHandle,
        children: Vec<NodeHandle>,
    ) {
        match self.get_mut_node(parent).children_mut() {
            Some(old) => *old = children,
            None => panic!("Replacing children of a leaf node {parent:?}"),
        }
    }

    /// Find the parent of `child` by scanning the arena. Only used while
    /// parsing, where html5ever occasionally needs to move nodes around.
    pub(crate) fn parent_of(&self, child: NodeHandle) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .position(|n| n.children().contains(&child))
            .map(NodeHandle)
    }

    /// Remove `child` from every node listing it, including containers that
    /// were themselves replaced earlier and are no longer reachable.
    pub(crate) fn detach(&mut self, child: NodeHandle) {
        for node in self.nodes.iter_mut() {
            if let Some(children) = node.children_mut() {
                children.retain(|c| *c != child);
            }
        }
    }

    /// Total number of slots in the arena, including detached nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.document_handle).is_empty()
    }
}
