// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use regex::Regex;
use serde::Serialize;

use super::Style;

/// Index of a node inside a [`super::Fragment`] arena.
///
/// Handles are only meaningful for the fragment that created them. They are
/// never invalidated: a node detached from the tree keeps its slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct NodeHandle(pub(crate) usize);

impl NodeHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DomNode {
    Document(DocumentNode),
    Element(ElementNode),
    Text(TextNode),
    Comment(CommentNode),
}

impl DomNode {
    pub fn children(&self) -> &[NodeHandle] {
        match self {
            DomNode::Document(n) => &n.children,
            DomNode::Element(n) => &n.children,
            DomNode::Text(_) | DomNode::Comment(_) => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<NodeHandle>> {
        match self {
            DomNode::Document(n) => Some(&mut n.children),
            DomNode::Element(n) => Some(&mut n.children),
            DomNode::Text(_) | DomNode::Comment(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            DomNode::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementNode> {
        match self {
            DomNode::Element(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentNode {
    pub(crate) children: Vec<NodeHandle>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentNode {
    pub content: String,
}

/// An element: lower-cased tag name, attributes in source order and child
/// handles.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    pub(crate) tag: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) children: Vec<NodeHandle>,
}

impl ElementNode {
    pub fn new(tag: &str, attrs: Vec<(String, String)>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _v)| n == name)
            .map(|(_n, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.attrs.push((name.to_owned(), value.to_owned())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(index).1)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class")
            .unwrap_or("")
            .split_ascii_whitespace()
    }

    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_names().any(|c| c == class_name)
    }

    /// The `style` attribute parsed into declarations. Elements without a
    /// style attribute yield an empty [`Style`].
    pub fn style(&self) -> Style {
        self.get_attr("style").map(Style::parse).unwrap_or_default()
    }

    /// Write `style` back to the `style` attribute, removing the attribute
    /// when no declaration is left.
    pub fn set_style(&mut self, style: &Style) {
        if style.is_empty() {
            self.remove_attr("style");
        } else {
            self.set_attr("style", &style.to_css());
        }
    }

    pub fn contains_style(&self, name: &str, value: &str) -> bool {
        self.get_attr("style")
            .map(|v| {
                Regex::new(&format!(
                    r"(?i){}:\s*{}\s*(;|$)",
                    regex::escape(name),
                    regex::escape(value)
                ))
                .map(|re| re.is_match(v))
                .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    /// `data-*` attributes with the prefix removed.
    pub fn dataset(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().filter_map(|(n, v)| {
            n.strip_prefix("data-").map(|key| (key, v.as_str()))
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn div(attrs: &[(&str, &str)]) -> ElementNode {
        ElementNode::new(
            "DIV",
            attrs
                .iter()
                .map(|&(n, v)| (n.to_owned(), v.to_owned()))
                .collect(),
        )
    }

    #[test]
    fn tag_names_are_lower_cased() {
        assert_eq!(div(&[]).tag(), "div");
    }

    #[test]
    fn test_contains_style() {
        let node = div(&[("style", "font-weight:bold;")]);
        assert!(node.contains_style("font-weight", "bold"));
        assert!(!node.contains_style("font-weight", "normal"));
    }

    #[test]
    fn class_names_split_on_whitespace() {
        let node = div(&[("class", "ListContainerWrapper  BCX0\tSCXW1")]);
        assert!(node.has_class("BCX0"));
        assert!(node.has_class("SCXW1"));
        assert!(!node.has_class("ListContainer"));
    }

    #[test]
    fn set_style_removes_empty_attribute() {
        let mut node = div(&[("style", "color: red")]);
        node.set_style(&Style::default());
        assert_eq!(node.get_attr("style"), None);
    }

    #[test]
    fn dataset_strips_prefix() {
        let node = div(&[("data-a", "1"), ("title", "t"), ("data-b-c", "2")]);
        let dataset: Vec<_> = node.dataset().collect();
        assert_eq!(dataset, vec![("a", "1"), ("b-c", "2")]);
    }
}
