// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::node::{DomNode, NodeHandle};
use super::Fragment;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "source", "track", "wbr",
];

impl Fragment {
    /// Serialize the children of the document node.
    pub fn to_html(&self) -> String {
        self.node_to_html(self.document_handle())
    }

    /// Serialize the children of `handle` (its inner HTML).
    pub fn node_to_html(&self, handle: NodeHandle) -> String {
        let mut buf = String::new();
        for child in self.children(handle) {
            self.fmt_node(*child, &mut buf);
        }
        buf
    }

    fn fmt_node(&self, handle: NodeHandle, buf: &mut String) {
        match self.get_node(handle) {
            DomNode::Document(_) => buf.push_str(&self.node_to_html(handle)),
            DomNode::Text(t) => buf.push_str(&encode_text(&t.content)),
            DomNode::Comment(c) => {
                buf.push_str("<!--");
                buf.push_str(&c.content);
                buf.push_str("-->");
            }
            DomNode::Element(e) => {
                buf.push('<');
                buf.push_str(e.tag());
                for (name, value) in e.attrs() {
                    buf.push(' ');
                    buf.push_str(name);
                    buf.push_str("=\"");
                    buf.push_str(&encode_double_quoted_attribute(value));
                    buf.push('"');
                }
                buf.push('>');
                if VOID_ELEMENTS.contains(&e.tag()) {
                    return;
                }
                for child in e.children.iter() {
                    self.fmt_node(*child, buf);
                }
                buf.push_str("</");
                buf.push_str(e.tag());
                buf.push('>');
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serializes_elements_text_and_void_tags() {
        let mut fragment = Fragment::new();
        let root = fragment.document_handle();
        let p = fragment
            .create_element("p", vec![("title".into(), "a\"b".into())]);
        let t = fragment.create_text("1 < 2");
        let br = fragment.create_element("br", vec![]);
        fragment.append_child(root, p);
        fragment.append_child(p, t);
        fragment.append_child(p, br);

        assert_eq!(
            fragment.to_html(),
            r#"<p title="a&quot;b">1 &lt; 2<br></p>"#
        );
    }
}
