// Copyright 2024 New Vector Ltd.
// Copyright 2022 The Matrix.org Foundation C.I.C.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;

use html5ever::interface::NextParserState;
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{
    parse_fragment, Attribute, LocalName, Namespace, QualName,
};

use super::node::{DomNode, NodeHandle, TextNode};
use super::Fragment;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

pub(crate) fn qual_name(local_name: &str) -> QualName {
    QualName::new(
        None,
        Namespace::from(HTML_NAMESPACE),
        LocalName::from(local_name),
    )
}

struct CreatorState {
    fragment: Fragment,
    // html5ever wants qualified names back from us; the fragment itself only
    // keeps lower-cased local names.
    names: HashMap<NodeHandle, QualName>,
    parse_errors: Vec<String>,
}

/// Builds a [`Fragment`] from HTML text.
///
/// Parse errors never fail the parse: html5ever always recovers a tree, and
/// pasted HTML from office suites is rarely valid, so errors are only
/// logged.
pub(crate) struct FragmentCreator {
    state: RefCell<CreatorState>,
}

impl FragmentCreator {
    pub fn parse(html: &str) -> Fragment {
        parse_fragment(
            FragmentCreator::default(),
            Default::default(),
            qual_name("body"),
            vec![],
        )
        .from_utf8()
        .one(html.as_bytes())
    }
}

impl Default for FragmentCreator {
    fn default() -> Self {
        Self {
            state: RefCell::new(CreatorState {
                fragment: Fragment::new(),
                names: HashMap::new(),
                parse_errors: Vec::new(),
            }),
        }
    }
}

impl FragmentCreator {
    fn insert_before(&self, sibling: &NodeHandle, new_node: NodeHandle) {
        let fragment = &mut self.state.borrow_mut().fragment;
        fragment.detach(new_node);
        let Some(parent) = fragment.parent_of(*sibling) else {
            return;
        };
        if let Some(children) = fragment.get_mut_node(parent).children_mut() {
            let index = children
                .iter()
                .position(|c| c == sibling)
                .unwrap_or(children.len());
            children.insert(index, new_node);
        }
    }

    fn new_text(&self, text: &str) -> NodeHandle {
        self.state.borrow_mut().fragment.create_text(text)
    }
}

impl TreeSink for FragmentCreator {
    type Handle = NodeHandle;
    type Output = Fragment;
    type ElemName<'a> = Ref<'a, QualName>;

    fn finish(self) -> Self::Output {
        let CreatorState {
            mut fragment,
            parse_errors,
            ..
        } = self.state.into_inner();
        if !parse_errors.is_empty() {
            log::debug!(
                "Recovered from {} HTML parse error(s): {:?}",
                parse_errors.len(),
                parse_errors
            );
        }

        // Fragment parsing wraps everything in an `html` element; the
        // fragment's document node takes its place.
        let document = fragment.document_handle();
        if let [html] = fragment.children(document) {
            let html = *html;
            if fragment.element(html).is_some_and(|e| e.tag() == "html") {
                let children = fragment.children(html).to_vec();
                fragment.replace_children(document, children);
            }
        }
        fragment
    }

    fn parse_error(&self, msg: std::borrow::Cow<'static, str>) {
        self.state.borrow_mut().parse_errors.push(String::from(msg));
    }

    fn get_document(&self) -> Self::Handle {
        self.state.borrow().fragment.document_handle()
    }

    fn elem_name<'a>(&'a self, target: &'a Self::Handle) -> Self::ElemName<'a> {
        Ref::map(self.state.borrow(), |state| match state.names.get(target) {
            Some(name) => name,
            None => unreachable!("elem_name called on a non-element"),
        })
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Attribute>,
        _flags: ElementFlags,
    ) -> Self::Handle {
        let state = &mut *self.state.borrow_mut();
        let handle = state.fragment.create_element(
            name.local.as_ref(),
            attrs
                .iter()
                .map(|attr| {
                    (
                        attr.name.local.as_ref().to_owned(),
                        attr.value.as_ref().to_owned(),
                    )
                })
                .collect(),
        );
        state.names.insert(handle, name);
        handle
    }

    fn create_comment(&self, text: StrTendril) -> Self::Handle {
        self.state.borrow_mut().fragment.create_comment(text.as_ref())
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> Self::Handle {
        self.state.borrow_mut().fragment.create_comment(data.as_ref())
    }

    fn append(&self, parent: &Self::Handle, child: NodeOrText<Self::Handle>) {
        let fragment = &mut self.state.borrow_mut().fragment;
        match child {
            NodeOrText::AppendNode(child) => {
                fragment.detach(child);
                fragment.append_child(*parent, child);
            }
            NodeOrText::AppendText(tendril) => {
                let last_text = fragment
                    .children(*parent)
                    .last()
                    .copied()
                    .filter(|h| {
                        matches!(fragment.get_node(*h), DomNode::Text(_))
                    });
                match last_text {
                    Some(handle) => {
                        if let DomNode::Text(TextNode { content }) =
                            fragment.get_mut_node(handle)
                        {
                            content.push_str(tendril.as_ref());
                        }
                    }
                    None => {
                        let text = fragment.create_text(tendril.as_ref());
                        fragment.append_child(*parent, text);
                    }
                }
            }
        }
    }

    fn append_based_on_parent_node(
        &self,
        element: &Self::Handle,
        prev_element: &Self::Handle,
        child: NodeOrText<Self::Handle>,
    ) {
        let has_parent =
            self.state.borrow().fragment.parent_of(*element).is_some();
        if has_parent {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        // Doctypes carry nothing the content model cares about
    }

    fn mark_script_already_started(&self, _node: &Self::Handle) {}

    fn pop(&self, _node: &Self::Handle) {}

    fn get_template_contents(&self, target: &Self::Handle) -> Self::Handle {
        *target
    }

    fn same_node(&self, x: &Self::Handle, y: &Self::Handle) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(
        &self,
        sibling: &Self::Handle,
        new_node: NodeOrText<Self::Handle>,
    ) {
        let new_node = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(tendril) => self.new_text(tendril.as_ref()),
        };
        self.insert_before(sibling, new_node);
    }

    fn add_attrs_if_missing(
        &self,
        target: &Self::Handle,
        attrs: Vec<Attribute>,
    ) {
        let fragment = &mut self.state.borrow_mut().fragment;
        if let Some(element) = fragment.element_mut(*target) {
            for attr in attrs {
                let name = attr.name.local.as_ref();
                if element.get_attr(name).is_none() {
                    element.set_attr(name, attr.value.as_ref());
                }
            }
        }
    }

    fn associate_with_form(
        &self,
        _target: &Self::Handle,
        _form: &Self::Handle,
        _nodes: (&Self::Handle, Option<&Self::Handle>),
    ) {
    }

    fn remove_from_parent(&self, target: &Self::Handle) {
        self.state.borrow_mut().fragment.detach(*target);
    }

    fn reparent_children(
        &self,
        node: &Self::Handle,
        new_parent: &Self::Handle,
    ) {
        let fragment = &mut self.state.borrow_mut().fragment;
        let children = fragment.children(*node).to_vec();
        fragment.replace_children(*node, Vec::new());
        for child in children {
            fragment.append_child(*new_parent, child);
        }
    }

    fn is_mathml_annotation_xml_integration_point(
        &self,
        _handle: &Self::Handle,
    ) -> bool {
        false
    }

    fn set_current_line(&self, _line_number: u64) {}

    fn complete_script(&self, _node: &Self::Handle) -> NextParserState {
        NextParserState::Continue
    }

    fn allow_declarative_shadow_roots(
        &self,
        _intended_parent: &Self::Handle,
    ) -> bool {
        false
    }

    fn attach_declarative_shadow(
        &self,
        _location: &Self::Handle,
        _template: &Self::Handle,
        _attrs: Vec<Attribute>,
    ) -> Result<(), String> {
        Err(String::from("Declarative shadow roots are not supported"))
    }
}
