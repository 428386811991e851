// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! One processor per node category. A processor reads a node and grows
//! the block group it is given.

mod block;
mod br;
mod entity;
mod image;
mod inline;
mod list;
mod table;
mod text;

use strum_macros::{AsRefStr, EnumIter};

use super::DomToModelContext;
use crate::dom::{DomNode, NodeRef};
use crate::model::BlockGroup;

pub use block::{block_processor, format_container_processor};
pub use br::br_processor;
pub use entity::{entity_processor, is_entity_element, ENTITY_CLASS};
pub use image::image_processor;
pub use inline::{inline_processor, skip_processor, transparent_processor};
pub use list::{list_item_processor, list_processor};
pub use table::table_processor;
pub use text::text_processor;

pub type ElementProcessor =
    fn(&mut dyn BlockGroup, NodeRef<'_>, &mut DomToModelContext);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum ProcessorCategory {
    Text,
    Br,
    Image,
    List,
    ListItem,
    Table,
    Entity,
    Block,
    FormatContainer,
    Inline,
    Transparent,
    Skip,
}

pub fn default_processor(category: ProcessorCategory) -> ElementProcessor {
    match category {
        ProcessorCategory::Text => text_processor,
        ProcessorCategory::Br => br_processor,
        ProcessorCategory::Image => image_processor,
        ProcessorCategory::List => list_processor,
        ProcessorCategory::ListItem => list_item_processor,
        ProcessorCategory::Table => table_processor,
        ProcessorCategory::Entity => entity_processor,
        ProcessorCategory::Block => block_processor,
        ProcessorCategory::FormatContainer => format_container_processor,
        ProcessorCategory::Inline => inline_processor,
        ProcessorCategory::Transparent => transparent_processor,
        ProcessorCategory::Skip => skip_processor,
    }
}

fn tag_category(tag: &str) -> Option<ProcessorCategory> {
    use ProcessorCategory::*;
    Some(match tag {
        "br" => Br,
        "img" => Image,
        "ul" | "ol" => List,
        "li" => ListItem,
        "table" => Table,
        "blockquote" | "pre" => FormatContainer,
        "address" | "article" | "aside" | "center" | "dd" | "details"
        | "dialog" | "dir" | "div" | "dl" | "dt" | "fieldset"
        | "figcaption" | "figure" | "footer" | "form" | "h1" | "h2" | "h3"
        | "h4" | "h5" | "h6" | "header" | "hgroup" | "hr" | "main" | "nav"
        | "p" | "section" | "summary" => Block,
        "html" | "body" | "tbody" | "thead" | "tfoot" | "font" => Transparent,
        "head" | "meta" | "link" | "script" | "style" | "title"
        | "template" | "colgroup" | "col" | "noscript" => Skip,
        _ => return None,
    })
}

/// Decide which processor handles `node`.
pub fn category_of(node: &NodeRef<'_>) -> ProcessorCategory {
    match node.node() {
        DomNode::Text(_) => ProcessorCategory::Text,
        DomNode::Comment(_) => ProcessorCategory::Skip,
        DomNode::Document(_) => ProcessorCategory::Transparent,
        DomNode::Element(element) => {
            if is_entity_element(node) {
                return ProcessorCategory::Entity;
            }
            match tag_category(element.tag()) {
                Some(category) => category,
                None if element.contains_style("display", "block") => {
                    ProcessorCategory::Block
                }
                None => ProcessorCategory::Inline,
            }
        }
    }
}

/// Dispatch `node` to the processor of its category.
pub fn process_node(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let category = category_of(&node);
    log::trace!("Processing {node:?} as {}", category.as_ref());
    let processor = context.processor(category);
    processor(group, node, context);
}

pub fn process_child_nodes(
    group: &mut dyn BlockGroup,
    parent: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    for child in parent.children() {
        process_node(group, child, context);
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::dom::Fragment;
    use crate::dom_to_model::{create_dom_to_model_context, DomToModelContext};
    use crate::model::ContentModelDocument;

    use super::process_child_nodes;

    /// Parse `html` and run the processors over it with a fresh context.
    pub fn process(html: &str) -> ContentModelDocument {
        let mut context = create_dom_to_model_context(None, None);
        process_with(html, &mut context)
    }

    pub fn process_with(
        html: &str,
        context: &mut DomToModelContext,
    ) -> ContentModelDocument {
        let fragment = Fragment::parse_html(html);
        let mut doc = ContentModelDocument::default();
        process_child_nodes(&mut doc, fragment.root(), context);
        doc
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dom::Fragment;

    fn category(html: &str) -> ProcessorCategory {
        let fragment = Fragment::parse_html(html);
        let first = fragment.root().children().next().unwrap();
        category_of(&first)
    }

    #[test]
    fn categories_by_tag() {
        assert_eq!(category("<br>"), ProcessorCategory::Br);
        assert_eq!(category("<ol></ol>"), ProcessorCategory::List);
        assert_eq!(category("<h1>x</h1>"), ProcessorCategory::Block);
        assert_eq!(category("<pre>x</pre>"), ProcessorCategory::FormatContainer);
        assert_eq!(category("<b>x</b>"), ProcessorCategory::Inline);
        assert_eq!(category("<made-up>x</made-up>"), ProcessorCategory::Inline);
        assert_eq!(category("<!-- c -->"), ProcessorCategory::Skip);
        assert_eq!(category("text"), ProcessorCategory::Text);
    }

    #[test]
    fn display_block_span_is_a_block() {
        assert_eq!(
            category("<span style=\"display: block\">x</span>"),
            ProcessorCategory::Block
        );
    }

    #[test]
    fn entity_class_wins_over_tag() {
        assert_eq!(
            category("<div class=\"_Entity _EType_a\">x</div>"),
            ProcessorCategory::Entity
        );
    }
}
