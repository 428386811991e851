// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::block::{block_processor, inherited_block_format};
use super::{category_of, process_child_nodes, process_node, ProcessorCategory};
use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::format_handlers::FormatHandlerCategory;
use crate::model::{
    add_block_group, create_list_item, BlockGroup, ContentModelBlock,
    ContentModelBlockGroup, ContentModelFormat, ContentModelListLevel,
    ListType,
};

/// `ul`/`ol`: open a list level for everything inside. Nesting depth comes
/// only from how list elements are nested in the DOM.
pub fn list_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let list_type = if node.is_tag("ol") {
        ListType::Ordered
    } else {
        ListType::Unordered
    };

    let mut level_format = ContentModelFormat::new();
    context.parse_into(FormatHandlerCategory::ListLevel, &node, &mut level_format);
    let mut level = ContentModelListLevel::new(list_type);
    level.margin_left = level_format.get_str("marginLeft").map(str::to_owned);
    level.padding_left = level_format.get_str("paddingLeft").map(str::to_owned);
    level.list_style_type =
        level_format.get_str("listStyleType").map(str::to_owned);
    if list_type == ListType::Ordered {
        level.start_number_override =
            node.attr("start").and_then(|s| s.trim().parse().ok());
    }

    context.stack_format(|context| {
        let mut segment_format = context.segment_format.clone();
        context.parse_into(
            FormatHandlerCategory::SegmentOnBlock,
            &node,
            &mut segment_format,
        );
        context.segment_format = segment_format;

        context.list_format.levels.push(level);
        process_child_nodes(group, node, context);
        context.list_format.levels.pop();
    });
}

/// `li`: a list item carrying a copy of the open list levels.
///
/// Lists nested in the item are processed against the parent group so
/// nested items end up as flat siblings with deeper levels. Outside of any
/// list an `li` is just a block.
pub fn list_item_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    if context.list_format.levels.is_empty() {
        block_processor(group, node, context);
        return;
    }

    context.stack_format(|context| {
        let mut segment_format = context.segment_format.clone();
        context.parse_into(
            FormatHandlerCategory::SegmentOnBlock,
            &node,
            &mut segment_format,
        );
        context.segment_format = segment_format;

        let mut levels = context.list_format.levels.clone();
        if let (Some(style_type), Some(level)) =
            (node.style().get("list-style-type"), levels.last_mut())
        {
            level.list_style_type = Some(style_type.to_owned());
        }

        let mut item = create_list_item(&levels, &context.segment_format);
        context.parse_into(FormatHandlerCategory::ListItem, &node, &mut item.format);
        context.block_format = inherited_block_format(&item.format);

        add_block_group(group, ContentModelBlockGroup::ListItem(item));
        let index = group.blocks().len() - 1;

        for child in node.children() {
            if category_of(&child) == ProcessorCategory::List {
                process_node(group, child, context);
            } else if let Some(ContentModelBlock::BlockGroup(
                ContentModelBlockGroup::ListItem(item),
            )) = group.blocks_mut().get_mut(index)
            {
                process_node(item, child, context);
            }
        }
    });
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::dom_to_model::processors::test_utils::process;
    use crate::model::normalize_content_model;

    fn levels(html: &str) -> Vec<serde_json::Value> {
        let mut doc = process(html);
        normalize_content_model(&mut doc);
        doc.explicitly_assert_invariants();
        doc.blocks
            .iter()
            .map(|b| serde_json::to_value(&b.as_list_item().unwrap().levels).unwrap())
            .collect()
    }

    #[test]
    fn simple_list() {
        let mut doc = process("<ul><li>a</li></ul>");
        normalize_content_model(&mut doc);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "blockGroupType": "Document",
                "blocks": [{
                    "blockType": "BlockGroup",
                    "blockGroupType": "ListItem",
                    "blocks": [{
                        "blockType": "Paragraph",
                        "isImplicit": true,
                        "segments": [{ "segmentType": "Text", "text": "a", "format": {} }],
                        "format": {},
                    }],
                    "levels": [{ "listType": "UL" }],
                    "formatHolder": {
                        "segmentType": "SelectionMarker",
                        "isSelected": true,
                        "format": {},
                    },
                    "format": {},
                }]
            })
        );
    }

    #[test]
    fn nested_lists_are_flat_items_with_deeper_levels() {
        assert_eq!(
            levels("<ol start=\"3\"><li>a<ul><li>b</li></ul></li><li>c</li></ol>"),
            vec![
                json!([{ "listType": "OL", "startNumberOverride": 3 }]),
                json!([
                    { "listType": "OL", "startNumberOverride": 3 },
                    { "listType": "UL" }
                ]),
                json!([{ "listType": "OL", "startNumberOverride": 3 }]),
            ]
        );
    }

    #[test]
    fn list_directly_inside_list_goes_one_level_deeper() {
        assert_eq!(
            levels("<ul><li>a</li><ul><li>b</li></ul></ul>"),
            vec![
                json!([{ "listType": "UL" }]),
                json!([{ "listType": "UL" }, { "listType": "UL" }]),
            ]
        );
    }

    #[test]
    fn li_style_type_refines_innermost_level() {
        assert_eq!(
            levels("<ul><li style=\"list-style-type: circle\">a</li></ul>"),
            vec![json!([{ "listType": "UL", "listStyleType": "circle" }])]
        );
    }

    #[test]
    fn data_aria_level_is_ignored() {
        assert_eq!(
            levels("<ul><li data-aria-level=\"3\">a</li></ul>"),
            vec![json!([{ "listType": "UL" }])]
        );
    }

    #[test]
    fn li_outside_a_list_is_a_block() {
        let mut doc = process("<li>x</li>");
        normalize_content_model(&mut doc);
        let paragraph = doc.blocks[0].as_paragraph().unwrap();
        assert!(!paragraph.is_implicit);
    }

    #[test]
    fn item_format_holder_carries_li_segment_format() {
        let mut doc = process("<ul><li style=\"color: red\">a</li></ul>");
        normalize_content_model(&mut doc);
        let item = doc.blocks[0].as_list_item().unwrap();
        assert_eq!(item.format_holder.format.get_str("textColor"), Some("red"));
        assert!(item.format_holder.is_selected);
    }
}
