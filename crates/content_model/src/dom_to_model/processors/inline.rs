// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::process_child_nodes;
use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::format_handlers::FormatHandlerCategory;
use crate::model::BlockGroup;

/// Generic inline element: its segment format (and link format for `a`)
/// applies to everything inside it.
pub fn inline_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    context.stack_format(|context| {
        let mut format = context.segment_format.clone();
        context.parse_into(FormatHandlerCategory::Segment, &node, &mut format);
        if node.is_tag("a") {
            context.parse_into(FormatHandlerCategory::Link, &node, &mut format);
        }
        context.segment_format = format;
        process_child_nodes(group, node, context);
    });
}

pub fn transparent_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    process_child_nodes(group, node, context);
}

pub fn skip_processor(
    _group: &mut dyn BlockGroup,
    _node: NodeRef<'_>,
    _context: &mut DomToModelContext,
) {
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::dom_to_model::processors::test_utils::process;

    #[test]
    fn nested_formats_accumulate_and_restore() {
        let doc = process("<b>a<i>b</i></b>c");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value["blocks"][0]["segments"],
            json!([
                { "segmentType": "Text", "text": "a", "format": { "fontWeight": "bold" } },
                {
                    "segmentType": "Text",
                    "text": "b",
                    "format": { "fontWeight": "bold", "italic": true }
                },
                { "segmentType": "Text", "text": "c", "format": {} },
            ])
        );
    }

    #[test]
    fn links_carry_href() {
        let doc = process("<a href=\"https://example.com\" target=\"_blank\">x</a>");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value["blocks"][0]["segments"][0]["format"],
            json!({ "href": "https://example.com", "target": "_blank" })
        );
    }

    #[test]
    fn skipped_elements_produce_nothing() {
        assert!(process("<style>p { color: red }</style><!-- x -->")
            .blocks
            .is_empty());
    }
}
