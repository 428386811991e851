// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::process_child_nodes;
use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::format_handlers::{FormatHandlerCategory, INHERITABLE_BLOCK_KEYS};
use crate::model::{
    add_block, add_block_group, create_format_container, create_paragraph,
    create_paragraph_decorator, BlockGroup, ContentModelBlock,
    ContentModelBlockGroup, ContentModelFormat,
};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// The part of a parent block format a nested block starts from.
pub(crate) fn inherited_block_format(
    format: &ContentModelFormat,
) -> ContentModelFormat {
    format
        .iter()
        .filter(|(key, _)| INHERITABLE_BLOCK_KEYS.contains(key))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}

/// A block element becomes an explicit paragraph. Headings keep their tag
/// and default text format as the paragraph decorator.
///
/// An implicit paragraph is opened after the block so inline content that
/// follows it does not join the block's last paragraph. Empty ones are
/// dropped when the model is normalized.
pub fn block_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    context.stack_format(|context| {
        let mut block_format = inherited_block_format(&context.block_format);
        context.parse_into(FormatHandlerCategory::Block, &node, &mut block_format);
        context.block_format = block_format;

        let mut segment_format = ContentModelFormat::new();
        context.parse_into(
            FormatHandlerCategory::SegmentOnBlock,
            &node,
            &mut segment_format,
        );

        let mut paragraph = create_paragraph(false, &context.block_format);
        match node.tag().filter(|tag| HEADING_TAGS.contains(tag)) {
            Some(tag) => {
                paragraph.decorator =
                    Some(create_paragraph_decorator(tag, segment_format));
            }
            None => context.segment_format.extend_from(&segment_format),
        }
        add_block(group, ContentModelBlock::Paragraph(paragraph));

        process_child_nodes(group, node, context);
    });

    add_block(
        group,
        ContentModelBlock::Paragraph(create_paragraph(
            true,
            &context.block_format,
        )),
    );
}

/// `blockquote` and `pre` keep their own group. Their margins and borders
/// belong to the container; paragraphs inside only inherit the
/// inheritable block keys.
pub fn format_container_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let Some(tag) = node.tag() else {
        return;
    };
    let container = context.stack_format(|context| {
        let mut format = inherited_block_format(&context.block_format);
        context.parse_into(FormatHandlerCategory::Block, &node, &mut format);
        context.parse_into(FormatHandlerCategory::Container, &node, &mut format);

        let mut segment_format = context.segment_format.clone();
        context.parse_into(
            FormatHandlerCategory::SegmentOnBlock,
            &node,
            &mut segment_format,
        );
        context.segment_format = segment_format;
        context.block_format = inherited_block_format(&format);

        let mut container = create_format_container(tag, &format);
        process_child_nodes(&mut container, node, context);
        container
    });
    add_block_group(group, ContentModelBlockGroup::FormatContainer(container));
}
