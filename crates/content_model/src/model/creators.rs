// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Constructors for model nodes and the two helpers every processor uses
//! to grow a block group.

use std::collections::BTreeMap;

use super::{
    BlockGroup, ContentModelBlock, ContentModelBlockGroup,
    ContentModelDocument, ContentModelEntity, ContentModelFormat,
    ContentModelFormatContainer, ContentModelImage, ContentModelListItem,
    ContentModelListLevel, ContentModelParagraph,
    ContentModelParagraphDecorator, ContentModelSegment,
    ContentModelSelectionMarker, ContentModelTable, ContentModelTableCell,
};
use crate::dom::NodeHandle;

pub fn create_content_model_document() -> ContentModelDocument {
    ContentModelDocument::default()
}

pub fn create_paragraph(
    is_implicit: bool,
    format: &ContentModelFormat,
) -> ContentModelParagraph {
    ContentModelParagraph {
        segments: Vec::new(),
        is_implicit,
        format: format.clone(),
        decorator: None,
    }
}

pub fn create_paragraph_decorator(
    tag_name: &str,
    format: ContentModelFormat,
) -> ContentModelParagraphDecorator {
    ContentModelParagraphDecorator {
        tag_name: tag_name.to_owned(),
        format,
    }
}

pub fn create_text(text: &str, format: &ContentModelFormat) -> ContentModelSegment {
    ContentModelSegment::Text {
        text: text.to_owned(),
        format: format.clone(),
    }
}

pub fn create_br(format: &ContentModelFormat) -> ContentModelSegment {
    ContentModelSegment::Br {
        format: format.clone(),
    }
}

pub fn create_selection_marker(
    format: &ContentModelFormat,
) -> ContentModelSelectionMarker {
    ContentModelSelectionMarker {
        is_selected: true,
        format: format.clone(),
    }
}

pub fn create_image(src: &str, format: &ContentModelFormat) -> ContentModelImage {
    ContentModelImage {
        src: src.to_owned(),
        alt: None,
        title: None,
        dataset: BTreeMap::new(),
        format: format.clone(),
    }
}

pub fn create_list_item(
    levels: &[ContentModelListLevel],
    holder_format: &ContentModelFormat,
) -> ContentModelListItem {
    ContentModelListItem {
        blocks: Vec::new(),
        levels: levels.to_vec(),
        format_holder: create_selection_marker(holder_format),
        format: ContentModelFormat::new(),
    }
}

pub fn create_format_container(
    tag_name: &str,
    format: &ContentModelFormat,
) -> ContentModelFormatContainer {
    ContentModelFormatContainer {
        tag_name: tag_name.to_owned(),
        blocks: Vec::new(),
        format: format.clone(),
    }
}

pub fn create_table() -> ContentModelTable {
    ContentModelTable::default()
}

pub fn create_table_cell(
    span_left: bool,
    span_above: bool,
    is_header: bool,
) -> ContentModelTableCell {
    ContentModelTableCell {
        span_left,
        span_above,
        is_header,
        ..Default::default()
    }
}

pub fn create_entity(
    wrapper: NodeHandle,
    is_readonly: bool,
    format: &ContentModelFormat,
    entity_type: Option<String>,
    id: Option<String>,
) -> ContentModelEntity {
    ContentModelEntity {
        id,
        entity_type,
        is_readonly,
        wrapper,
        format: format.clone(),
    }
}

pub fn add_block(group: &mut dyn BlockGroup, block: ContentModelBlock) {
    group.blocks_mut().push(block);
}

pub fn add_block_group(
    group: &mut dyn BlockGroup,
    block_group: ContentModelBlockGroup,
) {
    add_block(group, ContentModelBlock::BlockGroup(block_group));
}

/// Append `segment` to the last paragraph of `group`, opening an implicit
/// paragraph with `block_format` when the last block is not a paragraph.
pub fn add_segment(
    group: &mut dyn BlockGroup,
    segment: ContentModelSegment,
    block_format: &ContentModelFormat,
) {
    let blocks = group.blocks_mut();
    if !matches!(blocks.last(), Some(ContentModelBlock::Paragraph(_))) {
        blocks.push(ContentModelBlock::Paragraph(create_paragraph(
            true,
            block_format,
        )));
    }
    if let Some(ContentModelBlock::Paragraph(paragraph)) = blocks.last_mut() {
        paragraph.segments.push(segment);
    }
}
