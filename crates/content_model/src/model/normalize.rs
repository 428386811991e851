// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::{
    BlockGroup, ContentModelBlock, ContentModelBlockGroup, ContentModelFormat,
    ContentModelParagraph, ContentModelSegment,
};

/// Whether a block with `format` keeps its white space as written.
pub(crate) fn preserves_white_space(format: &ContentModelFormat) -> bool {
    matches!(
        format.get_str("whiteSpace"),
        Some("pre" | "pre-wrap" | "pre-line" | "break-spaces")
    )
}

/// Tidy every paragraph below `group`: white space at the end of a line is
/// trimmed, then paragraphs that carry nothing are dropped. Those are
/// paragraphs without segments, and implicit paragraphs holding only
/// whitespace text. Runs through every nested group and table cell.
pub fn normalize_content_model(group: &mut dyn BlockGroup) {
    let blocks = group.blocks_mut();
    for block in blocks.iter_mut() {
        match block {
            ContentModelBlock::BlockGroup(ContentModelBlockGroup::ListItem(
                item,
            )) => normalize_content_model(item),
            ContentModelBlock::BlockGroup(
                ContentModelBlockGroup::FormatContainer(container),
            ) => normalize_content_model(container),
            ContentModelBlock::Table(table) => {
                for cell in
                    table.rows.iter_mut().flat_map(|r| r.cells.iter_mut())
                {
                    normalize_content_model(cell);
                }
            }
            ContentModelBlock::Paragraph(paragraph) => {
                trim_line_ends(paragraph)
            }
            ContentModelBlock::Entity(_) => {}
        }
    }
    blocks.retain(|block| match block {
        ContentModelBlock::Paragraph(p) => !is_empty_paragraph(p),
        _ => true,
    });
}

/// Text before a line break or at the end of the paragraph loses its
/// trailing white space. Text left empty is removed.
fn trim_line_ends(paragraph: &mut ContentModelParagraph) {
    if preserves_white_space(&paragraph.format) {
        return;
    }

    let mut at_line_end = true;
    for segment in paragraph.segments.iter_mut().rev() {
        match segment {
            ContentModelSegment::Br { .. } => at_line_end = true,
            ContentModelSegment::Text { text, .. } if at_line_end => {
                let len = text
                    .trim_end_matches(|c: char| c.is_ascii_whitespace())
                    .len();
                text.truncate(len);
                at_line_end = text.is_empty();
            }
            ContentModelSegment::SelectionMarker(_) => {}
            _ => at_line_end = false,
        }
    }
    paragraph.segments.retain(|segment| {
        !matches!(segment, ContentModelSegment::Text { text, .. } if text.is_empty())
    });
}

fn is_empty_paragraph(paragraph: &ContentModelParagraph) -> bool {
    paragraph.segments.is_empty()
        || (paragraph.is_implicit
            && paragraph.segments.iter().all(|s| match s {
                ContentModelSegment::Text { text, .. } => {
                    text.chars().all(|c| c.is_ascii_whitespace())
                }
                _ => false,
            }))
}
