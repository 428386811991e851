// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The content model: a strictly owned tree of block groups, blocks and
//! segments, serialized in the camelCase JSON shape editors exchange.

mod block;
mod creators;
mod format;
mod invariants;
mod list;
mod normalize;
mod segment;
mod table;

use serde::{Serialize, Serializer};

pub use block::{
    BlockGroup, BlockGroupType, ContentModelBlock, ContentModelBlockGroup,
    ContentModelDocument, ContentModelFormatContainer, ContentModelParagraph,
    ContentModelParagraphDecorator,
};
pub use creators::*;
pub use format::{ContentModelFormat, FormatValue};
pub use list::{ContentModelListItem, ContentModelListLevel, ListType};
pub use normalize::normalize_content_model;
pub(crate) use normalize::preserves_white_space;
pub use segment::{
    ContentModelEntity, ContentModelImage, ContentModelSegment,
    ContentModelSelectionMarker,
};
pub use table::{ContentModelTable, ContentModelTableCell, ContentModelTableRow};

// A format holder is written out as a full selection marker segment.
fn serialize_format_holder<S: Serializer>(
    marker: &ContentModelSelectionMarker,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    ContentModelSegment::SelectionMarker(marker.clone()).serialize(serializer)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn list_item_serializes_with_group_type_and_holder() {
        let mut item = create_list_item(
            &[ContentModelListLevel::new(ListType::Unordered)],
            &ContentModelFormat::new(),
        );
        let mut paragraph = create_paragraph(true, &ContentModelFormat::new());
        paragraph
            .segments
            .push(create_text("A", &ContentModelFormat::new()));
        item.blocks.push(ContentModelBlock::Paragraph(paragraph));
        let block =
            ContentModelBlock::BlockGroup(ContentModelBlockGroup::ListItem(item));

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "blockType": "BlockGroup",
                "blockGroupType": "ListItem",
                "blocks": [{
                    "blockType": "Paragraph",
                    "segments": [
                        { "segmentType": "Text", "text": "A", "format": {} }
                    ],
                    "format": {},
                    "isImplicit": true,
                }],
                "levels": [{ "listType": "UL" }],
                "formatHolder": {
                    "segmentType": "SelectionMarker",
                    "isSelected": true,
                    "format": {},
                },
                "format": {},
            })
        );
    }

    #[test]
    fn document_serializes_with_group_type() {
        assert_eq!(
            serde_json::to_value(create_content_model_document()).unwrap(),
            json!({ "blockGroupType": "Document", "blocks": [] })
        );
    }

    #[test]
    fn explicit_paragraph_has_no_implicit_flag() {
        let block = ContentModelBlock::Paragraph(create_paragraph(
            false,
            &ContentModelFormat::new(),
        ));
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({ "blockType": "Paragraph", "segments": [], "format": {} })
        );
    }
}
