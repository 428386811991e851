// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

use super::{
    ContentModelEntity, ContentModelFormat, ContentModelListItem,
    ContentModelSegment, ContentModelTable, ContentModelTableCell,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "blockType")]
pub enum ContentModelBlock {
    Paragraph(ContentModelParagraph),
    BlockGroup(ContentModelBlockGroup),
    Table(ContentModelTable),
    Entity(ContentModelEntity),
}

impl ContentModelBlock {
    pub fn as_paragraph(&self) -> Option<&ContentModelParagraph> {
        match self {
            ContentModelBlock::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_list_item(&self) -> Option<&ContentModelListItem> {
        match self {
            ContentModelBlock::BlockGroup(ContentModelBlockGroup::ListItem(
                item,
            )) => Some(item),
            _ => None,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !value
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModelParagraph {
    pub segments: Vec<ContentModelSegment>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_implicit: bool,
    pub format: ContentModelFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decorator: Option<ContentModelParagraphDecorator>,
}

/// The heading tag an explicit paragraph came from, with the format the
/// heading tag contributes by default.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModelParagraphDecorator {
    pub tag_name: String,
    pub format: ContentModelFormat,
}

/// Block groups that can appear as a block inside another group. Each
/// variant writes its own `blockGroupType`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentModelBlockGroup {
    ListItem(ContentModelListItem),
    FormatContainer(ContentModelFormatContainer),
}

/// A block container kept as its own group, such as `blockquote` or `pre`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(
    tag = "blockGroupType",
    rename = "FormatContainer",
    rename_all = "camelCase"
)]
pub struct ContentModelFormatContainer {
    pub tag_name: String,
    pub blocks: Vec<ContentModelBlock>,
    pub format: ContentModelFormat,
}

/// The root of a content model.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "blockGroupType", rename = "Document")]
pub struct ContentModelDocument {
    pub blocks: Vec<ContentModelBlock>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum BlockGroupType {
    Document,
    ListItem,
    FormatContainer,
    TableCell,
}

/// Anything that owns an ordered list of blocks. Processors write into a
/// `&mut dyn BlockGroup` so they do not care which kind of group they fill.
pub trait BlockGroup {
    fn block_group_type(&self) -> BlockGroupType;
    fn blocks(&self) -> &[ContentModelBlock];
    fn blocks_mut(&mut self) -> &mut Vec<ContentModelBlock>;
}

macro_rules! impl_block_group {
    ($ty:ty, $kind:ident) => {
        impl BlockGroup for $ty {
            fn block_group_type(&self) -> BlockGroupType {
                BlockGroupType::$kind
            }

            fn blocks(&self) -> &[ContentModelBlock] {
                &self.blocks
            }

            fn blocks_mut(&mut self) -> &mut Vec<ContentModelBlock> {
                &mut self.blocks
            }
        }
    };
}

impl_block_group!(ContentModelDocument, Document);
impl_block_group!(ContentModelListItem, ListItem);
impl_block_group!(ContentModelFormatContainer, FormatContainer);
impl_block_group!(ContentModelTableCell, TableCell);
