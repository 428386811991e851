// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumString};

use super::{
    ContentModelBlock, ContentModelFormat, ContentModelSelectionMarker,
};

/// Whether a list is bulleted (`ul`) or numbered (`ol`).
///
/// The string forms are the lower-case tag names; the model serializes the
/// upper-case names.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString,
    Serialize,
)]
pub enum ListType {
    #[strum(serialize = "ul")]
    #[serde(rename = "UL")]
    Unordered,
    #[strum(serialize = "ol")]
    #[serde(rename = "OL")]
    Ordered,
}

/// One list nesting depth as seen by a list item.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModelListLevel {
    pub list_type: ListType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_number_override: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_style_type: Option<String>,
}

impl ContentModelListLevel {
    pub fn new(list_type: ListType) -> Self {
        Self {
            list_type,
            padding_left: None,
            margin_left: None,
            start_number_override: None,
            list_style_type: None,
        }
    }
}

/// A list item. `levels[0]` is the outermost list it sits in.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "blockGroupType", rename = "ListItem", rename_all = "camelCase")]
pub struct ContentModelListItem {
    pub blocks: Vec<ContentModelBlock>,
    pub levels: Vec<ContentModelListLevel>,
    #[serde(serialize_with = "super::serialize_format_holder")]
    pub format_holder: ContentModelSelectionMarker,
    pub format: ContentModelFormat,
}
