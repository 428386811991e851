// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ContentModelFormat;
use crate::dom::NodeHandle;

/// The smallest inline unit inside a paragraph.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "segmentType")]
pub enum ContentModelSegment {
    Text {
        text: String,
        format: ContentModelFormat,
    },
    Br {
        format: ContentModelFormat,
    },
    Image(ContentModelImage),
    SelectionMarker(ContentModelSelectionMarker),
    Entity(ContentModelEntity),
}

impl ContentModelSegment {
    pub fn format(&self) -> &ContentModelFormat {
        match self {
            ContentModelSegment::Text { format, .. }
            | ContentModelSegment::Br { format } => format,
            ContentModelSegment::Image(image) => &image.format,
            ContentModelSegment::SelectionMarker(marker) => &marker.format,
            ContentModelSegment::Entity(entity) => &entity.format,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentModelSegment::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModelSelectionMarker {
    pub is_selected: bool,
    pub format: ContentModelFormat,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContentModelImage {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub dataset: BTreeMap<String, String>,
    pub format: ContentModelFormat,
}

/// An opaque piece of host content. The model never looks inside it and
/// only remembers which element wraps it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentModelEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    pub is_readonly: bool,
    pub wrapper: NodeHandle,
    pub format: ContentModelFormat,
}
