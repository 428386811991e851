// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{ContentModelBlock, ContentModelFormat};
use crate::dom::NodeHandle;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentModelTable {
    pub rows: Vec<ContentModelTableRow>,
    pub format: ContentModelFormat,
    /// Column widths in pixels taken from the first row, `0` when unknown.
    pub widths: Vec<f64>,
    pub dataset: BTreeMap<String, String>,
    /// The `table` element this block came from, unless caching is
    /// disabled.
    #[serde(skip)]
    pub cached_element: Option<NodeHandle>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContentModelTableRow {
    pub cells: Vec<ContentModelTableCell>,
    pub format: ContentModelFormat,
}

/// A table cell. Cells covered by a `colspan`/`rowspan` of another cell
/// exist as empty placeholders with `span_left`/`span_above` set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(
    tag = "blockGroupType",
    rename = "TableCell",
    rename_all = "camelCase"
)]
pub struct ContentModelTableCell {
    pub blocks: Vec<ContentModelBlock>,
    pub format: ContentModelFormat,
    pub span_left: bool,
    pub span_above: bool,
    pub is_header: bool,
    pub dataset: BTreeMap<String, String>,
}

impl ContentModelTable {
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }
}
