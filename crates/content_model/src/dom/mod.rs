// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The HTML tree the converter reads and the paste normalizers rewrite.

pub mod fragment;
pub mod node;
pub mod node_ref;
#[cfg(feature = "sys")]
mod parser;
pub mod style;
mod to_html;

pub use fragment::Fragment;
pub use node::{
    CommentNode, DocumentNode, DomNode, ElementNode, NodeHandle, TextNode,
};
pub use node_ref::{Descendants, NodeRef};
pub use style::Style;
