// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::NodeHandle;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Clipboard has no text, html or image to paste")]
    EmptyClipboard,

    #[error("Paste as image requested but the clipboard has no image")]
    ImageUnavailable,

    #[error("Node {0:?} does not belong to the fragment")]
    InvalidRoot(NodeHandle),
}

pub type Result<T> = std::result::Result<T, Error>;
