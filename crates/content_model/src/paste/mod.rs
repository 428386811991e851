// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Turning clipboard content into a content model.
//!
//! The clipboard payload becomes a [`crate::dom::Fragment`] held by a
//! [`BeforePasteEvent`]. Known sources are normalized, a caller hook may
//! change the event, styles are sanitized and the final fragment is
//! converted.

mod event;
mod fragment;
mod paste_model;
mod sanitizer;
pub mod wac;

use strum_macros::{AsRefStr, Display};

pub use event::{
    create_before_paste_event, BeforePasteEvent, ClipboardData,
    CssStyleCallback, SanitizingOption,
};
pub use fragment::create_fragment_from_clipboard_data;
pub use paste_model::{create_paste_model, create_paste_model_with, PasteOptions};
pub use sanitizer::sanitize_styles;

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum PasteType {
    /// Keep the source format.
    Normal,
    /// Paste only the text.
    AsPlainText,
    /// Let the pasted content take the format at the destination.
    MergeFormat,
    /// Paste the clipboard image.
    AsImage,
}

/// Pick the paste type from the caller's flags. Plain text wins over
/// merging formats, which wins over pasting an image.
pub fn get_paste_type(
    as_plain_text: bool,
    apply_current_style: bool,
    as_image: bool,
) -> PasteType {
    if as_plain_text {
        PasteType::AsPlainText
    } else if apply_current_style {
        PasteType::MergeFormat
    } else if as_image {
        PasteType::AsImage
    } else {
        PasteType::Normal
    }
}
