// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::wac::handle_wac_components_paste;
use super::{
    create_before_paste_event, create_fragment_from_clipboard_data,
    get_paste_type, sanitize_styles, BeforePasteEvent, ClipboardData,
    PasteType,
};
use crate::dom_to_model::{dom_to_content_model, EditorContext};
use crate::error::Result;
use crate::model::ContentModelDocument;

/// How the caller wants the clipboard pasted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasteOptions {
    pub as_plain_text: bool,
    pub apply_current_style: bool,
    pub as_image: bool,
}

impl PasteOptions {
    pub fn paste_type(&self) -> PasteType {
        get_paste_type(
            self.as_plain_text,
            self.apply_current_style,
            self.as_image,
        )
    }
}

pub fn create_paste_model(
    editor_context: Option<&EditorContext>,
    clipboard_data: ClipboardData,
    options: PasteOptions,
) -> Result<ContentModelDocument> {
    create_paste_model_with(editor_context, clipboard_data, options, |_| {})
}

/// Build the model for a paste, letting `before_paste` change the event
/// after source normalization and before sanitizing and conversion.
pub fn create_paste_model_with(
    editor_context: Option<&EditorContext>,
    clipboard_data: ClipboardData,
    options: PasteOptions,
    before_paste: impl FnOnce(&mut BeforePasteEvent),
) -> Result<ContentModelDocument> {
    let paste_type = options.paste_type();
    log::debug!("Pasting as {paste_type}");

    let mut event = create_before_paste_event(clipboard_data, paste_type);
    create_fragment_from_clipboard_data(&mut event)?;

    if matches!(paste_type, PasteType::Normal | PasteType::MergeFormat) {
        handle_wac_components_paste(&mut event);
    }

    before_paste(&mut event);

    sanitize_styles(&mut event.fragment, &event.sanitizing_option);
    Ok(dom_to_content_model(
        event.fragment.root(),
        editor_context,
        Some(&event.dom_to_model_option),
    ))
}
