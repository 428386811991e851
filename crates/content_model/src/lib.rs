// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Conversion of HTML into a structured content model.
//!
//! A [`dom::Fragment`] is walked by per-category processors that read
//! formats through format handlers and grow a [`ContentModelDocument`].
//! Pasted HTML goes through [`paste::create_paste_model`], which also
//! normalizes Word Online and OneNote Online markup.

pub mod dom;
pub mod dom_to_model;
mod error;
pub mod format_handlers;
pub mod model;
pub mod paste;

pub use crate::dom::{Fragment, NodeHandle, NodeRef};
pub use crate::dom_to_model::{
    dom_to_content_model, fragment_to_content_model, DomToModelContext,
    DomToModelOption, EditorContext,
};
pub use crate::error::{Error, Result};
pub use crate::format_handlers::{FormatHandlerCategory, FormatParser};
pub use crate::model::{
    BlockGroup, ContentModelBlock, ContentModelBlockGroup,
    ContentModelDocument, ContentModelFormat, ContentModelSegment,
    FormatValue,
};
pub use crate::paste::{
    create_paste_model, create_paste_model_with, BeforePasteEvent,
    ClipboardData, PasteOptions, PasteType,
};
