// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Conversion of a DOM subtree into a [`ContentModelDocument`].

mod context;
mod parse_format;
pub mod processors;

pub use context::{
    create_dom_to_model_context, DomToModelContext, DomToModelOption,
    EditorContext, ListFormatContext,
};
pub use parse_format::parse_format;

use crate::dom::{Fragment, NodeHandle, NodeRef};
use crate::error::{Error, Result};
use crate::model::{
    create_content_model_document, normalize_content_model,
    ContentModelDocument,
};
use processors::{process_child_nodes, process_node};

/// Convert the children of `root` (or `root` itself with
/// [`DomToModelOption::include_root`]) into a normalized document.
pub fn dom_to_content_model(
    root: NodeRef<'_>,
    editor_context: Option<&EditorContext>,
    option: Option<&DomToModelOption>,
) -> ContentModelDocument {
    let mut context = create_dom_to_model_context(editor_context, option);
    let mut model = create_content_model_document();

    if context.include_root {
        process_node(&mut model, root, &mut context);
    } else {
        process_child_nodes(&mut model, root, &mut context);
    }

    normalize_content_model(&mut model);
    model.assert_invariants();
    log::debug!("Converted DOM into {} blocks", model.blocks.len());
    model
}

/// Like [`dom_to_content_model`], starting from a node handle.
pub fn fragment_to_content_model(
    fragment: &Fragment,
    root: NodeHandle,
    editor_context: Option<&EditorContext>,
    option: Option<&DomToModelOption>,
) -> Result<ContentModelDocument> {
    if !fragment.contains(root) {
        return Err(Error::InvalidRoot(root));
    }
    Ok(dom_to_content_model(fragment.node(root), editor_context, option))
}
