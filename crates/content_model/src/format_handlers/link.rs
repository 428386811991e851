// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::{NodeRef, Style};
use crate::dom_to_model::DomToModelContext;
use crate::model::ContentModelFormat;

pub fn link_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    _default_style: &Style,
) {
    if !element.is_tag("a") {
        return;
    }
    if let Some(href) = element.attr("href") {
        format.set("href", href);
        if let Some(target) = element.attr("target") {
            format.set("target", target);
        }
    }
}
