// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::DomToModelContext;
use crate::dom::NodeRef;
use crate::format_handlers::{get_default_style, FormatParser};
use crate::model::ContentModelFormat;

/// Run `parsers` in order over `element`, accumulating into `format`.
///
/// Every parser sees the same element, context and tag default style, so a
/// later parser writing the same key wins.
pub fn parse_format(
    element: &NodeRef<'_>,
    parsers: &[FormatParser],
    format: &mut ContentModelFormat,
    context: &DomToModelContext,
) {
    if parsers.is_empty() {
        return;
    }
    let default_style = get_default_style(element.tag().unwrap_or_default());
    for parser in parsers {
        parser(format, element, context, default_style);
    }
}
