// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::utils::style_value;
use crate::dom::{NodeRef, Style};
use crate::dom_to_model::DomToModelContext;
use crate::model::ContentModelFormat;

pub fn list_indent_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let style = element.style();
    for (css, key) in [("margin-left", "marginLeft"), ("padding-left", "paddingLeft")]
    {
        if let Some(value) = style_value(&style, default_style, css) {
            format.set(key, value);
        }
    }
}

pub fn list_style_type_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let style_type =
        style_value(&element.style(), default_style, "list-style-type")
            .or_else(|| {
                element.attr("type").and_then(|t| match t {
                    "1" => Some("decimal".to_owned()),
                    "a" => Some("lower-alpha".to_owned()),
                    "A" => Some("upper-alpha".to_owned()),
                    "i" => Some("lower-roman".to_owned()),
                    "I" => Some("upper-roman".to_owned()),
                    "disc" | "circle" | "square" => Some(t.to_owned()),
                    _ => None,
                })
            });
    if let Some(style_type) = style_type {
        format.set("listStyleType", style_type);
    }
}
