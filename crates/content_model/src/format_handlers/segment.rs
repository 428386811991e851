// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Handlers for inline text formatting.

use super::utils::style_value;
use crate::dom::{NodeRef, Style};
use crate::dom_to_model::DomToModelContext;
use crate::model::ContentModelFormat;

/// Attributes that keep the light-mode colour of an element whose colours
/// were rewritten for dark mode.
const ORIGINAL_TEXT_COLOR_ATTR: &str = "data-ogsc";
const ORIGINAL_BACKGROUND_COLOR_ATTR: &str = "data-ogsb";

pub fn font_family_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    if let Some(family) =
        style_value(&element.style(), default_style, "font-family")
    {
        format.set("fontFamily", family);
    }
}

pub fn font_size_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let style = element.style();
    // `smaller` and friends are relative to the parent and already covered
    // by the inherited value.
    match style_value(&style, default_style, "font-size") {
        Some(size) if !matches!(size.as_str(), "smaller" | "larger") => {
            format.set("fontSize", size);
        }
        _ => {}
    }
}

pub fn bold_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    if let Some(weight) =
        style_value(&element.style(), default_style, "font-weight")
    {
        format.set("fontWeight", weight);
    }
}

pub fn italic_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    match style_value(&element.style(), default_style, "font-style").as_deref()
    {
        Some("italic" | "oblique") => format.set("italic", true),
        Some("normal") => format.set("italic", false),
        _ => {}
    }
}

pub fn underline_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let decoration =
        style_value(&element.style(), default_style, "text-decoration");
    match decoration.as_deref() {
        Some(d) if d.contains("underline") => format.set("underline", true),
        Some("none") if element.is_tag("a") => format.set("underline", false),
        _ => {}
    }
}

pub fn strike_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    if style_value(&element.style(), default_style, "text-decoration")
        .is_some_and(|d| d.contains("line-through"))
    {
        format.set("strikethrough", true);
    }
}

pub fn super_or_sub_script_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    match style_value(&element.style(), default_style, "vertical-align")
        .as_deref()
    {
        Some(align @ ("super" | "sub")) => {
            format.set("superOrSubScript", align)
        }
        _ => {}
    }
}

pub fn text_color_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    context: &DomToModelContext,
    default_style: &Style,
) {
    let original = context
        .is_dark_mode
        .then(|| element.attr(ORIGINAL_TEXT_COLOR_ATTR))
        .flatten();
    let color = original
        .map(str::to_owned)
        .or_else(|| style_value(&element.style(), default_style, "color"))
        .or_else(|| element.attr("color").map(str::to_owned));
    if let Some(color) = color {
        format.set("textColor", color);
    }
}

pub fn background_color_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    context: &DomToModelContext,
    default_style: &Style,
) {
    let original = context
        .is_dark_mode
        .then(|| element.attr(ORIGINAL_BACKGROUND_COLOR_ATTR))
        .flatten();
    let color = original.map(str::to_owned).or_else(|| {
        style_value(&element.style(), default_style, "background-color")
    });
    match color {
        Some(color) if color != "transparent" => {
            format.set("backgroundColor", color)
        }
        _ => {}
    }
}

pub fn letter_spacing_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    if let Some(spacing) =
        style_value(&element.style(), default_style, "letter-spacing")
    {
        format.set("letterSpacing", spacing);
    }
}
