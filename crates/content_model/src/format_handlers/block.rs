// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::utils::{capitalize, read_box, style_value, SIDES};
use crate::dom::{NodeRef, Style};
use crate::dom_to_model::DomToModelContext;
use crate::model::ContentModelFormat;

fn box_format(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    default_style: &Style,
    property: &str,
) {
    let sides = read_box(&element.style(), default_style, property);
    for (side, value) in SIDES.iter().zip(sides) {
        if let Some(value) = value {
            format.set(&format!("{property}{}", capitalize(side)), value);
        }
    }
}

pub fn margin_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    box_format(format, element, default_style, "margin");
}

pub fn padding_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    box_format(format, element, default_style, "padding");
}

pub fn direction_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let direction = style_value(&element.style(), default_style, "direction")
        .or_else(|| element.attr("dir").map(str::to_ascii_lowercase));
    if let Some(direction @ ("ltr" | "rtl")) = direction.as_deref() {
        format.set("direction", direction);
    }
}

/// `start`/`end` are resolved against the direction already in `format`,
/// so this handler has to run after the direction handler.
pub fn text_align_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let Some(align) = style_value(&element.style(), default_style, "text-align")
        .or_else(|| element.attr("align").map(str::to_ascii_lowercase))
    else {
        return;
    };
    let rtl = format.get_str("direction") == Some("rtl");
    let align = match (align.as_str(), rtl) {
        ("start", false) | ("end", true) => "left",
        ("start", true) | ("end", false) => "right",
        (a @ ("left" | "right" | "center" | "justify"), _) => a,
        _ => return,
    };
    format.set("textAlign", align);
}

pub fn line_height_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    if let Some(height) =
        style_value(&element.style(), default_style, "line-height")
    {
        format.set("lineHeight", height);
    }
}

pub fn white_space_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    if let Some(white_space) =
        style_value(&element.style(), default_style, "white-space")
    {
        format.set("whiteSpace", white_space);
    }
}

pub fn vertical_align_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let align = style_value(&element.style(), default_style, "vertical-align")
        .or_else(|| element.attr("valign").map(str::to_ascii_lowercase));
    match align.as_deref() {
        Some("top") => format.set("verticalAlign", "top"),
        Some("middle") => format.set("verticalAlign", "middle"),
        Some("bottom") => format.set("verticalAlign", "bottom"),
        _ => {}
    }
}

pub fn display_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    _default_style: &Style,
) {
    // Only an explicit display is interesting, the tag default is implied
    // by the model node itself.
    if let Some(display) = element.style().get("display") {
        format.set("display", display);
    }
}

/// `width`/`height` from inline style, falling back to the HTML attributes.
pub fn size_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let style = element.style();
    for name in ["width", "height"] {
        let value = style_value(&style, default_style, name).or_else(|| {
            element.attr(name).and_then(super::utils::attr_length)
        });
        if let Some(value) = value {
            format.set(name, value);
        }
    }
}

pub fn border_format_handler(
    format: &mut ContentModelFormat,
    element: &NodeRef<'_>,
    _context: &DomToModelContext,
    default_style: &Style,
) {
    let style = element.style();
    let all = style_value(&style, default_style, "border");
    for side in SIDES {
        let value = style_value(&style, default_style, &format!("border-{side}"))
            .or_else(|| all.clone());
        if let Some(value) = value {
            format.set(&format!("border{}", capitalize(side)), value);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dom::Fragment;
    use crate::dom_to_model::{create_dom_to_model_context, parse_format};
    use crate::format_handlers::FormatParser;

    fn parse(tag: &str, attrs: &[(&str, &str)], parsers: &[FormatParser]) -> ContentModelFormat {
        let mut fragment = Fragment::new();
        let root = fragment.document_handle();
        let el = fragment.create_element(
            tag,
            attrs
                .iter()
                .map(|&(n, v)| (n.to_owned(), v.to_owned()))
                .collect(),
        );
        fragment.append_child(root, el);
        let context = create_dom_to_model_context(None, None);
        let mut format = ContentModelFormat::new();
        parse_format(&fragment.node(el), parsers, &mut format, &context);
        format
    }

    #[test]
    fn margin_shorthand_is_expanded() {
        let format = parse(
            "div",
            &[("style", "margin: 0px 0px 0px 120px")],
            &[margin_format_handler],
        );
        assert_eq!(format.get_str("marginTop"), Some("0px"));
        assert_eq!(format.get_str("marginLeft"), Some("120px"));
        assert_eq!(format.len(), 4);
    }

    #[test]
    fn malformed_margin_is_skipped() {
        let format = parse(
            "div",
            &[("style", "margin: 1px 2px 3px 4px 5px")],
            &[margin_format_handler],
        );
        assert!(format.is_empty());
    }

    #[test]
    fn align_attribute_and_rtl_start() {
        let format = parse(
            "p",
            &[("align", "CENTER")],
            &[direction_format_handler, text_align_format_handler],
        );
        assert_eq!(format.get_str("textAlign"), Some("center"));

        let format = parse(
            "p",
            &[("dir", "rtl"), ("style", "text-align: start")],
            &[direction_format_handler, text_align_format_handler],
        );
        assert_eq!(format.get_str("direction"), Some("rtl"));
        assert_eq!(format.get_str("textAlign"), Some("right"));
    }

    #[test]
    fn size_falls_back_to_attributes() {
        let format = parse(
            "img",
            &[("width", "100"), ("style", "height: 20px")],
            &[size_format_handler],
        );
        assert_eq!(format.get_str("width"), Some("100px"));
        assert_eq!(format.get_str("height"), Some("20px"));
    }

    #[test]
    fn border_shorthand_applies_to_every_side() {
        let format = parse(
            "td",
            &[("style", "border: 1px solid black; border-top: none")],
            &[border_format_handler],
        );
        assert_eq!(format.get_str("borderTop"), Some("none"));
        assert_eq!(format.get_str("borderLeft"), Some("1px solid black"));
    }

    #[test]
    fn pre_has_white_space_by_default() {
        let format = parse("pre", &[], &[white_space_format_handler]);
        assert_eq!(format.get_str("whiteSpace"), Some("pre"));
    }
}
