// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::Style;

pub(crate) const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// The element's own value for `name`, falling back to the tag default.
pub(crate) fn style_value(
    style: &Style,
    default_style: &Style,
    name: &str,
) -> Option<String> {
    style
        .get(name)
        .or_else(|| default_style.get(name))
        .map(str::to_owned)
}

/// Split a CSS value on whitespace outside parentheses, so
/// `1px solid rgb(0, 0, 0)` gives three parts.
pub(crate) fn split_css_value(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&value[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        parts.push(&value[s..]);
    }
    parts
}

/// Expand a 1 to 4 value box shorthand (`margin`, `padding`) into
/// top, right, bottom and left. Anything else is malformed.
pub(crate) fn expand_box_shorthand(value: &str) -> Option<[&str; 4]> {
    match split_css_value(value).as_slice() {
        &[all] => Some([all, all, all, all]),
        &[v, h] => Some([v, h, v, h]),
        &[t, h, b] => Some([t, h, b, h]),
        &[t, r, b, l] => Some([t, r, b, l]),
        _ => None,
    }
}

/// Read a box property (`margin` or `padding`) into four optional sides.
/// Longhand declarations win over the shorthand.
pub(crate) fn read_box(
    style: &Style,
    default_style: &Style,
    property: &str,
) -> [Option<String>; 4] {
    let shorthand = style_value(style, default_style, property);
    let expanded = shorthand.as_deref().and_then(expand_box_shorthand);
    let mut sides: [Option<String>; 4] = Default::default();
    for (i, side) in SIDES.iter().enumerate() {
        sides[i] = style_value(style, default_style, &format!("{property}-{side}"))
            .or_else(|| expanded.map(|e| e[i].to_owned()));
    }
    sides
}

/// Parse a pixel length such as `12px` or `12`. Other units are not
/// resolved.
pub(crate) fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Turn an HTML length attribute (`width="100"`) into a CSS length.
pub(crate) fn attr_length(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else if value.ends_with('%') || value.ends_with("px") {
        Some(value.to_owned())
    } else {
        parse_px(value).map(|n| format!("{n}px"))
    }
}

pub(crate) fn capitalize(side: &str) -> String {
    let mut chars = side.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn box_shorthand_expands_like_css() {
        assert_eq!(expand_box_shorthand("1px"), Some(["1px"; 4]));
        assert_eq!(
            expand_box_shorthand("0px 0px 0px 120px"),
            Some(["0px", "0px", "0px", "120px"])
        );
        assert_eq!(
            expand_box_shorthand("1px 2px 3px"),
            Some(["1px", "2px", "3px", "2px"])
        );
        assert_eq!(expand_box_shorthand("1px 2px 3px 4px 5px"), None);
    }

    #[test]
    fn longhand_wins_over_shorthand() {
        let style = Style::parse("margin: 1px; margin-left: 5px");
        let sides = read_box(&style, &Style::default(), "margin");
        assert_eq!(sides[0].as_deref(), Some("1px"));
        assert_eq!(sides[3].as_deref(), Some("5px"));
    }

    #[test]
    fn css_values_split_outside_parentheses() {
        assert_eq!(
            split_css_value("1px solid rgb(0, 0, 0)"),
            vec!["1px", "solid", "rgb(0, 0, 0)"]
        );
    }

    #[test]
    fn attribute_lengths_get_a_unit() {
        assert_eq!(attr_length("100").as_deref(), Some("100px"));
        assert_eq!(attr_length("50%").as_deref(), Some("50%"));
        assert_eq!(attr_length("abc"), None);
    }
}
