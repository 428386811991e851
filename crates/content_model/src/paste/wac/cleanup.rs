// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::detect::{IMAGE_BORDER, IMAGE_CONTAINER};
use crate::dom::{Fragment, NodeHandle, NodeRef};

const LAYOUT_PROPERTIES: &[&str] =
    &["display", "position", "cursor", "left", "top", "transform", "user-select"];

fn handles_where(
    fragment: &Fragment,
    predicate: impl Fn(&NodeRef<'_>) -> bool,
) -> Vec<NodeHandle> {
    fragment
        .root()
        .descendants()
        .filter(|n| predicate(n))
        .map(|n| n.handle())
        .collect()
}

fn update_style(
    fragment: &mut Fragment,
    handle: NodeHandle,
    keep: impl FnMut(&str, &str) -> bool,
) {
    if let Some(element) = fragment.element_mut(handle) {
        let mut style = element.style();
        let before = style.len();
        style.retain(keep);
        if style.len() != before {
            element.set_style(&style);
        }
    }
}

fn is_zero(value: &str) -> bool {
    value
        .split_ascii_whitespace()
        .all(|v| matches!(v, "0" | "0px" | "0pt" | "0em"))
}

/// Image borders are empty overlays drawn by the online editor.
pub(super) fn remove_empty_image_borders(fragment: &mut Fragment) {
    let borders = handles_where(fragment, |n| {
        n.has_class(IMAGE_BORDER)
            && n.children().all(|c| c.is_whitespace_text())
    });
    for handle in borders {
        fragment.detach(handle);
    }
}

/// Drop the positioning and editing styles of image containers, keeping
/// the text format they carry.
pub(super) fn clean_image_containers(fragment: &mut Fragment) {
    for handle in handles_where(fragment, |n| n.has_class(IMAGE_CONTAINER)) {
        update_style(fragment, handle, |name, value| {
            let layout = LAYOUT_PROPERTIES.contains(&name)
                || name.starts_with("-webkit-")
                || ((name.starts_with("margin") || name.starts_with("padding"))
                    && is_zero(value))
                || (matches!(name, "width" | "height") && value == "auto");
            !layout
        });
    }
}

/// OneNote positions list elements itself; its `display` and margins fight
/// with the rebuilt lists.
pub(super) fn clean_one_note_lists(fragment: &mut Fragment) {
    let lists = handles_where(fragment, |n| {
        matches!(n.tag(), Some("ul" | "ol" | "li"))
    });
    for handle in lists {
        update_style(fragment, handle, |name, _| {
            name != "display" && !name.starts_with("margin")
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_borders_are_removed() {
        let mut fragment = Fragment::parse_html(
            "<span class=\"WACImageContainer\"><img src=\"a\"><span class=\"WACImageBorder\"></span></span><span class=\"WACImageBorder\">x</span>",
        );
        remove_empty_image_borders(&mut fragment);
        assert_eq!(
            fragment.to_html(),
            "<span class=\"WACImageContainer\"><img src=\"a\"></span><span class=\"WACImageBorder\">x</span>"
        );
    }

    #[test]
    fn image_container_keeps_text_format() {
        let mut fragment = Fragment::parse_html(
            "<span class=\"WACImageContainer\" style=\"padding: 0px; user-select: text; -webkit-user-drag: none; position: relative; cursor: move; left: 0px; top: 2px; color: rgb(0, 0, 0); font-size: 12px; margin: 0px 4px; width: auto; height: auto; transform: rotate(0deg);\"></span>",
        );
        clean_image_containers(&mut fragment);
        assert_eq!(
            fragment.to_html(),
            "<span class=\"WACImageContainer\" style=\"color: rgb(0, 0, 0); font-size: 12px; margin: 0px 4px;\"></span>"
        );
    }

    #[test]
    fn one_note_list_display_and_margins_go() {
        let mut fragment = Fragment::parse_html(
            "<ul style=\"display: block; margin-left: 10px\"><li style=\"margin: 0px; color: red\">a</li></ul><p style=\"margin: 0px\">b</p>",
        );
        clean_one_note_lists(&mut fragment);
        assert_eq!(
            fragment.to_html(),
            "<ul><li style=\"color: red;\">a</li></ul><p style=\"margin: 0px\">b</p>"
        );
    }
}
