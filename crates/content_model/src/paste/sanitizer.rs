// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::SanitizingOption;
use crate::dom::Fragment;

/// Run the CSS callbacks of `option` over every inline style in
/// `fragment`. A declaration is removed when its property has a callback
/// that returns `false` for its value.
pub fn sanitize_styles(fragment: &mut Fragment, option: &SanitizingOption) {
    if option.css_style_callbacks.is_empty() {
        return;
    }

    let styled: Vec<_> = fragment
        .root()
        .descendants()
        .filter(|n| n.attr("style").is_some())
        .map(|n| n.handle())
        .collect();

    for handle in styled {
        let Some(element) = fragment.element_mut(handle) else {
            continue;
        };
        let mut style = element.style();
        let before = style.len();
        style.retain(|name, value| {
            option
                .css_style_callbacks
                .get(name)
                .is_none_or(|keep| keep(value))
        });
        if style.len() != before {
            log::trace!(
                "Dropped {} declarations from <{}>",
                before - style.len(),
                element.tag()
            );
            element.set_style(&style);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::paste::{create_before_paste_event, ClipboardData, PasteType};

    #[test]
    fn drops_rejected_declarations_only() {
        let mut fragment = Fragment::parse_html(
            "<p style=\"caret-color: red; color: blue\">a<span style=\"caret-color: red\">b</span></p>",
        );
        let event =
            create_before_paste_event(ClipboardData::default(), PasteType::Normal);
        sanitize_styles(&mut fragment, &event.sanitizing_option);
        assert_eq!(
            fragment.to_html(),
            "<p style=\"color: blue;\">a<span>b</span></p>"
        );
    }

    #[test]
    fn callbacks_see_the_value() {
        let mut option = SanitizingOption::default();
        option
            .css_style_callbacks
            .insert("width".into(), |value| !value.ends_with('%'));
        let mut fragment = Fragment::parse_html(
            "<div style=\"width: 50%\">a</div><div style=\"width: 5px\">b</div>",
        );
        sanitize_styles(&mut fragment, &option);
        assert_eq!(
            fragment.to_html(),
            "<div>a</div><div style=\"width: 5px;\">b</div>"
        );
    }
}
