// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::{BTreeMap, HashMap};

use super::PasteType;
use crate::dom::Fragment;
use crate::dom_to_model::DomToModelOption;

/// What the clipboard held at paste time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipboardData {
    /// MIME types offered by the clipboard.
    pub types: Vec<String>,
    pub text: Option<String>,
    pub raw_html: Option<String>,
    /// The clipboard image as a `data:` URI.
    pub image_data_uri: Option<String>,
}

/// Decides whether a CSS declaration with the given value is kept.
pub type CssStyleCallback = fn(&str) -> bool;

#[derive(Clone, Debug, Default)]
pub struct SanitizingOption {
    /// Keyed by lower-cased CSS property name.
    pub css_style_callbacks: HashMap<String, CssStyleCallback>,
}

impl SanitizingOption {
    pub fn drop_property(&mut self, name: &str) {
        self.css_style_callbacks
            .insert(name.to_ascii_lowercase(), |_| false);
    }
}

/// Everything a paste is made of. Hooks may change any field; the
/// pipeline reads the event in its final state.
#[derive(Clone, Debug)]
pub struct BeforePasteEvent {
    pub clipboard_data: ClipboardData,
    pub fragment: Fragment,
    pub sanitizing_option: SanitizingOption,
    /// HTML found before the `StartFragment` marker.
    pub html_before: String,
    /// HTML found after the `EndFragment` marker.
    pub html_after: String,
    /// Attributes of the source `html` element.
    pub html_attributes: BTreeMap<String, String>,
    pub dom_to_model_option: DomToModelOption,
    pub paste_type: PasteType,
}

pub fn create_before_paste_event(
    clipboard_data: ClipboardData,
    paste_type: PasteType,
) -> BeforePasteEvent {
    let mut sanitizing_option = SanitizingOption::default();
    // Safari adds it and it keeps the caret in the source color
    sanitizing_option.drop_property("caret-color");
    if paste_type == PasteType::MergeFormat {
        for name in ["font-family", "font-size", "color", "background-color"] {
            sanitizing_option.drop_property(name);
        }
    }

    BeforePasteEvent {
        clipboard_data,
        fragment: Fragment::new(),
        sanitizing_option,
        html_before: String::new(),
        html_after: String::new(),
        html_attributes: BTreeMap::new(),
        dom_to_model_option: DomToModelOption::default(),
        paste_type,
    }
}

#[cfg(test)]
mod test {
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn new_event_is_empty_and_drops_caret_color() {
        let event = create_before_paste_event(
            ClipboardData::default(),
            PasteType::Normal,
        );
        assert!(event.fragment.is_empty());
        assert!(event.html_before.is_empty());
        assert!(event.html_attributes.is_empty());
        assert!(!event.dom_to_model_option.include_root);

        let callbacks = &event.sanitizing_option.css_style_callbacks;
        assert_that!(callbacks.len()).is_equal_to(1);
        assert!(!callbacks["caret-color"]("red"));
    }

    #[test]
    fn merge_format_drops_text_format_properties() {
        let event = create_before_paste_event(
            ClipboardData::default(),
            PasteType::MergeFormat,
        );
        let callbacks = &event.sanitizing_option.css_style_callbacks;
        for name in ["caret-color", "font-family", "font-size", "color"] {
            assert!(callbacks.contains_key(name), "{name}");
        }
        assert!(!callbacks.contains_key("font-weight"));
    }
}
