// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Normalization of HTML copied from Word Online and OneNote Online.
//!
//! Both wrap every paragraph and list in layout `div`s and flatten nested
//! lists into one single-item list per line, with the depth kept in
//! `data-aria-level`. The rewrite here removes the wrappers and rebuilds
//! properly nested lists.

mod cleanup;
mod detect;
mod lists;
mod unwrap;

use strum_macros::{AsRefStr, Display};

use super::BeforePasteEvent;

pub use detect::get_wac_source;

#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display)]
pub enum WacSource {
    WordOnline,
    OneNoteOnline,
}

/// Rewrite `event.fragment` in place when it comes from a known source and
/// return that source. Other fragments are left untouched.
///
/// Running it again over its own output changes nothing.
pub fn handle_wac_components_paste(
    event: &mut BeforePasteEvent,
) -> Option<WacSource> {
    let source = get_wac_source(&event.fragment)?;
    log::debug!("Normalizing paste from {source}");

    let fragment = &mut event.fragment;
    let root = fragment.document_handle();

    unwrap::unwrap_containers(fragment, root);
    cleanup::remove_empty_image_borders(fragment);
    cleanup::clean_image_containers(fragment);
    if source == WacSource::OneNoteOnline {
        cleanup::clean_one_note_lists(fragment);
    }
    lists::rebuild_lists(fragment, root);

    Some(source)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dom::Fragment;
    use crate::paste::{create_before_paste_event, ClipboardData, PasteType};

    fn normalize(html: &str) -> (Option<WacSource>, String) {
        let mut event =
            create_before_paste_event(ClipboardData::default(), PasteType::Normal);
        event.fragment = Fragment::parse_html(html);
        let source = handle_wac_components_paste(&mut event);
        (source, event.fragment.to_html())
    }

    #[test]
    fn unknown_source_is_untouched() {
        let html = "<div><ul><li>a</li></ul><ul><li>b</li></ul></div>";
        assert_eq!(normalize(html), (None, html.to_owned()));
    }

    #[test]
    fn wrappers_go_and_lists_merge() {
        assert_eq!(
            normalize(
                "<div class=\"ListContainerWrapper\"><ul><li>1</li></ul><ul><li>2</li></ul></div>"
            ),
            (
                Some(WacSource::WordOnline),
                "<ul><li>1</li><li>2</li></ul>".to_owned()
            )
        );
    }

    #[test]
    fn text_around_lists_is_kept() {
        assert_eq!(
            normalize("<div class=\"ListContainerWrapper\">test<ul><li>1</li></ul></div>").1,
            "test<ul><li>1</li></ul>"
        );
    }

    #[test]
    fn one_note_list_styles_are_removed() {
        let (source, html) = normalize(
            "<ul class=\"SCXO1\" style=\"display: block; margin-left: 0px; color: red\"><li style=\"margin: 0px\">a</li></ul>",
        );
        assert_eq!(source, Some(WacSource::OneNoteOnline));
        assert_eq!(html, "<ul><li>a</li></ul>");
    }
}
