// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{BeforePasteEvent, PasteType};
use crate::dom::Fragment;
use crate::error::{Error, Result};

const START_FRAGMENT: &str = "<!--StartFragment-->";
const END_FRAGMENT: &str = "<!--EndFragment-->";

static META_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<meta\b[^>]*>").unwrap());
static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<html\b([^>]*)>").unwrap());
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s=/>]+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
        .unwrap()
});

/// Fill `event.fragment` from the clipboard according to the paste type.
///
/// HTML is preferred over text, and text over an image, unless the paste
/// type asks for one of them explicitly.
pub fn create_fragment_from_clipboard_data(
    event: &mut BeforePasteEvent,
) -> Result<()> {
    let clipboard = &event.clipboard_data;
    let fragment = match event.paste_type {
        PasteType::AsImage => {
            let src = clipboard
                .image_data_uri
                .as_deref()
                .ok_or(Error::ImageUnavailable)?;
            image_fragment(src)
        }
        PasteType::AsPlainText => {
            let text = clipboard.text.as_deref().ok_or(Error::EmptyClipboard)?;
            text_fragment(text)
        }
        PasteType::Normal | PasteType::MergeFormat => {
            if let Some(html) = clipboard.raw_html.clone() {
                html_fragment(event, &html)
            } else if let Some(text) = &clipboard.text {
                text_fragment(text)
            } else if let Some(src) = &clipboard.image_data_uri {
                image_fragment(src)
            } else {
                return Err(Error::EmptyClipboard);
            }
        }
    };

    log::debug!(
        "Created {} paste fragment with {} top level nodes",
        event.paste_type,
        fragment.children(fragment.document_handle()).len()
    );
    event.fragment = fragment;
    Ok(())
}

fn image_fragment(src: &str) -> Fragment {
    let mut fragment = Fragment::new();
    let root = fragment.document_handle();
    let img = fragment.create_element("img", vec![("src".into(), src.into())]);
    fragment.append_child(root, img);
    fragment
}

/// One `div` per line, empty lines hold a `br`.
fn text_fragment(text: &str) -> Fragment {
    let mut fragment = Fragment::new();
    let root = fragment.document_handle();
    for line in text.lines() {
        let div = fragment.create_element("div", vec![]);
        let content = if line.is_empty() {
            fragment.create_element("br", vec![])
        } else {
            fragment.create_text(line)
        };
        fragment.append_child(div, content);
        fragment.append_child(root, div);
    }
    fragment
}

fn html_fragment(event: &mut BeforePasteEvent, html: &str) -> Fragment {
    let html = META_TAG.replace_all(html, "");

    if let Some(captures) = HTML_TAG.captures(&html) {
        event.html_attributes = parse_attributes(&captures[1]);
    }

    let start = html.find(START_FRAGMENT);
    let end = html.rfind(END_FRAGMENT);
    let content = match (start, end) {
        (Some(start), Some(end)) if start + START_FRAGMENT.len() <= end => {
            event.html_before = html[..start].to_owned();
            event.html_after = html[end + END_FRAGMENT.len()..].to_owned();
            &html[start + START_FRAGMENT.len()..end]
        }
        _ => &html[..],
    };

    cfg_if::cfg_if! {
        if #[cfg(feature = "sys")] {
            Fragment::parse_html(content)
        } else {
            log::warn!("HTML parsing is not available, pasting as text");
            let text = event.clipboard_data.text.clone().unwrap_or_default();
            text_fragment(&text)
        }
    }
}

fn parse_attributes(attributes: &str) -> BTreeMap<String, String> {
    ATTRIBUTE
        .captures_iter(attributes)
        .map(|c| {
            let value = c
                .get(2)
                .or_else(|| c.get(3))
                .or_else(|| c.get(4))
                .map_or("", |m| m.as_str());
            (c[1].to_ascii_lowercase(), value.to_owned())
        })
        .collect()
}
