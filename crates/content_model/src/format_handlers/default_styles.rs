// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::dom::Style;

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "dialog",
    "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer",
    "form", "header", "hgroup", "hr", "li", "main", "nav", "ol", "p",
    "section", "summary", "ul",
];

const HEADING_SIZES: &[(&str, &str)] = &[
    ("h1", "2em"),
    ("h2", "1.5em"),
    ("h3", "1.17em"),
    ("h4", "1em"),
    ("h5", "0.83em"),
    ("h6", "0.67em"),
];

static DEFAULT_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let mut styles: HashMap<&'static str, Style> = HashMap::new();
    for tag in BLOCK_TAGS {
        styles.insert(*tag, Style::from_iter([("display", "block")]));
    }
    for (tag, size) in HEADING_SIZES {
        styles.insert(
            *tag,
            Style::from_iter([
                ("display", "block"),
                ("font-size", *size),
                ("font-weight", "bold"),
            ]),
        );
    }

    let inline: &[(&'static str, &[(&str, &str)])] = &[
        ("b", &[("font-weight", "bold")]),
        ("strong", &[("font-weight", "bold")]),
        ("i", &[("font-style", "italic")]),
        ("em", &[("font-style", "italic")]),
        ("s", &[("text-decoration", "line-through")]),
        ("strike", &[("text-decoration", "line-through")]),
        ("u", &[("text-decoration", "underline")]),
        ("sub", &[("vertical-align", "sub"), ("font-size", "smaller")]),
        ("sup", &[("vertical-align", "super"), ("font-size", "smaller")]),
        ("code", &[("font-family", "monospace")]),
        ("center", &[("display", "block"), ("text-align", "center")]),
        (
            "pre",
            &[
                ("display", "block"),
                ("font-family", "monospace"),
                ("white-space", "pre"),
            ],
        ),
        ("table", &[("display", "table")]),
        ("td", &[("display", "table-cell")]),
        ("th", &[("display", "table-cell"), ("font-weight", "bold")]),
    ];
    for (tag, declarations) in inline {
        styles.insert(*tag, declarations.iter().copied().collect());
    }
    styles
});

static EMPTY_STYLE: Lazy<Style> = Lazy::new(Style::default);

/// The user-agent style of `tag` that matters to format parsing. Unknown
/// tags have an empty default style.
pub fn get_default_style(tag: &str) -> &'static Style {
    DEFAULT_STYLES
        .get(tag.to_ascii_lowercase().as_str())
        .unwrap_or_else(|| &*EMPTY_STYLE)
}
