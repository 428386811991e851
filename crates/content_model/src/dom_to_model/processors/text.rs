// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::model::{
    add_segment, create_br, create_text, preserves_white_space, BlockGroup,
    ContentModelBlock, ContentModelSegment,
};

// HTML white space only: a non-breaking space is content.
static LEADING_INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\t\n\f\r ]*\n[\t\n\f\r ]*").unwrap());
static TRAILING_INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\n\f\r ]*\n[\t\n\f\r ]*$").unwrap());
static INTERNAL_INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\t\f\r ]*\n[\t\n\f\r ]*").unwrap());

/// Whether the paragraph being filled ends with inline content that a
/// following word must be separated from.
fn follows_inline_content(group: &dyn BlockGroup) -> bool {
    let Some(ContentModelBlock::Paragraph(paragraph)) = group.blocks().last()
    else {
        return false;
    };
    match paragraph.segments.last() {
        Some(ContentModelSegment::Text { text, .. }) => {
            !text.ends_with(|c: char| c.is_ascii_whitespace())
        }
        Some(ContentModelSegment::Image(_) | ContentModelSegment::Entity(_)) => {
            true
        }
        _ => false,
    }
}

/// Append the text of `node` to the current paragraph.
///
/// Source indentation collapses the way a browser renders it: a newline run
/// becomes one space, except at the start of a line where it disappears.
/// Spaces left at the end of a line are trimmed when the model is
/// normalized. Inside preformatted blocks every newline becomes a line
/// break instead. Adjacent text segments are not merged.
pub fn text_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let Some(text) = node.text() else {
        return;
    };

    if preserves_white_space(&context.block_format) {
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                add_segment(
                    group,
                    create_br(&context.segment_format),
                    &context.block_format,
                );
            }
            if !line.is_empty() {
                add_segment(
                    group,
                    create_text(line, &context.segment_format),
                    &context.block_format,
                );
            }
        }
        return;
    }

    let mut collapsed = String::with_capacity(text.len());
    let rest = match LEADING_INDENT.find(text) {
        Some(indent) => {
            if follows_inline_content(group) {
                collapsed.push(' ');
            }
            &text[indent.end()..]
        }
        None => text,
    };
    let (rest, trailing) = match TRAILING_INDENT.find(rest) {
        Some(indent) => (&rest[..indent.start()], true),
        None => (rest, false),
    };
    collapsed.push_str(&INTERNAL_INDENT.replace_all(rest, " "));
    if trailing && !rest.is_empty() {
        collapsed.push(' ');
    }

    if collapsed.is_empty() {
        return;
    }
    add_segment(
        group,
        create_text(&collapsed, &context.segment_format),
        &context.block_format,
    );
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use crate::dom::Fragment;
    use crate::dom_to_model::dom_to_content_model;
    use crate::dom_to_model::processors::test_utils::process;

    #[test]
    fn plain_text_becomes_an_implicit_paragraph() {
        assert_eq!(
            serde_json::to_value(process("test")).unwrap(),
            json!({
                "blockGroupType": "Document",
                "blocks": [{
                    "blockType": "Paragraph",
                    "isImplicit": true,
                    "format": {},
                    "segments": [
                        { "segmentType": "Text", "text": "test", "format": {} }
                    ]
                }]
            })
        );
    }

    fn texts(html: &str) -> Vec<String> {
        let fragment = Fragment::parse_html(html);
        let doc = dom_to_content_model(fragment.root(), None, None);
        doc.blocks
            .iter()
            .map(|block| {
                block
                    .as_paragraph()
                    .unwrap()
                    .segments
                    .iter()
                    .filter_map(|s| s.as_text())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn indentation_between_lines_collapses() {
        let doc = process("\n    first\n    second\n  ");
        let paragraph = doc.blocks[0].as_paragraph().unwrap();
        assert_eq!(paragraph.segments[0].as_text(), Some("first second "));

        assert_eq!(texts("\n    first\n    second\n  "), vec!["first second"]);
    }

    #[test]
    fn newline_between_inline_content_is_a_space() {
        assert_eq!(texts("Hello\n<b>world</b>"), vec!["Hello world"]);
        assert_eq!(
            texts("<p><span>Hello</span>\n<span>world</span></p>"),
            vec!["Hello world"]
        );
        assert_eq!(texts("<b>Hello</b>\n  world"), vec!["Hello world"]);
        assert_eq!(texts("Hello \n<b>world</b>"), vec!["Hello world"]);
    }

    #[test]
    fn newline_at_block_boundaries_disappears() {
        assert_eq!(
            texts("<div>\n  <p>a</p>\n  <p>b\n</p>\n</div>\n"),
            vec!["a", "b"]
        );
        assert_eq!(texts("a\n<br>\nb"), vec!["ab"]);
    }

    #[test]
    fn whitespace_with_newline_is_dropped() {
        assert!(process("\n   \n").blocks.is_empty());
    }

    #[test]
    fn non_breaking_space_is_kept() {
        assert_eq!(texts("\u{a0}\n"), vec!["\u{a0}"]);
    }

    #[test]
    fn adjacent_text_is_not_merged() {
        let doc = process("a<span>b</span>");
        let paragraph = doc.blocks[0].as_paragraph().unwrap();
        assert_eq!(paragraph.segments.len(), 2);
    }

    #[test]
    fn preformatted_newlines_become_line_breaks() {
        let doc = process("<pre>a\nb</pre>");
        let value = serde_json::to_value(&doc).unwrap();
        let segments = &value["blocks"][0]["blocks"][0]["segments"];
        assert_eq!(segments[0]["text"], "a");
        assert_eq!(segments[1]["segmentType"], "Br");
        assert_eq!(segments[2]["text"], "b");
    }
}
