// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use url::Url;

use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::format_handlers::FormatHandlerCategory;
use crate::model::{add_segment, create_image, BlockGroup, ContentModelSegment};

/// Absolute URLs are normalized, anything else is kept as written.
fn normalize_src(src: &str) -> String {
    Url::parse(src.trim())
        .map(|url| url.to_string())
        .unwrap_or_else(|_| src.to_owned())
}

pub fn image_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let mut format = context.segment_format.clone();
    context.parse_into(FormatHandlerCategory::Segment, &node, &mut format);
    context.parse_into(FormatHandlerCategory::Image, &node, &mut format);

    let src = normalize_src(node.attr("src").unwrap_or_default());
    let mut image = create_image(&src, &format);
    image.alt = node.attr("alt").map(str::to_owned);
    image.title = node.attr("title").map(str::to_owned);
    if let Some(element) = node.as_element() {
        image.dataset = element
            .dataset()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
    }

    add_segment(
        group,
        ContentModelSegment::Image(image),
        &context.block_format,
    );
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::normalize_src;
    use crate::dom_to_model::processors::test_utils::process;

    #[test]
    fn image_segment() {
        let doc = process(
            "<b><img src=\"https://example.com/a b.png\" alt=\"A\" width=\"10\" data-id=\"1\"></b>",
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value["blocks"][0]["segments"][0],
            json!({
                "segmentType": "Image",
                "src": "https://example.com/a%20b.png",
                "alt": "A",
                "dataset": { "id": "1" },
                "format": { "fontWeight": "bold", "width": "10px" },
            })
        );
    }

    #[test]
    fn relative_and_data_sources_are_kept() {
        assert_eq!(normalize_src("img/a.png"), "img/a.png");
        assert_eq!(
            normalize_src("data:image/png;base64,AAAA"),
            "data:image/png;base64,AAAA"
        );
    }
}
