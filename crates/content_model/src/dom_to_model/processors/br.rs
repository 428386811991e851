// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::model::{add_segment, create_br, BlockGroup};

pub fn br_processor(
    group: &mut dyn BlockGroup,
    _node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    add_segment(
        group,
        create_br(&context.segment_format),
        &context.block_format,
    );
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::dom::Fragment;
    use crate::dom_to_model::create_dom_to_model_context;
    use crate::model::{create_content_model_document, ContentModelFormat};

    fn br_fragment() -> Fragment {
        let mut fragment = Fragment::new();
        let root = fragment.document_handle();
        let br = fragment.create_element("br", vec![]);
        fragment.append_child(root, br);
        fragment
    }

    #[test]
    fn single_br() {
        let fragment = br_fragment();
        let br = fragment.root().children().next().unwrap();
        let mut doc = create_content_model_document();
        let mut context = create_dom_to_model_context(None, None);

        br_processor(&mut doc, br, &mut context);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "blockGroupType": "Document",
                "blocks": [{
                    "blockType": "Paragraph",
                    "isImplicit": true,
                    "segments": [{ "segmentType": "Br", "format": {} }],
                    "format": {},
                }],
            })
        );
    }

    #[test]
    fn br_with_segment_format() {
        let fragment = br_fragment();
        let br = fragment.root().children().next().unwrap();
        let mut doc = create_content_model_document();
        let mut context = create_dom_to_model_context(None, None);
        context.segment_format.set("a", "b");

        br_processor(&mut doc, br, &mut context);
        // The segment keeps its own copy of the format
        context.segment_format.set("a", "c");

        let paragraph = doc.blocks[0].as_paragraph().unwrap();
        let expected: ContentModelFormat = [("a", "b")].into_iter().collect();
        assert_eq!(paragraph.segments[0].format(), &expected);
    }

    #[test]
    fn br_joins_an_open_paragraph() {
        let fragment = Fragment::parse_html("a<br>b");
        let mut doc = create_content_model_document();
        let mut context = create_dom_to_model_context(None, None);
        crate::dom_to_model::processors::process_child_nodes(
            &mut doc,
            fragment.root(),
            &mut context,
        );
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].as_paragraph().unwrap().segments.len(), 3);
    }
}
