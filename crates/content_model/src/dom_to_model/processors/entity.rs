// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::format_handlers::{get_default_style, FormatHandlerCategory};
use crate::model::{
    add_block, add_segment, create_entity, BlockGroup, ContentModelBlock,
    ContentModelSegment,
};

/// Marks an element as the wrapper of an entity.
pub const ENTITY_CLASS: &str = "_Entity";
const ENTITY_TYPE_PREFIX: &str = "_EType_";
const ENTITY_ID_PREFIX: &str = "_EId_";
const ENTITY_READONLY_CLASS: &str = "_EReadonly_1";

pub fn is_entity_element(node: &NodeRef<'_>) -> bool {
    node.has_class(ENTITY_CLASS)
}

/// An entity keeps a handle to its wrapper and nothing else: its content
/// is never converted.
pub fn entity_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let Some(element) = node.as_element() else {
        return;
    };

    let class_value = |prefix: &str| {
        element
            .class_names()
            .find_map(|c| c.strip_prefix(prefix))
            .map(str::to_owned)
    };
    let entity_type = class_value(ENTITY_TYPE_PREFIX);
    let id = class_value(ENTITY_ID_PREFIX);
    let is_readonly = element.has_class(ENTITY_READONLY_CLASS);

    let display = element
        .style()
        .get("display")
        .map(str::to_owned)
        .or_else(|| {
            get_default_style(element.tag())
                .get("display")
                .map(str::to_owned)
        });
    let is_block = display.as_deref() == Some("block");

    if is_block {
        let entity = create_entity(
            node.handle(),
            is_readonly,
            &context.segment_format,
            entity_type,
            id,
        );
        add_block(group, ContentModelBlock::Entity(entity));
    } else {
        let mut format = context.segment_format.clone();
        context.parse_into(FormatHandlerCategory::Segment, &node, &mut format);
        let entity =
            create_entity(node.handle(), is_readonly, &format, entity_type, id);
        add_segment(
            group,
            ContentModelSegment::Entity(entity),
            &context.block_format,
        );
    }
}
