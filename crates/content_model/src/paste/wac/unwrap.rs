// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::detect::{
    is_session_class, LIST_CONTAINER_WRAPPER, OUTLINE_ELEMENT, TABLE_CONTAINER,
};
use crate::dom::{Fragment, NodeHandle, NodeRef};

const WRAPPER_CLASSES: &[&str] =
    &[LIST_CONTAINER_WRAPPER, OUTLINE_ELEMENT, TABLE_CONTAINER];

fn is_wrapper(node: &NodeRef<'_>) -> bool {
    if !node.is_tag("div") {
        return false;
    }
    let Some(element) = node.as_element() else {
        return false;
    };
    if WRAPPER_CLASSES.iter().any(|c| element.has_class(c)) {
        return true;
    }

    let only_session_classes = element.class_names().next().is_some()
        && element.class_names().all(is_session_class)
        && element
            .attrs()
            .iter()
            .all(|(name, _)| name == "class" || name == "style");
    if only_session_classes {
        return true;
    }

    element.attrs().is_empty()
        && node
            .children()
            .any(|child| child.is_tag("div") && is_wrapper(&child))
}

/// Replace every layout wrapper below `parent` by its children.
pub(super) fn unwrap_containers(fragment: &mut Fragment, parent: NodeHandle) {
    let children = fragment.children(parent).to_vec();
    let mut result = Vec::with_capacity(children.len());
    let mut changed = false;

    for child in children {
        let unwrap = is_wrapper(&fragment.node(child));
        if fragment.element(child).is_some() {
            unwrap_containers(fragment, child);
        }
        if unwrap {
            result.extend_from_slice(fragment.children(child));
            changed = true;
        } else {
            result.push(child);
        }
    }

    if changed {
        fragment.replace_children(parent, result);
    }
}
