// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use once_cell::sync::Lazy;
use regex::Regex;

use super::WacSource;
use crate::dom::{Fragment, NodeRef};

pub(super) const LIST_CONTAINER_WRAPPER: &str = "ListContainerWrapper";
pub(super) const OUTLINE_ELEMENT: &str = "OutlineElement";
pub(super) const TABLE_CONTAINER: &str = "TableContainer";
pub(super) const IMAGE_CONTAINER: &str = "WACImageContainer";
pub(super) const IMAGE_BORDER: &str = "WACImageBorder";

static ONE_NOTE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SCXO\d+$").unwrap());
static LIST_STYLE_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(BulletListStyle|NumberListStyle)\d+$").unwrap());
static SESSION_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(SCXW|BCX)\d+$").unwrap());

pub(super) fn is_session_class(class_name: &str) -> bool {
    SESSION_CLASS.is_match(class_name)
}

fn has_class_matching(node: &NodeRef<'_>, pattern: &Regex) -> bool {
    node.as_element()
        .is_some_and(|e| e.class_names().any(|c| pattern.is_match(c)))
}

fn is_one_note_fragment(node: &NodeRef<'_>) -> bool {
    has_class_matching(node, &ONE_NOTE_CLASS)
}

fn has_list_container_wrapper(node: &NodeRef<'_>) -> bool {
    node.has_class(LIST_CONTAINER_WRAPPER)
}

fn has_wac_list_style_class(node: &NodeRef<'_>) -> bool {
    has_class_matching(node, &LIST_STYLE_CLASS)
}

fn has_outline_list_item(node: &NodeRef<'_>) -> bool {
    node.is_tag("li")
        && (node.attr("data-aria-level").is_some()
            || node.has_class(OUTLINE_ELEMENT))
}

fn has_wac_image_container(node: &NodeRef<'_>) -> bool {
    node.has_class(IMAGE_CONTAINER)
}

fn has_wac_session_class(node: &NodeRef<'_>) -> bool {
    has_class_matching(node, &SESSION_CLASS)
}

type SourcePredicate = fn(&NodeRef<'_>) -> bool;

/// Checked in order. OneNote markup also carries the Word Online classes,
/// so its predicate goes first.
const SOURCE_PREDICATES: &[(SourcePredicate, WacSource)] = &[
    (is_one_note_fragment, WacSource::OneNoteOnline),
    (has_list_container_wrapper, WacSource::WordOnline),
    (has_wac_list_style_class, WacSource::WordOnline),
    (has_outline_list_item, WacSource::WordOnline),
    (has_wac_image_container, WacSource::WordOnline),
    (has_wac_session_class, WacSource::WordOnline),
];

/// Which online editor, if any, `fragment` was copied from.
pub fn get_wac_source(fragment: &Fragment) -> Option<WacSource> {
    let elements: Vec<NodeRef<'_>> = fragment
        .root()
        .descendants()
        .filter(|n| n.as_element().is_some())
        .collect();

    SOURCE_PREDICATES
        .iter()
        .find(|(predicate, _)| elements.iter().any(predicate))
        .map(|(_, source)| *source)
}
