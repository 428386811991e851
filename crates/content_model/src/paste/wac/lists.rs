// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::str::FromStr;

use crate::dom::{Fragment, NodeHandle};
use crate::model::ListType;

const BULLET_STYLES: [&str; 3] = ["disc", "circle", "square"];
const NUMBER_STYLES: [&str; 3] = ["decimal", "lower-alpha", "lower-roman"];

/// One list item of a run of lists, in document order.
#[derive(Debug)]
struct ListEntry {
    li: NodeHandle,
    list_type: ListType,
    /// 1 for the outermost list.
    depth: usize,
    /// `start` of the source list, for its first item only.
    start: Option<u32>,
}

struct OpenList {
    handle: NodeHandle,
    list_type: ListType,
    depth: usize,
}

fn list_type_of(fragment: &Fragment, handle: NodeHandle) -> Option<ListType> {
    fragment
        .element(handle)
        .and_then(|e| ListType::from_str(e.tag()).ok())
}

fn is_whitespace(fragment: &Fragment, handle: NodeHandle) -> bool {
    fragment.node(handle).is_whitespace_text()
}

fn style_type(list_type: ListType, depth: usize) -> &'static str {
    let styles = match list_type {
        ListType::Unordered => &BULLET_STYLES,
        ListType::Ordered => &NUMBER_STYLES,
    };
    styles[(depth - 1) % styles.len()]
}

/// Collect the items of `list` and of every list nested in it. Lists
/// nested in an item are taken out of that item.
fn flatten(
    fragment: &mut Fragment,
    list: NodeHandle,
    list_type: ListType,
    dom_depth: usize,
    entries: &mut Vec<ListEntry>,
    stray: &mut Vec<NodeHandle>,
) {
    let mut start = if list_type == ListType::Ordered {
        fragment
            .node(list)
            .attr("start")
            .and_then(|s| s.trim().parse().ok())
    } else {
        None
    };

    for child in fragment.children(list).to_vec() {
        if let Some(nested_type) = list_type_of(fragment, child) {
            flatten(fragment, child, nested_type, dom_depth + 1, entries, stray);
        } else if fragment.node(child).is_tag("li") {
            let depth = fragment
                .node(child)
                .attr("data-aria-level")
                .and_then(|level| level.trim().parse::<usize>().ok())
                .filter(|level| *level > 0)
                .unwrap_or(dom_depth);
            entries.push(ListEntry {
                li: child,
                list_type,
                depth,
                start: start.take(),
            });

            let (nested, content): (Vec<_>, Vec<_>) = fragment
                .children(child)
                .iter()
                .copied()
                .partition(|&c| list_type_of(fragment, c).is_some());
            if !nested.is_empty() {
                fragment.replace_children(child, content);
                for list in nested {
                    if let Some(nested_type) = list_type_of(fragment, list) {
                        flatten(
                            fragment,
                            list,
                            nested_type,
                            dom_depth + 1,
                            entries,
                            stray,
                        );
                    }
                }
            }
        } else if !is_whitespace(fragment, child) {
            match entries.last() {
                Some(entry) => fragment.append_child(entry.li, child),
                None => stray.push(child),
            }
        }
    }
}

/// Nest the entries again. A list opened below another one is appended to
/// that list, after its latest item.
///
/// An item is never more than one level deeper than the item before it, so
/// each item opens at most one list.
fn build(fragment: &mut Fragment, entries: Vec<ListEntry>) -> Vec<NodeHandle> {
    let mut roots = Vec::new();
    let mut stack: Vec<OpenList> = Vec::new();

    for entry in entries {
        let depth = entry.depth.min(stack.last().map_or(1, |top| top.depth + 1));
        while stack.last().is_some_and(|top| top.depth > depth) {
            stack.pop();
        }
        if stack
            .last()
            .is_some_and(|top| top.depth == depth && top.list_type != entry.list_type)
        {
            stack.pop();
        }
        if stack.last().map_or(0, |top| top.depth) < depth {
            let mut attrs = Vec::new();
            if entry.list_type == ListType::Ordered {
                attrs.push(("start".to_owned(), entry.start.unwrap_or(1).to_string()));
            }
            let list = fragment.create_element(entry.list_type.as_ref(), attrs);
            match stack.last() {
                Some(parent) => fragment.append_child(parent.handle, list),
                None => roots.push(list),
            }
            stack.push(OpenList {
                handle: list,
                list_type: entry.list_type,
                depth,
            });
        }

        if depth >= 2 {
            if let Some(li) = fragment.element_mut(entry.li) {
                let mut style = li.style();
                style.set("list-style-type", style_type(entry.list_type, depth));
                li.set_style(&style);
            }
        }
        if let Some(top) = stack.last() {
            fragment.append_child(top.handle, entry.li);
        }
    }

    roots
}

/// Replace every run of adjacent lists below `parent` (white space between
/// them does not break a run) by properly nested lists.
pub(super) fn rebuild_lists(fragment: &mut Fragment, parent: NodeHandle) {
    let children = fragment.children(parent).to_vec();
    let mut result = Vec::with_capacity(children.len());
    let mut i = 0;

    while i < children.len() {
        if list_type_of(fragment, children[i]).is_none() {
            if fragment.element(children[i]).is_some() {
                rebuild_lists(fragment, children[i]);
            }
            result.push(children[i]);
            i += 1;
            continue;
        }

        let mut run = Vec::new();
        let mut end = i;
        while end < children.len() {
            let child = children[end];
            if list_type_of(fragment, child).is_some() {
                run.push(child);
            } else if !is_whitespace(fragment, child) {
                break;
            }
            end += 1;
        }
        // Trailing white space is not part of the run
        while end > i && is_whitespace(fragment, children[end - 1]) {
            end -= 1;
        }

        let mut entries = Vec::new();
        let mut stray = Vec::new();
        for list in run {
            if let Some(list_type) = list_type_of(fragment, list) {
                flatten(fragment, list, list_type, 1, &mut entries, &mut stray);
            }
        }
        let items: Vec<NodeHandle> = entries.iter().map(|e| e.li).collect();
        log::debug!("Rebuilding a run of lists with {} items", items.len());

        result.extend(stray);
        result.extend(build(fragment, entries));
        for li in items {
            rebuild_lists(fragment, li);
        }
        i = end;
    }

    fragment.replace_children(parent, result);
}

#[cfg(test)]
mod test {
    use super::*;

    fn rebuild(html: &str) -> String {
        let mut fragment = Fragment::parse_html(html);
        let root = fragment.document_handle();
        rebuild_lists(&mut fragment, root);
        fragment.to_html()
    }

    fn item(level: usize, text: &str) -> String {
        format!("<li data-aria-level=\"{level}\">{text}</li>")
    }

    #[test]
    fn flat_items_merge_into_one_list() {
        let html = format!(
            "<ul>{}</ul><ul>{}</ul> <ul>{}</ul>",
            item(1, "A"),
            item(1, "B"),
            item(1, "C")
        );
        assert_eq!(
            rebuild(&html),
            format!("<ul>{}{}{}</ul>", item(1, "A"), item(1, "B"), item(1, "C"))
        );
    }

    #[test]
    fn deeper_items_open_nested_lists() {
        let html = format!(
            "<ul>{}</ul><ul>{}</ul><ul>{}</ul>",
            item(1, "A"),
            item(2, "B"),
            item(3, "C")
        );
        assert_eq!(
            rebuild(&html),
            "<ul><li data-aria-level=\"1\">A</li>\
             <ul><li data-aria-level=\"2\" style=\"list-style-type: circle;\">B</li>\
             <ul><li data-aria-level=\"3\" style=\"list-style-type: square;\">C</li></ul>\
             </ul></ul>"
        );
    }

    #[test]
    fn type_change_at_same_depth_starts_a_new_list() {
        assert_eq!(
            rebuild("<ul><li>A</li></ul><ol><li>B</li></ol><ol start=\"4\"><li>C</li></ol>"),
            "<ul><li>A</li></ul><ol start=\"1\"><li>B</li><li>C</li></ol>"
        );
        assert_eq!(
            rebuild("<ol start=\"4\"><li>B</li></ol>"),
            "<ol start=\"4\"><li>B</li></ol>"
        );
    }

    #[test]
    fn lists_inside_items_are_moved_after_them() {
        assert_eq!(
            rebuild("<ul><li><p>C</p><ol><li data-aria-level=\"2\"><p>D</p></li></ol></li></ul>"),
            "<ul><li><p>C</p></li><ol start=\"1\">\
             <li data-aria-level=\"2\" style=\"list-style-type: lower-alpha;\"><p>D</p></li>\
             </ol></ul>"
        );
    }

    #[test]
    fn skipped_levels_open_one_list() {
        assert_eq!(
            rebuild(&format!("<ul>{}</ul><ul>{}</ul>", item(1, "A"), item(4, "B"))),
            "<ul><li data-aria-level=\"1\">A</li>\
             <ul><li data-aria-level=\"4\" style=\"list-style-type: circle;\">B</li></ul></ul>"
        );
        assert_eq!(
            rebuild("<ul><li data-aria-level=\"1\">A</li></ul><ol start=\"4\"><li data-aria-level=\"3\">B</li></ol>"),
            "<ul><li data-aria-level=\"1\">A</li>\
             <ol start=\"4\"><li data-aria-level=\"3\" style=\"list-style-type: lower-alpha;\">B</li></ol></ul>"
        );
    }

    #[test]
    fn huge_levels_are_capped() {
        let html = format!("<ul>{}</ul>", item(200000, "A"));
        assert_eq!(rebuild(&html), format!("<ul>{}</ul>", item(200000, "A")));
    }

    #[test]
    fn invalid_levels_fall_back_to_list_depth() {
        assert_eq!(
            rebuild("<ul><li data-aria-level=\"0\">A</li><ul><li data-aria-level=\"x\">B</li></ul></ul><ul><li data-aria-level=\"99999999999999999999999\">C</li></ul>"),
            "<ul><li data-aria-level=\"0\">A</li>\
             <ul><li data-aria-level=\"x\" style=\"list-style-type: circle;\">B</li></ul>\
             <li data-aria-level=\"99999999999999999999999\">C</li></ul>"
        );
    }

    #[test]
    fn empty_lists_disappear() {
        assert_eq!(rebuild("<ul></ul><p>x</p>"), "<p>x</p>");
    }

    #[test]
    fn text_between_lists_splits_runs() {
        assert_eq!(
            rebuild("<ul><li>a</li></ul>t<ul><li>b</li></ul>"),
            "<ul><li>a</li></ul>t<ul><li>b</li></ul>"
        );
    }

    #[test]
    fn lists_in_table_cells_are_rebuilt() {
        assert_eq!(
            rebuild("<table><tbody><tr><td><ul><li>a</li></ul><ul><li>b</li></ul></td></tr></tbody></table>"),
            "<table><tbody><tr><td><ul><li>a</li><li>b</li></ul></td></tr></tbody></table>"
        );
    }

    #[test]
    fn rebuilding_twice_changes_nothing() {
        let html = format!(
            "<ul>{}</ul><ul>{}</ul><ol>{}</ol><ol>{}</ol><ul>{}</ul>",
            item(1, "A"),
            item(2, "B"),
            item(3, "C1"),
            item(3, "C2"),
            item(2, "D")
        );
        let once = rebuild(&html);
        assert_eq!(rebuild(&once), once);
    }
}
