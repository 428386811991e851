// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::block::inherited_block_format;
use super::process_child_nodes;
use crate::dom::NodeRef;
use crate::dom_to_model::DomToModelContext;
use crate::format_handlers::utils::parse_px;
use crate::format_handlers::FormatHandlerCategory;
use crate::model::{
    add_block, create_table, create_table_cell, BlockGroup, ContentModelBlock,
    ContentModelFormat, ContentModelTableCell, ContentModelTableRow,
};

/// A column slot still taken by a `rowspan` from an earlier row.
#[derive(Clone, Copy, Default)]
struct Covered {
    rows_left: usize,
    span_left: bool,
}

// Browsers clamp spans to these.
const MAX_COL_SPAN: usize = 1000;
const MAX_ROW_SPAN: usize = 65534;

fn span(node: &NodeRef<'_>, name: &str, max: usize) -> usize {
    node.attr(name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .map_or(1, |n| n.min(max))
}

fn rows_of<'a>(table: NodeRef<'a>) -> Vec<NodeRef<'a>> {
    let mut rows = Vec::new();
    for child in table.children() {
        match child.tag() {
            Some("tr") => rows.push(child),
            Some("thead" | "tbody" | "tfoot") => {
                rows.extend(child.children().filter(|c| c.is_tag("tr")))
            }
            _ => {}
        }
    }
    rows
}

fn placeholder(covered: &mut Covered) -> ContentModelTableCell {
    covered.rows_left -= 1;
    create_table_cell(covered.span_left, true, false)
}

/// `table`: a grid of cells. Every row gets one cell per column it covers,
/// so cells merged by `colspan` or `rowspan` leave placeholders behind.
pub fn table_processor(
    group: &mut dyn BlockGroup,
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) {
    let table = context.stack_list_format(|context| {
        let mut table = create_table();
        context.parse_into(FormatHandlerCategory::Table, &node, &mut table.format);
        if let Some(element) = node.as_element() {
            table.dataset = element
                .dataset()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
        }
        if !context.disable_cache_element {
            table.cached_element = Some(node.handle());
        }

        let mut covered: Vec<Covered> = Vec::new();
        for tr in rows_of(node) {
            let mut row = ContentModelTableRow {
                cells: Vec::new(),
                format: ContentModelFormat::new(),
            };
            context.parse_into(FormatHandlerCategory::Table, &tr, &mut row.format);

            let mut col = 0;
            for td in tr.children().filter(|c| c.is_tag("td") || c.is_tag("th")) {
                while let Some(slot) =
                    covered.get_mut(col).filter(|c| c.rows_left > 0)
                {
                    row.cells.push(placeholder(slot));
                    col += 1;
                }

                let col_span = span(&td, "colspan", MAX_COL_SPAN);
                let row_span = span(&td, "rowspan", MAX_ROW_SPAN);
                if covered.len() < col + col_span {
                    covered.resize(col + col_span, Covered::default());
                }

                row.cells.push(table_cell(td, context));
                covered[col] = Covered {
                    rows_left: row_span - 1,
                    span_left: false,
                };
                for i in 1..col_span {
                    row.cells.push(create_table_cell(true, false, false));
                    covered[col + i] = Covered {
                        rows_left: row_span - 1,
                        span_left: true,
                    };
                }
                col += col_span;
            }
            while let Some(slot) = covered.get_mut(col).filter(|c| c.rows_left > 0) {
                row.cells.push(placeholder(slot));
                col += 1;
            }

            table.rows.push(row);
        }

        table.widths = table
            .rows
            .first()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| {
                        cell.format
                            .get_str("width")
                            .and_then(parse_px)
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .unwrap_or_default();
        table
    });

    add_block(group, ContentModelBlock::Table(table));
}

fn table_cell(
    node: NodeRef<'_>,
    context: &mut DomToModelContext,
) -> ContentModelTableCell {
    let mut cell = create_table_cell(false, false, node.is_tag("th"));
    if let Some(element) = node.as_element() {
        cell.dataset = element
            .dataset()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
    }

    context.stack_format(|context| {
        let mut segment_format = context.segment_format.clone();
        context.parse_into(
            FormatHandlerCategory::SegmentOnBlock,
            &node,
            &mut segment_format,
        );
        context.segment_format = segment_format;

        context.parse_into(FormatHandlerCategory::TableCell, &node, &mut cell.format);
        context.block_format = inherited_block_format(&cell.format);

        process_child_nodes(&mut cell, node, context);
    });
    cell
}
