// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use super::{
    BlockGroup, ContentModelBlock, ContentModelBlockGroup,
    ContentModelDocument,
};

impl ContentModelDocument {
    /// Panic if the model breaks a structural invariant. Only does anything
    /// when the `assert-invariants` feature is enabled.
    pub fn assert_invariants(&self) {
        #[cfg(feature = "assert-invariants")]
        self.explicitly_assert_invariants();
    }

    /// Panic if the model breaks a structural invariant:
    /// - every list item has at least one level,
    /// - every list item's format holder is a selected marker,
    /// - every table row has cells.
    pub fn explicitly_assert_invariants(&self) {
        assert_group_invariants(self);
    }
}

fn assert_group_invariants(group: &dyn BlockGroup) {
    for block in group.blocks() {
        match block {
            ContentModelBlock::BlockGroup(ContentModelBlockGroup::ListItem(
                item,
            )) => {
                assert!(
                    !item.levels.is_empty(),
                    "List item without list levels: {item:?}"
                );
                assert!(
                    item.format_holder.is_selected,
                    "List item format holder is not selected: {item:?}"
                );
                assert_group_invariants(item);
            }
            ContentModelBlock::BlockGroup(
                ContentModelBlockGroup::FormatContainer(container),
            ) => assert_group_invariants(container),
            ContentModelBlock::Table(table) => {
                for row in &table.rows {
                    assert!(!row.cells.is_empty(), "Empty table row");
                    for cell in &row.cells {
                        assert_group_invariants(cell);
                    }
                }
            }
            ContentModelBlock::Paragraph(_) | ContentModelBlock::Entity(_) => {}
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{create_list_item, ContentModelFormat};

    #[test]
    #[should_panic(expected = "List item without list levels")]
    fn list_item_without_levels_panics() {
        let mut doc = ContentModelDocument::default();
        doc.blocks.push(ContentModelBlock::BlockGroup(
            ContentModelBlockGroup::ListItem(create_list_item(
                &[],
                &ContentModelFormat::new(),
            )),
        ));
        doc.explicitly_assert_invariants();
    }
}
