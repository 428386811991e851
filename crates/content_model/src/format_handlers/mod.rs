// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Format handlers turn an element's inline style, attributes and tag
//! default style into semantic format keys.
//!
//! A handler never touches the DOM and never fails: values it does not
//! understand are skipped.

mod block;
mod default_styles;
mod link;
mod list;
mod segment;
pub(crate) mod utils;

use strum_macros::{AsRefStr, EnumIter};

use crate::dom::{NodeRef, Style};
use crate::dom_to_model::DomToModelContext;
use crate::model::ContentModelFormat;

pub use block::*;
pub use default_styles::get_default_style;
pub use link::link_format_handler;
pub use list::{list_indent_format_handler, list_style_type_format_handler};
pub use segment::*;

/// Reads `element` and writes format keys into the format. The last
/// argument is the default style of the element's tag.
pub type FormatParser = fn(
    &mut ContentModelFormat,
    &NodeRef<'_>,
    &DomToModelContext,
    &Style,
);

/// Which part of the model a set of handlers fills in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
pub enum FormatHandlerCategory {
    Segment,
    /// Segment handlers for block elements: a block's background belongs
    /// to the block, not to its text.
    SegmentOnBlock,
    Link,
    Block,
    Container,
    Image,
    ListLevel,
    ListItem,
    Table,
    TableCell,
}

/// Block format keys a nested block inherits from its parent block.
pub const INHERITABLE_BLOCK_KEYS: &[&str] =
    &["direction", "textAlign", "lineHeight", "whiteSpace"];

/// The built-in handlers of `category`, in the order they run.
pub fn default_format_parsers(category: FormatHandlerCategory) -> Vec<FormatParser> {
    use FormatHandlerCategory::*;
    let parsers: &[FormatParser] = match category {
        Segment => &[
            super_or_sub_script_format_handler,
            strike_format_handler,
            font_family_format_handler,
            font_size_format_handler,
            underline_format_handler,
            italic_format_handler,
            bold_format_handler,
            text_color_format_handler,
            background_color_format_handler,
            letter_spacing_format_handler,
        ],
        SegmentOnBlock => &[
            super_or_sub_script_format_handler,
            strike_format_handler,
            font_family_format_handler,
            font_size_format_handler,
            underline_format_handler,
            italic_format_handler,
            bold_format_handler,
            text_color_format_handler,
            letter_spacing_format_handler,
        ],
        Link => &[link_format_handler],
        Block => &[
            direction_format_handler,
            text_align_format_handler,
            line_height_format_handler,
            white_space_format_handler,
            margin_format_handler,
            padding_format_handler,
            background_color_format_handler,
        ],
        Container => &[
            display_format_handler,
            size_format_handler,
            border_format_handler,
        ],
        Image => &[
            size_format_handler,
            margin_format_handler,
            padding_format_handler,
            border_format_handler,
        ],
        ListLevel => &[
            list_indent_format_handler,
            list_style_type_format_handler,
        ],
        ListItem => &[
            direction_format_handler,
            text_align_format_handler,
            line_height_format_handler,
        ],
        Table => &[
            border_format_handler,
            background_color_format_handler,
            size_format_handler,
            margin_format_handler,
        ],
        TableCell => &[
            border_format_handler,
            background_color_format_handler,
            padding_format_handler,
            direction_format_handler,
            text_align_format_handler,
            vertical_align_format_handler,
            size_format_handler,
        ],
    };
    parsers.to_vec()
}
