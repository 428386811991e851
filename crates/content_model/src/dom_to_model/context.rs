// Copyright 2024 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use std::collections::HashMap;
use std::mem;

use strum::IntoEnumIterator;

use super::parse_format;
use super::processors::{default_processor, ElementProcessor, ProcessorCategory};
use crate::dom::NodeRef;
use crate::format_handlers::{
    default_format_parsers, FormatHandlerCategory, FormatParser,
};
use crate::model::{ContentModelFormat, ContentModelListLevel};

/// What the host editor knows about its surface.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorContext {
    pub is_dark_mode: bool,
}

/// Per-call options for a DOM to model conversion.
#[derive(Clone, Debug, Default)]
pub struct DomToModelOption {
    /// Do not remember which element a table came from.
    pub disable_cache_element: bool,
    /// Convert the root element itself rather than only its children.
    pub include_root: bool,
    /// Replace the built-in processor of a category.
    pub processor_override: HashMap<ProcessorCategory, ElementProcessor>,
    /// Extra handlers that run after the built-in ones of a category.
    pub additional_format_parsers:
        HashMap<FormatHandlerCategory, Vec<FormatParser>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFormatContext {
    /// Open list levels, outermost first.
    pub levels: Vec<ContentModelListLevel>,
}

/// State threaded through one conversion.
///
/// Formats are inherited from the parent element. A processor that changes
/// them does so inside [`DomToModelContext::stack_format`] so its siblings
/// never see the change.
#[derive(Clone, Debug)]
pub struct DomToModelContext {
    pub is_dark_mode: bool,
    pub disable_cache_element: bool,
    pub include_root: bool,
    pub segment_format: ContentModelFormat,
    pub block_format: ContentModelFormat,
    pub list_format: ListFormatContext,
    processors: HashMap<ProcessorCategory, ElementProcessor>,
    format_parsers: HashMap<FormatHandlerCategory, Vec<FormatParser>>,
}

pub fn create_dom_to_model_context(
    editor_context: Option<&EditorContext>,
    option: Option<&DomToModelOption>,
) -> DomToModelContext {
    let default_option = DomToModelOption::default();
    let option = option.unwrap_or(&default_option);

    let mut processors: HashMap<ProcessorCategory, ElementProcessor> =
        ProcessorCategory::iter()
            .map(|category| (category, default_processor(category)))
            .collect();
    processors.extend(
        option
            .processor_override
            .iter()
            .map(|(category, processor)| (*category, *processor)),
    );

    let format_parsers = FormatHandlerCategory::iter()
        .map(|category| {
            let mut parsers = default_format_parsers(category);
            if let Some(additional) =
                option.additional_format_parsers.get(&category)
            {
                parsers.extend(additional.iter().copied());
            }
            (category, parsers)
        })
        .collect();

    DomToModelContext {
        is_dark_mode: editor_context.is_some_and(|c| c.is_dark_mode),
        disable_cache_element: option.disable_cache_element,
        include_root: option.include_root,
        segment_format: ContentModelFormat::new(),
        block_format: ContentModelFormat::new(),
        list_format: ListFormatContext::default(),
        processors,
        format_parsers,
    }
}

impl DomToModelContext {
    pub fn processor(&self, category: ProcessorCategory) -> ElementProcessor {
        self.processors
            .get(&category)
            .copied()
            .unwrap_or_else(|| default_processor(category))
    }

    pub fn format_parsers(&self, category: FormatHandlerCategory) -> &[FormatParser] {
        self.format_parsers
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Run the handlers of `category` over `element`, writing into `format`.
    pub fn parse_into(
        &self,
        category: FormatHandlerCategory,
        element: &NodeRef<'_>,
        format: &mut ContentModelFormat,
    ) {
        parse_format(element, self.format_parsers(category), format, self);
    }

    /// Run `f` and restore the segment and block formats afterwards.
    pub fn stack_format<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let segment_format = self.segment_format.clone();
        let block_format = self.block_format.clone();
        let result = f(self);
        self.segment_format = segment_format;
        self.block_format = block_format;
        result
    }

    /// Like [`DomToModelContext::stack_format`], and also hides the open
    /// list levels from `f`. Used for table cells, which start a fresh
    /// list context.
    pub fn stack_list_format<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let levels = mem::take(&mut self.list_format.levels);
        let result = self.stack_format(f);
        self.list_format.levels = levels;
        result
    }
}
