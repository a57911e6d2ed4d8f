// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute transfer between an old layout and its replacement.

use crate::report::FailedProperty;
use crate::{
    CaretFormat, EditReport, EngineError, EngineErrorKind, GlobalProperty, RangedProperty,
    RunDiscovery, TextLayout, TextRange,
};

#[inline]
fn transfer(report: &mut EditReport, property: FailedProperty, result: Result<(), EngineError>) {
    if let Err(err) = result {
        report.record(property, err);
    }
}

/// Copies one uniformly formatted block from `old_pos` in `old` to `new_pos..new_pos + length`
/// in `new`.
///
/// With a `caret` format, the font attributes come from the caret instead of the old layout.
/// The font collection, drawing effect, inline object and typography are always taken from
/// `old_pos`. Each attribute is transferred independently; failures are recorded in `report`.
pub(crate) fn copy_single_property_range<L: TextLayout>(
    old: &L,
    old_pos: u32,
    new: &mut L,
    new_pos: u32,
    length: u32,
    caret: Option<&CaretFormat>,
    report: &mut EditReport,
) {
    let range = TextRange::new(new_pos, length).clamped();
    let ranged = |property| FailedProperty::Ranged(property, range);

    transfer(
        report,
        ranged(RangedProperty::FontCollection),
        old.font_collection(old_pos)
            .and_then(|c| new.set_font_collection(c.value, range)),
    );

    if let Some(caret) = caret {
        transfer(
            report,
            ranged(RangedProperty::FontFamilyName),
            new.set_font_family_name(&caret.font_family, range),
        );
        transfer(
            report,
            ranged(RangedProperty::LocaleName),
            new.set_locale_name(&caret.locale, range),
        );
        transfer(
            report,
            ranged(RangedProperty::FontWeight),
            new.set_font_weight(caret.font_weight, range),
        );
        transfer(
            report,
            ranged(RangedProperty::FontStyle),
            new.set_font_style(caret.font_style, range),
        );
        transfer(
            report,
            ranged(RangedProperty::FontStretch),
            new.set_font_stretch(caret.font_stretch, range),
        );
        transfer(
            report,
            ranged(RangedProperty::FontSize),
            new.set_font_size(caret.font_size, range),
        );
        transfer(
            report,
            ranged(RangedProperty::Underline),
            new.set_underline(caret.underline, range),
        );
        transfer(
            report,
            ranged(RangedProperty::Strikethrough),
            new.set_strikethrough(caret.strikethrough, range),
        );
    } else {
        transfer(
            report,
            ranged(RangedProperty::FontFamilyName),
            old.font_family_name(old_pos)
                .and_then(|name| new.set_font_family_name(&name.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::FontWeight),
            old.font_weight(old_pos)
                .and_then(|weight| new.set_font_weight(weight.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::FontStyle),
            old.font_style(old_pos)
                .and_then(|style| new.set_font_style(style.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::FontStretch),
            old.font_stretch(old_pos)
                .and_then(|stretch| new.set_font_stretch(stretch.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::FontSize),
            old.font_size(old_pos)
                .and_then(|size| new.set_font_size(size.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::Underline),
            old.underline(old_pos)
                .and_then(|underline| new.set_underline(underline.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::Strikethrough),
            old.strikethrough(old_pos)
                .and_then(|strike| new.set_strikethrough(strike.value, range)),
        );
        transfer(
            report,
            ranged(RangedProperty::LocaleName),
            old.locale_name(old_pos)
                .and_then(|locale| new.set_locale_name(&locale.value, range)),
        );
    }

    transfer(
        report,
        ranged(RangedProperty::DrawingEffect),
        old.drawing_effect(old_pos)
            .and_then(|effect| new.set_drawing_effect(effect.value, range)),
    );
    transfer(
        report,
        ranged(RangedProperty::InlineObject),
        old.inline_object(old_pos)
            .and_then(|object| new.set_inline_object(object.value, range)),
    );
    transfer(
        report,
        ranged(RangedProperty::Typography),
        old.typography(old_pos)
            .and_then(|typography| new.set_typography(typography.value, range)),
    );
}

/// Copies every layout-wide attribute from `old` to `new`.
pub(crate) fn copy_global_properties<L: TextLayout>(old: &L, new: &mut L, report: &mut EditReport) {
    let global = FailedProperty::Global;

    transfer(
        report,
        global(GlobalProperty::ParagraphAlignment),
        old.paragraph_alignment()
            .and_then(|v| new.set_paragraph_alignment(v)),
    );
    transfer(
        report,
        global(GlobalProperty::TextAlignment),
        old.text_alignment().and_then(|v| new.set_text_alignment(v)),
    );
    transfer(
        report,
        global(GlobalProperty::WordWrapping),
        old.word_wrapping().and_then(|v| new.set_word_wrapping(v)),
    );
    transfer(
        report,
        global(GlobalProperty::ReadingDirection),
        old.reading_direction()
            .and_then(|v| new.set_reading_direction(v)),
    );
    transfer(
        report,
        global(GlobalProperty::FlowDirection),
        old.flow_direction().and_then(|v| new.set_flow_direction(v)),
    );
    transfer(
        report,
        global(GlobalProperty::IncrementalTabStop),
        old.incremental_tab_stop()
            .and_then(|v| new.set_incremental_tab_stop(v)),
    );
    transfer(
        report,
        global(GlobalProperty::Trimming),
        old.trimming()
            .and_then(|(trimming, sign)| new.set_trimming(trimming, sign)),
    );
    transfer(
        report,
        global(GlobalProperty::LineSpacing),
        old.line_spacing().and_then(|v| new.set_line_spacing(v)),
    );
}

/// The number of positions from `position` over which `layout` is uniformly formatted.
///
/// May be `0` if the engine reports a range that does not contain `position`.
pub(crate) fn run_length_at<L: TextLayout>(
    layout: &L,
    position: u32,
    discovery: RunDiscovery,
) -> Result<u32, EngineError> {
    if discovery == RunDiscovery::FontWeight {
        return Ok(layout.font_weight(position)?.range.remaining_from(position));
    }

    let ranges = [
        layout.font_weight(position).map(|v| v.range),
        layout.font_collection(position).map(|v| v.range),
        layout.font_family_name(position).map(|v| v.range),
        layout.font_style(position).map(|v| v.range),
        layout.font_stretch(position).map(|v| v.range),
        layout.font_size(position).map(|v| v.range),
        layout.underline(position).map(|v| v.range),
        layout.strikethrough(position).map(|v| v.range),
        layout.locale_name(position).map(|v| v.range),
        layout.drawing_effect(position).map(|v| v.range),
        layout.inline_object(position).map(|v| v.range),
        layout.typography(position).map(|v| v.range),
    ];

    // Attributes that cannot be read are skipped here; their copy will fail and be reported.
    let mut shortest: Option<u32> = None;
    let mut last_err = EngineError::new(EngineErrorKind::Failed);
    for range in ranges {
        match range {
            Ok(range) => {
                let remaining = range.remaining_from(position);
                shortest = Some(shortest.map_or(remaining, |s| s.min(remaining)));
            }
            Err(err) => last_err = err,
        }
    }
    shortest.ok_or(last_err)
}
