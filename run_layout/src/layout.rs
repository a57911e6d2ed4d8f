// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use editable_layout::{
    EngineError, FlowDirection, FontStretch, FontStyle, FontWeight, GlobalProperty, LineSpacing,
    ParagraphAlignment, RangedProperty, RangedValue, ReadingDirection, TextAlignment, TextLayout,
    TextRange, Trimming, WordWrapping,
};

use crate::format::{validate_family, validate_locale, validate_size};
use crate::{
    Access, Brush, FailurePlan, FontCollection, Handle, InlineBox, RunList, TextFormat,
    TrimmingSign, Typography,
};

/// Every ranged attribute at one position.
///
/// Two positions are formatted identically exactly when their snapshots are equal.
#[derive(Clone, Debug, PartialEq)]
pub struct Attributes {
    /// Font collection.
    pub font_collection: Option<Handle<FontCollection>>,
    /// Font family name.
    pub font_family: String,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Font stretch.
    pub font_stretch: FontStretch,
    /// Font size.
    pub font_size: f32,
    /// Underline decoration.
    pub underline: bool,
    /// Strikethrough decoration.
    pub strikethrough: bool,
    /// Locale name.
    pub locale: String,
    /// Drawing effect.
    pub drawing_effect: Option<Handle<Brush>>,
    /// Inline object.
    pub inline_object: Option<Handle<InlineBox>>,
    /// Typographic features.
    pub typography: Option<Handle<Typography>>,
}

#[derive(Debug)]
struct RangedAttributes {
    font_collection: RunList<Option<Handle<FontCollection>>>,
    font_family: RunList<String>,
    font_weight: RunList<FontWeight>,
    font_style: RunList<FontStyle>,
    font_stretch: RunList<FontStretch>,
    font_size: RunList<f32>,
    underline: RunList<bool>,
    strikethrough: RunList<bool>,
    locale: RunList<String>,
    drawing_effect: RunList<Option<Handle<Brush>>>,
    inline_object: RunList<Option<Handle<InlineBox>>>,
    typography: RunList<Option<Handle<Typography>>>,
}

impl RangedAttributes {
    fn new(format: &TextFormat) -> Self {
        Self {
            font_collection: RunList::new(format.font_collection.clone()),
            font_family: RunList::new(format.font_family.clone()),
            font_weight: RunList::new(format.font_weight),
            font_style: RunList::new(format.font_style),
            font_stretch: RunList::new(format.font_stretch),
            font_size: RunList::new(format.font_size),
            underline: RunList::new(false),
            strikethrough: RunList::new(false),
            locale: RunList::new(format.locale.clone()),
            drawing_effect: RunList::new(None),
            inline_object: RunList::new(None),
            typography: RunList::new(None),
        }
    }
}

#[derive(Debug)]
struct GlobalAttributes {
    paragraph_alignment: ParagraphAlignment,
    text_alignment: TextAlignment,
    word_wrapping: WordWrapping,
    reading_direction: ReadingDirection,
    flow_direction: FlowDirection,
    incremental_tab_stop: f32,
    trimming: Trimming,
    trimming_sign: Option<Handle<TrimmingSign>>,
    line_spacing: LineSpacing,
}

impl GlobalAttributes {
    fn new(format: &TextFormat) -> Self {
        Self {
            paragraph_alignment: format.paragraph_alignment,
            text_alignment: format.text_alignment,
            word_wrapping: format.word_wrapping,
            reading_direction: format.reading_direction,
            flow_direction: format.flow_direction,
            incremental_tab_stop: format.incremental_tab_stop,
            trimming: format.trimming,
            trimming_sign: format.trimming_sign.clone(),
            line_spacing: format.line_spacing,
        }
    }
}

/// A layout produced by [`RunLayoutEngine`](crate::RunLayoutEngine).
///
/// The text is fixed at creation. Every ranged attribute is a [`RunList`] over the whole position
/// space, so positions past the end of the text carry formatting too.
#[derive(Debug)]
pub struct RunLayout {
    text: Vec<u16>,
    max_width: f32,
    max_height: f32,
    format: Arc<TextFormat>,
    failures: Arc<FailurePlan>,
    attributes: RangedAttributes,
    globals: GlobalAttributes,
}

impl RunLayout {
    pub(crate) fn new(
        text: &[u16],
        format: Arc<TextFormat>,
        failures: Arc<FailurePlan>,
        max_width: f32,
        max_height: f32,
    ) -> Self {
        Self {
            text: text.to_vec(),
            max_width,
            max_height,
            attributes: RangedAttributes::new(&format),
            globals: GlobalAttributes::new(&format),
            format,
            failures,
        }
    }

    /// The layout's text.
    pub fn text(&self) -> &[u16] {
        &self.text
    }

    /// The layout's text, decoded lossily.
    pub fn text_string(&self) -> String {
        String::from_utf16_lossy(&self.text)
    }

    /// The format this layout started from.
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub(crate) fn format_arc(&self) -> &Arc<TextFormat> {
        &self.format
    }

    /// Replaces the calls that fail on this layout.
    pub fn set_failures(&mut self, failures: FailurePlan) {
        self.failures = Arc::new(failures);
    }

    /// Every ranged attribute at `position`, bypassing the failure plan.
    pub fn attributes_at(&self, position: u32) -> Attributes {
        let a = &self.attributes;
        Attributes {
            font_collection: a.font_collection.get(position).0.clone(),
            font_family: a.font_family.get(position).0.clone(),
            font_weight: *a.font_weight.get(position).0,
            font_style: *a.font_style.get(position).0,
            font_stretch: *a.font_stretch.get(position).0,
            font_size: *a.font_size.get(position).0,
            underline: *a.underline.get(position).0,
            strikethrough: *a.strikethrough.get(position).0,
            locale: a.locale.get(position).0.clone(),
            drawing_effect: a.drawing_effect.get(position).0.clone(),
            inline_object: a.inline_object.get(position).0.clone(),
            typography: a.typography.get(position).0.clone(),
        }
    }

    /// The runs of `property` that start at or before the end of the text.
    ///
    /// The last range reported includes the end-of-text position.
    pub fn runs(&self, property: RangedProperty) -> Vec<TextRange> {
        let end = self.text_len().saturating_add(1);
        let a = &self.attributes;
        match property {
            RangedProperty::FontCollection => a.font_collection.ranges_before(end).collect(),
            RangedProperty::FontFamilyName => a.font_family.ranges_before(end).collect(),
            RangedProperty::FontWeight => a.font_weight.ranges_before(end).collect(),
            RangedProperty::FontStyle => a.font_style.ranges_before(end).collect(),
            RangedProperty::FontStretch => a.font_stretch.ranges_before(end).collect(),
            RangedProperty::FontSize => a.font_size.ranges_before(end).collect(),
            RangedProperty::Underline => a.underline.ranges_before(end).collect(),
            RangedProperty::Strikethrough => a.strikethrough.ranges_before(end).collect(),
            RangedProperty::LocaleName => a.locale.ranges_before(end).collect(),
            RangedProperty::DrawingEffect => a.drawing_effect.ranges_before(end).collect(),
            RangedProperty::InlineObject => a.inline_object.ranges_before(end).collect(),
            RangedProperty::Typography => a.typography.ranges_before(end).collect(),
        }
    }
}

macro_rules! ranged_attribute {
    ($get:ident, $set:ident, $field:ident, $property:ident, $ty:ty) => {
        fn $get(&self, position: u32) -> Result<RangedValue<$ty>, EngineError> {
            self.failures
                .check_ranged(RangedProperty::$property, Access::Get)?;
            let (value, range) = self.attributes.$field.get(position);
            Ok(RangedValue::new(value.clone(), range))
        }

        fn $set(&mut self, value: $ty, range: TextRange) -> Result<(), EngineError> {
            self.failures
                .check_ranged(RangedProperty::$property, Access::Set)?;
            self.attributes.$field.set(range, value);
            Ok(())
        }
    };
}

macro_rules! global_attribute {
    ($get:ident, $set:ident, $field:ident, $property:ident, $ty:ty) => {
        fn $get(&self) -> Result<$ty, EngineError> {
            self.failures
                .check_global(GlobalProperty::$property, Access::Get)?;
            Ok(self.globals.$field)
        }

        fn $set(&mut self, value: $ty) -> Result<(), EngineError> {
            self.failures
                .check_global(GlobalProperty::$property, Access::Set)?;
            self.globals.$field = value;
            Ok(())
        }
    };
}

impl TextLayout for RunLayout {
    type FontCollection = Handle<FontCollection>;
    type DrawingEffect = Handle<Brush>;
    type InlineObject = Handle<InlineBox>;
    type Typography = Handle<Typography>;
    type TrimmingSign = Handle<TrimmingSign>;

    fn text_len(&self) -> u32 {
        u32::try_from(self.text.len()).unwrap_or(u32::MAX)
    }

    fn max_width(&self) -> f32 {
        self.max_width
    }

    fn max_height(&self) -> f32 {
        self.max_height
    }

    ranged_attribute!(
        font_collection,
        set_font_collection,
        font_collection,
        FontCollection,
        Option<Handle<FontCollection>>
    );
    ranged_attribute!(font_weight, set_font_weight, font_weight, FontWeight, FontWeight);
    ranged_attribute!(font_style, set_font_style, font_style, FontStyle, FontStyle);
    ranged_attribute!(
        font_stretch,
        set_font_stretch,
        font_stretch,
        FontStretch,
        FontStretch
    );
    ranged_attribute!(underline, set_underline, underline, Underline, bool);
    ranged_attribute!(
        strikethrough,
        set_strikethrough,
        strikethrough,
        Strikethrough,
        bool
    );
    ranged_attribute!(
        drawing_effect,
        set_drawing_effect,
        drawing_effect,
        DrawingEffect,
        Option<Handle<Brush>>
    );
    ranged_attribute!(
        inline_object,
        set_inline_object,
        inline_object,
        InlineObject,
        Option<Handle<InlineBox>>
    );
    ranged_attribute!(
        typography,
        set_typography,
        typography,
        Typography,
        Option<Handle<Typography>>
    );

    fn font_family_name(&self, position: u32) -> Result<RangedValue<String>, EngineError> {
        self.failures
            .check_ranged(RangedProperty::FontFamilyName, Access::Get)?;
        let (name, range) = self.attributes.font_family.get(position);
        Ok(RangedValue::new(name.clone(), range))
    }

    fn set_font_family_name(&mut self, name: &str, range: TextRange) -> Result<(), EngineError> {
        self.failures
            .check_ranged(RangedProperty::FontFamilyName, Access::Set)?;
        validate_family(name)?;
        self.attributes.font_family.set(range, String::from(name));
        Ok(())
    }

    fn font_size(&self, position: u32) -> Result<RangedValue<f32>, EngineError> {
        self.failures
            .check_ranged(RangedProperty::FontSize, Access::Get)?;
        let (size, range) = self.attributes.font_size.get(position);
        Ok(RangedValue::new(*size, range))
    }

    fn set_font_size(&mut self, size: f32, range: TextRange) -> Result<(), EngineError> {
        self.failures
            .check_ranged(RangedProperty::FontSize, Access::Set)?;
        validate_size(size)?;
        self.attributes.font_size.set(range, size);
        Ok(())
    }

    fn locale_name(&self, position: u32) -> Result<RangedValue<String>, EngineError> {
        self.failures
            .check_ranged(RangedProperty::LocaleName, Access::Get)?;
        let (locale, range) = self.attributes.locale.get(position);
        Ok(RangedValue::new(locale.clone(), range))
    }

    fn set_locale_name(&mut self, locale: &str, range: TextRange) -> Result<(), EngineError> {
        self.failures
            .check_ranged(RangedProperty::LocaleName, Access::Set)?;
        validate_locale(locale)?;
        self.attributes.locale.set(range, String::from(locale));
        Ok(())
    }

    global_attribute!(
        paragraph_alignment,
        set_paragraph_alignment,
        paragraph_alignment,
        ParagraphAlignment,
        ParagraphAlignment
    );
    global_attribute!(
        text_alignment,
        set_text_alignment,
        text_alignment,
        TextAlignment,
        TextAlignment
    );
    global_attribute!(
        word_wrapping,
        set_word_wrapping,
        word_wrapping,
        WordWrapping,
        WordWrapping
    );
    global_attribute!(
        reading_direction,
        set_reading_direction,
        reading_direction,
        ReadingDirection,
        ReadingDirection
    );
    global_attribute!(
        flow_direction,
        set_flow_direction,
        flow_direction,
        FlowDirection,
        FlowDirection
    );
    global_attribute!(
        incremental_tab_stop,
        set_incremental_tab_stop,
        incremental_tab_stop,
        IncrementalTabStop,
        f32
    );
    global_attribute!(
        line_spacing,
        set_line_spacing,
        line_spacing,
        LineSpacing,
        LineSpacing
    );

    fn trimming(&self) -> Result<(Trimming, Option<Handle<TrimmingSign>>), EngineError> {
        self.failures
            .check_global(GlobalProperty::Trimming, Access::Get)?;
        Ok((self.globals.trimming, self.globals.trimming_sign.clone()))
    }

    fn set_trimming(
        &mut self,
        trimming: Trimming,
        sign: Option<Handle<TrimmingSign>>,
    ) -> Result<(), EngineError> {
        self.failures
            .check_global(GlobalProperty::Trimming, Access::Set)?;
        self.globals.trimming = trimming;
        self.globals.trimming_sign = sign;
        Ok(())
    }
}
