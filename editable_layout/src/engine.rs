// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{
    EngineError, FlowDirection, FontStretch, FontStyle, FontWeight, LineSpacing,
    ParagraphAlignment, RangedValue, ReadingDirection, TextAlignment, TextRange, Trimming,
    WordWrapping,
};

/// Creates text layouts.
///
/// The engine is the only thing [`EditableLayout`] needs to hold on to: everything else is passed
/// in per call.
///
/// [`EditableLayout`]: crate::EditableLayout
pub trait TextLayoutEngine {
    /// The layout objects this engine produces.
    type Layout: TextLayout;

    /// Creates a layout for `text` that inherits its format defaults from `parent`.
    ///
    /// Only format-level defaults (and layout-wide attributes the engine chooses to carry) are
    /// inherited; ranged attributes applied to `parent` are not.
    fn create_layout(
        &self,
        text: &[u16],
        parent: &Self::Layout,
        max_width: f32,
        max_height: f32,
    ) -> Result<Self::Layout, EngineError>;

    /// Creates the first layout of a document, using the engine's default format.
    fn create_root_layout(
        &self,
        text: &[u16],
        max_width: f32,
        max_height: f32,
    ) -> Result<Self::Layout, EngineError>;
}

/// A formatted, laid-out string whose text is fixed at creation.
///
/// Ranged getters return the value at a position together with the range over which it is
/// uniform. Positions at or past the end of the text are valid; they address the formatting that
/// text appended at the end would receive.
///
/// Handles (`FontCollection`, `DrawingEffect`, ...) are reference-counted: cloning one takes a
/// reference and dropping it releases the reference.
pub trait TextLayout {
    /// Reference to a font collection.
    type FontCollection: Clone;
    /// Reference to an application-defined drawing effect, typically a brush.
    type DrawingEffect: Clone;
    /// Reference to an inline object.
    type InlineObject: Clone;
    /// Reference to a set of typographic features.
    type Typography: Clone;
    /// Reference to the object drawn where trimmed text is omitted.
    type TrimmingSign: Clone;

    /// The number of code units in the layout's text.
    fn text_len(&self) -> u32;

    /// The width of the layout box.
    fn max_width(&self) -> f32;

    /// The height of the layout box.
    fn max_height(&self) -> f32;

    // --- MARK: Ranged attributes ---

    /// The font collection at `position`.
    fn font_collection(
        &self,
        position: u32,
    ) -> Result<RangedValue<Option<Self::FontCollection>>, EngineError>;

    /// Sets the font collection over `range`.
    fn set_font_collection(
        &mut self,
        collection: Option<Self::FontCollection>,
        range: TextRange,
    ) -> Result<(), EngineError>;

    /// The font family name at `position`.
    fn font_family_name(&self, position: u32) -> Result<RangedValue<String>, EngineError>;

    /// Sets the font family name over `range`.
    fn set_font_family_name(&mut self, name: &str, range: TextRange) -> Result<(), EngineError>;

    /// The font weight at `position`.
    fn font_weight(&self, position: u32) -> Result<RangedValue<FontWeight>, EngineError>;

    /// Sets the font weight over `range`.
    fn set_font_weight(&mut self, weight: FontWeight, range: TextRange)
    -> Result<(), EngineError>;

    /// The font style at `position`.
    fn font_style(&self, position: u32) -> Result<RangedValue<FontStyle>, EngineError>;

    /// Sets the font style over `range`.
    fn set_font_style(&mut self, style: FontStyle, range: TextRange) -> Result<(), EngineError>;

    /// The font stretch at `position`.
    fn font_stretch(&self, position: u32) -> Result<RangedValue<FontStretch>, EngineError>;

    /// Sets the font stretch over `range`.
    fn set_font_stretch(
        &mut self,
        stretch: FontStretch,
        range: TextRange,
    ) -> Result<(), EngineError>;

    /// The font size at `position`.
    fn font_size(&self, position: u32) -> Result<RangedValue<f32>, EngineError>;

    /// Sets the font size over `range`.
    fn set_font_size(&mut self, size: f32, range: TextRange) -> Result<(), EngineError>;

    /// Whether the text at `position` is underlined.
    fn underline(&self, position: u32) -> Result<RangedValue<bool>, EngineError>;

    /// Sets underlining over `range`.
    fn set_underline(&mut self, underline: bool, range: TextRange) -> Result<(), EngineError>;

    /// Whether the text at `position` is struck through.
    fn strikethrough(&self, position: u32) -> Result<RangedValue<bool>, EngineError>;

    /// Sets strikethrough over `range`.
    fn set_strikethrough(
        &mut self,
        strikethrough: bool,
        range: TextRange,
    ) -> Result<(), EngineError>;

    /// The locale name at `position`.
    fn locale_name(&self, position: u32) -> Result<RangedValue<String>, EngineError>;

    /// Sets the locale name over `range`.
    ///
    /// Names longer than [`MAX_LOCALE_NAME_LEN`](crate::MAX_LOCALE_NAME_LEN) are rejected.
    fn set_locale_name(&mut self, locale: &str, range: TextRange) -> Result<(), EngineError>;

    /// The drawing effect at `position`.
    fn drawing_effect(
        &self,
        position: u32,
    ) -> Result<RangedValue<Option<Self::DrawingEffect>>, EngineError>;

    /// Sets the drawing effect over `range`.
    fn set_drawing_effect(
        &mut self,
        effect: Option<Self::DrawingEffect>,
        range: TextRange,
    ) -> Result<(), EngineError>;

    /// The inline object at `position`.
    fn inline_object(
        &self,
        position: u32,
    ) -> Result<RangedValue<Option<Self::InlineObject>>, EngineError>;

    /// Sets the inline object over `range`.
    fn set_inline_object(
        &mut self,
        object: Option<Self::InlineObject>,
        range: TextRange,
    ) -> Result<(), EngineError>;

    /// The typographic features at `position`.
    fn typography(
        &self,
        position: u32,
    ) -> Result<RangedValue<Option<Self::Typography>>, EngineError>;

    /// Sets the typographic features over `range`.
    fn set_typography(
        &mut self,
        typography: Option<Self::Typography>,
        range: TextRange,
    ) -> Result<(), EngineError>;

    // --- MARK: Layout-wide attributes ---

    /// Paragraph alignment.
    fn paragraph_alignment(&self) -> Result<ParagraphAlignment, EngineError>;

    /// Sets paragraph alignment.
    fn set_paragraph_alignment(&mut self, alignment: ParagraphAlignment)
    -> Result<(), EngineError>;

    /// Text alignment.
    fn text_alignment(&self) -> Result<TextAlignment, EngineError>;

    /// Sets text alignment.
    fn set_text_alignment(&mut self, alignment: TextAlignment) -> Result<(), EngineError>;

    /// Word wrapping.
    fn word_wrapping(&self) -> Result<WordWrapping, EngineError>;

    /// Sets word wrapping.
    fn set_word_wrapping(&mut self, wrapping: WordWrapping) -> Result<(), EngineError>;

    /// Reading direction.
    fn reading_direction(&self) -> Result<ReadingDirection, EngineError>;

    /// Sets the reading direction.
    fn set_reading_direction(&mut self, direction: ReadingDirection) -> Result<(), EngineError>;

    /// Flow direction.
    fn flow_direction(&self) -> Result<FlowDirection, EngineError>;

    /// Sets the flow direction.
    fn set_flow_direction(&mut self, direction: FlowDirection) -> Result<(), EngineError>;

    /// Distance between default tab stops.
    fn incremental_tab_stop(&self) -> Result<f32, EngineError>;

    /// Sets the distance between default tab stops.
    fn set_incremental_tab_stop(&mut self, tab_stop: f32) -> Result<(), EngineError>;

    /// Trimming configuration and sign.
    fn trimming(&self) -> Result<(Trimming, Option<Self::TrimmingSign>), EngineError>;

    /// Sets the trimming configuration and sign.
    fn set_trimming(
        &mut self,
        trimming: Trimming,
        sign: Option<Self::TrimmingSign>,
    ) -> Result<(), EngineError>;

    /// Line spacing.
    fn line_spacing(&self) -> Result<LineSpacing, EngineError>;

    /// Sets line spacing.
    fn set_line_spacing(&mut self, spacing: LineSpacing) -> Result<(), EngineError>;
}

impl<E: TextLayoutEngine + ?Sized> TextLayoutEngine for &E {
    type Layout = E::Layout;

    fn create_layout(
        &self,
        text: &[u16],
        parent: &Self::Layout,
        max_width: f32,
        max_height: f32,
    ) -> Result<Self::Layout, EngineError> {
        (**self).create_layout(text, parent, max_width, max_height)
    }

    fn create_root_layout(
        &self,
        text: &[u16],
        max_width: f32,
        max_height: f32,
    ) -> Result<Self::Layout, EngineError> {
        (**self).create_root_layout(text, max_width, max_height)
    }
}
