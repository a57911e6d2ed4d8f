// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use editable_layout::{
    EngineError, EngineErrorKind, FlowDirection, FontStretch, FontStyle, FontWeight,
    LineSpacing, MAX_FONT_FAMILY_NAME_LEN, MAX_LOCALE_NAME_LEN, ParagraphAlignment,
    ReadingDirection, TextAlignment, Trimming, WordWrapping,
};

use crate::{FontCollection, Handle, TrimmingSign};

/// Format defaults a layout starts from.
///
/// Ranged attributes of a new layout hold these values everywhere until they are set; layout-wide
/// attributes start from the paragraph fields.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFormat {
    /// Font collection family names are resolved against.
    pub font_collection: Option<Handle<FontCollection>>,
    /// Font family name.
    pub font_family: String,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font style.
    pub font_style: FontStyle,
    /// Font stretch.
    pub font_stretch: FontStretch,
    /// Font size in DIPs.
    pub font_size: f32,
    /// Locale name.
    pub locale: String,
    /// Paragraph alignment.
    pub paragraph_alignment: ParagraphAlignment,
    /// Text alignment.
    pub text_alignment: TextAlignment,
    /// Word wrapping.
    pub word_wrapping: WordWrapping,
    /// Reading direction.
    pub reading_direction: ReadingDirection,
    /// Flow direction.
    pub flow_direction: FlowDirection,
    /// Distance between default tab stops.
    pub incremental_tab_stop: f32,
    /// Trimming configuration.
    pub trimming: Trimming,
    /// Trimming sign.
    pub trimming_sign: Option<Handle<TrimmingSign>>,
    /// Line spacing.
    pub line_spacing: LineSpacing,
}

impl Default for TextFormat {
    fn default() -> Self {
        let font_size = 16.0;
        Self {
            font_collection: None,
            font_family: String::from("Segoe UI"),
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
            font_stretch: FontStretch::Normal,
            font_size,
            locale: String::from("en-us"),
            paragraph_alignment: ParagraphAlignment::Near,
            text_alignment: TextAlignment::Leading,
            word_wrapping: WordWrapping::Wrap,
            reading_direction: ReadingDirection::LeftToRight,
            flow_direction: FlowDirection::TopToBottom,
            incremental_tab_stop: font_size * 4.0,
            trimming: Trimming::default(),
            trimming_sign: None,
            line_spacing: LineSpacing::default(),
        }
    }
}

impl TextFormat {
    /// Checks the names and sizes the engine would reject.
    pub fn validate(&self) -> Result<(), EngineError> {
        validate_family(&self.font_family)?;
        validate_locale(&self.locale)?;
        validate_size(self.font_size)
    }
}

pub(crate) fn validate_family(name: &str) -> Result<(), EngineError> {
    if name.encode_utf16().count() > MAX_FONT_FAMILY_NAME_LEN {
        return Err(EngineError::new(EngineErrorKind::InvalidArgument));
    }
    Ok(())
}

pub(crate) fn validate_locale(locale: &str) -> Result<(), EngineError> {
    // The bound includes the terminator.
    if locale.encode_utf16().count() >= MAX_LOCALE_NAME_LEN {
        return Err(EngineError::new(EngineErrorKind::InvalidArgument));
    }
    Ok(())
}

pub(crate) fn validate_size(size: f32) -> Result<(), EngineError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(EngineError::new(EngineErrorKind::InvalidArgument));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{TextFormat, validate_locale};
    use alloc::string::String;
    use editable_layout::EngineErrorKind;

    #[test]
    fn default_format_is_valid() {
        assert!(TextFormat::default().validate().is_ok());
    }

    #[test]
    fn locale_bound_counts_terminator() {
        let longest: String = core::iter::repeat_n('a', 84).collect();
        assert!(validate_locale(&longest).is_ok());
        let too_long: String = core::iter::repeat_n('a', 85).collect();
        assert_eq!(
            validate_locale(&too_long).unwrap_err().kind(),
            EngineErrorKind::InvalidArgument
        );
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let format = TextFormat {
            font_size: 0.0,
            ..TextFormat::default()
        };
        assert!(format.validate().is_err());
    }
}
