// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-wide attributes.

use core::fmt;

/// Placement of the paragraphs along the flow direction of the layout box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ParagraphAlignment {
    /// Align to the leading edge of the layout box.
    #[default]
    Near,
    /// Align to the trailing edge of the layout box.
    Far,
    /// Center within the layout box.
    Center,
}

/// Alignment of lines along the reading direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    /// Align to the leading edge.
    #[default]
    Leading,
    /// Align to the trailing edge.
    Trailing,
    /// Center each line.
    Center,
    /// Stretch lines to fill the layout width.
    Justified,
}

/// Line breaking behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WordWrapping {
    /// Break at word boundaries to avoid overflow.
    #[default]
    Wrap,
    /// Keep lines unbroken, even when they overflow.
    NoWrap,
    /// Break at word boundaries, falling back to arbitrary breaks when a word overflows.
    EmergencyBreak,
    /// Break only at word boundaries, even when a word overflows.
    WholeWord,
    /// Break between any two characters.
    Character,
}

/// Direction in which characters progress within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ReadingDirection {
    /// Left to right.
    #[default]
    LeftToRight,
    /// Right to left.
    RightToLeft,
    /// Top to bottom.
    TopToBottom,
    /// Bottom to top.
    BottomToTop,
}

/// Direction in which lines progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FlowDirection {
    /// Top to bottom.
    #[default]
    TopToBottom,
    /// Bottom to top.
    BottomToTop,
    /// Left to right.
    LeftToRight,
    /// Right to left.
    RightToLeft,
}

/// Unit at which overflowing text is trimmed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TrimmingGranularity {
    /// No trimming.
    #[default]
    None,
    /// Trim at character boundaries.
    Character,
    /// Trim at word boundaries.
    Word,
}

/// Trimming configuration for text that overflows the layout box.
///
/// The trimming sign (e.g. an ellipsis object) travels separately, as a layout handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Trimming {
    /// Where trimming may happen.
    pub granularity: TrimmingGranularity,
    /// Code point of the delimiter whose surroundings are kept visible, `0` for none.
    pub delimiter: u32,
    /// How many delimiters from the end to keep visible.
    pub delimiter_count: u32,
}

/// How line heights are computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineSpacingMethod {
    /// Derived from the fonts and inline objects on each line.
    #[default]
    Default,
    /// Every line uses the same explicit height and baseline.
    Uniform,
    /// The default height scaled by a factor.
    Proportional,
}

/// Line spacing configuration.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LineSpacing {
    /// How `height` and `baseline` are interpreted.
    pub method: LineSpacingMethod,
    /// The line height (or height factor for [`LineSpacingMethod::Proportional`]).
    pub height: f32,
    /// Distance from the top of the line to its baseline.
    pub baseline: f32,
}

/// Names a layout-wide attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlobalProperty {
    /// Paragraph alignment.
    ParagraphAlignment,
    /// Text alignment.
    TextAlignment,
    /// Word wrapping.
    WordWrapping,
    /// Reading direction.
    ReadingDirection,
    /// Flow direction.
    FlowDirection,
    /// Incremental tab stop.
    IncrementalTabStop,
    /// Trimming configuration and sign.
    Trimming,
    /// Line spacing.
    LineSpacing,
}

impl fmt::Display for GlobalProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ParagraphAlignment => "paragraph alignment",
            Self::TextAlignment => "text alignment",
            Self::WordWrapping => "word wrapping",
            Self::ReadingDirection => "reading direction",
            Self::FlowDirection => "flow direction",
            Self::IncrementalTabStop => "incremental tab stop",
            Self::Trimming => "trimming",
            Self::LineSpacing => "line spacing",
        })
    }
}
