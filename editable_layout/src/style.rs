// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// The longest locale name a layout accepts, in UTF-16 code units, including the terminator.
pub const MAX_LOCALE_NAME_LEN: usize = 85;

/// The longest font family name a layout accepts, in UTF-16 code units.
pub const MAX_FONT_FAMILY_NAME_LEN: usize = 256;

/// Visual weight class of a font, on a scale from 1 to 999.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300);

    /// Weight value of 350.
    pub const SEMI_LIGHT: Self = Self(350);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900);

    /// Weight value of 950.
    pub const EXTRA_BLACK: Self = Self(950);

    /// Creates a weight, clamped to `1..=999`.
    pub const fn new(weight: u16) -> Self {
        Self(if weight < 1 {
            1
        } else if weight > 999 {
            999
        } else {
            weight
        })
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self.0 {
            100 => "thin",
            200 => "extra-light",
            300 => "light",
            350 => "semi-light",
            400 => "normal",
            500 => "medium",
            600 => "semi-bold",
            700 => "bold",
            800 => "extra-bold",
            900 => "black",
            950 => "extra-black",
            _ => return write!(f, "{}", self.0),
        };
        f.write_str(keyword)
    }
}

/// Slant of a font face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Artificially slanted glyphs.
    Oblique,
    /// Glyphs drawn from a dedicated italic face.
    Italic,
}

/// Width of a font face relative to its normal aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FontStretch {
    /// 50% of normal.
    UltraCondensed,
    /// 62.5% of normal.
    ExtraCondensed,
    /// 75% of normal.
    Condensed,
    /// 87.5% of normal.
    SemiCondensed,
    /// The normal width.
    #[default]
    Normal,
    /// 112.5% of normal.
    SemiExpanded,
    /// 125% of normal.
    Expanded,
    /// 150% of normal.
    ExtraExpanded,
    /// 200% of normal.
    UltraExpanded,
}

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

/// The typing style in effect at the caret.
///
/// Used for inserted text that should not inherit its formatting from a neighbouring character,
/// e.g. the first characters typed into an empty document or text typed after the user picked a
/// new font without a selection.
#[derive(Clone, Debug, PartialEq)]
pub struct CaretFormat {
    /// Font family name.
    pub font_family: String,
    /// BCP 47 locale name.
    pub locale: String,
    /// Font size in DIPs.
    pub font_size: f32,
    /// Font weight.
    pub font_weight: FontWeight,
    /// Font stretch.
    pub font_stretch: FontStretch,
    /// Font style.
    pub font_style: FontStyle,
    /// Text color. Carried for the editor's brush selection; layouts take color through their
    /// drawing effects.
    pub color: Color,
    /// Underline decoration.
    pub underline: bool,
    /// Strikethrough decoration.
    pub strikethrough: bool,
}

impl Default for CaretFormat {
    fn default() -> Self {
        Self {
            font_family: String::from("Segoe UI"),
            locale: String::from("en-us"),
            font_size: 16.0,
            font_weight: FontWeight::NORMAL,
            font_stretch: FontStretch::Normal,
            font_style: FontStyle::Normal,
            color: Color::BLACK,
            underline: false,
            strikethrough: false,
        }
    }
}

/// Names a ranged layout attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangedProperty {
    /// Font collection the family name is resolved against.
    FontCollection,
    /// Font family name.
    FontFamilyName,
    /// Font weight.
    FontWeight,
    /// Font style.
    FontStyle,
    /// Font stretch.
    FontStretch,
    /// Font size.
    FontSize,
    /// Underline decoration.
    Underline,
    /// Strikethrough decoration.
    Strikethrough,
    /// Locale name.
    LocaleName,
    /// Application-defined drawing effect.
    DrawingEffect,
    /// Inline object.
    InlineObject,
    /// Typographic features.
    Typography,
}

impl RangedProperty {
    /// Every ranged attribute, in the order they are copied.
    pub const ALL: [Self; 12] = [
        Self::FontCollection,
        Self::FontFamilyName,
        Self::FontWeight,
        Self::FontStyle,
        Self::FontStretch,
        Self::FontSize,
        Self::Underline,
        Self::Strikethrough,
        Self::LocaleName,
        Self::DrawingEffect,
        Self::InlineObject,
        Self::Typography,
    ];
}

impl fmt::Display for RangedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FontCollection => "font collection",
            Self::FontFamilyName => "font family name",
            Self::FontWeight => "font weight",
            Self::FontStyle => "font style",
            Self::FontStretch => "font stretch",
            Self::FontSize => "font size",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::LocaleName => "locale name",
            Self::DrawingEffect => "drawing effect",
            Self::InlineObject => "inline object",
            Self::Typography => "typography",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FontStretch, FontWeight};
    use alloc::string::ToString;

    #[test]
    fn weight_clamps_and_displays() {
        assert_eq!(FontWeight::new(0).value(), 1);
        assert_eq!(FontWeight::new(1200).value(), 999);
        assert_eq!(FontWeight::BOLD.to_string(), "bold");
        assert_eq!(FontWeight::new(450).to_string(), "450");
    }

    #[test]
    fn stretch_is_ordered_by_width() {
        assert!(FontStretch::Condensed < FontStretch::Normal);
        assert!(FontStretch::Expanded < FontStretch::UltraExpanded);
    }
}
