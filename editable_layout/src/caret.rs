// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{CaretFormat, TextLayout};

/// Reads the typing style for a caret at `position` from `layout`.
///
/// The caret takes the formatting of the character before it, or of the first character when it
/// sits at the start of the text. Attributes the layout cannot report keep their value from
/// `fallback`, as does the color, which layouts only expose through opaque drawing effects.
pub fn caret_format_at<L: TextLayout>(
    layout: &L,
    position: u32,
    fallback: &CaretFormat,
) -> CaretFormat {
    let at = position.saturating_sub(1);
    let mut format = fallback.clone();

    if let Ok(family) = layout.font_family_name(at) {
        format.font_family = family.value;
    }
    if let Ok(locale) = layout.locale_name(at) {
        format.locale = locale.value;
    }
    if let Ok(size) = layout.font_size(at) {
        format.font_size = size.value;
    }
    if let Ok(weight) = layout.font_weight(at) {
        format.font_weight = weight.value;
    }
    if let Ok(stretch) = layout.font_stretch(at) {
        format.font_stretch = stretch.value;
    }
    if let Ok(style) = layout.font_style(at) {
        format.font_style = style.value;
    }
    if let Ok(underline) = layout.underline(at) {
        format.underline = underline.value;
    }
    if let Ok(strikethrough) = layout.strikethrough(at) {
        format.strikethrough = strikethrough.value;
    }
    format
}
