// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use editable_layout::CaretFormat;
use run_layout::Attributes;

/// Asserts that every font attribute a caret carries was applied at `position`.
pub(crate) fn assert_caret_fonts(attributes: &Attributes, caret: &CaretFormat, position: u32) {
    assert_eq!(
        attributes.font_family, caret.font_family,
        "family at {position}"
    );
    assert_eq!(attributes.locale, caret.locale, "locale at {position}");
    assert_eq!(
        attributes.font_weight, caret.font_weight,
        "weight at {position}"
    );
    assert_eq!(attributes.font_style, caret.font_style, "style at {position}");
    assert_eq!(
        attributes.font_stretch, caret.font_stretch,
        "stretch at {position}"
    );
    assert_eq!(attributes.font_size, caret.font_size, "size at {position}");
    assert_eq!(
        attributes.underline, caret.underline,
        "underline at {position}"
    );
    assert_eq!(
        attributes.strikethrough, caret.strikethrough,
        "strikethrough at {position}"
    );
}
