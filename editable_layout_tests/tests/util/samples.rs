// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sample documents.

use editable_layout::{CaretFormat, FontStretch, FontStyle, FontWeight, TextLayout, TextRange};

use super::TestDoc;

/// "Hello world" with overlapping formatting:
///
/// - bold `Hello`
/// - an italic second `l`
/// - a 24pt `o wo`
/// - an underlined `world`
pub(crate) fn hello_world() -> TestDoc {
    let mut doc = TestDoc::new("Hello world");
    let layout = &mut doc.layout;
    layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(0, 5))
        .unwrap();
    layout
        .set_font_style(FontStyle::Italic, TextRange::new(2, 1))
        .unwrap();
    layout.set_font_size(24.0, TextRange::new(4, 4)).unwrap();
    layout.set_underline(true, TextRange::new(6, 5)).unwrap();
    doc
}

/// A caret whose font attributes all differ from the engine defaults.
pub(crate) fn typewriter_caret() -> CaretFormat {
    CaretFormat {
        font_family: "Mono".into(),
        locale: "de-de".into(),
        font_size: 9.0,
        font_weight: FontWeight::THIN,
        font_stretch: FontStretch::Condensed,
        font_style: FontStyle::Oblique,
        underline: true,
        strikethrough: true,
        ..CaretFormat::default()
    }
}
