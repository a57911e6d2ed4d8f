// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading the typing style at a caret position.

use editable_layout::{
    CaretFormat, Color, FontStyle, FontWeight, RangedProperty, TextLayout, TextRange,
    caret_format_at,
};
use run_layout::{Access, FailurePlan};

use crate::util::{TestDoc, hello_world};

#[test]
fn caret_reads_previous_character() {
    let mut doc = TestDoc::new("abc");
    let layout = &mut doc.layout;
    layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(1, 1))
        .unwrap();
    layout
        .set_font_family_name("Consolas", TextRange::new(1, 1))
        .unwrap();
    layout.set_font_size(12.0, TextRange::new(1, 1)).unwrap();

    let caret = caret_format_at(&doc.layout, 2, &CaretFormat::default());
    assert_eq!(caret.font_family, "Consolas");
    assert_eq!(caret.font_weight, FontWeight::BOLD);
    assert_eq!(caret.font_size, 12.0);

    let caret = caret_format_at(&doc.layout, 1, &CaretFormat::default());
    assert_eq!(caret, CaretFormat::default());
}

#[test]
fn caret_at_start_reads_first_character() {
    let mut doc = TestDoc::new("abc");
    doc.layout
        .set_font_style(FontStyle::Italic, TextRange::new(0, 1))
        .unwrap();
    let caret = caret_format_at(&doc.layout, 0, &CaretFormat::default());
    assert_eq!(caret.font_style, FontStyle::Italic);
}

#[test]
fn caret_keeps_fallback_for_unreadable_attributes() {
    let mut doc = TestDoc::new("abc");
    doc.layout
        .set_font_weight(FontWeight::LIGHT, TextRange::new(0, 3))
        .unwrap();
    doc.layout
        .set_failures(FailurePlan::new().fail_ranged(RangedProperty::FontSize, Access::Get));
    let fallback = CaretFormat {
        font_size: 99.0,
        color: Color::rgb(0, 0x80, 0),
        ..CaretFormat::default()
    };

    let caret = caret_format_at(&doc.layout, 3, &fallback);
    assert_eq!(caret.font_size, 99.0);
    assert_eq!(caret.color, fallback.color);
    assert_eq!(caret.font_weight, FontWeight::LIGHT);
}

#[test]
fn caret_typing_matches_inherited_formatting() {
    let mut typed = hello_world();
    let caret = caret_format_at(&typed.layout, 3, &CaretFormat::default());
    typed.insert_with_caret(3, "q", &caret);

    let mut inherited = hello_world();
    inherited.insert(3, "q");

    assert_eq!(typed.attributes(), inherited.attributes());
}
