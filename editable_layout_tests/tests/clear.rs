// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `clear` tests.

use editable_layout::{
    EngineError, EngineErrorKind, ErrorKind, TextAlignment, TextLayout, TextRange,
};
use run_layout::{FailurePlan, RunLayoutEngine, TextFormat};

use crate::util::{
    HEIGHT, TestDoc, WIDTH, assert_caret_fonts, hello_world, typewriter_caret,
};

#[test]
fn clear_then_insert_has_default_formatting() {
    let defaults = TestDoc::new("").layout.attributes_at(0);
    let mut doc = hello_world();
    doc.layout
        .set_font_size(40.0, TextRange::to_end(11))
        .unwrap();
    doc.layout.set_text_alignment(TextAlignment::Center).unwrap();

    doc.try_clear().unwrap();
    doc.assert_in_sync();
    assert_eq!(doc.text(), "");
    assert_eq!(doc.layout.text_len(), 0);

    doc.insert(0, "Hi");
    assert!(doc.attributes().iter().all(|a| *a == defaults));
    assert_eq!(doc.layout.text_alignment().unwrap(), TextAlignment::Leading);
}

#[test]
fn clear_then_insert_with_caret() {
    let defaults = TestDoc::new("").layout.attributes_at(0);
    let mut doc = hello_world();
    doc.try_clear().unwrap();

    let caret = typewriter_caret();
    doc.insert_with_caret(0, "Hi", &caret);
    assert_eq!(doc.text(), "Hi");
    let attributes = doc.attributes();
    for position in 0..2 {
        assert_caret_fonts(&attributes[position], &caret, position as u32);
        assert_eq!(attributes[position].font_collection, None);
        assert_eq!(attributes[position].drawing_effect, None);
    }
    // The end of the text keeps the defaults of the cleared layout.
    assert_eq!(attributes[2], defaults);
}

#[test]
fn clear_keeps_box_size() {
    let mut doc = hello_world();
    doc.try_clear().unwrap();
    assert_eq!(doc.layout.max_width(), WIDTH);
    assert_eq!(doc.layout.max_height(), HEIGHT);
}

#[test]
fn clear_starts_from_the_engine_format() {
    let engine = RunLayoutEngine::with_format(TextFormat {
        font_family: "Consolas".into(),
        font_size: 11.0,
        ..TextFormat::default()
    })
    .unwrap();
    let mut doc = TestDoc::with_engine(engine, "abc");
    doc.layout
        .set_font_family_name("Segoe UI", TextRange::new(0, 3))
        .unwrap();
    doc.try_clear().unwrap();
    let attributes = doc.layout.attributes_at(0);
    assert_eq!(attributes.font_family, "Consolas");
    assert_eq!(attributes.font_size, 11.0);
}

#[test]
fn clear_layout_failure_leaves_old_layout() {
    let mut doc = hello_world();
    doc.engine
        .set_failures(FailurePlan::new().fail_create_layout(EngineErrorKind::Failed));
    let err = doc.try_clear().unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::LayoutCreation(EngineError::new(EngineErrorKind::Failed))
    );
    assert!(!err.buffer_unchanged(), "the buffer was cleared");
    assert_eq!(err.position(), 0);
    assert_eq!(err.length(), 11);
    assert_eq!(doc.text(), "");
    assert_eq!(doc.layout.text_string(), "Hello world");
}
