// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `remove_text_at` tests.

use editable_layout::{FontWeight, TextLayout, TextRange};

use crate::util::{TestDoc, hello_world};

#[test]
fn remove_past_end_is_a_no_op() {
    let mut doc = TestDoc::new("Hello");
    doc.remove(5, 2);
    assert_eq!(doc.text(), "Hello");
    doc.remove(0, 2);
    assert_eq!(doc.text(), "llo");
}

#[test]
fn remove_preserves_prefix_and_shifts_suffix() {
    let mut doc = hello_world();
    let before = doc.attributes();
    doc.remove(3, 4);
    assert_eq!(doc.text(), "Helorld");
    let after = doc.attributes();
    assert_eq!(after[..3], before[..3]);
    for position in 3..after.len() {
        assert_eq!(
            after[position],
            before[position + 4],
            "formatting of new position {position} does not match the text it came from"
        );
    }
}

#[test]
fn remove_at_start() {
    let mut doc = hello_world();
    let before = doc.attributes();
    doc.remove(0, 6);
    assert_eq!(doc.text(), "world");
    assert_eq!(doc.attributes(), before[6..]);
}

#[test]
fn remove_length_is_clamped() {
    let mut doc = TestDoc::new("abc");
    doc.layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(0, 1))
        .unwrap();
    doc.remove(1, 100);
    assert_eq!(doc.text(), "a");
    assert_eq!(doc.layout.attributes_at(0).font_weight, FontWeight::BOLD);
}

#[test]
fn remove_everything_keeps_end_of_text_formatting() {
    let mut doc = TestDoc::new("abc");
    doc.layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(0, 3))
        .unwrap();
    doc.layout
        .set_font_size(30.0, TextRange::to_end(3))
        .unwrap();
    let report = doc.remove(0, 3);
    assert_eq!(doc.text(), "");
    assert_eq!(report.runs_copied, 0);
    let end = doc.layout.attributes_at(0);
    assert_eq!(end.font_weight, FontWeight::NORMAL);
    assert_eq!(end.font_size, 30.0);
}

#[test]
fn remove_zero_length_keeps_formatting() {
    let mut doc = hello_world();
    let before = doc.attributes();
    doc.remove(4, 0);
    assert_eq!(doc.text(), "Hello world");
    assert_eq!(doc.attributes(), before);
}

#[test]
fn remove_round_trips_insert() {
    let mut doc = hello_world();
    let before = doc.attributes();
    doc.insert(4, "XYZ");
    doc.remove(4, 3);
    assert_eq!(doc.text(), "Hello world");
    assert_eq!(doc.attributes(), before);
}

#[test]
fn remove_round_trips_insert_at_start() {
    let mut doc = hello_world();
    let before = doc.attributes();
    doc.insert(0, ">> ");
    doc.remove(0, 3);
    assert_eq!(doc.text(), "Hello world");
    assert_eq!(doc.attributes(), before);
}
