// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-by-run replay of formatting and the end-of-text range.

use editable_layout::{FontWeight, RangedProperty, RunDiscovery, TextLayout, TextRange};

use crate::util::{TestDoc, hello_world};

#[test]
fn runs_weight_boundary_example() {
    let mut doc = TestDoc::new("AAABBB");
    doc.layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(0, 3))
        .unwrap();
    let report = doc.insert(3, "x");
    assert_eq!(doc.text(), "AAAxBBB");
    assert_eq!(report.runs_copied, 2);
    assert_eq!(
        doc.layout.font_weight(0).unwrap().range,
        TextRange::new(0, 4)
    );
    assert_eq!(doc.layout.font_weight(4).unwrap().range, TextRange::to_end(4));
}

#[test]
fn runs_copied_once_per_run() {
    let mut doc = TestDoc::new("aaabbbccc");
    doc.layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(3, 3))
        .unwrap();
    let report = doc.insert(0, "_");
    assert_eq!(report.runs_copied, 3);
    assert_eq!(
        doc.layout.runs(RangedProperty::FontWeight),
        [TextRange::new(0, 4), TextRange::new(4, 3), TextRange::to_end(7)]
    );
}

#[test]
fn runs_stay_coalesced_across_edits() {
    let mut doc = hello_world();
    doc.insert(2, "ab");
    doc.remove(0, 1);
    assert_eq!(doc.text(), "eabllo world");
    assert_eq!(
        doc.layout.runs(RangedProperty::FontWeight),
        [TextRange::new(0, 6), TextRange::to_end(6)]
    );
}

#[test]
fn runs_all_attribute_discovery_keeps_boundaries() {
    let mut doc = TestDoc::new("abcdef");
    doc.layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(0, 6))
        .unwrap();
    doc.layout.set_underline(true, TextRange::new(2, 2)).unwrap();
    let before = doc.attributes();

    let report = doc.insert(6, "x");
    assert_eq!(report.runs_copied, 3);
    assert_eq!(doc.attributes()[..6], before[..6]);
}

#[test]
fn runs_font_weight_discovery_smears_other_attributes() {
    let mut doc = TestDoc::new("abcdef").with_run_discovery(RunDiscovery::FontWeight);
    doc.layout
        .set_font_weight(FontWeight::BOLD, TextRange::new(0, 6))
        .unwrap();
    doc.layout.set_underline(true, TextRange::new(2, 2)).unwrap();

    let report = doc.insert(6, "x");
    assert_eq!(report.runs_copied, 1);
    // The whole weight run took the attributes of its first character.
    assert!(
        doc.attributes().iter().all(|a| !a.underline),
        "underline survived a weight-only replay"
    );
}

#[test]
fn runs_end_of_text_formatting_follows_the_text() {
    let mut doc = TestDoc::new("abc");
    doc.layout
        .set_font_size(40.0, TextRange::to_end(3))
        .unwrap();

    doc.insert(3, "d");
    // Appended text inherits from the last character, not from the end of the text.
    assert_eq!(doc.layout.attributes_at(3).font_size, 16.0);
    let end = doc.layout.font_size(4).unwrap();
    assert_eq!(end.value, 40.0);
    assert_eq!(end.range, TextRange::to_end(4));

    doc.remove(0, 1);
    assert_eq!(doc.text(), "bcd");
    assert_eq!(doc.layout.font_size(2).unwrap().range, TextRange::new(0, 3));
    let end = doc.layout.font_size(3).unwrap();
    assert_eq!(end.value, 40.0);
    assert_eq!(end.range, TextRange::to_end(3));
}
