// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;
mod doc;
mod samples;

pub(crate) use asserts::assert_caret_fonts;
pub(crate) use doc::{HEIGHT, TestDoc, WIDTH};
pub(crate) use samples::{hello_world, typewriter_caret};

/// Encodes `text` as UTF-16.
pub(crate) fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}
