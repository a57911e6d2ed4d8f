// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory text layout engine for [`editable_layout`].
//!
//! [`RunLayoutEngine`] produces [`RunLayout`]s, which store each ranged attribute as a
//! [`RunList`]: maximal runs covering the whole `u32` position space, with equal neighbours
//! merged. Range queries therefore report the same covering ranges a platform text engine would,
//! and positions past the end of the text keep their own formatting.
//!
//! It does no shaping or line breaking. It is meant for headless hosts and for testing code
//! written against the [`TextLayout`](editable_layout::TextLayout) capability; a
//! [`FailurePlan`] makes selected engine calls fail.
//!
//! ## Example
//!
//! ```
//! use editable_layout::{
//!     EditableLayout, FontWeight, TextBuffer, TextLayout, TextLayoutEngine, TextRange, Utf16Buffer,
//! };
//! use run_layout::RunLayoutEngine;
//!
//! let engine = RunLayoutEngine::new();
//! let mut buffer = Utf16Buffer::from("AAABBB");
//! let mut layout = engine.create_root_layout(buffer.units(), 100.0, 20.0).unwrap();
//! layout.set_font_weight(FontWeight::BOLD, TextRange::new(0, 3)).unwrap();
//!
//! let manager = EditableLayout::new(&engine);
//! let text: Vec<u16> = "x".encode_utf16().collect();
//! manager.insert_text_at(&mut layout, &mut buffer, 3, &text, None).unwrap();
//!
//! assert_eq!(layout.text_string(), "AAAxBBB");
//! // The inserted character inherits the bold weight of the character before it.
//! assert_eq!(layout.font_weight(0).unwrap().range, TextRange::new(0, 4));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod engine;
mod failure;
mod format;
mod handle;
mod layout;
mod runs;

pub use crate::engine::RunLayoutEngine;
pub use crate::failure::{Access, FailurePlan};
pub use crate::format::TextFormat;
pub use crate::handle::{
    Brush, FontCollection, FontFeature, Handle, InlineBox, TrimmingSign, Typography,
};
pub use crate::layout::{Attributes, RunLayout};
pub use crate::runs::RunList;
