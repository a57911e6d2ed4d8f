// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Format-preserving edits for immutable rich text layouts.
//!
//! Text layout engines typically treat a layout object as immutable with respect to its backing
//! string: the text can only be supplied when the layout is created. Editing the text therefore
//! means building a brand new layout and replaying every ranged attribute (font family, weight,
//! size, underline, locale, drawing effect, ...) from the old layout onto the shifted ranges of
//! the new one.
//!
//! [`EditableLayout`] implements that replay on top of two capabilities supplied by the host:
//!
//! - a [`TextLayoutEngine`] that creates [`TextLayout`] objects and exposes ranged and global
//!   attribute accessors, and
//! - a [`TextBuffer`] holding the UTF-16 text the layout is built from.
//!
//! ## Positions
//!
//! All positions and lengths are `u32` indices into UTF-16 code units. The position just past
//! the end of the text is addressable: engines keep formatting for it so that text typed at the
//! very end picks up sensible attributes. Edits preserve it with a trailing range that runs to
//! `u32::MAX`.
//!
//! ## Error policy
//!
//! Edits are "mutate always, format best effort". An operation fails only when the buffer
//! mutation fails (in which case nothing changes) or when the engine cannot create the new layout
//! (in which case the buffer holds the new text and the caller keeps the old layout). Individual
//! attribute copies that fail are recorded in the returned [`EditReport`] and logged with
//! [`log::warn!`]; they never stop the rest of the replay.
//!
//! ## Example
//!
//! The manager is generic over the engine, so editing code is written once against the
//! capability traits. The `run_layout` crate provides an in-memory engine to run it with.
//!
//! ```
//! use editable_layout::{
//!     EditReport, EditableLayout, Error, TextBuffer, TextLayoutEngine, Utf16Buffer,
//! };
//!
//! /// Appends `text`, formatted like the last character.
//! fn append<E: TextLayoutEngine>(
//!     manager: &EditableLayout<E>,
//!     layout: &mut E::Layout,
//!     buffer: &mut Utf16Buffer,
//!     text: &str,
//! ) -> Result<EditReport, Error> {
//!     let units: Vec<u16> = text.encode_utf16().collect();
//!     let end = buffer.len();
//!     manager.insert_text_at(layout, buffer, end, &units, None)
//! }
//!
//! let buffer = Utf16Buffer::from("Hello");
//! assert_eq!(buffer.len(), 5);
//! assert_eq!(buffer.to_string_lossy(), "Hello");
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

mod buffer;
mod caret;
mod copy;
mod editable;
mod engine;
mod error;
mod paragraph;
mod range;
mod report;
mod style;

pub use crate::buffer::{TextBuffer, Utf16Buffer};
pub use crate::caret::caret_format_at;
pub use crate::editable::{EditOptions, EditableLayout, RunDiscovery};
pub use crate::engine::{TextLayout, TextLayoutEngine};
pub use crate::error::{BufferError, EngineError, EngineErrorKind, Error, ErrorKind};
pub use crate::paragraph::{
    FlowDirection, GlobalProperty, LineSpacing, LineSpacingMethod, ParagraphAlignment,
    ReadingDirection, TextAlignment, Trimming, TrimmingGranularity, WordWrapping,
};
pub use crate::range::{RangedValue, TextRange};
pub use crate::report::{CopyFailure, EditReport, FailedProperty};
pub use crate::style::{
    CaretFormat, Color, FontStretch, FontStyle, FontWeight, MAX_FONT_FAMILY_NAME_LEN,
    MAX_LOCALE_NAME_LEN, RangedProperty,
};
