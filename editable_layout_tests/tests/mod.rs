// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `editable_layout`.
//!
//! - The edits run against [`run_layout`], whose layouts keep every ranged attribute as
//!   coalesced runs and can be told to fail selected calls.
//! - The `util` module contains the [`TestDoc`](util::TestDoc) fixture that bundles an engine,
//!   a buffer and a layout, plus small helpers shared by different tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that the shared utilities are defined once.
//! - For test naming, put the "topic" of the test at the start of the name, e.g.
//!   `remove_at_start` rather than `start_remove`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod caret;
mod clear;
mod remove;
mod runs;
mod util;
