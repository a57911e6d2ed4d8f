// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use crate::{EngineError, GlobalProperty, RangedProperty, TextRange};

/// The attribute a [`CopyFailure`] concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailedProperty {
    /// A ranged attribute, with the range of the new layout it was being applied to.
    Ranged(RangedProperty, TextRange),
    /// A layout-wide attribute.
    Global(GlobalProperty),
    /// Discovering the formatting run at the given old-layout position.
    RunDiscovery(u32),
}

/// A single attribute that could not be carried over to a recreated layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyFailure {
    /// What was being copied.
    pub property: FailedProperty,
    /// The engine's error.
    pub error: EngineError,
}

impl fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.property {
            FailedProperty::Ranged(property, range) => write!(
                f,
                "failed to copy {property} to {}..{}: {}",
                range.start,
                range.end(),
                self.error
            ),
            FailedProperty::Global(property) => {
                write!(f, "failed to copy {property}: {}", self.error)
            }
            FailedProperty::RunDiscovery(position) => write!(
                f,
                "failed to measure the formatting run at {position}: {}",
                self.error
            ),
        }
    }
}

/// Outcome of a successful edit.
///
/// The text mutation and layout recreation always happened when an edit returns a report; the
/// report records how faithfully the old formatting was carried over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditReport {
    /// Attributes that could not be copied. They show engine defaults in the new layout.
    pub failures: Vec<CopyFailure>,
    /// Number of formatting runs carried over from unedited text.
    ///
    /// The inserted span and the trailing end-of-text range are not counted.
    pub runs_copied: usize,
}

impl EditReport {
    /// Returns `true` if every attribute was copied.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, property: FailedProperty, error: EngineError) {
        let failure = CopyFailure { property, error };
        log::warn!("{failure}");
        self.failures.push(failure);
    }
}
