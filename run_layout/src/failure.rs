// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use editable_layout::{EngineError, EngineErrorKind, GlobalProperty, RangedProperty};

/// Whether a failure applies to reading or writing an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// The getter fails.
    Get,
    /// The setter fails.
    Set,
}

/// Engine calls that should fail, for exercising error handling.
///
/// Layouts take a snapshot of their engine's plan when they are created; a layout's own plan can
/// be replaced with [`RunLayout::set_failures`](crate::RunLayout::set_failures).
///
/// ```
/// use editable_layout::{EngineErrorKind, RangedProperty};
/// use run_layout::{Access, FailurePlan};
///
/// let plan = FailurePlan::new()
///     .fail_create_layout(EngineErrorKind::OutOfMemory)
///     .fail_ranged(RangedProperty::Underline, Access::Set);
/// assert!(!plan.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FailurePlan {
    create_layout: Option<EngineErrorKind>,
    ranged: Vec<(RangedProperty, Access)>,
    global: Vec<(GlobalProperty, Access)>,
}

impl FailurePlan {
    /// A plan in which nothing fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes layout creation fail with `kind`.
    #[must_use]
    pub fn fail_create_layout(mut self, kind: EngineErrorKind) -> Self {
        self.create_layout = Some(kind);
        self
    }

    /// Makes reading or writing a ranged attribute fail.
    #[must_use]
    pub fn fail_ranged(mut self, property: RangedProperty, access: Access) -> Self {
        self.ranged.push((property, access));
        self
    }

    /// Makes reading or writing a layout-wide attribute fail.
    #[must_use]
    pub fn fail_global(mut self, property: GlobalProperty, access: Access) -> Self {
        self.global.push((property, access));
        self
    }

    /// Returns `true` if nothing fails.
    pub fn is_empty(&self) -> bool {
        self.create_layout.is_none() && self.ranged.is_empty() && self.global.is_empty()
    }

    pub(crate) fn check_create(&self) -> Result<(), EngineError> {
        match self.create_layout {
            Some(kind) => Err(EngineError::new(kind)),
            None => Ok(()),
        }
    }

    pub(crate) fn check_ranged(
        &self,
        property: RangedProperty,
        access: Access,
    ) -> Result<(), EngineError> {
        if self.ranged.contains(&(property, access)) {
            Err(EngineError::new(EngineErrorKind::Failed))
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_global(
        &self,
        property: GlobalProperty,
        access: Access,
    ) -> Result<(), EngineError> {
        if self.global.contains(&(property, access)) {
            Err(EngineError::new(EngineErrorKind::Failed))
        } else {
            Ok(())
        }
    }
}
