// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::cell::RefCell;

use editable_layout::{EngineError, EngineErrorKind, TextLayoutEngine};

use crate::{FailurePlan, RunLayout, TextFormat};

/// Creates [`RunLayout`]s.
///
/// Layouts created from a parent share the parent's [`TextFormat`]; root layouts use the
/// engine's format.
#[derive(Debug, Default)]
pub struct RunLayoutEngine {
    format: Arc<TextFormat>,
    failures: RefCell<Arc<FailurePlan>>,
}

impl RunLayoutEngine {
    /// Creates an engine with the default format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine whose root layouts start from `format`.
    pub fn with_format(format: TextFormat) -> Result<Self, EngineError> {
        format.validate()?;
        Ok(Self {
            format: Arc::new(format),
            failures: RefCell::default(),
        })
    }

    /// The format root layouts start from.
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Sets the calls that fail on layouts created from now on, and whether creation itself fails.
    pub fn set_failures(&self, failures: FailurePlan) {
        *self.failures.borrow_mut() = Arc::new(failures);
    }

    /// Stops injecting failures into new layouts.
    pub fn clear_failures(&self) {
        self.set_failures(FailurePlan::new());
    }

    fn create(
        &self,
        text: &[u16],
        format: &Arc<TextFormat>,
        max_width: f32,
        max_height: f32,
    ) -> Result<RunLayout, EngineError> {
        let failures = Arc::clone(&*self.failures.borrow());
        failures.check_create()?;
        if u32::try_from(text.len()).is_err() {
            return Err(EngineError::new(EngineErrorKind::InvalidArgument));
        }
        if !(max_width >= 0.0 && max_height >= 0.0) {
            return Err(EngineError::new(EngineErrorKind::InvalidArgument));
        }
        Ok(RunLayout::new(
            text,
            Arc::clone(format),
            failures,
            max_width,
            max_height,
        ))
    }
}

impl TextLayoutEngine for RunLayoutEngine {
    type Layout = RunLayout;

    fn create_layout(
        &self,
        text: &[u16],
        parent: &RunLayout,
        max_width: f32,
        max_height: f32,
    ) -> Result<RunLayout, EngineError> {
        self.create(text, parent.format_arc(), max_width, max_height)
    }

    fn create_root_layout(
        &self,
        text: &[u16],
        max_width: f32,
        max_height: f32,
    ) -> Result<RunLayout, EngineError> {
        self.create(text, &self.format, max_width, max_height)
    }
}
