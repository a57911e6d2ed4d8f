// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use editable_layout::{
    CaretFormat, EditOptions, EditReport, EditableLayout, Error, RunDiscovery, TextBuffer,
    TextLayout, TextLayoutEngine, Utf16Buffer,
};
use run_layout::{Attributes, RunLayout, RunLayoutEngine};

use super::utf16;

pub(crate) const WIDTH: f32 = 300.0;
pub(crate) const HEIGHT: f32 = 120.0;

/// A document under edit: the engine, the text buffer and the current layout.
pub(crate) struct TestDoc {
    pub(crate) engine: RunLayoutEngine,
    pub(crate) buffer: Utf16Buffer,
    pub(crate) layout: RunLayout,
    pub(crate) options: EditOptions,
}

impl TestDoc {
    pub(crate) fn new(text: &str) -> Self {
        Self::with_engine(RunLayoutEngine::new(), text)
    }

    pub(crate) fn with_engine(engine: RunLayoutEngine, text: &str) -> Self {
        let buffer = Utf16Buffer::from(text);
        let layout = engine
            .create_root_layout(buffer.units(), WIDTH, HEIGHT)
            .unwrap();
        Self {
            engine,
            buffer,
            layout,
            options: EditOptions::default(),
        }
    }

    pub(crate) fn with_run_discovery(mut self, run_discovery: RunDiscovery) -> Self {
        self.options.run_discovery = run_discovery;
        self
    }

    pub(crate) fn try_insert(
        &mut self,
        position: u32,
        text: &str,
        caret: Option<&CaretFormat>,
    ) -> Result<EditReport, Error> {
        let manager = EditableLayout::with_options(&self.engine, self.options);
        manager.insert_text_at(
            &mut self.layout,
            &mut self.buffer,
            position,
            &utf16(text),
            caret,
        )
    }

    /// Inserts `text`, checking that the edit succeeded and the layout matches the buffer.
    pub(crate) fn insert(&mut self, position: u32, text: &str) -> EditReport {
        let report = self.try_insert(position, text, None).unwrap();
        self.assert_in_sync();
        report
    }

    pub(crate) fn insert_with_caret(
        &mut self,
        position: u32,
        text: &str,
        caret: &CaretFormat,
    ) -> EditReport {
        let report = self.try_insert(position, text, Some(caret)).unwrap();
        self.assert_in_sync();
        report
    }

    pub(crate) fn try_remove(&mut self, position: u32, length: u32) -> Result<EditReport, Error> {
        let manager = EditableLayout::with_options(&self.engine, self.options);
        manager.remove_text_at(&mut self.layout, &mut self.buffer, position, length)
    }

    pub(crate) fn remove(&mut self, position: u32, length: u32) -> EditReport {
        let report = self.try_remove(position, length).unwrap();
        self.assert_in_sync();
        report
    }

    pub(crate) fn try_clear(&mut self) -> Result<(), Error> {
        let manager = EditableLayout::with_options(&self.engine, self.options);
        manager.clear(&mut self.layout, &mut self.buffer)
    }

    pub(crate) fn text(&self) -> String {
        self.buffer.to_string_lossy()
    }

    /// The attributes of every character, followed by those of the end-of-text position.
    pub(crate) fn attributes(&self) -> Vec<Attributes> {
        (0..=self.layout.text_len())
            .map(|position| self.layout.attributes_at(position))
            .collect()
    }

    pub(crate) fn assert_in_sync(&self) {
        assert_eq!(
            self.layout.text_len(),
            self.buffer.len(),
            "layout length differs from buffer length"
        );
        assert_eq!(
            self.layout.text(),
            self.buffer.units(),
            "layout text differs from buffer text"
        );
    }
}
