// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mutation for layouts whose text is fixed at creation.

use crate::copy::{copy_global_properties, copy_single_property_range, run_length_at};
use crate::report::FailedProperty;
use crate::{
    CaretFormat, EditReport, EngineError, Error, TextBuffer, TextLayout, TextLayoutEngine,
};

/// How the replay finds the extent of a uniformly formatted run in the old layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunDiscovery {
    /// The run ends at the nearest boundary of any ranged attribute.
    ///
    /// Correct for engines that keep independent boundaries per attribute.
    #[default]
    AllAttributes,
    /// The run ends at the next font weight boundary.
    ///
    /// Cheaper, but only correct when every attribute changes at font weight boundaries.
    /// Otherwise the attributes at the start of a weight run are smeared over all of it.
    FontWeight,
}

/// Options for [`EditableLayout`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EditOptions {
    /// How formatting runs are measured while replaying attributes.
    pub run_discovery: RunDiscovery,
}

/// Which way unedited text moved relative to its old position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shift {
    /// Text after an insertion.
    Later,
    /// Text after a removal.
    Earlier,
}

impl Shift {
    fn apply(self, position: u32, offset: u32) -> u32 {
        match self {
            Self::Later => position.saturating_add(offset),
            Self::Earlier => position.saturating_sub(offset),
        }
    }
}

/// Keeps a layout's formatting stable while its text is edited.
///
/// Every edit mutates the [`TextBuffer`], asks the engine for a new layout of the same size, and
/// replays the old layout's layout-wide and ranged attributes onto the new one, shifted by the
/// edit. The caller's layout is replaced in place; the old layout is dropped once its attributes
/// have been read.
///
/// The manager holds no state besides the engine, so one instance can serve any number of
/// documents. It is not reentrant with respect to a single layout/buffer pair; callers confine
/// each pair to one thread.
#[derive(Clone, Debug)]
pub struct EditableLayout<E> {
    engine: E,
    options: EditOptions,
}

impl<E: TextLayoutEngine> EditableLayout<E> {
    /// Creates a manager with default options.
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, EditOptions::default())
    }

    /// Creates a manager with the given options.
    pub fn with_options(engine: E, options: EditOptions) -> Self {
        Self { engine, options }
    }

    /// The engine used to create layouts.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The options in effect.
    pub fn options(&self) -> EditOptions {
        self.options
    }

    /// Replaces `layout` with a fresh layout of `buffer`'s current text.
    ///
    /// The new layout inherits the format defaults and box size of the old one, but none of its
    /// ranged attributes. On success the old layout is returned so its attributes can still be
    /// read; on failure `layout` is left untouched.
    pub fn recreate_layout<B: TextBuffer + ?Sized>(
        &self,
        layout: &mut E::Layout,
        buffer: &B,
    ) -> Result<E::Layout, EngineError> {
        let text = buffer.units();
        let new_layout = self.engine.create_layout(
            text,
            layout,
            layout.max_width(),
            layout.max_height(),
        )?;
        log::debug!(
            "recreated layout for {} code units ({}x{})",
            text.len(),
            layout.max_width(),
            layout.max_height()
        );
        Ok(core::mem::replace(layout, new_layout))
    }

    /// Inserts `text` at `position`, preserving the formatting of the surrounding text.
    ///
    /// `position` is clamped to the text length. The inserted text takes the formatting of the
    /// character before `position` (or of the first character when inserting at `0`), unless a
    /// `caret` format is supplied, in which case its font attributes are used verbatim.
    ///
    /// Returns an error only if the buffer rejects the insertion or the engine cannot create the
    /// new layout. Attributes that fail to copy are listed in the report.
    pub fn insert_text_at<B: TextBuffer + ?Sized>(
        &self,
        layout: &mut E::Layout,
        buffer: &mut B,
        position: u32,
        text: &[u16],
        caret: Option<&CaretFormat>,
    ) -> Result<EditReport, Error> {
        let old_len = buffer.len();
        let position = position.min(old_len);
        let insert_len = u32::try_from(text.len()).map_err(|_| Error::text_too_long(position))?;

        buffer
            .insert(position, text)
            .map_err(|err| Error::buffer(err, position, insert_len))?;
        let new_len = buffer.len();
        let old = self
            .recreate_layout(layout, buffer)
            .map_err(|err| Error::layout_creation(err, position, insert_len))?;

        let mut report = EditReport::default();
        copy_global_properties(&old, layout, &mut report);

        if position == 0 {
            copy_single_property_range(&old, 0, layout, 0, insert_len, caret, &mut report);
            self.copy_ranged_properties(
                &old,
                0,
                old_len,
                insert_len,
                layout,
                Shift::Later,
                &mut report,
            );
        } else {
            self.copy_ranged_properties(&old, 0, position, 0, layout, Shift::Later, &mut report);
            // The inserted text gets the properties of the character right before `position`.
            copy_single_property_range(
                &old,
                position - 1,
                layout,
                position,
                insert_len,
                caret,
                &mut report,
            );
            self.copy_ranged_properties(
                &old,
                position,
                old_len,
                insert_len,
                layout,
                Shift::Later,
                &mut report,
            );
        }

        copy_single_property_range(&old, old_len, layout, new_len, u32::MAX, None, &mut report);

        log::debug!(
            "inserted {insert_len} units at {position}: {} runs copied, {} failures",
            report.runs_copied,
            report.failures.len()
        );
        Ok(report)
    }

    /// Removes up to `length` code units at `position`, preserving the formatting of the
    /// remaining text.
    ///
    /// `position` is clamped to the text length and `length` to the text after it, so removing
    /// past the end is a no-op for the missing part.
    pub fn remove_text_at<B: TextBuffer + ?Sized>(
        &self,
        layout: &mut E::Layout,
        buffer: &mut B,
        position: u32,
        length: u32,
    ) -> Result<EditReport, Error> {
        let old_len = buffer.len();
        let position = position.min(old_len);
        let length = length.min(old_len - position);

        buffer
            .erase(position, length)
            .map_err(|err| Error::buffer(err, position, length))?;
        let new_len = buffer.len();
        let old = self
            .recreate_layout(layout, buffer)
            .map_err(|err| Error::layout_creation(err, position, length))?;

        let mut report = EditReport::default();
        copy_global_properties(&old, layout, &mut report);

        if position == 0 {
            self.copy_ranged_properties(
                &old,
                length,
                old_len,
                length,
                layout,
                Shift::Earlier,
                &mut report,
            );
        } else {
            self.copy_ranged_properties(&old, 0, position, 0, layout, Shift::Later, &mut report);
            self.copy_ranged_properties(
                &old,
                position + length,
                old_len,
                length,
                layout,
                Shift::Earlier,
                &mut report,
            );
        }

        copy_single_property_range(&old, old_len, layout, new_len, u32::MAX, None, &mut report);

        log::debug!(
            "removed {length} units at {position}: {} runs copied, {} failures",
            report.runs_copied,
            report.failures.len()
        );
        Ok(report)
    }

    /// Removes all text and starts over with a layout using the engine's format defaults.
    ///
    /// No ranged formatting survives a clear.
    pub fn clear<B: TextBuffer + ?Sized>(
        &self,
        layout: &mut E::Layout,
        buffer: &mut B,
    ) -> Result<(), Error> {
        let old_len = buffer.len();
        buffer.clear();
        self.recreate_layout(layout, buffer)
            .map(drop)
            .map_err(|err| Error::layout_creation(err, 0, old_len))
    }

    /// Replays the formatting of `start..end` in `old` onto `new`, moved by `offset` in the
    /// direction of `shift`.
    ///
    /// The span is walked run by run, so contiguous equally formatted text is copied with a
    /// single call.
    fn copy_ranged_properties(
        &self,
        old: &E::Layout,
        start: u32,
        end: u32,
        offset: u32,
        new: &mut E::Layout,
        shift: Shift,
        report: &mut EditReport,
    ) {
        let mut position = start;
        while position < end {
            let remaining = end - position;
            let run = match run_length_at(old, position, self.options.run_discovery) {
                Ok(run) => run.clamp(1, remaining),
                Err(err) => {
                    report.record(FailedProperty::RunDiscovery(position), err);
                    remaining
                }
            };
            let new_position = shift.apply(position, offset);
            log::trace!("copying run {position}+{run} to {new_position}");
            copy_single_property_range(old, position, new, new_position, run, None, report);
            report.runs_copied += 1;
            position += run;
        }
    }
}
