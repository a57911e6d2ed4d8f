// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::BufferError;

/// A growable UTF-16 text buffer that an [`EditableLayout`] mutates.
///
/// The buffer is owned by the editor. Its length is always queried fresh rather than cached,
/// because the layout is rebuilt from exactly the current contents.
///
/// [`EditableLayout`]: crate::EditableLayout
pub trait TextBuffer {
    /// The number of code units in the text, not counting any terminator.
    fn len(&self) -> u32;

    /// Returns `true` if the buffer holds no text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The text, not counting any terminator.
    fn units(&self) -> &[u16];

    /// Inserts `text` before the code unit at `index`.
    ///
    /// On error the buffer is left unchanged.
    fn insert(&mut self, index: u32, text: &[u16]) -> Result<(), BufferError>;

    /// Removes `count` code units starting at `index`.
    ///
    /// On error the buffer is left unchanged.
    fn erase(&mut self, index: u32, count: u32) -> Result<(), BufferError>;

    /// Removes all text.
    fn clear(&mut self);
}

/// A NUL-terminated UTF-16 buffer backed by a `Vec<u16>`.
///
/// The vector always ends with a `0` terminator, and [`TextBuffer::len`] scans for the
/// first terminator, so text that embeds a NUL is truncated there from the layout's point of view.
/// Growth goes through [`Vec::try_reserve`], so running out of memory is reported as
/// [`BufferError::OutOfMemory`] instead of aborting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utf16Buffer {
    units: Vec<u16>,
}

impl Utf16Buffer {
    /// Creates an empty buffer holding only the terminator.
    pub fn new() -> Self {
        Self {
            units: alloc::vec![0],
        }
    }

    /// Creates a buffer from UTF-16 code units.
    ///
    /// Anything after an embedded NUL is dropped.
    pub fn from_units(text: &[u16]) -> Self {
        let text = text
            .iter()
            .position(|&unit| unit == 0)
            .map_or(text, |end| &text[..end]);
        let mut units = Vec::with_capacity(text.len() + 1);
        units.extend_from_slice(text);
        units.push(0);
        Self { units }
    }

    /// Decodes the text, replacing unpaired surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(self.units())
    }

    fn check_index(&self, index: u32) -> Result<usize, BufferError> {
        let len = self.len();
        if index > len {
            return Err(BufferError::OutOfRange { index, len });
        }
        Ok(index as usize)
    }
}

impl Default for Utf16Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Utf16Buffer {
    fn from(value: &str) -> Self {
        let mut units: Vec<u16> = value.encode_utf16().take_while(|&unit| unit != 0).collect();
        units.push(0);
        Self { units }
    }
}

impl TextBuffer for Utf16Buffer {
    fn len(&self) -> u32 {
        let len = self
            .units
            .iter()
            .position(|&unit| unit == 0)
            .unwrap_or(self.units.len());
        // `insert` refuses to grow past `u32::MAX`.
        u32::try_from(len).unwrap_or(u32::MAX)
    }

    fn units(&self) -> &[u16] {
        &self.units[..self.len() as usize]
    }

    fn insert(&mut self, index: u32, text: &[u16]) -> Result<(), BufferError> {
        let at = self.check_index(index)?;
        let fits = (self.len() as usize)
            .checked_add(text.len())
            .is_some_and(|len| len < u32::MAX as usize);
        if !fits {
            return Err(BufferError::TooLong);
        }
        // Reserve for the whole slice: units past an embedded NUL still occupy the vector.
        self.units
            .try_reserve(text.len())
            .map_err(|_| BufferError::OutOfMemory)?;
        self.units.extend_from_slice(text);
        self.units[at..].rotate_right(text.len());
        Ok(())
    }

    fn erase(&mut self, index: u32, count: u32) -> Result<(), BufferError> {
        let at = self.check_index(index)?;
        let end = index
            .checked_add(count)
            .filter(|&end| end <= self.len())
            .ok_or(BufferError::OutOfRange {
                index: index.saturating_add(count),
                len: self.len(),
            })?;
        self.units.drain(at..end as usize);
        Ok(())
    }

    fn clear(&mut self) {
        self.units.clear();
        self.units.push(0);
    }
}
