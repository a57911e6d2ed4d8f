// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// An error reported by a [`TextLayoutEngine`] or one of its layouts.
///
/// [`TextLayoutEngine`]: crate::TextLayoutEngine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineError {
    kind: EngineErrorKind,
}

impl EngineError {
    /// Creates an error of the given kind.
    pub const fn new(kind: EngineErrorKind) -> Self {
        Self { kind }
    }

    /// The category of this error.
    pub fn kind(&self) -> EngineErrorKind {
        self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EngineErrorKind::OutOfMemory => f.write_str("layout engine ran out of memory"),
            EngineErrorKind::InvalidArgument => f.write_str("invalid argument to layout engine"),
            EngineErrorKind::Unsupported => f.write_str("operation not supported by layout engine"),
            EngineErrorKind::Failed => f.write_str("layout engine call failed"),
        }
    }
}

impl core::error::Error for EngineError {}

/// The non-exhaustive category of an [`EngineError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineErrorKind {
    /// The engine could not allocate the requested object.
    OutOfMemory,
    /// A value or range was rejected, e.g. a locale name longer than the bounded buffer.
    InvalidArgument,
    /// The engine does not implement the requested attribute.
    Unsupported,
    /// Any other failure.
    Failed,
}

/// An error reported by a [`TextBuffer`].
///
/// [`TextBuffer`]: crate::TextBuffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
    /// Growing the buffer failed.
    OutOfMemory,
    /// The index (or the end of the erased span) lies past the end of the text.
    OutOfRange {
        /// The offending index.
        index: u32,
        /// The text length at the time of the call.
        len: u32,
    },
    /// The resulting text would not be addressable with `u32` positions.
    TooLong,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => f.write_str("text buffer allocation failed"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for text of length {len}")
            }
            Self::TooLong => f.write_str("text exceeds u32::MAX code units"),
        }
    }
}

impl core::error::Error for BufferError {}

/// Error returned by [`EditableLayout`] operations.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the edit position and length that were being
/// applied when the failure happened.
///
/// [`EditableLayout`]: crate::EditableLayout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    position: u32,
    length: u32,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The (clamped) edit position.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// The number of code units being inserted or removed.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns `true` if the text buffer was left unchanged.
    ///
    /// This is the case for every error except [`ErrorKind::LayoutCreation`], where the buffer
    /// already holds the edited text but the layout could not be rebuilt.
    pub fn buffer_unchanged(&self) -> bool {
        !matches!(self.kind, ErrorKind::LayoutCreation(_))
    }

    pub(crate) fn buffer(err: BufferError, position: u32, length: u32) -> Self {
        Self {
            kind: ErrorKind::Buffer(err),
            position,
            length,
        }
    }

    pub(crate) fn layout_creation(err: EngineError, position: u32, length: u32) -> Self {
        Self {
            kind: ErrorKind::LayoutCreation(err),
            position,
            length,
        }
    }

    pub(crate) fn text_too_long(position: u32) -> Self {
        Self {
            kind: ErrorKind::TextTooLong,
            position,
            length: u32::MAX,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Buffer(err) => write!(
                f,
                "edit of {} units at {} failed: {err}",
                self.length, self.position
            ),
            ErrorKind::LayoutCreation(err) => write!(
                f,
                "edit of {} units at {} applied, but the layout could not be recreated: {err}",
                self.length, self.position
            ),
            ErrorKind::TextTooLong => write!(
                f,
                "text inserted at {} is longer than u32::MAX code units",
                self.position
            ),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Buffer(err) => Some(err),
            ErrorKind::LayoutCreation(err) => Some(err),
            ErrorKind::TextTooLong => None,
        }
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The buffer rejected the mutation. Neither the buffer nor the layout changed.
    Buffer(BufferError),
    /// The buffer was mutated, but the engine could not create the new layout.
    ///
    /// The caller's layout still refers to the old text.
    LayoutCreation(EngineError),
    /// The text to insert cannot be addressed with `u32` positions.
    TextTooLong,
}
