// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::ops::Deref;

use editable_layout::Color;
use smallvec::SmallVec;

/// A shared reference to a layout object, compared by identity.
///
/// Cloning takes a reference and dropping releases it, so [`Handle::ref_count`] reveals whether
/// every reference handed out by a layout was released again.
pub struct Handle<T>(Arc<T>);

impl<T> Handle<T> {
    /// Wraps `value` in a new handle.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// The number of live references to the object, this one included.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Returns `true` if both handles refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Deref for Handle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&*self.0).finish()
    }
}

/// A named set of fonts that family names are resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontCollection {
    /// Name of the collection, e.g. `"system"`.
    pub name: String,
}

/// A solid color brush, the drawing effect editors attach to colored text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    /// Fill color.
    pub color: Color,
}

/// An embedded non-text object occupying a range of the text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InlineBox {
    /// Advance width.
    pub width: f32,
    /// Height.
    pub height: f32,
    /// Distance from the top to the baseline.
    pub baseline: f32,
}

/// An OpenType feature setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontFeature {
    /// Feature tag, e.g. `*b"liga"`.
    pub tag: [u8; 4],
    /// Feature value, `0` to disable.
    pub value: u32,
}

/// A set of OpenType features.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typography {
    /// The features, in application order.
    pub features: SmallVec<[FontFeature; 4]>,
}

/// The object drawn in place of trimmed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrimmingSign {
    /// The sign's text, typically an ellipsis.
    pub text: String,
}
