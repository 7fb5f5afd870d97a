// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, OffsetUnit};

/// A validated, non-empty range into a text, expressed in a host [`OffsetUnit`].
///
/// Holding a `TextRange` guarantees:
///
/// - `start < end`
/// - `start` and `end` are within the text bounds
/// - `start` and `end` lie on character boundaries of the unit
///
/// It also remembers the equivalent UTF-8 byte range so the covered text can be sliced
/// without re-scanning.
///
/// `TextRange` does not record which text it was validated against. It is the caller's
/// responsibility to only reuse it with the same text.
///
/// ## Example
///
/// ```
/// use word_spans::{OffsetUnit, TextRange};
///
/// let text = "a😀b";
/// let range = TextRange::new(text, OffsetUnit::Utf16, 1..3).unwrap();
/// assert_eq!(range.slice(text), "😀");
/// assert!(TextRange::new(text, OffsetUnit::Utf16, 1..2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
    bytes: Range<usize>,
}

impl TextRange {
    /// Returns a validated `TextRange` for `text`, with `range` measured in `unit`.
    pub fn new(text: &str, unit: OffsetUnit, range: Range<usize>) -> Result<Self, Error> {
        let Range { start, end } = range;
        let len = unit.len_of(text);
        if start >= end {
            return Err(Error::empty_range(start, end, len, unit));
        }
        if end > len {
            return Err(Error::invalid_bounds(start, end, len, unit));
        }
        let Some(byte_start) = unit.to_byte_offset(text, start) else {
            return Err(Error::not_on_char_boundary(
                start,
                end,
                len,
                unit,
                Endpoint::Start,
            ));
        };
        let Some(byte_end) = unit.to_byte_offset(text, end) else {
            return Err(Error::not_on_char_boundary(
                start,
                end,
                len,
                unit,
                Endpoint::End,
            ));
        };
        Ok(Self {
            start,
            end,
            bytes: byte_start..byte_end,
        })
    }

    /// The start offset, in the unit the range was validated with.
    #[must_use]
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The end offset (exclusive), in the unit the range was validated with.
    #[must_use]
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns this range as a `Range<usize>` in host units.
    #[must_use]
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The equivalent UTF-8 byte range.
    #[must_use]
    #[inline]
    pub fn byte_range(&self) -> Range<usize> {
        self.bytes.clone()
    }

    /// The covered text. `text` must be the text this range was validated against.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.byte_range()]
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}
