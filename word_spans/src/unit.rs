// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The unit in which a host addresses positions in its text.
///
/// Word bounds and every offset passed to the resolver are expressed in this unit. It must
/// match the unit the host rendering surface uses for its styling ranges: a one-unit mismatch
/// shifts every annotation that follows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OffsetUnit {
    /// UTF-8 byte offsets, as used by Rust strings.
    #[default]
    Utf8,

    /// UTF-16 code units, as used by Java/Android and JavaScript strings.
    Utf16,
}

impl OffsetUnit {
    /// The length of `text` measured in this unit.
    pub fn len_of(self, text: &str) -> usize {
        match self {
            Self::Utf8 => text.len(),
            Self::Utf16 => text.encode_utf16().count(),
        }
    }

    #[inline]
    pub(crate) fn char_len(self, ch: char) -> usize {
        match self {
            Self::Utf8 => ch.len_utf8(),
            Self::Utf16 => ch.len_utf16(),
        }
    }

    /// Converts an offset in this unit to a UTF-8 byte offset into `text`.
    ///
    /// Returns `None` if `offset` is past the end of the text or falls inside a character.
    pub fn to_byte_offset(self, text: &str, offset: usize) -> Option<usize> {
        match self {
            Self::Utf8 => text.is_char_boundary(offset).then_some(offset),
            Self::Utf16 => {
                let mut units = 0;
                for (byte, ch) in text.char_indices() {
                    if units == offset {
                        return Some(byte);
                    }
                    if units > offset {
                        return None;
                    }
                    units += ch.len_utf16();
                }
                (units == offset).then_some(text.len())
            }
        }
    }

    /// Returns `true` if `offset` is a character boundary of `text` in this unit.
    ///
    /// The text length itself is a boundary.
    pub fn is_char_boundary(self, text: &str, offset: usize) -> bool {
        self.to_byte_offset(text, offset).is_some()
    }

    /// A short name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
        }
    }
}
