// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use crate::resolve::{resolve_range, resolve_word_at};
use crate::{OffsetUnit, SelectionState};

/// A single word: a maximal run of non-whitespace characters.
///
/// `start` and `end` are in the [`OffsetUnit`] the text was tokenized with; `text` is always
/// the exact source substring.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordSpan {
    index: usize,
    start: usize,
    end: usize,
    bytes: Range<usize>,
    text: Arc<str>,
}

impl WordSpan {
    /// The position of this word in the tokenized sequence, starting at zero.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The start offset, in host units.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end offset (exclusive), in host units.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The word's bounds in host units.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The word's bounds as UTF-8 byte offsets into the source text.
    #[inline]
    pub fn byte_range(&self) -> Range<usize> {
        self.bytes.clone()
    }

    /// The word itself.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A shared handle to the word text.
    #[inline]
    pub fn shared_text(&self) -> &Arc<str> {
        &self.text
    }

    /// Returns `true` if `offset` lies within `[start, end)`.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Splits `text` into words, with offsets in UTF-8 bytes.
///
/// Equivalent to [`tokenize_with`] using [`OffsetUnit::Utf8`].
///
/// ```
/// let words = word_spans::tokenize("  two words ");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "words");
/// assert_eq!(words[1].range(), 6..11);
/// ```
pub fn tokenize(text: &str) -> Vec<WordSpan> {
    tokenize_with(text, OffsetUnit::Utf8)
}

/// Splits `text` into words, with offsets in `unit`.
///
/// A word is a maximal run of characters that are not Unicode whitespace. Words are returned
/// in text order with indices `0..n`. Empty or all-whitespace text yields no words.
pub fn tokenize_with(text: &str, unit: OffsetUnit) -> Vec<WordSpan> {
    let mut words = Vec::new();
    // Byte and host-unit start of the word being scanned.
    let mut open: Option<(usize, usize)> = None;
    let mut pos = 0;

    for (byte, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some((byte_start, start)) = open.take() {
                push_word(&mut words, text, byte_start..byte, start..pos);
            }
        } else if open.is_none() {
            open = Some((byte, pos));
        }
        pos += unit.char_len(ch);
    }
    if let Some((byte_start, start)) = open {
        push_word(&mut words, text, byte_start..text.len(), start..pos);
    }
    words
}

fn push_word(words: &mut Vec<WordSpan>, text: &str, bytes: Range<usize>, range: Range<usize>) {
    debug_assert!(range.start < range.end, "words are never empty");
    words.push(WordSpan {
        index: words.len(),
        start: range.start,
        end: range.end,
        text: Arc::from(&text[bytes.clone()]),
        bytes,
    });
}

/// The tokenized form of one text value.
///
/// Owns the source text and its words. A new `WordSpans` is built whenever the text changes;
/// it is never mutated in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSpans {
    text: Arc<str>,
    unit: OffsetUnit,
    len: usize,
    words: Vec<WordSpan>,
}

impl Default for WordSpans {
    fn default() -> Self {
        Self::empty(OffsetUnit::default())
    }
}

impl WordSpans {
    /// Tokenizes `text` with offsets in `unit`.
    pub fn new(text: impl Into<Arc<str>>, unit: OffsetUnit) -> Self {
        let text = text.into();
        let words = tokenize_with(&text, unit);
        Self {
            len: unit.len_of(&text),
            text,
            unit,
            words,
        }
    }

    /// An empty text with no words.
    pub fn empty(unit: OffsetUnit) -> Self {
        Self {
            text: Arc::from(""),
            unit,
            len: 0,
            words: Vec::new(),
        }
    }

    /// The source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The unit word offsets are expressed in.
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// The length of the source text, in [`WordSpans::unit`].
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// The number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the text has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word with the given index.
    pub fn get(&self, index: usize) -> Option<&WordSpan> {
        self.words.get(index)
    }

    /// All words in index order.
    pub fn as_slice(&self) -> &[WordSpan] {
        &self.words
    }

    /// Iterate over all words in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, WordSpan> {
        self.words.iter()
    }

    /// The word containing `offset`, if any.
    pub fn word_at(&self, offset: usize) -> Option<&WordSpan> {
        resolve_word_at(offset, &self.words).map(|index| &self.words[index])
    }

    /// Captures the text between `start` and `end`.
    ///
    /// See [`resolve_range`].
    pub fn selection(&self, start: usize, end: usize) -> Option<SelectionState> {
        resolve_range(start, end, self)
    }
}

impl<'a> IntoIterator for &'a WordSpans {
    type Item = &'a WordSpan;
    type IntoIter = core::slice::Iter<'a, WordSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
