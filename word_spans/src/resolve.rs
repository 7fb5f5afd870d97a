// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping host offsets back to words and selections.

use alloc::string::String;
use core::ops::Range;

use crate::{Error, TextRange, WordSpan, WordSpans};

/// A snapshot of a non-empty text selection.
///
/// The text is captured verbatim at the time the selection is made and is not updated if the
/// source text later changes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectionState {
    /// The selection start, in host units.
    pub start: usize,
    /// The selection end (exclusive), in host units.
    pub end: usize,
    /// The selected text, untrimmed.
    pub selected_text: String,
}

impl SelectionState {
    /// The selection bounds in host units.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Returns the index of the word whose `[start, end)` contains `offset`.
///
/// `words` must be sorted by offset, which holds for any tokenizer output. Offsets in
/// whitespace or past the end of the text resolve to `None`.
///
/// ```
/// use word_spans::{resolve_word_at, tokenize};
///
/// let words = tokenize("tap here");
/// assert_eq!(resolve_word_at(5, &words), Some(1));
/// assert_eq!(resolve_word_at(3, &words), None);
/// ```
pub fn resolve_word_at(offset: usize, words: &[WordSpan]) -> Option<usize> {
    // First word that ends after `offset`; it is the only candidate.
    let candidate = words.partition_point(|word| word.end() <= offset);
    let word = words.get(candidate)?;
    word.contains(offset).then(|| word.index())
}

/// Captures the text between `start` and `end` as a selection.
///
/// Returns `None` ("no selection") when `start >= end`, when the range is out of bounds, or
/// when an endpoint splits a character. None of these are errors for the caller; use
/// [`try_resolve_range`] to find out which one applied.
pub fn resolve_range(start: usize, end: usize, words: &WordSpans) -> Option<SelectionState> {
    try_resolve_range(start, end, words).ok()
}

/// Like [`resolve_range`], but reports why a range was rejected.
pub fn try_resolve_range(
    start: usize,
    end: usize,
    words: &WordSpans,
) -> Result<SelectionState, Error> {
    let text = words.text();
    let range = TextRange::new(text, words.unit(), start..end)?;
    Ok(SelectionState {
        start: range.start(),
        end: range.end(),
        selected_text: range.slice(text).into(),
    })
}

#[cfg(test)]
mod tests {
    use super::{resolve_range, resolve_word_at, try_resolve_range};
    use crate::{tokenize, ErrorKind, OffsetUnit, WordSpans};
    use alloc::vec::Vec;

    const TEXT: &str = "This is an example of AdvancedText component.";

    #[test]
    fn every_offset_resolves_to_its_word() {
        let words = tokenize(TEXT);
        for offset in 0..TEXT.len() + 3 {
            let expected = words
                .iter()
                .find(|w| w.start() <= offset && offset < w.end())
                .map(|w| w.index());
            assert_eq!(
                resolve_word_at(offset, &words),
                expected,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn whitespace_and_out_of_bounds_are_none() {
        let words = tokenize(TEXT);
        assert_eq!(resolve_word_at(4, &words), None);
        assert_eq!(resolve_word_at(TEXT.len(), &words), None);
        assert_eq!(resolve_word_at(usize::MAX, &words), None);
        assert_eq!(resolve_word_at(0, &[]), None);
    }

    #[test]
    fn word_ends_are_exclusive() {
        let words = tokenize("ab cd");
        assert_eq!(resolve_word_at(1, &words), Some(0));
        assert_eq!(resolve_word_at(2, &words), None);
        assert_eq!(resolve_word_at(3, &words), Some(1));
    }

    #[test]
    fn large_inputs_resolve() {
        let mut text = alloc::string::String::new();
        for i in 0..20_000 {
            if i > 0 {
                text.push(' ');
            }
            text.push_str("word");
        }
        let words = tokenize(&text);
        assert_eq!(words.len(), 20_000);
        let last = &words[19_999];
        assert_eq!(resolve_word_at(last.start() + 1, &words), Some(19_999));
        assert_eq!(resolve_word_at(text.len(), &words), None);
    }

    #[test]
    fn range_captures_verbatim_text() {
        let words = WordSpans::new(TEXT, OffsetUnit::Utf8);
        let selection = resolve_range(10, 20, &words).unwrap();
        assert_eq!(selection.selected_text, &TEXT[10..20]);
        assert_eq!(selection.selected_text, " example o");
        assert_eq!(selection.range(), 10..20);
    }

    #[test]
    fn malformed_ranges_are_no_selection() {
        let words = WordSpans::new(TEXT, OffsetUnit::Utf8);
        let rejected: Vec<_> = [(5, 5), (9, 3), (0, TEXT.len() + 1), (50, 60)]
            .into_iter()
            .filter_map(|(s, e)| resolve_range(s, e, &words))
            .collect();
        assert!(rejected.is_empty());
        assert!(resolve_range(0, 1, &WordSpans::default()).is_none());
    }

    #[test]
    fn rejection_reasons() {
        let words = WordSpans::new(TEXT, OffsetUnit::Utf8);
        let kind = |s, e| try_resolve_range(s, e, &words).unwrap_err().kind();
        assert_eq!(kind(7, 7), ErrorKind::EmptyRange);
        assert_eq!(kind(40, 46), ErrorKind::InvalidBounds);
    }

    #[test]
    fn utf16_ranges() {
        let words = WordSpans::new("😀 héllo", OffsetUnit::Utf16);
        assert_eq!(resolve_range(3, 8, &words).unwrap().selected_text, "héllo");
        assert_eq!(resolve_range(0, 2, &words).unwrap().selected_text, "😀");
        assert!(resolve_range(1, 4, &words).is_none());
    }
}
