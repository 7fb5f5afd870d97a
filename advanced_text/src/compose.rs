// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of annotation layers onto word spans.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashMap;
use smallvec::SmallVec;
use word_spans::WordSpan;

use crate::{parse_highlight_color, HighlightAssignment, Rgba};

/// One visual or interactive attribute applied to a word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationLayer {
    /// Paint the word's background.
    Background(Rgba),
    /// Emphasize the word with the engine's indicator style.
    Indicator,
    /// Make the word hit-testable.
    ///
    /// Carries no styling: the word keeps its base color and gets no link underline.
    Clickable {
        /// The word index.
        index: usize,
        /// The word text.
        word: Arc<str>,
    },
}

/// The layers for one word, in paint order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayeredSpan {
    /// Start offset, in host units.
    pub start: usize,
    /// End offset (exclusive), in host units.
    pub end: usize,
    /// Background before indicator, clickable last.
    pub layers: SmallVec<[AnnotationLayer; 3]>,
}

impl LayeredSpan {
    /// The span bounds in host units.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The background color, if the word is highlighted.
    pub fn background(&self) -> Option<Rgba> {
        self.layers.iter().find_map(|layer| match layer {
            AnnotationLayer::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// Returns `true` if the word carries the indicator.
    pub fn has_indicator(&self) -> bool {
        self.layers.contains(&AnnotationLayer::Indicator)
    }

    /// The word index and text for hit-testing.
    pub fn clickable(&self) -> Option<(usize, &str)> {
        self.layers.iter().find_map(|layer| match layer {
            AnnotationLayer::Clickable { index, word } => Some((*index, &**word)),
            _ => None,
        })
    }
}

/// Counters describing one composition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComposeStats {
    /// Words that received a background.
    pub highlighted: usize,
    /// Backgrounds that used the fallback color.
    pub invalid_colors: usize,
    /// Whether the indicator matched a word.
    pub indicator_applied: bool,
}

/// The render-ready result of composing annotations onto a text.
///
/// Holds one [`LayeredSpan`] per word, ordered by offset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Composition {
    spans: Vec<LayeredSpan>,
    stats: ComposeStats,
}

impl Composition {
    /// All spans in word order.
    pub fn spans(&self) -> &[LayeredSpan] {
        &self.spans
    }

    /// Number of spans, which equals the number of words.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if there are no words.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over the spans in word order.
    pub fn iter(&self) -> core::slice::Iter<'_, LayeredSpan> {
        self.spans.iter()
    }

    /// The span containing `offset`, if any.
    pub fn span_at(&self, offset: usize) -> Option<&LayeredSpan> {
        let candidate = self.spans.partition_point(|span| span.end <= offset);
        self.spans
            .get(candidate)
            .filter(|span| span.start <= offset)
    }

    /// The layers active at `offset`; empty between words.
    pub fn layers_at(&self, offset: usize) -> &[AnnotationLayer] {
        self.span_at(offset)
            .map(|span| span.layers.as_slice())
            .unwrap_or_default()
    }

    /// The span carrying the indicator, if any.
    pub fn indicator_span(&self) -> Option<&LayeredSpan> {
        self.spans.iter().find(|span| span.has_indicator())
    }

    /// Counters gathered while composing.
    pub fn stats(&self) -> ComposeStats {
        self.stats
    }
}

impl<'a> IntoIterator for &'a Composition {
    type Item = &'a LayeredSpan;
    type IntoIter = core::slice::Iter<'a, LayeredSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Composes annotations onto `words`, falling back to yellow for unparsable colors.
///
/// See [`compose_with`].
pub fn compose(
    words: &[WordSpan],
    highlights: &[HighlightAssignment],
    indicator: Option<usize>,
) -> Composition {
    compose_with(words, highlights, indicator, Rgba::YELLOW)
}

/// Composes annotations onto `words`.
///
/// For each word, in index order:
///
/// 1. a [`AnnotationLayer::Background`] if a highlight targets it. When several highlights
///    target the same word the first one in `highlights` wins. A color that fails to parse is
///    replaced by `fallback` and reported through `tracing`.
/// 2. an [`AnnotationLayer::Indicator`] if it is the `indicator` word.
/// 3. an [`AnnotationLayer::Clickable`] for every word.
///
/// Indices that match no word are ignored. The output depends only on the inputs.
///
/// ```
/// use advanced_text::{compose, tokenize, HighlightAssignment, Rgba};
///
/// let words = tokenize("one two three");
/// let composition = compose(&words, &[HighlightAssignment::new(1, "#00ff00")], Some(2));
/// assert_eq!(composition.spans()[1].background(), Some(Rgba::new(0, 255, 0, 255)));
/// assert_eq!(composition.indicator_span().map(|s| s.range()), Some(8..13));
/// ```
pub fn compose_with(
    words: &[WordSpan],
    highlights: &[HighlightAssignment],
    indicator: Option<usize>,
    fallback: Rgba,
) -> Composition {
    let mut requested: HashMap<usize, &str> = HashMap::with_capacity(highlights.len());
    for highlight in highlights {
        if let Some(index) = highlight.word_index() {
            requested
                .entry(index)
                .or_insert(highlight.highlight_color.as_str());
        }
    }

    let mut stats = ComposeStats::default();
    let mut spans = Vec::with_capacity(words.len());
    for word in words {
        let mut layers = SmallVec::new();

        if let Some(&input) = requested.get(&word.index()) {
            let color = match parse_highlight_color(input) {
                Ok(color) => color,
                Err(err) => {
                    tracing::warn!(word = word.index(), %err, "using fallback highlight color");
                    stats.invalid_colors += 1;
                    fallback
                }
            };
            layers.push(AnnotationLayer::Background(color));
            stats.highlighted += 1;
        }

        if indicator == Some(word.index()) {
            layers.push(AnnotationLayer::Indicator);
            stats.indicator_applied = true;
        }

        layers.push(AnnotationLayer::Clickable {
            index: word.index(),
            word: word.shared_text().clone(),
        });

        spans.push(LayeredSpan {
            start: word.start(),
            end: word.end(),
            layers,
        });
    }

    tracing::debug!(
        words = words.len(),
        highlighted = stats.highlighted,
        indicator = stats.indicator_applied,
        "composed annotation layers"
    );
    Composition { spans, stats }
}
