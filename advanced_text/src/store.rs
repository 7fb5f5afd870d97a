// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied annotation inputs.

use alloc::string::String;
use alloc::vec::Vec;

use crate::SELECTION_EVENT;

/// A request to paint the background of one word.
///
/// `index` keeps the host's signed integer: negative or out-of-range indices are accepted
/// and simply never match a word.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HighlightAssignment {
    /// The word to highlight.
    pub index: i32,
    /// The background color, as a CSS color string.
    pub highlight_color: String,
}

impl HighlightAssignment {
    /// Creates a highlight for the word at `index`.
    pub fn new(index: i32, highlight_color: impl Into<String>) -> Self {
        Self {
            index,
            highlight_color: highlight_color.into(),
        }
    }

    /// The targeted word index, or `None` if the host index is negative.
    pub fn word_index(&self) -> Option<usize> {
        usize::try_from(self.index).ok()
    }
}

/// Maps a host indicator index to an optional word index.
///
/// Hosts use `-1` (or any negative value) for "no indicator".
pub fn indicator_from_host(index: i32) -> Option<usize> {
    usize::try_from(index).ok()
}

/// Converts a host text offset, where a negative value (such as Android's `-1` selection
/// bound) means "no offset".
///
/// A range with either bound `None` is no selection; report it with
/// [`AdvancedText::dismiss_selection`].
///
/// [`AdvancedText::dismiss_selection`]: crate::AdvancedText::dismiss_selection
pub fn offset_from_host(offset: i32) -> Option<usize> {
    usize::try_from(offset).ok()
}

/// Holds the current annotation inputs and filters out updates that change nothing.
///
/// Each input is replaced wholesale by its setter. A setter given a value equal to the stored
/// one returns `false` and leaves the store untouched, so hosts that resend identical
/// properties on every frame cause no recomposition.
#[derive(Clone, Debug, Default)]
pub struct AnnotationStore {
    highlights: Vec<HighlightAssignment>,
    indicator: Option<usize>,
    menu_options: Vec<String>,
    revision: u64,
}

impl AnnotationStore {
    /// Creates an empty store: no highlights, no indicator, no menu options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the highlight list. Returns `true` if it changed.
    pub fn set_highlighted_words(&mut self, highlights: &[HighlightAssignment]) -> bool {
        if self.highlights == highlights {
            tracing::debug!("highlighted words unchanged, skipping update");
            return false;
        }
        self.highlights = highlights.to_vec();
        self.revision += 1;
        true
    }

    /// Replaces the indicator word. Returns `true` if it changed.
    pub fn set_indicator_word_index(&mut self, index: Option<usize>) -> bool {
        if self.indicator == index {
            tracing::debug!("indicator word index unchanged, skipping update");
            return false;
        }
        self.indicator = index;
        self.revision += 1;
        true
    }

    /// Replaces the contextual menu labels. Returns `true` if they changed.
    ///
    /// Menu options never affect composition.
    pub fn set_menu_options<S: AsRef<str>>(&mut self, options: &[S]) -> bool {
        let unchanged = self
            .menu_options
            .iter()
            .map(String::as_str)
            .eq(options.iter().map(|option| option.as_ref()));
        if unchanged {
            return false;
        }
        self.menu_options = options
            .iter()
            .map(|option| String::from(option.as_ref()))
            .collect();
        self.revision += 1;
        true
    }

    /// The current highlight list, in host order.
    pub fn current_highlights(&self) -> &[HighlightAssignment] {
        &self.highlights
    }

    /// The current indicator word, if any.
    pub fn current_indicator_index(&self) -> Option<usize> {
        self.indicator
    }

    /// The current menu labels, in host order.
    pub fn current_menu_options(&self) -> &[String] {
        &self.menu_options
    }

    /// Counts accepted updates across all three inputs.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The labels to offer for a selection established now.
    ///
    /// A label equal to the `"selection"` sentinel is left out: that event name is reserved
    /// for announcing a new selection.
    pub fn menu_snapshot(&self) -> Vec<String> {
        let mut menu = Vec::with_capacity(self.menu_options.len());
        for option in &self.menu_options {
            if option == SELECTION_EVENT {
                tracing::warn!(
                    label = option.as_str(),
                    "menu option collides with the selection event name, dropping it"
                );
                continue;
            }
            menu.push(option.clone());
        }
        menu
    }
}
