// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

use word_spans::{try_resolve_range, SelectionState, WordSpan, WordSpans};

use crate::{
    compose_with, AnnotationStore, Composition, EngineConfig, EventDispatcher, Generation,
    HighlightAssignment, IndicatorStyle, Pending, PendingApply, SelectionPhase, TextEvent,
};

/// The word-indexed annotation engine behind one interactive text view.
///
/// A host adapter forwards property updates and user input to an `AdvancedText`, applies the
/// [`Composition`]s it schedules, and forwards the returned [`TextEvent`]s to its listeners.
///
/// - Text changes retokenize and recompose; equal text is ignored.
/// - Highlight and indicator changes recompose; equal values are ignored.
/// - Menu option changes only affect selections established afterwards.
///
/// Compositions are not applied directly: they are queued, and the host takes the latest one
/// with [`AdvancedText::take_pending_apply`] once its current layout pass is over.
///
/// ```
/// use advanced_text::{AdvancedText, HighlightAssignment, TextEvent};
///
/// let mut text = AdvancedText::new();
/// text.set_text("This is an example of AdvancedText component.");
/// text.set_indicator_word_index(Some(2));
/// text.set_highlighted_words(&[HighlightAssignment::new(4, "#6baeffb5")]);
/// text.set_menu_options(&["Copy"]);
///
/// // One apply is waiting: the latest composition.
/// let pending = text.take_pending_apply().unwrap();
/// assert_eq!(pending.value.len(), 7);
/// assert!(pending.value.spans()[2].has_indicator());
///
/// text.pointer_down(9);
/// assert_eq!(
///     text.pointer_up(9),
///     Some(TextEvent::WordPress { word: "an".into(), index: 2 })
/// );
///
/// assert!(text.range_selected(11, 18).unwrap().is_selection_start());
/// assert_eq!(
///     text.menu_action_invoked("Copy"),
///     Some(TextEvent::Selection { selected_text: "example".into(), event: "Copy".into() })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct AdvancedText {
    config: EngineConfig,
    words: WordSpans,
    store: AnnotationStore,
    dispatcher: EventDispatcher,
    composition: Arc<Composition>,
    pending: PendingApply<Arc<Composition>>,
    tokenize_count: u64,
    recompose_count: u64,
}

impl Default for AdvancedText {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl AdvancedText {
    /// Creates an engine with the default configuration and empty text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with `config` and empty text.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            words: WordSpans::empty(config.offset_unit),
            config,
            store: AnnotationStore::new(),
            dispatcher: EventDispatcher::new(),
            composition: Arc::default(),
            pending: PendingApply::new(),
            tokenize_count: 0,
            recompose_count: 0,
        }
    }

    /// Replaces the text. Returns `true` if it changed.
    ///
    /// A changed text is retokenized and recomposed, and any unfinished pointer gesture is
    /// abandoned. An active selection keeps its snapshot.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.words.text() == text {
            tracing::debug!("text unchanged, skipping update");
            return false;
        }
        self.words = WordSpans::new(text, self.config.offset_unit);
        self.tokenize_count += 1;
        self.dispatcher.pointer_cancel();
        tracing::debug!(
            len = self.words.text_len(),
            words = self.words.len(),
            "tokenized text"
        );
        self.recompose();
        true
    }

    /// Replaces the highlight list. Returns `true` if it changed.
    pub fn set_highlighted_words(&mut self, highlights: &[HighlightAssignment]) -> bool {
        let changed = self.store.set_highlighted_words(highlights);
        if changed {
            self.recompose();
        }
        changed
    }

    /// Replaces the indicator word; `None` removes it. Returns `true` if it changed.
    ///
    /// Hosts with a `-1` sentinel can convert with [`indicator_from_host`].
    ///
    /// [`indicator_from_host`]: crate::indicator_from_host
    pub fn set_indicator_word_index(&mut self, index: Option<usize>) -> bool {
        let changed = self.store.set_indicator_word_index(index);
        if changed {
            self.recompose();
        }
        changed
    }

    /// Replaces the selection menu labels. Returns `true` if they changed.
    ///
    /// Never recomposes.
    pub fn set_menu_options<S: AsRef<str>>(&mut self, options: &[S]) -> bool {
        self.store.set_menu_options(options)
    }

    fn recompose(&mut self) {
        let composition = compose_with(
            self.words.as_slice(),
            self.store.current_highlights(),
            self.store.current_indicator_index(),
            self.config.fallback_color,
        );
        self.recompose_count += 1;
        self.composition = Arc::new(composition);
        let generation = self.pending.schedule(Arc::clone(&self.composition));
        tracing::debug!(
            generation = generation.get(),
            recompositions = self.recompose_count,
            "scheduled apply"
        );
    }

    /// Starts a pointer gesture at `offset`.
    ///
    /// Host offsets are converted with [`offset_from_host`](crate::offset_from_host).
    pub fn pointer_down(&mut self, offset: usize) {
        let hit = self.words.word_at(offset);
        tracing::trace!(offset, word = hit.map(WordSpan::index), "pointer down");
        self.dispatcher.pointer_down(hit);
    }

    /// Ends a pointer gesture at `offset`.
    ///
    /// Returns a [`TextEvent::WordPress`] if the gesture started and ended on the same word.
    pub fn pointer_up(&mut self, offset: usize) -> Option<TextEvent> {
        let hit = self.words.word_at(offset);
        tracing::trace!(offset, word = hit.map(WordSpan::index), "pointer up");
        self.dispatcher.pointer_up(hit)
    }

    /// Abandons the current pointer gesture.
    pub fn pointer_cancel(&mut self) {
        self.dispatcher.pointer_cancel();
    }

    /// Reports that the host selected `start..end`.
    ///
    /// A valid, non-empty range captures its text and the current menu options and returns the
    /// [`SELECTION_EVENT`] event. Anything else clears the selection and returns `None`.
    ///
    /// Hosts reporting `i32` bounds convert them with [`offset_from_host`] first; a negative
    /// bound is no selection.
    ///
    /// [`SELECTION_EVENT`]: crate::SELECTION_EVENT
    /// [`offset_from_host`]: crate::offset_from_host
    pub fn range_selected(&mut self, start: usize, end: usize) -> Option<TextEvent> {
        match try_resolve_range(start, end, &self.words) {
            Ok(selection) => {
                let menu = self.store.menu_snapshot();
                Some(self.dispatcher.on_selection_established(selection, menu))
            }
            Err(err) => {
                tracing::debug!(%err, "treating range as no selection");
                self.dispatcher.clear_selection();
                None
            }
        }
    }

    /// Reports that the user chose `label` from the selection menu.
    pub fn menu_action_invoked(&mut self, label: &str) -> Option<TextEvent> {
        self.dispatcher.on_menu_action_chosen(label)
    }

    /// Reports that the host dismissed the selection UI.
    pub fn dismiss_selection(&mut self) {
        self.dispatcher.clear_selection();
    }

    /// Takes the composition waiting to be applied, if any.
    ///
    /// Call after the host's layout pass. Only the most recent composition is ever returned.
    pub fn take_pending_apply(&mut self) -> Option<Pending<Arc<Composition>>> {
        self.pending.take()
    }

    /// Returns `true` if no newer composition than `generation` has been scheduled.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.pending.is_current(generation)
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The indicator emphasis hosts should paint [`Indicator`] layers with.
    ///
    /// [`Indicator`]: crate::AnnotationLayer::Indicator
    pub fn indicator_style(&self) -> IndicatorStyle {
        self.config.indicator_style
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.words.text()
    }

    /// The words of the current text.
    pub fn words(&self) -> &WordSpans {
        &self.words
    }

    /// The word containing `offset`, if any.
    pub fn word_at(&self, offset: usize) -> Option<&WordSpan> {
        self.words.word_at(offset)
    }

    /// The most recent composition, whether or not it has been taken.
    pub fn composition(&self) -> &Arc<Composition> {
        &self.composition
    }

    /// The current annotation inputs.
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// The current selection phase.
    pub fn selection_phase(&self) -> &SelectionPhase {
        self.dispatcher.phase()
    }

    /// The active selection snapshot, if any.
    pub fn selection(&self) -> Option<&SelectionState> {
        self.dispatcher.selection()
    }

    /// The menu labels offered for the active selection.
    pub fn selection_menu(&self) -> &[String] {
        self.dispatcher.menu()
    }

    /// The word pressed by an unfinished gesture, for press feedback.
    pub fn pressed_word(&self) -> Option<&WordSpan> {
        self.dispatcher.pressed().and_then(|index| self.words.get(index))
    }

    /// How many times the text has been tokenized.
    pub fn tokenize_count(&self) -> u64 {
        self.tokenize_count
    }

    /// How many times annotations have been composed.
    pub fn recompose_count(&self) -> u64 {
        self.recompose_count
    }
}
