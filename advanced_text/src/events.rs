// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation of resolved hits into semantic events.

use alloc::string::String;
use alloc::vec::Vec;

use word_spans::{SelectionState, WordSpan};

/// The `event` value announcing that a selection was just established.
///
/// Any other value in [`TextEvent::Selection`] is the label of a chosen menu action.
pub const SELECTION_EVENT: &str = "selection";

/// An outbound event for the host's listeners.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEvent {
    /// A word was tapped.
    #[cfg_attr(feature = "serde", serde(rename = "onWordPress"))]
    WordPress {
        /// The word text.
        word: String,
        /// The word index.
        index: usize,
    },
    /// A selection was established, or a menu action was chosen for it.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "onSelection", rename_all = "camelCase")
    )]
    Selection {
        /// The selection snapshot.
        selected_text: String,
        /// [`SELECTION_EVENT`] or the chosen menu label.
        event: String,
    },
}

impl TextEvent {
    /// The host event name this event is delivered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WordPress { .. } => "onWordPress",
            Self::Selection { .. } => "onSelection",
        }
    }

    /// Returns `true` for the event announcing a new selection.
    pub fn is_selection_start(&self) -> bool {
        matches!(self, Self::Selection { event, .. } if event == SELECTION_EVENT)
    }
}

/// Where the selection interaction currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Nothing is selected.
    #[default]
    Idle,
    /// A non-empty range is selected and its action menu is showing.
    Selecting(SelectionState),
}

/// Tracks pointer gestures and the selection state machine, and emits [`TextEvent`]s.
///
/// The dispatcher only sees resolved hits (words and selections), never raw input or widgets.
///
/// Selection flows `Idle -> Selecting -> Idle`: choosing a menu action emits an event and
/// returns to `Idle`, as does [`EventDispatcher::clear_selection`].
#[derive(Clone, Debug, Default)]
pub struct EventDispatcher {
    pressed: Option<usize>,
    phase: SelectionPhase,
    menu: Vec<String>,
}

impl EventDispatcher {
    /// Creates an idle dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a press for a completed activation of `word`.
    ///
    /// Activating a word dismisses any selection.
    pub fn on_word_activated(&mut self, index: usize, word: &str) -> TextEvent {
        self.clear_selection();
        TextEvent::WordPress {
            word: word.into(),
            index,
        }
    }

    /// Enters `Selecting` with `selection` and the menu labels offered for it.
    ///
    /// Emits the [`SELECTION_EVENT`] event. A newer selection replaces an older one.
    ///
    /// The gesture that produced the selection (a long press) is consumed, so its release does
    /// not also count as a tap.
    pub fn on_selection_established(
        &mut self,
        selection: SelectionState,
        menu: Vec<String>,
    ) -> TextEvent {
        self.pressed = None;
        let event = TextEvent::Selection {
            selected_text: selection.selected_text.clone(),
            event: SELECTION_EVENT.into(),
        };
        self.phase = SelectionPhase::Selecting(selection);
        self.menu = menu;
        event
    }

    /// Emits the chosen action for the current selection and returns to `Idle`.
    ///
    /// Returns `None`, leaving the state unchanged, if nothing is selected or `label` was not
    /// offered in the selection's menu.
    pub fn on_menu_action_chosen(&mut self, label: &str) -> Option<TextEvent> {
        let SelectionPhase::Selecting(selection) = &self.phase else {
            tracing::debug!(label, "menu action without a selection, ignoring");
            return None;
        };
        if !self.menu.iter().any(|option| option == label) {
            tracing::warn!(label, "menu action was not offered, ignoring");
            return None;
        }
        let event = TextEvent::Selection {
            selected_text: selection.selected_text.clone(),
            event: label.into(),
        };
        self.clear_selection();
        Some(event)
    }

    /// Starts a gesture. `hit` is the word under the pointer, if any.
    ///
    /// Pressing outside any word dismisses the selection.
    pub fn pointer_down(&mut self, hit: Option<&WordSpan>) {
        match hit {
            Some(word) => self.pressed = Some(word.index()),
            None => {
                self.pressed = None;
                self.clear_selection();
            }
        }
    }

    /// Completes a gesture. `hit` is the word under the pointer, if any.
    ///
    /// Emits a [`TextEvent::WordPress`] only if the gesture started and ended on the same word.
    pub fn pointer_up(&mut self, hit: Option<&WordSpan>) -> Option<TextEvent> {
        let pressed = self.pressed.take()?;
        match hit {
            Some(word) if word.index() == pressed => {
                Some(self.on_word_activated(word.index(), word.text()))
            }
            _ => {
                tracing::trace!(pressed, "gesture left the pressed word");
                None
            }
        }
    }

    /// Abandons the current gesture without emitting anything.
    pub fn pointer_cancel(&mut self) {
        self.pressed = None;
    }

    /// Returns to `Idle`. Does nothing if already idle.
    pub fn clear_selection(&mut self) {
        self.phase = SelectionPhase::Idle;
        self.menu.clear();
    }

    /// The current selection phase.
    pub fn phase(&self) -> &SelectionPhase {
        &self.phase
    }

    /// The active selection, if any.
    pub fn selection(&self) -> Option<&SelectionState> {
        match &self.phase {
            SelectionPhase::Selecting(selection) => Some(selection),
            SelectionPhase::Idle => None,
        }
    }

    /// The menu labels offered for the active selection.
    pub fn menu(&self) -> &[String] {
        &self.menu
    }

    /// The word pressed by an unfinished gesture.
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }
}
