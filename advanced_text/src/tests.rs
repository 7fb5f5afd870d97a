// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    indicator_from_host, offset_from_host, AdvancedText, AnnotationLayer, EngineConfig, HighlightAssignment,
    OffsetUnit, Rgba, SelectionPhase, TextEvent, SELECTION_EVENT,
};
use alloc::string::String;
use alloc::vec::Vec;

const TEXT: &str = "This is an example of AdvancedText component.";

/// An engine set up like the demo app: indicator on "an", "of" highlighted.
fn demo() -> AdvancedText {
    let mut text = AdvancedText::new();
    text.set_text(TEXT);
    text.set_indicator_word_index(indicator_from_host(2));
    text.set_highlighted_words(&[HighlightAssignment::new(4, "#6baeffb5")]);
    text.set_menu_options(&["Highlight", "Copy", "Translate"]);
    text
}

fn offset_in_word(text: &AdvancedText, index: usize) -> usize {
    text.words().get(index).expect("word exists").start()
}

#[test]
fn demo_composition() {
    let text = demo();
    let composition = text.composition();
    assert_eq!(composition.len(), 7);

    let indicated: Vec<_> = composition
        .iter()
        .filter(|span| span.has_indicator())
        .filter_map(|span| span.clickable())
        .collect();
    assert_eq!(indicated, [(2, "an")]);

    let highlighted: Vec<_> = composition
        .iter()
        .filter_map(|span| Some((span.clickable()?.1, span.background()?)))
        .collect();
    assert_eq!(highlighted, [("of", Rgba::new(0x6b, 0xae, 0xff, 0xb5))]);

    for (span, word) in composition.iter().zip(text.words()) {
        assert_eq!(span.clickable(), Some((word.index(), word.text())));
        assert_eq!(span.range(), word.range());
    }
}

#[test]
fn repeated_identical_updates_do_not_recompose() {
    let mut text = demo();
    let tokenized = text.tokenize_count();
    let composed = text.recompose_count();

    for _ in 0..10 {
        assert!(!text.set_text(TEXT));
        assert!(!text.set_indicator_word_index(Some(2)));
        assert!(!text.set_highlighted_words(&[HighlightAssignment::new(4, "#6baeffb5")]));
        assert!(!text.set_menu_options(&["Highlight", "Copy", "Translate"]));
    }

    assert_eq!(text.tokenize_count(), tokenized);
    assert_eq!(text.recompose_count(), composed);
}

#[test]
fn annotation_changes_do_not_retokenize() {
    let mut text = demo();
    assert_eq!(text.tokenize_count(), 1);
    let composed = text.recompose_count();

    assert!(text.set_indicator_word_index(Some(3)));
    assert!(text.set_highlighted_words(&[]));
    assert!(text.set_menu_options(&["Copy"]));

    assert_eq!(text.tokenize_count(), 1);
    // Menu options never recompose.
    assert_eq!(text.recompose_count(), composed + 2);
}

#[test]
fn pending_apply_keeps_only_the_latest() {
    let mut text = AdvancedText::new();
    assert!(text.take_pending_apply().is_none());

    text.set_text("first text");
    text.set_text("second text here");
    text.set_indicator_word_index(Some(1));

    let pending = text.take_pending_apply().expect("an apply is waiting");
    assert!(text.is_current(pending.generation));
    assert_eq!(pending.value.len(), 3);
    assert!(pending.value.spans()[1].has_indicator());
    assert!(text.take_pending_apply().is_none());

    text.set_text("third");
    assert!(!text.is_current(pending.generation));
}

#[test]
fn pending_apply_matches_current_composition() {
    let mut text = demo();
    let pending = text.take_pending_apply().unwrap();
    assert_eq!(&pending.value, text.composition());
}

#[test]
fn clearing_text_schedules_an_empty_composition() {
    let mut text = demo();
    text.take_pending_apply();
    assert!(text.set_text(""));
    let pending = text.take_pending_apply().unwrap();
    assert!(pending.value.is_empty());
    assert!(text.words().is_empty());

    // Input on empty text is a no-op.
    text.pointer_down(0);
    assert_eq!(text.pointer_up(0), None);
    assert_eq!(text.range_selected(0, 1), None);
}

#[test]
fn tap_emits_one_word_press() {
    let mut text = demo();
    let offset = offset_in_word(&text, 2);
    text.pointer_down(offset);
    assert_eq!(text.pressed_word().map(|w| w.text()), Some("an"));
    let events: Vec<_> = text.pointer_up(offset).into_iter().collect();
    assert_eq!(
        events,
        [TextEvent::WordPress {
            word: "an".into(),
            index: 2
        }]
    );
    assert!(text.pressed_word().is_none());
}

#[test]
fn gesture_leaving_the_word_emits_nothing() {
    let mut text = demo();
    text.pointer_down(offset_in_word(&text, 2));
    assert_eq!(text.pointer_up(offset_in_word(&text, 3)), None);

    // Ending on whitespace.
    text.pointer_down(offset_in_word(&text, 2));
    assert_eq!(text.pointer_up(7), None);

    // Pressing whitespace and releasing on a word.
    text.pointer_down(7);
    assert_eq!(text.pointer_up(offset_in_word(&text, 2)), None);
}

#[test]
fn text_change_abandons_gesture() {
    let mut text = demo();
    text.pointer_down(0);
    text.set_text("This changed");
    assert_eq!(text.pointer_up(0), None);
}

#[test]
fn selection_round_trip() {
    let mut text = demo();
    let expected = String::from(&TEXT[10..20]);

    let start = text.range_selected(10, 20).unwrap();
    assert_eq!(
        start,
        TextEvent::Selection {
            selected_text: expected.clone(),
            event: SELECTION_EVENT.into()
        }
    );
    assert_eq!(text.selection_menu(), ["Highlight", "Copy", "Translate"]);

    // The snapshot survives a text change.
    text.set_text("Something else entirely, and longer than before.");
    let action = text.menu_action_invoked("Copy").unwrap();
    assert_eq!(
        action,
        TextEvent::Selection {
            selected_text: expected,
            event: "Copy".into()
        }
    );
    assert_eq!(text.selection_phase(), &SelectionPhase::Idle);
}

#[test]
fn long_press_selection_survives_release() {
    let mut text = demo();
    let offset = offset_in_word(&text, 3);
    text.pointer_down(offset);
    assert!(text.range_selected(11, 18).unwrap().is_selection_start());
    assert_eq!(text.pointer_up(offset), None);
    assert!(matches!(
        text.selection_phase(),
        SelectionPhase::Selecting(selection) if selection.selected_text == "example"
    ));
    assert_eq!(
        text.menu_action_invoked("Copy"),
        Some(TextEvent::Selection {
            selected_text: "example".into(),
            event: "Copy".into()
        })
    );
}

#[test]
fn malformed_ranges_clear_selection() {
    let mut text = demo();
    assert!(text.range_selected(0, 4).is_some());
    assert_eq!(text.range_selected(4, 4), None);
    assert!(text.selection().is_none());

    assert_eq!(text.range_selected(20, 10), None);
    assert_eq!(text.range_selected(0, TEXT.len() + 1), None);
    assert_eq!(text.menu_action_invoked("Copy"), None);
}

/// Forwards an Android-style selection, where `-1` bounds mean nothing is selected.
fn host_selection(text: &mut AdvancedText, start: i32, end: i32) -> Option<TextEvent> {
    match (offset_from_host(start), offset_from_host(end)) {
        (Some(start), Some(end)) => text.range_selected(start, end),
        _ => {
            text.dismiss_selection();
            None
        }
    }
}

#[test]
fn negative_host_offsets_are_no_selection() {
    assert_eq!(offset_from_host(-1), None);
    assert_eq!(offset_from_host(i32::MIN), None);
    assert_eq!(offset_from_host(0), Some(0));
    assert_eq!(offset_from_host(18), Some(18));

    let mut text = demo();
    assert!(host_selection(&mut text, 11, 18).is_some());
    assert_eq!(host_selection(&mut text, -1, -1), None);
    assert!(text.selection().is_none());
    assert_eq!(host_selection(&mut text, -1, 18), None);
    assert_eq!(text.menu_action_invoked("Copy"), None);
}

#[test]
fn menu_changes_after_selection_do_not_alter_its_menu() {
    let mut text = demo();
    text.range_selected(0, 4);
    text.set_menu_options(&["Share"]);
    assert_eq!(text.menu_action_invoked("Share"), None);
    assert!(text.menu_action_invoked("Translate").is_some());
}

#[test]
fn dismissal_and_taps_return_to_idle() {
    let mut text = demo();
    text.range_selected(0, 4);
    text.dismiss_selection();
    text.dismiss_selection();
    assert_eq!(text.selection_phase(), &SelectionPhase::Idle);

    text.range_selected(0, 4);
    let offset = offset_in_word(&text, 5);
    text.pointer_down(offset);
    assert!(text.pointer_up(offset).is_some());
    assert!(text.selection().is_none());
}

#[test]
fn sentinel_menu_option_is_not_offered() {
    let mut text = demo();
    text.set_menu_options(&[SELECTION_EVENT, "Copy"]);
    text.range_selected(0, 4);
    assert_eq!(text.selection_menu(), ["Copy"]);
    assert_eq!(text.menu_action_invoked(SELECTION_EVENT), None);
}

#[test]
fn invalid_color_falls_back_without_failing() {
    let fallback = Rgba::new(9, 9, 9, 255);
    let mut text = AdvancedText::with_config(EngineConfig::new().with_fallback_color(fallback));
    text.set_text("one two three");
    text.set_highlighted_words(&[
        HighlightAssignment::new(0, "#nothex"),
        HighlightAssignment::new(2, "blue"),
    ]);
    let composition = text.composition();
    assert_eq!(composition.spans()[0].background(), Some(fallback));
    assert_eq!(
        composition.spans()[2].background(),
        Some(Rgba::new(0, 0, 255, 255))
    );
    assert_eq!(composition.stats().invalid_colors, 1);
}

#[test]
fn out_of_range_annotations_are_ignored() {
    let mut text = demo();
    text.set_indicator_word_index(Some(99));
    text.set_highlighted_words(&[
        HighlightAssignment::new(-1, "red"),
        HighlightAssignment::new(50, "red"),
        HighlightAssignment::new(1, "red"),
    ]);
    let composition = text.composition();
    assert!(composition.indicator_span().is_none());
    assert_eq!(composition.stats().highlighted, 1);
    assert_eq!(composition.spans()[1].background(), Some(Rgba::RED));
}

#[test]
fn utf16_hosts() {
    let config = EngineConfig::new().with_offset_unit(OffsetUnit::Utf16);
    let mut text = AdvancedText::with_config(config);
    text.set_text("😀 héllo wörld");
    text.set_indicator_word_index(Some(2));

    let ranges: Vec<_> = text.composition().iter().map(|s| s.range()).collect();
    assert_eq!(ranges, [0..2, 3..8, 9..14]);

    text.pointer_down(10);
    assert_eq!(
        text.pointer_up(10),
        Some(TextEvent::WordPress {
            word: "wörld".into(),
            index: 2
        })
    );

    let selected = text.range_selected(3, 14).unwrap();
    assert_eq!(
        selected,
        TextEvent::Selection {
            selected_text: "héllo wörld".into(),
            event: SELECTION_EVENT.into()
        }
    );
    // Splitting the emoji's surrogate pair selects nothing.
    assert_eq!(text.range_selected(1, 5), None);
}

#[test]
fn layers_at_pointer_offsets() {
    let text = demo();
    let layers = text.composition().layers_at(offset_in_word(&text, 4));
    assert!(matches!(layers.first(), Some(AnnotationLayer::Background(_))));
    assert!(text.composition().layers_at(7).is_empty());
    assert_eq!(text.indicator_style().color, Rgba::RED);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use crate::{HighlightAssignment, TextEvent};
    use alloc::vec::Vec;

    #[test]
    fn events_use_host_field_names() {
        let press = TextEvent::WordPress {
            word: "an".into(),
            index: 2,
        };
        assert_eq!(
            serde_json::to_value(&press).unwrap(),
            serde_json::json!({ "onWordPress": { "word": "an", "index": 2 } })
        );

        let selection = TextEvent::Selection {
            selected_text: "is an".into(),
            event: "Copy".into(),
        };
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            serde_json::json!({ "onSelection": { "selectedText": "is an", "event": "Copy" } })
        );
    }

    #[test]
    fn highlights_from_host_json() {
        let highlights: Vec<HighlightAssignment> =
            serde_json::from_str(r##"[{ "index": 4, "highlightColor": "#6baeffb5" }]"##)
                .unwrap();
        assert_eq!(highlights, [HighlightAssignment::new(4, "#6baeffb5")]);
    }
}
