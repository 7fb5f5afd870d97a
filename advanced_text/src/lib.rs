// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advanced Text composes word-level annotations onto plain text and turns user input on that
//! text into semantic events.
//!
//! Text is split into words by [`word_spans`]. Each word can then carry:
//!
//! - a background highlight, requested by word index with a CSS color string,
//! - the indicator emphasis (at most one word at a time),
//! - a clickable layer used for hit-testing.
//!
//! The crate does no layout or painting. A host adapter feeds it property updates and input,
//! applies the [`Composition`] it produces, and forwards the [`TextEvent`]s it returns.
//!
//! - [`AnnotationStore`] holds the host inputs and ignores updates that change nothing.
//! - [`compose`] produces one [`LayeredSpan`] per word.
//! - [`EventDispatcher`] tracks pointer gestures and the selection state machine.
//! - [`PendingApply`] defers applying a composition until the host's layout pass is done.
//! - [`AdvancedText`] ties all of the above together.
//!
//! ## Diagnostics
//!
//! Invalid input never produces an error for the host. Bad colors, unknown menu labels and
//! malformed ranges are reported through [`tracing`] and replaced by a fallback or a no-op.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `libm`: Use floating point implementations from libm when `std` is disabled.
//! - `serde`: Implement `Serialize` and `Deserialize` for host-facing data types.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

mod color;
mod compose;
mod config;
mod engine;
mod events;
mod pending;
mod store;

#[cfg(test)]
mod tests;

pub use color::{parse_highlight_color, IndicatorStyle, InvalidColor, Rgba};
pub use compose::{compose, compose_with, AnnotationLayer, ComposeStats, Composition, LayeredSpan};
pub use config::EngineConfig;
pub use engine::AdvancedText;
pub use events::{EventDispatcher, SelectionPhase, TextEvent, SELECTION_EVENT};
pub use pending::{Generation, Pending, PendingApply};
pub use store::{indicator_from_host, offset_from_host, AnnotationStore, HighlightAssignment};

pub use word_spans::{self, tokenize, tokenize_with, OffsetUnit, SelectionState, WordSpan, WordSpans};
