// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word Spans splits text into whitespace-separated words and maps host offsets back to them.
//!
//! - [`tokenize`] / [`tokenize_with`] produce ordered, non-overlapping [`WordSpan`]s.
//! - [`WordSpans`] owns a text value together with its words.
//! - [`resolve_word_at`] and [`resolve_range`] turn pointer offsets and selection ranges into
//!   word indices and [`SelectionState`] snapshots.
//!
//! ## Offsets
//!
//! Offsets are expressed in an [`OffsetUnit`] chosen by the host: UTF-8 bytes (the default) or
//! UTF-16 code units. Every offset taken or returned by this crate is in that unit.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod error;
mod resolve;
mod text_range;
mod tokenize;
mod unit;

pub use crate::error::{BoundaryInfo, Endpoint, Error, ErrorKind};
pub use crate::resolve::{resolve_range, resolve_word_at, try_resolve_range, SelectionState};
pub use crate::text_range::TextRange;
pub use crate::tokenize::{tokenize, tokenize_with, WordSpan, WordSpans};
pub use crate::unit::OffsetUnit;
