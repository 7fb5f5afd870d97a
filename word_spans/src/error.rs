// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::OffsetUnit;

/// Error produced when validating a host-supplied text range.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range, the text length in the
/// host's unit, and, for boundary failures, which endpoint was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start offset of the caller-provided range.
    start: usize,

    /// The end offset (exclusive) of the caller-provided range.
    end: usize,

    /// The length of the text, in `unit`, at the time of failure.
    len: usize,

    /// The unit the offsets were expressed in.
    unit: OffsetUnit,

    /// Extra detail for boundary-related errors.
    boundary: Option<BoundaryInfo>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start offset of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end offset of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length of the text at the time of the error, in [`Error::unit`].
    pub fn len(&self) -> usize {
        self.len
    }

    /// The unit the offending offsets were expressed in.
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Extra details for boundary-related errors, if available.
    pub fn boundary(&self) -> Option<BoundaryInfo> {
        self.boundary
    }

    fn new(kind: ErrorKind, start: usize, end: usize, len: usize, unit: OffsetUnit) -> Self {
        Self {
            kind,
            start,
            end,
            len,
            unit,
            boundary: None,
        }
    }

    pub(crate) fn empty_range(start: usize, end: usize, len: usize, unit: OffsetUnit) -> Self {
        Self::new(ErrorKind::EmptyRange, start, end, len, unit)
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize, unit: OffsetUnit) -> Self {
        Self::new(ErrorKind::InvalidBounds, start, end, len, unit)
    }

    pub(crate) fn not_on_char_boundary(
        start: usize,
        end: usize,
        len: usize,
        unit: OffsetUnit,
        which: Endpoint,
    ) -> Self {
        let index = match which {
            Endpoint::Start => start,
            Endpoint::End => end,
        };
        Self {
            boundary: Some(BoundaryInfo { which, index }),
            ..Self::new(ErrorKind::NotOnCharBoundary, start, end, len, unit)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::EmptyRange => write!(
                f,
                "empty range {}..{}: start must be before end",
                self.start, self.end
            ),
            ErrorKind::InvalidBounds => write!(
                f,
                "range {}..{} out of bounds for len {} ({})",
                self.start,
                self.end,
                self.len,
                self.unit.name()
            ),
            ErrorKind::NotOnCharBoundary => {
                if let Some(b) = self.boundary {
                    let which = match b.which {
                        Endpoint::Start => "start",
                        Endpoint::End => "end",
                    };
                    write!(
                        f,
                        "range {}..{}: {} index {} splits a character ({})",
                        self.start,
                        self.end,
                        which,
                        b.index,
                        self.unit.name()
                    )
                } else {
                    write!(
                        f,
                        "range {}..{} not on a character boundary",
                        self.start, self.end
                    )
                }
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range had `start >= end`, so it selects nothing.
    EmptyRange,

    /// An endpoint was past the end of the text.
    InvalidBounds,

    /// An endpoint fell inside a character (a UTF-8 sequence or a UTF-16 surrogate pair).
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

/// Details about an offset that was not on a character boundary.
///
/// Returned by [`Error::boundary`] when the error kind is [`ErrorKind::NotOnCharBoundary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundaryInfo {
    /// Which endpoint (`start` or `end`) was invalid.
    pub which: Endpoint,

    /// The offending offset.
    pub index: usize,
}
