//! Byte ranges into constellation source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source document.
///
/// Spans are attached to [`crate::error::Label`]s so that the CLI can show
/// the offending part of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `range`.
    ///
    /// An inverted range is normalised to an empty span at `range.start`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a span of at most one byte at `offset`, clamped to `source_len`.
    pub fn at(offset: usize, source_len: usize) -> Self {
        let start = offset.min(source_len);
        Self::new(start..(start + 1).min(source_len))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
