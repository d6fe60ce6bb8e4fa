//! Error types reported by the segment tree. Construction failures and query failures are
//! distinct types because the caller can do nothing about either except fix the offending
//! argument and retry; keeping them apart makes the failing call site unambiguous.

use thiserror::Error;

/// Errors raised while building a [`SegmentTree`][crate::SegmentTree].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The input sequence contained no elements. An empty sequence has no minimum,
    /// so there is nothing a query could ever return.
    #[error("values can not be empty")]
    EmptyValues,
}

/// Errors raised by [`range_min`][crate::SegmentTree::range_min] when the queried range
/// does not denote a non-empty sub-range of the indexed sequence.
///
/// The checks are performed in declaration order, so a range that is invalid in more than
/// one way reports the first violation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The exclusive end of the range lies beyond the number of indexed elements.
    #[error("end can not exceed the values count")]
    EndOutOfBounds,

    /// The range contains no elements because `start >= end`.
    #[error("start can not be equal or greater than end")]
    EmptyRange,
}
