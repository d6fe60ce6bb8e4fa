#![warn(missing_docs)]

//! This crate provides a generic range minimum query data structure backed by a segment tree.
//! The structure is static, meaning it cannot be modified after it has been created:
//! it is built once from a sequence of elements and then answers minimum queries over
//! arbitrary sub-ranges of that sequence in logarithmic time.
//!
//! # Ordering
//! Elements only need a total order, which is supplied as a comparator function at
//! construction time. [`SegmentTree::from_vec`] uses the natural order of the element type,
//! [`SegmentTree::with_comparator`] accepts any `Fn(&T, &T) -> Ordering`. Inverting the
//! comparator turns the structure into a range *maximum* query index.
//!
//! # Errors
//! Construction and queries validate their arguments and report failures through
//! [`BuildError`] and [`RangeError`] instead of panicking. The display messages of these
//! errors are stable and part of the crate's contract.
//!
//! # Concurrency
//! The structure is immutable after construction, so any number of threads may query it
//! concurrently without synchronization.
//!
//! # Safety
//! This crate contains no unsafe code.

pub use crate::error::{BuildError, RangeError};
pub use crate::segment_tree::SegmentTree;

pub mod error;
pub mod segment_tree;
