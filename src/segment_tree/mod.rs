//! A segment tree for range minimum queries over a static sequence of generic elements.
//! The tree pre-computes the minimum of canonical sub-ranges during construction, which
//! takes O(n) time and space, and then decomposes each query into O(log n) canonical
//! nodes whose pre-computed minima are combined.

use std::cmp::Ordering;
use std::mem::size_of;
use std::ops::{Bound, RangeBounds};

use crate::error::{BuildError, RangeError};

/// A static range minimum query data structure over elements of type `T`, ordered by a
/// comparator of type `F` that is injected at construction time. The default comparator
/// type is a plain function pointer, which is what [`from_vec`][SegmentTree::from_vec]
/// stores for the natural order of `T`.
///
/// The tree is laid out implicitly in a flat array: the root sits at index 0 and the
/// children of node `i` sit at `2i + 1` and `2i + 2`. The array is sized for a complete
/// binary tree whose leaves cover all input positions, so some trailing slots stay
/// unoccupied when the input length is not a power of two; those slots are never visited
/// by either construction or queries.
///
/// Queries use the half-open convention: `range_min(start, end)` searches `[start, end)`
/// of the original input positions.
///
/// # Example
/// ```rust
/// use seg_rmq::SegmentTree;
///
/// let rmq = SegmentTree::from_vec(vec![4u64, 10, 3, 11, 2, 12])?;
///
/// assert_eq!(*rmq.range_min(0, 2)?, 4);
/// assert_eq!(*rmq.range_min(0, 3)?, 3);
/// assert_eq!(*rmq.range_min(3, 6)?, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct SegmentTree<T, F = fn(&T, &T) -> Ordering> {
    nodes: Vec<Option<T>>,
    len: usize,
    compare: F,
}

impl<T: Clone + Ord> SegmentTree<T> {
    /// Creates a new range minimum query structure over the given elements, ordered by
    /// the natural order of `T`. The elements are moved into the structure; construction
    /// takes O(n) time and the tree occupies O(n) space.
    ///
    /// # Errors
    /// Returns [`BuildError::EmptyValues`] if `values` contains no elements.
    ///
    /// # Example
    /// ```rust
    /// use seg_rmq::SegmentTree;
    ///
    /// let rmq = SegmentTree::from_vec(vec![5, 3, 2, 1, 9])?;
    /// assert_eq!(*rmq.range_min(0, 5)?, 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_vec(values: Vec<T>) -> Result<Self, BuildError> {
        Self::with_comparator(values, T::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates a new range minimum query structure over the given elements, ordered by
    /// the supplied comparator. The comparator must define a total order on `T`; it is
    /// stored inside the structure and used for every comparison during construction and
    /// querying. Passing a comparator that inverts the natural order yields a range
    /// *maximum* query structure.
    ///
    /// # Errors
    /// Returns [`BuildError::EmptyValues`] if `values` contains no elements.
    ///
    /// # Example
    /// ```rust
    /// use seg_rmq::SegmentTree;
    ///
    /// let rmq = SegmentTree::with_comparator(vec![5, 3, 9, 1], |a, b| b.cmp(a))?;
    /// assert_eq!(*rmq.range_min(0, 4)?, 9);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_comparator(values: Vec<T>, compare: F) -> Result<Self, BuildError> {
        if values.is_empty() {
            return Err(BuildError::EmptyValues);
        }

        let len = values.len();

        // number of node slots of a complete binary tree with ceil(log2(len)) levels
        // above the leaves. Trailing slots stay None when len is not a power of two.
        let height = len.next_power_of_two().trailing_zeros();
        let mut nodes = vec![None; (1usize << (height + 1)) - 1];

        build_subtree(&values, &mut nodes, 0, len - 1, 0, &compare);

        Ok(Self {
            nodes,
            len,
            compare,
        })
    }

    /// Returns a reference to the minimum element, according to the stored comparator,
    /// among the input positions `[start, end)`. The query visits O(log n) nodes.
    ///
    /// When several elements in the range compare equal to the minimum, the returned
    /// reference deterministically points at the candidate produced by the left subtree
    /// when it compares strictly less than the right candidate, and at the right
    /// candidate otherwise. The observed value is the same either way.
    ///
    /// # Errors
    /// Returns [`RangeError::EndOutOfBounds`] if `end > self.len()`, and
    /// [`RangeError::EmptyRange`] if `start >= end`, in that order.
    ///
    /// # Example
    /// ```rust
    /// use seg_rmq::{RangeError, SegmentTree};
    ///
    /// let rmq = SegmentTree::from_vec(vec![5, 3, 2, 1, 9])?;
    /// assert_eq!(*rmq.range_min(0, 2)?, 3);
    /// assert_eq!(rmq.range_min(2, 2), Err(RangeError::EmptyRange));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn range_min(&self, start: usize, end: usize) -> Result<&T, RangeError> {
        if end > self.len {
            return Err(RangeError::EndOutOfBounds);
        }
        if start >= end {
            return Err(RangeError::EmptyRange);
        }

        // the public contract is half-open, the tree decomposition is inclusive
        let min = self.query_subtree(0, self.len - 1, start, end - 1, 0);

        // the root covers [0, len - 1] and the range was validated above, so at least
        // one subtree contributed
        Ok(min.expect("validated query range intersects the root range"))
    }

    /// Convenience adapter for [`range_min`][SegmentTree::range_min] accepting range
    /// syntax. Unbounded ends default to the full sequence.
    ///
    /// # Errors
    /// The same conditions as [`range_min`][SegmentTree::range_min].
    ///
    /// # Example
    /// ```rust
    /// use seg_rmq::SegmentTree;
    ///
    /// let rmq = SegmentTree::from_vec(vec![5, 4, 3, 2, 1])?;
    /// assert_eq!(*rmq.range_min_with_range(0..3)?, 3);
    /// assert_eq!(*rmq.range_min_with_range(0..=3)?, 2);
    /// assert_eq!(*rmq.range_min_with_range(..)?, 1);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn range_min_with_range<R: RangeBounds<usize>>(&self, range: R) -> Result<&T, RangeError> {
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i + 1,
            Bound::Excluded(&i) => i,
            Bound::Unbounded => self.len,
        };
        self.range_min(start, end)
    }

    /// Returns a reference to the comparator the structure was built with.
    #[must_use]
    pub fn comparator(&self) -> &F {
        &self.compare
    }

    /// Returns the number of indexed elements (i.e. the length of the input sequence,
    /// not the size of the backing node array).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the structure indexes no elements. Construction rejects empty
    /// input, so this always returns false; it exists for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the amount of memory used by the backing node array in bytes. This does
    /// not include heap memory owned by the elements themselves.
    #[must_use]
    pub fn heap_size(&self) -> usize {
        self.nodes.len() * size_of::<Option<T>>()
    }

    /// Decomposes the inclusive query range [qstart, qend] over the subtree rooted at
    /// `node`, which covers the inclusive index range [lo, hi]. Returns None if the
    /// subtree does not intersect the query range.
    fn query_subtree(
        &self,
        lo: usize,
        hi: usize,
        qstart: usize,
        qend: usize,
        node: usize,
    ) -> Option<&T> {
        // fully contained: reuse the pre-computed minimum without descending
        if qstart <= lo && qend >= hi {
            return self.nodes[node].as_ref();
        }

        // no intersection
        if hi < qstart || lo > qend {
            return None;
        }

        let mid = lo + (hi - lo) / 2;
        let left = self.query_subtree(lo, mid, qstart, qend, 2 * node + 1);
        let right = self.query_subtree(mid + 1, hi, qstart, qend, 2 * node + 2);

        match (left, right) {
            (Some(a), Some(b)) => {
                if (self.compare)(a, b) == Ordering::Less {
                    Some(a)
                } else {
                    Some(b)
                }
            }
            (Some(a), None) => Some(a),
            (None, right) => right,
        }
    }
}

impl<T: Clone + Ord> TryFrom<Vec<T>> for SegmentTree<T> {
    type Error = BuildError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

/// Recursively populates the subtree rooted at `node`, which covers the inclusive input
/// index range [lo, hi]. Each leaf stores its input element, each internal node stores
/// the comparator-minimum of its children.
fn build_subtree<T, F>(
    values: &[T],
    nodes: &mut [Option<T>],
    lo: usize,
    hi: usize,
    node: usize,
    compare: &F,
) where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if lo == hi {
        nodes[node] = Some(values[lo].clone());
        return;
    }

    let mid = lo + (hi - lo) / 2;
    let left = 2 * node + 1;
    let right = 2 * node + 2;

    build_subtree(values, nodes, lo, mid, left, compare);
    build_subtree(values, nodes, mid + 1, hi, right, compare);

    nodes[node] = match (&nodes[left], &nodes[right]) {
        (Some(a), Some(b)) => {
            if compare(a, b) == Ordering::Less {
                nodes[left].clone()
            } else {
                nodes[right].clone()
            }
        }
        // both children were just built, so this arm is never taken
        _ => None,
    };
}
