//! Fixed-width k-nearest-neighbour tables consumed by the clustering pipeline.
//!
//! Tables arrive from an external k-NN provider as a dense, row-major `N x k`
//! buffer with no ordering guarantee within a row. Shape and bounds are
//! validated up front so the pipeline never has to detect malformed input
//! mid-stage. The [`SortedNeighbourTable`] variant, produced through the
//! segmented-sort primitive, is a distinct type so similarity scans can rely
//! on ascending rows.

use crate::{error::NeighbourTableError, primitives};

/// Dense `N x k` mapping from point index to its `k` nearest neighbours.
///
/// # Examples
/// ```
/// use snn_core::NeighbourTable;
///
/// let table = NeighbourTable::new(3, 2, vec![2, 1, 0, 2, 1, 0])
///     .expect("shape and bounds are valid");
/// assert_eq!(table.point_count(), 3);
/// assert_eq!(table.k(), 2);
/// assert_eq!(table.row(1), &[0, 2]);
///
/// let sorted = table.into_sorted();
/// assert_eq!(sorted.row(0), &[1, 2]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NeighbourTable {
    entries: Vec<usize>,
    point_count: usize,
    k: usize,
}

impl NeighbourTable {
    /// Builds a table from a flat row-major buffer.
    ///
    /// # Errors
    /// Returns [`NeighbourTableError::ShapeMismatch`] when `entries.len()`
    /// differs from `point_count * k`, and
    /// [`NeighbourTableError::NeighbourOutOfBounds`] when any entry references
    /// a point outside `0..point_count`.
    pub fn new(
        point_count: usize,
        k: usize,
        entries: Vec<usize>,
    ) -> Result<Self, NeighbourTableError> {
        let expected = point_count.saturating_mul(k);
        if entries.len() != expected {
            return Err(NeighbourTableError::ShapeMismatch {
                expected,
                got: entries.len(),
            });
        }

        if k > 0 {
            for (index, &neighbour) in entries.iter().enumerate() {
                if neighbour >= point_count {
                    return Err(NeighbourTableError::NeighbourOutOfBounds {
                        point: index / k,
                        neighbour,
                        point_count,
                    });
                }
            }
        }

        Ok(Self {
            entries,
            point_count,
            k,
        })
    }

    /// Returns the number of points in the table.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Returns the fixed neighbour count per row.
    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns whether the table holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    /// Returns the neighbour row of `point` in provider order.
    ///
    /// # Panics
    /// Panics when `point >= point_count`.
    #[must_use]
    pub fn row(&self, point: usize) -> &[usize] {
        &self.entries[point * self.k..(point + 1) * self.k]
    }

    /// Sorts every row ascending, consuming the table.
    #[must_use]
    pub fn into_sorted(mut self) -> SortedNeighbourTable {
        primitives::sort_segments(&mut self.entries, self.k);
        SortedNeighbourTable { inner: self }
    }

    /// Produces an ascending-sorted copy of the table.
    ///
    /// Sorting a copy lets one table serve several parameter sweeps.
    #[must_use]
    pub fn to_sorted(&self) -> SortedNeighbourTable {
        self.clone().into_sorted()
    }
}

/// A [`NeighbourTable`] whose rows are sorted ascending by neighbour index.
///
/// Sorted rows let the shared-neighbour test run as a single linear merge and
/// the mutuality test as a binary search, instead of set intersections.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortedNeighbourTable {
    inner: NeighbourTable,
}

impl SortedNeighbourTable {
    /// Returns the number of points in the table.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.inner.point_count
    }

    /// Returns the fixed neighbour count per row.
    #[must_use]
    pub fn k(&self) -> usize {
        self.inner.k
    }

    /// Returns whether the table holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the ascending-sorted neighbour row of `point`.
    ///
    /// # Panics
    /// Panics when `point >= point_count`.
    #[must_use]
    pub fn row(&self, point: usize) -> &[usize] {
        self.inner.row(point)
    }
}
