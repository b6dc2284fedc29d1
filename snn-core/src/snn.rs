//! Clustering entry point for the SNN core library.
//!
//! Provides the [`Snn`] runtime configured by [`crate::SnnBuilder`]. A run
//! consumes a k-nearest-neighbour table and produces one [`Label`] per point.

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{
    pipeline,
    result::{ClusteringResult, Label},
    table::{NeighbourTable, SortedNeighbourTable},
};

/// Shared-nearest-neighbour clustering over a precomputed neighbour table.
///
/// # Examples
/// ```
/// use snn_core::{Label, NeighbourTable, SnnBuilder};
///
/// // Two triangles, each fully mutually 2-nearest: {0, 1, 2} and {3, 4, 5}.
/// let table = NeighbourTable::new(
///     6,
///     2,
///     vec![1, 2, 0, 2, 0, 1, 4, 5, 3, 5, 3, 4],
/// )
/// .expect("table must be well formed");
///
/// let snn = SnnBuilder::new()
///     .with_eps(2)
///     .with_min_pts(2)
///     .build()
///     .expect("configuration is valid");
/// let result = snn.run(&table);
///
/// assert_eq!(result.labels()[..3], [Label::Cluster(0); 3]);
/// assert_eq!(result.labels()[3..], [Label::Cluster(3); 3]);
/// assert_eq!(result.cluster_count(), 2);
/// assert_eq!(result.noise_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Snn {
    eps: usize,
    min_pts: NonZeroUsize,
}

impl Snn {
    pub(crate) const fn new(eps: usize, min_pts: NonZeroUsize) -> Self {
        Self { eps, min_pts }
    }

    /// Returns the minimum shared-neighbour count for two points to be linked.
    #[must_use]
    pub const fn eps(&self) -> usize {
        self.eps
    }

    /// Returns the minimum density for a point to count as core.
    #[must_use]
    pub const fn min_pts(&self) -> NonZeroUsize {
        self.min_pts
    }

    /// Clusters the points described by `table`.
    ///
    /// Sorts each row ascending first; call [`Self::run_sorted`] directly to
    /// reuse one sorted table across several parameter choices.
    #[must_use]
    pub fn run(&self, table: &NeighbourTable) -> ClusteringResult {
        self.run_sorted(&table.to_sorted())
    }

    /// Clusters the points described by an already-sorted `table`.
    ///
    /// Degenerate inputs are not errors: an empty table yields an empty
    /// result, and a table with `k == 0` yields an all-noise result.
    #[instrument(
        name = "snn.run",
        skip(self, table),
        fields(
            points = table.point_count(),
            k = table.k(),
            eps = self.eps,
            min_pts = %self.min_pts,
        ),
    )]
    #[must_use]
    pub fn run_sorted(&self, table: &SortedNeighbourTable) -> ClusteringResult {
        if table.is_empty() {
            debug!("table holds no points, returning an empty result");
            return ClusteringResult::from_labels(Vec::new());
        }

        let raw = pipeline::run(table, self.eps, self.min_pts.get());
        let labels = raw
            .into_iter()
            .map(|label| {
                if label == pipeline::UNLABELLED {
                    Label::Noise
                } else {
                    Label::Cluster(label)
                }
            })
            .collect();
        ClusteringResult::from_labels(labels)
    }
}
