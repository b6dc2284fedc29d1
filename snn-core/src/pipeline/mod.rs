//! The four-stage shared-nearest-neighbour clustering pipeline.
//!
//! Stages run once each, in order, over run-scoped buffers:
//!
//! - Density: count each point's strong mutual-neighbour relations.
//! - Compaction: threshold densities into a core mask and compact it into a
//!   dense core-point list via prefix sum and scatter.
//! - Merge: lower cluster labels along qualifying core-to-core links with
//!   atomic minimums until a pass moves nothing.
//! - Border: resolve every non-core point to an inherited label or noise.
//!
//! Every stage's output is fully materialised before the next stage starts;
//! the end of each parallel pass is the barrier.

mod border;
mod compact;
mod density;
mod merge;


use tracing::{debug, info, instrument};

use crate::table::SortedNeighbourTable;

/// Sentinel for a label that was never set. Doubles as the noise marker in
/// the final label array.
pub(crate) const UNLABELLED: usize = usize::MAX;

/// Runs the pipeline over a sorted table, yielding one raw label per point.
///
/// Each returned entry is either the index of the point's cluster
/// representative or [`UNLABELLED`] for noise.
#[instrument(
    name = "pipeline.run",
    skip(table),
    fields(points = table.point_count(), k = table.k(), eps = eps, min_pts = min_pts),
)]
pub(crate) fn run(table: &SortedNeighbourTable, eps: usize, min_pts: usize) -> Vec<usize> {
    let density = density::compute_density(table, eps);
    debug!("density accumulation finished");

    let core = compact::compact_core_points(&density, min_pts);
    info!(core_count = core.points.len(), "core point compaction finished");

    if core.points.is_empty() {
        debug!("no core points, skipping merge and border stages");
        return vec![UNLABELLED; table.point_count()];
    }

    let merged = merge::merge_core_clusters(table, &core, eps);
    border::assign_border_points(table, &core.mask, &merged, eps)
}
