//! Cluster merging by atomic-minimum label relaxation.
//!
//! A flat label array replaces the pointer-chasing union-find of sequential
//! clustering: each round is a full parallel pass over every
//! `(core point, slot)` pair, lowering both endpoint labels of a qualifying
//! link to their shared minimum. Labels only ever decrease, so a stale read
//! is always safely conservative; it can only delay convergence to a later
//! round, never corrupt the result. The end of each pass is a full barrier.
//!
//! Rounds repeat until a pass moves no label. Reach doubles per round along
//! merge chains, so the observed round count stays logarithmic in the core
//! count on typical inputs while adversarial chain diameters still converge.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;

use tracing::debug;

use crate::{similarity, table::SortedNeighbourTable};

use super::{UNLABELLED, compact::CoreSet};

/// Assigns every linked core point the minimum point index of its merge
/// component. Isolated core points keep the unset sentinel.
pub(super) fn merge_core_clusters(
    table: &SortedNeighbourTable,
    core: &CoreSet,
    eps: usize,
) -> Vec<usize> {
    let labels: Vec<AtomicUsize> = (0..table.point_count())
        .map(|_| AtomicUsize::new(UNLABELLED))
        .collect();

    let mut rounds = 0_usize;
    while relaxation_round(table, core, eps, &labels) {
        rounds += 1;
    }
    debug!(rounds, "label relaxation reached its fixed point");

    labels.into_iter().map(AtomicUsize::into_inner).collect()
}

/// Runs one full relaxation pass. Returns whether any label was lowered.
///
/// The rule fires for a core point `x` and neighbour `q` only when `x > q`
/// (canonical direction; the symmetric pair is redundant and self-loops drop
/// out), `q` is itself core, the pair is mutual, and the shared-neighbour
/// similarity meets `eps`. Both labels are lowered to `min(cx, cq)`, where an
/// unset label falls back to the point's own index.
pub(super) fn relaxation_round(
    table: &SortedNeighbourTable,
    core: &CoreSet,
    eps: usize,
    labels: &[AtomicUsize],
) -> bool {
    let k = table.k();
    let changed = AtomicBool::new(false);

    (0..core.points.len().saturating_mul(k))
        .into_par_iter()
        .for_each(|item| {
            let point = core.points[item / k];
            let row = table.row(point);
            let neighbour = row[item % k];
            if neighbour >= point || !core.mask[neighbour] {
                return;
            }
            let neighbour_row = table.row(neighbour);
            if !similarity::row_contains(neighbour_row, point) {
                return;
            }
            if similarity::snn_similarity(point, row, neighbour, neighbour_row) < eps {
                return;
            }

            // Relaxed suffices: monotone min updates tolerate stale reads,
            // and the pass boundary orders rounds against each other.
            let own = labels[point].load(Ordering::Relaxed).min(point);
            let other = labels[neighbour].load(Ordering::Relaxed).min(neighbour);
            let target = own.min(other);
            if labels[point].fetch_min(target, Ordering::Relaxed) > target {
                changed.store(true, Ordering::Relaxed);
            }
            if labels[neighbour].fetch_min(target, Ordering::Relaxed) > target {
                changed.store(true, Ordering::Relaxed);
            }
        });

    changed.into_inner()
}
