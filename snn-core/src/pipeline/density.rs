//! Density accumulation over mutual shared-nearest-neighbour pairs.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::{similarity, table::SortedNeighbourTable};

/// Counts, for every point, its neighbours that are mutual and share at least
/// `eps` neighbours with it.
///
/// One work item per `(point, slot)` pair over a flat `0..n*k` range. An item
/// only ever increments the source point's counter; the symmetric `(q, x)`
/// item accounts for the neighbour's side, so a mutual pair contributes
/// exactly once to each density. Accumulation order is unconstrained: the
/// increment is associative and commutative.
pub(super) fn compute_density(table: &SortedNeighbourTable, eps: usize) -> Vec<usize> {
    let n = table.point_count();
    let k = table.k();
    let density: Vec<AtomicUsize> = (0..n).map(|_| AtomicUsize::new(0)).collect();

    (0..n.saturating_mul(k)).into_par_iter().for_each(|item| {
        let point = item / k;
        let slot = item % k;
        let row = table.row(point);
        let neighbour = row[slot];
        let neighbour_row = table.row(neighbour);

        // A non-mutual pair contributes nothing.
        if !similarity::row_contains(neighbour_row, point) {
            return;
        }
        if similarity::snn_similarity(point, row, neighbour, neighbour_row) >= eps {
            density[point].fetch_add(1, Ordering::Relaxed);
        }
    });

    density.into_iter().map(AtomicUsize::into_inner).collect()
}
