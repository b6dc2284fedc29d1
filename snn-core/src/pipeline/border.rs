//! Border point resolution and noise marking.

use rayon::prelude::*;

use crate::{similarity, table::SortedNeighbourTable};

use super::UNLABELLED;

/// Resolves every unlabelled non-core point to an inherited label or noise,
/// in one parallel pass over a snapshot of the merged labels.
///
/// A border point scans the non-core entries of its own row, keeps the
/// neighbour with the highest shared-neighbour similarity (first wins on
/// ties, so the lowest index in the sorted row), and inherits that
/// neighbour's snapshot label — or the neighbour's own index when it is still
/// unset — provided the similarity meets `eps`. Otherwise the point is noise.
///
/// The pass is single-shot by contract: chains of border points are not
/// resolved transitively. Core points and already-labelled non-core points
/// pass through untouched, which makes a rerun over a fully resolved array a
/// no-op. Every item writes only its own output slot.
pub(super) fn assign_border_points(
    table: &SortedNeighbourTable,
    core_mask: &[bool],
    merged: &[usize],
    eps: usize,
) -> Vec<usize> {
    (0..table.point_count())
        .into_par_iter()
        .map(|point| {
            if core_mask[point] || merged[point] != UNLABELLED {
                return merged[point];
            }

            let row = table.row(point);
            let mut best: Option<(usize, usize)> = None;
            for &neighbour in row {
                if core_mask[neighbour] {
                    continue;
                }
                let sim = similarity::snn_similarity(point, row, neighbour, table.row(neighbour));
                if best.is_none_or(|(best_sim, _)| sim > best_sim) {
                    best = Some((sim, neighbour));
                }
            }

            match best {
                Some((sim, neighbour)) if sim >= eps => {
                    let inherited = merged[neighbour];
                    if inherited == UNLABELLED {
                        neighbour
                    } else {
                        inherited
                    }
                }
                _ => UNLABELLED,
            }
        })
        .collect()
}
