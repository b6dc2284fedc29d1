//! Core-point selection via parallel stream compaction.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::primitives;

/// The compaction stage's output: the per-point core mask and the dense,
/// index-ordered list of core points.
pub(super) struct CoreSet {
    pub(super) mask: Vec<bool>,
    pub(super) points: Vec<usize>,
}

/// Thresholds `density` against `min_pts` and compacts the surviving points
/// into a dense list.
///
/// Standard stream-compaction idiom: threshold to 0/1 flags, inclusive prefix
/// sum to obtain each core point's 1-based rank, then scatter each point whose
/// rank differs from its predecessor's into the rank-addressed slot. The last
/// prefix value is the core count. Relative order by point index is preserved,
/// so the list comes out strictly increasing.
pub(super) fn compact_core_points(density: &[usize], min_pts: usize) -> CoreSet {
    let mask: Vec<bool> = density
        .par_iter()
        .map(|&count| count >= min_pts)
        .collect();
    let flags: Vec<usize> = mask.par_iter().map(|&core| usize::from(core)).collect();
    let ranks = primitives::inclusive_scan(&flags);
    let core_count = ranks.last().copied().unwrap_or(0);

    // Scatter: every selected point owns a unique output slot.
    let slots: Vec<AtomicUsize> = (0..core_count).map(|_| AtomicUsize::new(0)).collect();
    ranks.par_iter().enumerate().for_each(|(point, &rank)| {
        let predecessor = if point == 0 { 0 } else { ranks[point - 1] };
        if rank != predecessor {
            slots[rank - 1].store(point, Ordering::Relaxed);
        }
    });

    CoreSet {
        mask,
        points: slots.into_iter().map(AtomicUsize::into_inner).collect(),
    }
}
