//! Parallel building blocks shared by the pipeline stages.
//!
//! Segmented sorting and inclusive prefix sums are treated as primitive
//! services: the stages call them as black boxes and rely only on their
//! standard semantics (ascending sort per fixed-width segment, associative
//! prefix reduction).

use rayon::prelude::*;

/// Block width for the multi-block scan. Large enough that the sequential
/// combination of block totals is negligible next to the block passes.
const SCAN_BLOCK: usize = 4096;

/// Sorts each fixed-width segment of `values` ascending, in parallel.
///
/// A `segment_len` of zero leaves the buffer untouched.
pub(crate) fn sort_segments(values: &mut [usize], segment_len: usize) {
    if segment_len == 0 {
        return;
    }
    values
        .par_chunks_mut(segment_len)
        .for_each(<[usize]>::sort_unstable);
}

/// Computes the inclusive prefix sum of `values`.
///
/// Multi-block scheme: every block is scanned locally in parallel, block
/// totals are combined into running offsets sequentially, and a second
/// parallel pass folds each offset back into its block.
pub(crate) fn inclusive_scan(values: &[usize]) -> Vec<usize> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut scanned = vec![0_usize; values.len()];
    scanned
        .par_chunks_mut(SCAN_BLOCK)
        .zip(values.par_chunks(SCAN_BLOCK))
        .for_each(|(out_block, in_block)| {
            let mut running = 0;
            for (slot, &value) in out_block.iter_mut().zip(in_block) {
                running += value;
                *slot = running;
            }
        });

    let mut offsets = Vec::with_capacity(scanned.len().div_ceil(SCAN_BLOCK));
    let mut running = 0;
    for block in scanned.chunks(SCAN_BLOCK) {
        offsets.push(running);
        running += block.last().copied().unwrap_or(0);
    }

    scanned
        .par_chunks_mut(SCAN_BLOCK)
        .zip(offsets.par_iter())
        .for_each(|(block, &offset)| {
            if offset != 0 {
                for slot in block {
                    *slot += offset;
                }
            }
        });

    scanned
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::pairs(vec![3, 1, 5, 4, 2, 0], 2, vec![1, 3, 4, 5, 0, 2])]
    #[case::whole_row(vec![9, 7, 8], 3, vec![7, 8, 9])]
    #[case::ragged_tail(vec![2, 1, 0], 2, vec![1, 2, 0])]
    #[case::zero_width(vec![2, 1], 0, vec![2, 1])]
    fn sorts_each_segment(
        #[case] mut values: Vec<usize>,
        #[case] segment_len: usize,
        #[case] expected: Vec<usize>,
    ) {
        sort_segments(&mut values, segment_len);
        assert_eq!(values, expected);
    }

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single(vec![4], vec![4])]
    #[case::mask(vec![1, 0, 1, 1, 0], vec![1, 1, 2, 3, 3])]
    fn scans_inclusively(#[case] values: Vec<usize>, #[case] expected: Vec<usize>) {
        assert_eq!(inclusive_scan(&values), expected);
    }

    #[test]
    fn scan_spans_multiple_blocks() {
        let values = vec![1_usize; SCAN_BLOCK * 2 + 17];
        let scanned = inclusive_scan(&values);
        assert_eq!(scanned.first().copied(), Some(1));
        assert_eq!(scanned.last().copied(), Some(values.len()));
        assert!(scanned.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    proptest! {
        #[test]
        fn scan_matches_sequential_oracle(values in proptest::collection::vec(0_usize..5, 0..600)) {
            let mut running = 0;
            let expected: Vec<usize> = values
                .iter()
                .map(|&value| {
                    running += value;
                    running
                })
                .collect();
            prop_assert_eq!(inclusive_scan(&values), expected);
        }
    }
}
