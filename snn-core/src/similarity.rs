//! Shared-nearest-neighbour similarity over sorted neighbour rows.
//!
//! Similarity between two points is the number of members their neighbour
//! sets have in common, where each point counts as a member of its own set
//! (a point is trivially its own zero-distance neighbour, and k-NN providers
//! differ on whether they emit that self entry). Folding the owning index in
//! here keeps that choice out of every caller.

use std::cmp::Ordering;

/// Counts the common members of two points' neighbour sets.
///
/// Both rows must be sorted ascending. The scan is a linear two-pointer merge
/// with each owning index spliced into its row on the fly, so the cost is
/// `O(k)` and no allocation occurs.
///
/// # Examples
/// ```
/// use snn_core::snn_similarity;
///
/// // Points 0 and 1 of a mutually 2-nearest triangle {0, 1, 2}: the sets
/// // {0, 1, 2} and {0, 1, 2} coincide once the owners are included.
/// assert_eq!(snn_similarity(0, &[1, 2], 1, &[0, 2]), 3);
///
/// // Disjoint neighbourhoods share nothing.
/// assert_eq!(snn_similarity(0, &[1, 2], 4, &[3, 5]), 0);
/// ```
#[must_use]
pub fn snn_similarity(x: usize, row_x: &[usize], q: usize, row_q: &[usize]) -> usize {
    let mut left = Augmented::new(row_x, x).peekable();
    let mut right = Augmented::new(row_q, q).peekable();
    let mut count = 0;

    while let (Some(&a), Some(&b)) = (left.peek(), right.peek()) {
        match a.cmp(&b) {
            Ordering::Less => {
                left.next();
            }
            Ordering::Greater => {
                right.next();
            }
            Ordering::Equal => {
                count += 1;
                left.next();
                right.next();
            }
        }
    }
    count
}

/// Returns whether `point` appears in the ascending-sorted `row`.
///
/// This is the mutuality test: `x` and `q` form a mutual neighbour pair when
/// each one's plain row contains the other.
pub(crate) fn row_contains(row: &[usize], point: usize) -> bool {
    row.binary_search(&point).is_ok()
}

/// Yields a sorted row with the owning point index spliced in.
///
/// When the owner already appears in the row it is emitted once, so the
/// sequence stays a set even for tables carrying self-loops.
struct Augmented<'a> {
    row: &'a [usize],
    owner: Option<usize>,
    next: usize,
}

impl<'a> Augmented<'a> {
    const fn new(row: &'a [usize], owner: usize) -> Self {
        Self {
            row,
            owner: Some(owner),
            next: 0,
        }
    }
}

impl Iterator for Augmented<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let entry = self.row.get(self.next).copied();
        match (entry, self.owner) {
            (Some(value), Some(owner)) if owner < value => {
                self.owner = None;
                Some(owner)
            }
            (Some(value), Some(owner)) if owner == value => {
                self.owner = None;
                self.next += 1;
                Some(value)
            }
            (Some(value), _) => {
                self.next += 1;
                Some(value)
            }
            (None, Some(owner)) => {
                self.owner = None;
                Some(owner)
            }
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::triangle(0, vec![1, 2], 1, vec![0, 2], 3)]
    #[case::partial_overlap(0, vec![2, 3, 5], 1, vec![2, 4, 5], 2)]
    #[case::disjoint(0, vec![1, 2], 4, vec![3, 5], 0)]
    #[case::owner_already_listed(2, vec![1, 2, 3], 4, vec![2, 3, 4], 2)]
    #[case::empty_rows(3, vec![], 7, vec![], 0)]
    fn counts_common_members(
        #[case] x: usize,
        #[case] row_x: Vec<usize>,
        #[case] q: usize,
        #[case] row_q: Vec<usize>,
        #[case] expected: usize,
    ) {
        assert_eq!(snn_similarity(x, &row_x, q, &row_q), expected);
        assert_eq!(
            snn_similarity(q, &row_q, x, &row_x),
            expected,
            "similarity must be symmetric"
        );
    }

    #[test]
    fn self_similarity_covers_the_whole_augmented_set() {
        assert_eq!(snn_similarity(0, &[1, 2, 3], 0, &[1, 2, 3]), 4);
    }

    #[rstest]
    #[case(&[1, 3, 5], 3, true)]
    #[case(&[1, 3, 5], 4, false)]
    #[case(&[], 0, false)]
    fn row_contains_uses_binary_search(
        #[case] row: &[usize],
        #[case] point: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(row_contains(row, point), expected);
    }
}
