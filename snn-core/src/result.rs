//! Result types for clustering runs.
//!
//! A run labels every point with either the canonical representative of its
//! cluster (a point index) or an explicit noise marker. Representatives are
//! only canonical up to renaming, so no contiguity is imposed on them.

use std::collections::HashSet;

/// Final assignment of a single point.
///
/// # Examples
/// ```
/// use snn_core::Label;
///
/// let member = Label::Cluster(3);
/// assert_eq!(member.cluster(), Some(3));
/// assert!(!member.is_noise());
/// assert!(Label::Noise.is_noise());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    /// The point belongs to the cluster represented by this point index.
    Cluster(usize),
    /// The point was assigned to no cluster.
    Noise,
}

impl Label {
    /// Returns the cluster representative, or `None` for noise.
    #[must_use]
    pub const fn cluster(self) -> Option<usize> {
        match self {
            Self::Cluster(representative) => Some(representative),
            Self::Noise => None,
        }
    }

    /// Returns whether the point was assigned to no cluster.
    #[must_use]
    pub const fn is_noise(self) -> bool {
        matches!(self, Self::Noise)
    }
}

/// Represents the output of a [`crate::Snn::run`] invocation.
///
/// # Examples
/// ```
/// use snn_core::{ClusteringResult, Label};
///
/// let result = ClusteringResult::from_labels(vec![
///     Label::Cluster(0),
///     Label::Cluster(0),
///     Label::Noise,
/// ]);
/// assert_eq!(result.labels().len(), 3);
/// assert_eq!(result.cluster_count(), 1);
/// assert_eq!(result.noise_count(), 1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusteringResult {
    labels: Vec<Label>,
    cluster_count: usize,
    noise_count: usize,
}

impl ClusteringResult {
    /// Builds a result from per-point labels, counting distinct clusters and
    /// noise points.
    #[must_use]
    pub fn from_labels(labels: Vec<Label>) -> Self {
        let mut representatives = HashSet::new();
        let mut noise_count = 0;
        for label in &labels {
            match label {
                Label::Cluster(representative) => {
                    representatives.insert(*representative);
                }
                Label::Noise => noise_count += 1,
            }
        }

        Self {
            labels,
            cluster_count: representatives.len(),
            noise_count,
        }
    }

    /// Returns the per-point labels in point-index order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Counts how many distinct clusters exist within the labels.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Counts the points assigned to no cluster.
    #[must_use]
    pub fn noise_count(&self) -> usize {
        self.noise_count
    }

    /// Returns the number of labelled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether the result labels no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_distinct_clusters_and_noise() {
        let result = ClusteringResult::from_labels(vec![
            Label::Cluster(0),
            Label::Cluster(0),
            Label::Cluster(4),
            Label::Noise,
            Label::Noise,
        ]);
        assert_eq!(result.cluster_count(), 2);
        assert_eq!(result.noise_count(), 2);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn empty_result_has_no_clusters() {
        let result = ClusteringResult::from_labels(Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.cluster_count(), 0);
        assert_eq!(result.noise_count(), 0);
    }
}
