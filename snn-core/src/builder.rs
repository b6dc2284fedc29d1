//! Builder utilities for configuring SNN clustering runs.
//!
//! Exposes the clustering parameter surface and the validation performed
//! before constructing [`Snn`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::SnnError, snn::Snn};

/// Configures and constructs [`Snn`] instances.
///
/// `eps` is the minimum number of shared neighbours for two mutual
/// neighbours to count as SNN-linked; `min_pts` is the minimum density for a
/// point to be core. The neighbour count `k` is a property of the table a
/// run receives, not of the builder.
///
/// # Examples
/// ```
/// use snn_core::SnnBuilder;
///
/// let snn = SnnBuilder::new()
///     .with_eps(4)
///     .with_min_pts(6)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(snn.eps(), 4);
/// assert_eq!(snn.min_pts().get(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct SnnBuilder {
    eps: usize,
    min_pts: usize,
}

impl Default for SnnBuilder {
    fn default() -> Self {
        Self {
            eps: 3,
            min_pts: 5,
        }
    }
}

impl SnnBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use snn_core::SnnBuilder;
    ///
    /// let builder = SnnBuilder::new();
    /// assert_eq!(builder.eps(), 3);
    /// assert_eq!(builder.min_pts(), 5);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the shared-neighbour link threshold.
    ///
    /// An `eps` of zero is degenerate but well defined: every mutual
    /// neighbour pair links.
    #[must_use]
    pub const fn with_eps(mut self, eps: usize) -> Self {
        self.eps = eps;
        self
    }

    /// Returns the configured link threshold.
    #[must_use]
    pub const fn eps(&self) -> usize {
        self.eps
    }

    /// Overrides the core-point density threshold.
    #[must_use]
    pub const fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Returns the configured core-point density threshold.
    #[must_use]
    pub const fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Validates the configuration and constructs an [`Snn`] instance.
    ///
    /// # Errors
    /// Returns [`SnnError::InvalidMinPoints`] when `min_pts` is zero.
    ///
    /// # Examples
    /// ```
    /// use snn_core::SnnBuilder;
    ///
    /// let snn = SnnBuilder::new().build().expect("defaults are valid");
    /// assert_eq!(snn.min_pts().get(), 5);
    /// ```
    pub fn build(self) -> Result<Snn> {
        let min_pts = NonZeroUsize::new(self.min_pts)
            .ok_or(SnnError::InvalidMinPoints { got: self.min_pts })?;
        Ok(Snn::new(self.eps, min_pts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_zero_min_pts() {
        let err = SnnBuilder::new()
            .with_min_pts(0)
            .build()
            .expect_err("zero min_pts must be rejected");
        assert_eq!(err, SnnError::InvalidMinPoints { got: 0 });
    }

    #[test]
    fn build_accepts_zero_eps() {
        let snn = SnnBuilder::new()
            .with_eps(0)
            .build()
            .expect("eps of zero is degenerate but valid");
        assert_eq!(snn.eps(), 0);
    }
}
