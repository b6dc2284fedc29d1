//! Shared-nearest-neighbour (SNN) density clustering over precomputed
//! k-nearest-neighbour tables.
//!
//! Given each point's `k` nearest neighbours, a run computes a density per
//! point from mutual neighbour overlap, designates core points whose density
//! reaches `min_pts`, merges core points sharing at least `eps` neighbours
//! into clusters via atomic-minimum label relaxation, and resolves every
//! remaining point to a cluster or to noise. The final partition is
//! deterministic for a given table and parameter choice, with cluster
//! identifiers canonical up to renaming (each cluster is named by the lowest
//! point index it contains among the merged cores).
//!
//! Every stage is a data-parallel pass; k-NN computation itself, data
//! loading, and multi-device orchestration are external concerns.

mod builder;
mod error;
mod pipeline;
mod primitives;
mod result;
mod similarity;
mod snn;
mod table;

pub use crate::{
    builder::SnnBuilder,
    error::{NeighbourTableError, NeighbourTableErrorCode, Result, SnnError, SnnErrorCode},
    result::{ClusteringResult, Label},
    similarity::snn_similarity,
    snn::Snn,
    table::{NeighbourTable, SortedNeighbourTable},
};
