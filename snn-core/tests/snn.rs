//! End-to-end clustering scenarios.

mod common;

use rstest::rstest;
use snn_core::{Label, NeighbourTable, SnnBuilder};

use common::{init_tracing, table_from_rows, two_triangles};

#[test]
fn two_triangles_merge_into_two_clusters() {
    init_tracing();
    let snn = SnnBuilder::new()
        .with_eps(2)
        .with_min_pts(2)
        .build()
        .expect("configuration is valid");
    let result = snn.run(&two_triangles());

    assert_eq!(result.labels()[..3], [Label::Cluster(0); 3]);
    assert_eq!(result.labels()[3..], [Label::Cluster(3); 3]);
    assert_eq!(result.cluster_count(), 2);
    assert_eq!(result.noise_count(), 0);
}

#[test]
fn isolated_point_becomes_noise() {
    init_tracing();
    // An extra point that lists triangle members which never list it back.
    let table = table_from_rows(&[
        &[1, 2],
        &[0, 2],
        &[0, 1],
        &[4, 5],
        &[3, 5],
        &[3, 4],
        &[0, 1],
    ]);
    let snn = SnnBuilder::new()
        .with_eps(2)
        .with_min_pts(2)
        .build()
        .expect("configuration is valid");
    let result = snn.run(&table);

    assert_eq!(result.labels()[6], Label::Noise);
    assert_eq!(result.cluster_count(), 2);
    assert_eq!(result.noise_count(), 1);
}

#[test]
fn empty_table_yields_an_empty_result() {
    let table = NeighbourTable::new(0, 2, Vec::new()).expect("empty table is well formed");
    let snn = SnnBuilder::new().build().expect("defaults are valid");
    let result = snn.run(&table);

    assert!(result.is_empty());
    assert_eq!(result.cluster_count(), 0);
    assert_eq!(result.noise_count(), 0);
}

#[test]
fn zero_neighbour_width_yields_all_noise() {
    let table = NeighbourTable::new(3, 0, Vec::new()).expect("k of zero is well formed");
    let snn = SnnBuilder::new().build().expect("defaults are valid");
    let result = snn.run(&table);

    assert_eq!(result.labels(), [Label::Noise; 3]);
    assert_eq!(result.cluster_count(), 0);
    assert_eq!(result.noise_count(), 3);
}

#[test]
fn unreachable_min_pts_yields_all_noise() {
    // Triangle densities are 2, so a threshold of 3 leaves no core points.
    let snn = SnnBuilder::new()
        .with_eps(2)
        .with_min_pts(3)
        .build()
        .expect("configuration is valid");
    let result = snn.run(&two_triangles());

    assert_eq!(result.labels(), [Label::Noise; 6]);
    assert_eq!(result.cluster_count(), 0);
}

#[rstest]
#[case::strict(4, 2)]
#[case::loose(1, 1)]
fn repeated_runs_are_identical(#[case] eps: usize, #[case] min_pts: usize) {
    let table = two_triangles();
    let snn = SnnBuilder::new()
        .with_eps(eps)
        .with_min_pts(min_pts)
        .build()
        .expect("configuration is valid");

    let first = snn.run(&table);
    let second = snn.run(&table);
    assert_eq!(first, second);
}

#[test]
fn run_matches_run_sorted() {
    let table = two_triangles();
    let sorted = table.to_sorted();
    let snn = SnnBuilder::new()
        .with_eps(2)
        .with_min_pts(2)
        .build()
        .expect("configuration is valid");

    assert_eq!(snn.run(&table), snn.run_sorted(&sorted));
}

#[test]
fn provider_row_order_does_not_matter() {
    let shuffled = table_from_rows(&[&[2, 1], &[2, 0], &[1, 0], &[5, 4], &[5, 3], &[4, 3]]);
    let snn = SnnBuilder::new()
        .with_eps(2)
        .with_min_pts(2)
        .build()
        .expect("configuration is valid");

    assert_eq!(snn.run(&shuffled), snn.run(&two_triangles()));
}
