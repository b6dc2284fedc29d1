use snn_core::NeighbourTable;

/// Installs a test subscriber so spans and events surface under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Builds a neighbour table from explicit rows; all rows must share a width.
#[must_use]
pub fn table_from_rows(rows: &[&[usize]]) -> NeighbourTable {
    let k = rows.first().map_or(0, |row| row.len());
    let entries = rows.iter().flat_map(|row| row.iter().copied()).collect();
    NeighbourTable::new(rows.len(), k, entries).expect("test table must be well formed")
}

/// Two triangles, each fully mutually 2-nearest: {0, 1, 2} and {3, 4, 5}.
#[must_use]
pub fn two_triangles() -> NeighbourTable {
    table_from_rows(&[&[1, 2], &[0, 2], &[0, 1], &[4, 5], &[3, 5], &[3, 4]])
}
