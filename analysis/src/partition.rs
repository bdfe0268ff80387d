use itertools::{iproduct, Itertools};
use schemabench_ingest::{Measurement, ResultsTable, TestKind, RANDOMIZED};
use tracing::debug;

/// Randomized runs at or above this database size take too long to share an axis with the rest
pub const RANDOMIZED_SIZE_CAP: u64 = 25_000;

/// All measurements for one (encryption algorithm, test) combination
///
/// The identity is stored next to the rows so an empty partition can still be titled.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub encryption_algo: String,
    pub test_name: String,
    pub rows: Vec<Measurement>,
}

impl Partition {
    pub fn is_create(&self) -> bool {
        TestKind::Creates.matches(&self.test_name)
    }

    /// distinct schemas in order of first appearance
    pub fn schemas(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.schema_name.as_str())
            .unique()
            .collect_vec()
    }
}

/// build the partition for a single combination
pub fn partition(table: &ResultsTable, encryption_algo: &str, test_name: &str) -> Partition {
    let randomized = encryption_algo == RANDOMIZED;
    let rows = table.filter(|row| {
        row.encryption_algo == encryption_algo
            && row.test_name == test_name
            && (!randomized || row.database_size < RANDOMIZED_SIZE_CAP)
    });

    debug!(
        encryption_algo,
        test_name,
        rows = rows.len(),
        "Built partition"
    );

    Partition {
        encryption_algo: encryption_algo.to_owned(),
        test_name: test_name.to_owned(),
        rows,
    }
}

/// every algorithm x test combination, algorithm-major, both in first-appearance order
///
/// Combinations absent from the data are kept as empty partitions.
pub fn partitions(table: &ResultsTable) -> Vec<Partition> {
    iproduct!(
        table.distinct_encryption_algos(),
        table.distinct_test_names()
    )
    .map(|(encryption_algo, test_name)| partition(table, encryption_algo, test_name))
    .collect_vec()
}
