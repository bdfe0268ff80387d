use itertools::Itertools;
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// `EncryptionAlgo` value written for randomized Always Encrypted columns
pub const RANDOMIZED: &str = "Randomized";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown test name '{0}'")]
pub struct UnknownTestName(pub String);

/// The benchmark kinds the generator knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TestKind {
    Creates,
    Finds,
    Updates,
    Deletes,
    FindWhereDob,
}

impl TestKind {
    pub const ALL: [TestKind; 5] = [
        TestKind::Creates,
        TestKind::Finds,
        TestKind::Updates,
        TestKind::Deletes,
        TestKind::FindWhereDob,
    ];

    /// spelling used in the `TestName` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creates => "RunCreates",
            Self::Finds => "RunFinds",
            Self::Updates => "RunUpdates",
            Self::Deletes => "RunDeletes",
            Self::FindWhereDob => "FindWhereDOB",
        }
    }

    pub fn matches(&self, test_name: &str) -> bool {
        self.as_str() == test_name
    }
}

impl FromStr for TestKind {
    type Err = UnknownTestName;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.matches(value))
            .ok_or_else(|| UnknownTestName(value.to_owned()))
    }
}

/// A single row of the results file, one timed benchmark run against one schema
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Measurement {
    pub test_name: String,
    pub encryption_algo: String,
    pub schema_name: String,
    /// number of records in the database when the test ran
    pub database_size: u64,
    /// wall time in seconds
    pub time: f64,
}

/// Read-once table of measurements, kept in file order
///
/// Nothing mutates the rows after loading, every derived view is a fresh `Vec`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    rows: Vec<Measurement>,
}

impl ResultsTable {
    pub fn new(rows: Vec<Measurement>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// distinct `EncryptionAlgo` values in order of first appearance
    pub fn distinct_encryption_algos(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.encryption_algo.as_str())
            .unique()
            .collect_vec()
    }

    /// distinct `TestName` values in order of first appearance
    pub fn distinct_test_names(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.test_name.as_str())
            .unique()
            .collect_vec()
    }

    /// copy out all rows matching `predicate`, preserving file order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<Measurement>
    where
        P: FnMut(&Measurement) -> bool,
    {
        self.rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect_vec()
    }
}

impl FromIterator<Measurement> for ResultsTable {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
