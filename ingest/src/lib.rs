pub mod loader;
pub mod results;

#[cfg(test)]
mod results_test;

pub use loader::{load_results, read_results, IngestError, DEFAULT_RESULTS_PATH};
pub use results::{
    Measurement, ResultsTable, TestKind, UnknownTestName, RANDOMIZED,
};
