use crate::results::{Measurement, ResultsTable};
use csv::{ReaderBuilder, Trim};
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, error, info};

/// Location the benchmark generator writes its results to, relative to the working directory
pub const DEFAULT_RESULTS_PATH: &str = "results/fullResults.csv";

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to open results file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse results row")]
    Parse(#[from] csv::Error),
}

/// load the full results table from `path`
#[tracing::instrument(level = "debug")]
pub fn load_results(path: &Path) -> Result<ResultsTable, IngestError> {
    let file = File::open(path).map_err(|source| {
        error!(error = ?source, "Failed to open results file {path:?}");

        IngestError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // the handle is dropped as soon as every row has been read
    let table = read_results(file)?;
    info!("Loaded {} measurements from {path:?}", table.len());

    Ok(table)
}

/// parse a results table from any reader producing CSV with a header row
pub fn read_results<R: Read>(reader: R) -> Result<ResultsTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<Measurement>()
        .enumerate()
        .map(|(index, row)| {
            row.map_err(|error| {
                error!(error = ?error, "Malformed results row {}", index + 1);

                IngestError::Parse(error)
            })
        })
        .collect::<Result<ResultsTable, _>>()
        .map(|table| {
            debug!(
                algorithms = ?table.distinct_encryption_algos(),
                tests = ?table.distinct_test_names(),
                "Read results table"
            );

            table
        })
}
