use crate::config::ConfigErrors;
use schemabench_ingest::{IngestError, UnknownTestName};
use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to load results")]
    Ingest(#[from] IngestError),
    #[error("No title mapping for test, the label table is out of sync with the results")]
    UnknownTest(#[from] UnknownTestName),
    #[error("Invalid configuration")]
    Config(#[from] ConfigErrors),
    #[error("Failed to render figure: {0}")]
    Render(String),
    #[error("Failed to create figure file")]
    FigureFile(#[source] std::io::Error),
    #[error("Failed to run viewer")]
    Viewer(#[source] std::io::Error),
}

/// plotters errors are generic over the backend, keep only the message
pub fn render_error<E: Display>(error: E) -> AnalysisError {
    AnalysisError::Render(error.to_string())
}
