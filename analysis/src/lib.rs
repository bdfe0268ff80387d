pub mod config;
pub mod error;
pub mod figure;
pub mod partition;
pub mod pipeline;
pub mod policy;
pub mod regression;
pub mod render;
pub mod summary;
pub mod viewer;

#[cfg(test)]
mod policy_test;
#[cfg(test)]
mod regression_test;
#[cfg(test)]
mod render_test;

pub use config::PlotConfig;
pub use error::AnalysisError;
pub use pipeline::run;
