use clap::Parser;
use schemabench_analysis::{run, viewer::ViewerConfig, PlotConfig};
use std::{path::PathBuf, process::exit};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_unwrap::ResultExt;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plot schema benchmark timings per encryption algorithm and test"
)]
struct Args {
    /// YAML file with viewer and style settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// results CSV, overrides the config file
    #[arg(short, long)]
    results: Option<PathBuf>,

    /// render every figure without waiting for it to be dismissed
    #[arg(long)]
    headless: bool,

    /// tracing filter, falls back to RUST_LOG and then `info`
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|e| {
            eprintln!("Invalid log level {level:?}: {e}");
            exit(2)
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let mut config = match &args.config {
        Some(path) => PlotConfig::load(path).expect_or_log("Failed to load plot config"),
        None => PlotConfig::default(),
    };

    if let Some(results) = args.results {
        config.results = results;
    }
    if args.headless {
        config.viewer = ViewerConfig::None;
    }

    if let Err(error) = run(&config) {
        error!(error = ?error, "{error}");
        exit(1)
    }
}
