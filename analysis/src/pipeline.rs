use crate::{
    config::{Palette, PlotConfig, StyleConfig},
    error::AnalysisError,
    figure::{BarFigure, Figure, ScatterFigure},
    partition::{partitions, Partition},
    render::render,
    viewer::ViewerConfig,
};
use schemabench_ingest::load_results;
use tracing::{debug, info};

/// figures for one partition, the scatter first and the create summary after it
pub fn figures(partition: &Partition, palette: &Palette) -> Result<Vec<Figure>, AnalysisError> {
    let mut figures = vec![Figure::Scatter(ScatterFigure::build(partition, palette)?)];

    if partition.is_create() {
        figures.push(Figure::Bar(BarFigure::build(partition, palette)));
    }

    Ok(figures)
}

/// render `figure` to a temporary file and hand it to the viewer
///
/// The file is removed once the viewer returns.
#[tracing::instrument(level = "info", skip_all, fields(title = figure.title()))]
pub fn show(
    figure: &Figure,
    style: &StyleConfig,
    viewer: &ViewerConfig,
) -> Result<(), AnalysisError> {
    let file = tempfile::Builder::new()
        .prefix("schemabench-")
        .suffix(".png")
        .tempfile()
        .map_err(AnalysisError::FigureFile)?;

    render(figure, style, file.path())?;
    viewer.show(figure.title(), file.path())
}

/// load the results and show every figure, one at a time
pub fn run(config: &PlotConfig) -> Result<(), AnalysisError> {
    let palette = config.style.palette()?;
    let table = load_results(&config.results)?;
    let partitions = partitions(&table);

    info!(
        "Plotting {} partitions from {:?}",
        partitions.len(),
        config.results
    );

    let mut shown = 0;
    for partition in &partitions {
        debug!(
            encryption_algo = partition.encryption_algo,
            test_name = partition.test_name,
            rows = partition.rows.len(),
            "Processing partition"
        );

        for figure in figures(partition, &palette)? {
            show(&figure, &config.style, &config.viewer)?;
            shown += 1;
        }
    }

    info!("Done, showed {shown} figures");

    Ok(())
}
