use crate::{
    config::StyleConfig,
    figure::{BarFigure, Figure, ScatterFigure},
    partition::partition,
    render::render,
};
use schemabench_ingest::{Measurement, ResultsTable};

fn row(test: &str, algo: &str, schema: &str, size: u64, time: f64) -> Measurement {
    Measurement {
        test_name: test.to_owned(),
        encryption_algo: algo.to_owned(),
        schema_name: schema.to_owned(),
        database_size: size,
        time,
    }
}

fn render_to_file(figure: &Figure, name: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);

    render(figure, &StyleConfig::default(), &path).unwrap();

    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
pub fn renders_empty_scatter() {
    let style = StyleConfig::default();
    let empty = partition(&ResultsTable::default(), "Randomized", "RunFinds");
    let figure = ScatterFigure::build(&empty, &style.palette().unwrap()).unwrap();

    render_to_file(&Figure::Scatter(figure), "empty-scatter.png");
}

#[test]
pub fn renders_empty_bar_chart() {
    let style = StyleConfig::default();
    let empty = partition(&ResultsTable::default(), "Deterministic", "RunCreates");
    let figure = BarFigure::build(&empty, &style.palette().unwrap());

    render_to_file(&Figure::Bar(figure), "empty-bar.png");
}

#[test]
pub fn renders_single_row_scatter() {
    let style = StyleConfig::default();
    let table = ResultsTable::new(vec![row("RunDeletes", "Deterministic", "Encrypted", 500, 0.1)]);
    let figure = ScatterFigure::build(
        &partition(&table, "Deterministic", "RunDeletes"),
        &style.palette().unwrap(),
    )
    .unwrap();

    render_to_file(&Figure::Scatter(figure), "single-scatter.png");
}

#[test]
pub fn renders_fitted_scatter_and_bars() {
    let style = StyleConfig::default();
    let palette = style.palette().unwrap();
    let table = ResultsTable::new(
        [1000, 5000, 9000, 13000]
            .into_iter()
            .flat_map(|size| {
                [
                    row("RunCreates", "Randomized", "Encrypted", size, 0.4),
                    row("RunFinds", "Randomized", "Encrypted", size, size as f64 * 1e-4),
                ]
            })
            .collect(),
    );

    let finds = ScatterFigure::build(&partition(&table, "Randomized", "RunFinds"), &palette).unwrap();
    render_to_file(&Figure::Scatter(finds), "finds.png");

    let creates = BarFigure::build(&partition(&table, "Randomized", "RunCreates"), &palette);
    render_to_file(&Figure::Bar(creates), "creates.png");
}
