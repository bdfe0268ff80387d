use crate::{
    config::{Colour, Palette},
    partition::Partition,
    policy::{fit_enabled, scatter_title, RegressionOrder},
    regression::Polynomial,
    summary::mean_time_by_schema,
};
use itertools::Itertools;
use schemabench_ingest::UnknownTestName;
use std::ops::Range;
use tracing::{debug, warn};

pub const SCATTER_X_LABEL: &str = "Database Size (Records)";
pub const SCATTER_Y_LABEL: &str = "Time (Seconds)";
pub const LEGEND_TITLE: &str = "Schema Name";
pub const BAR_TITLE: &str = "Average RunCreates";
pub const BAR_X_LABEL: &str = "Schema Name";
pub const BAR_Y_LABEL: &str = "Average RunCreates";

// points sampled along each fitted curve
const FIT_SAMPLES: usize = 100;
// fraction of the data span added on each side of an axis
const AXIS_PADDING: f64 = 0.05;

/// One schema's points in a scatter figure
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub schema_name: String,
    pub colour: Colour,
    /// (database size, time)
    pub points: Vec<(f64, f64)>,
    pub fit: Option<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub order: RegressionOrder,
    pub fit_regression: bool,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub schema_name: String,
    pub value: f64,
    pub colour: Colour,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarFigure {
    pub title: String,
    pub bars: Vec<Bar>,
}

/// Everything needed to draw a figure, independent of the plotting backend
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Scatter(ScatterFigure),
    Bar(BarFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Self::Scatter(figure) => &figure.title,
            Self::Bar(figure) => &figure.title,
        }
    }
}

impl ScatterFigure {
    /// scatter of size against time with one series per schema
    ///
    /// Fails when the test has no known label.
    pub fn build(partition: &Partition, palette: &Palette) -> Result<Self, UnknownTestName> {
        let order = RegressionOrder::select(&partition.encryption_algo, &partition.test_name);
        let fit_regression = fit_enabled(&partition.test_name);
        let title = scatter_title(&partition.encryption_algo, &partition.test_name)?;

        debug!(
            title,
            order = order.degree(),
            fit_regression,
            "Building scatter figure"
        );

        let series = partition
            .schemas()
            .into_iter()
            .enumerate()
            .map(|(index, schema_name)| {
                let points = partition
                    .rows
                    .iter()
                    .filter(|row| row.schema_name == schema_name)
                    .map(|row| (row.database_size as f64, row.time))
                    .collect_vec();

                let fit = if fit_regression {
                    fit_curve(&points, order).or_else(|| {
                        warn!(
                            schema = schema_name,
                            points = points.len(),
                            "Not enough distinct sizes to fit a regression, drawing points only"
                        );
                        None
                    })
                } else {
                    None
                };

                Series {
                    schema_name: schema_name.to_owned(),
                    colour: palette.colour(index),
                    points,
                    fit,
                }
            })
            .collect_vec();

        Ok(Self {
            title,
            order,
            fit_regression,
            series,
        })
    }

    /// padded axis ranges covering every point and fitted curve
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let points = self
            .series
            .iter()
            .flat_map(|series| series.points.iter().chain(series.fit.iter().flatten()))
            .collect_vec();

        (
            padded_range(points.iter().map(|(x, _)| *x)),
            padded_range(points.iter().map(|(_, y)| *y)),
        )
    }
}

impl BarFigure {
    /// mean time per schema, one bar each
    pub fn build(partition: &Partition, palette: &Palette) -> Self {
        let bars = mean_time_by_schema(&partition.rows)
            .into_iter()
            .enumerate()
            .map(|(index, mean)| Bar {
                schema_name: mean.schema_name,
                value: mean.mean_time,
                colour: palette.colour(index),
            })
            .collect_vec();

        Self {
            title: BAR_TITLE.to_owned(),
            bars,
        }
    }

    /// value axis from zero to just above the tallest bar
    pub fn value_range(&self) -> Range<f64> {
        let max = self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max);

        if max > 0.0 {
            0.0..max * (1.0 + AXIS_PADDING)
        } else {
            0.0..1.0
        }
    }
}

fn fit_curve(points: &[(f64, f64)], order: RegressionOrder) -> Option<Vec<(f64, f64)>> {
    let polynomial = Polynomial::fit(points, order.degree())?;
    let (from, to) = points
        .iter()
        .map(|(x, _)| *x)
        .minmax()
        .into_option()?;

    Some(polynomial.sample(from, to, FIT_SAMPLES))
}

fn padded_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    match values.filter(|value| value.is_finite()).minmax_by(f64::total_cmp).into_option() {
        Some((min, max)) if max > min => {
            let padding = (max - min) * AXIS_PADDING;
            (min - padding)..(max + padding)
        }
        // a single value gets a unit window around it
        Some((value, _)) => (value - 0.5)..(value + 0.5),
        None => 0.0..1.0,
    }
}
