use crate::{
    config::{Colour, StyleConfig},
    error::{render_error, AnalysisError},
    figure::{
        BarFigure, Figure, ScatterFigure, BAR_X_LABEL, BAR_Y_LABEL, LEGEND_TITLE,
        SCATTER_X_LABEL, SCATTER_Y_LABEL,
    },
};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

// seaborn's "dark" look, flat blue-grey plot area without grid lines
const PLOT_BACKGROUND: RGBColor = RGBColor(0xea, 0xea, 0xf2);
const FONT: &str = "sans-serif";
const TITLE_SIZE: u32 = 20;
const LABEL_SIZE: u32 = 15;
const LEGEND_MARKER: u32 = 4;

impl From<Colour> for RGBColor {
    fn from(colour: Colour) -> Self {
        RGBColor(colour.0, colour.1, colour.2)
    }
}

/// draw `figure` as a PNG at `path`
#[tracing::instrument(level = "debug", skip(figure, style), fields(title = figure.title()))]
pub fn render(figure: &Figure, style: &StyleConfig, path: &Path) -> Result<(), AnalysisError> {
    match figure {
        Figure::Scatter(scatter) => render_scatter(scatter, style, path),
        Figure::Bar(bar) => render_bar(bar, style, path),
    }
}

fn render_scatter(
    figure: &ScatterFigure,
    style: &StyleConfig,
    path: &Path,
) -> Result<(), AnalysisError> {
    let root = BitMapBackend::new(path, style.scatter_size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let (x_range, y_range) = figure.bounds();
    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, (FONT, TITLE_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart.plotting_area().fill(&PLOT_BACKGROUND).map_err(render_error)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(SCATTER_X_LABEL)
        .y_desc(SCATTER_Y_LABEL)
        .axis_desc_style((FONT, LABEL_SIZE))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .draw()
        .map_err(render_error)?;

    // a label without a marker doubles as the legend heading
    chart
        .draw_series(std::iter::empty::<Circle<(f64, f64), u32>>())
        .map_err(render_error)?
        .label(LEGEND_TITLE);

    for series in &figure.series {
        let colour = RGBColor::from(series.colour);

        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|&point| Circle::new(point, style.point_size, colour.filled())),
            )
            .map_err(render_error)?
            .label(series.schema_name.as_str())
            .legend(move |(x, y)| Circle::new((x, y), LEGEND_MARKER, colour.filled()));

        if let Some(fit) = &series.fit {
            chart
                .draw_series(LineSeries::new(
                    fit.iter().copied(),
                    colour.stroke_width(style.line_width),
                ))
                .map_err(render_error)?;
        }

        debug!(
            schema = series.schema_name,
            points = series.points.len(),
            fitted = series.fit.is_some(),
            "Drew series"
        );
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    root.present().map_err(render_error)
}

fn render_bar(figure: &BarFigure, style: &StyleConfig, path: &Path) -> Result<(), AnalysisError> {
    let root = BitMapBackend::new(path, style.bar_size).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    // keep at least one slot so an empty chart still has an axis
    let slots = figure.bars.len().max(1) as i32;
    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.title, (FONT, TITLE_SIZE))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..slots).into_segmented(), figure.value_range())
        .map_err(render_error)?;

    chart.plotting_area().fill(&PLOT_BACKGROUND).map_err(render_error)?;

    let names = figure
        .bars
        .iter()
        .map(|bar| bar.schema_name.as_str())
        .collect::<Vec<_>>();
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(BAR_X_LABEL)
        .y_desc(BAR_Y_LABEL)
        .axis_desc_style((FONT, LABEL_SIZE))
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(index) => names
                .get(*index as usize)
                .map(|name| name.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(render_error)?;

    chart
        .draw_series(figure.bars.iter().enumerate().map(|(index, bar)| {
            let index = index as i32;
            let mut rectangle = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), bar.value),
                ],
                RGBColor::from(bar.colour).filled(),
            );
            rectangle.set_margin(0, 0, 10, 10);
            rectangle
        }))
        .map_err(render_error)?;

    root.present().map_err(render_error)
}
