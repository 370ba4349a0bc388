//! Scenario charts drawn straight into `<svg>` elements: a zero-based line chart for
//! revenue and a signed, grouped bar chart for free cash flow.

pub mod bar;
pub mod format;
pub mod grid;
pub mod line;
pub mod palette;
pub mod scale;
pub mod surface;
pub mod svg;

use log::debug;
use thiserror::Error;
use valuator_api_types::{Period, SeriesMap};

use crate::{
    palette::{Palette, TEXT_COLOR},
    scale::{Plot, Scenarios},
    svg::{text_label, Anchor, SvgNode},
};

pub use format::fmt_compact_br;
pub use surface::ChartSurface;
pub use svg::{SvgDocument, SvgTag};

pub const NO_DATA_MESSAGE: &str = "Sem dados";
pub const ERROR_MESSAGE: &str = "Erro ao carregar gráfico";

/// Where the placeholder goes when the element declares no usable size.
const PLACEHOLDER_WIDTH: f64 = 300.0;
const PLACEHOLDER_HEIGHT: f64 = 220.0;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("DOM error {0}")]
    Dom(String),
}

/// Chart nodes for the data, `None` when the data can't be shown on this chart's axes.
type DrawFn = fn(&Plot, &[Period], &Scenarios<'_>, &Palette) -> Option<Vec<SvgNode>>;

/// Replaces the surface's content with the revenue style line chart, or the no data placeholder.
pub fn render_line_chart<S: ChartSurface + ?Sized>(
    surface: &mut S,
    labels: &[Period],
    series: Option<&SeriesMap>,
) -> Result<(), ChartError> {
    render(surface, labels, series, line::line_chart)
}

/// Replaces the surface's content with the grouped bar chart, or the no data placeholder.
pub fn render_bar_chart<S: ChartSurface + ?Sized>(
    surface: &mut S,
    labels: &[Period],
    series: Option<&SeriesMap>,
) -> Result<(), ChartError> {
    render(surface, labels, series, bar::bar_chart)
}

fn render<S: ChartSurface + ?Sized>(
    surface: &mut S,
    labels: &[Period],
    series: Option<&SeriesMap>,
    draw: DrawFn,
) -> Result<(), ChartError> {
    surface.clear()?;
    let Some(data) = series.and_then(|series| Scenarios::plottable(labels.len(), series)) else {
        debug!("nothing to plot for {} periods", labels.len());
        return show_no_data(surface, NO_DATA_MESSAGE);
    };

    let plot = Plot::resolve(surface.client_size());
    let palette = Palette::resolve(&*surface);
    let Some(nodes) = draw(&plot, labels, &data, &palette) else {
        debug!("series has no values inside the chart domain");
        return show_no_data(surface, NO_DATA_MESSAGE);
    };
    surface.set_attribute("viewBox", &plot.view_box())?;
    for node in nodes {
        surface.append(&node)?;
    }
    Ok(())
}

/// Appends a centred placeholder message, positioned from the element's declared size.
pub fn show_no_data<S: ChartSurface + ?Sized>(
    surface: &mut S,
    message: &str,
) -> Result<(), ChartError> {
    let width = declared_size(surface.attribute("width")).unwrap_or(PLACEHOLDER_WIDTH);
    let height = declared_size(surface.attribute("height")).unwrap_or(PLACEHOLDER_HEIGHT);
    surface.append(&text_label(
        width / 2.0,
        height / 2.0,
        message,
        Anchor::Middle,
        TEXT_COLOR,
    ))
}

/// Leading integer of an attribute such as `320` or `100%`. Zero counts as unset.
fn declared_size(value: Option<String>) -> Option<f64> {
    let value = value?;
    let value = value.trim_start();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let parsed: f64 = digits[..end].parse().ok()?;
    let size = sign * parsed;
    (size != 0.0).then_some(size)
}
