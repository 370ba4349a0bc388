use log::{debug, error};
use valuator_api_types::ChartDataset;
use valuator_charts::{
    render_bar_chart, render_line_chart, show_no_data, ChartSurface, ERROR_MESSAGE,
};

use crate::{AppError, AppResult};

pub const CHART_DATA_ID: &str = "chart-data";
pub const REVENUE_CHART_ID: &str = "revenueChart";
pub const FCF_CHART_ID: &str = "fcfChart";

/// The parts of a page the chart bootstrap reads and draws into.
pub trait ChartPage {
    type Surface: ChartSurface;

    /// Text of the embedded payload element, `None` when the page has no charts.
    fn chart_data(&self) -> Option<String>;
    fn surface(&self, id: &str) -> Option<Self::Surface>;
    /// Every `<svg>` on the page.
    fn all_surfaces(&self) -> Vec<Self::Surface>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartLoad {
    NoChartData,
    Rendered,
    /// The payload was unusable and every svg shows the error placeholder.
    Failed,
}

/// One-shot page load render of the revenue and free cash flow charts.
pub fn load_charts<P: ChartPage>(page: &P) -> ChartLoad {
    let Some(raw) = page.chart_data() else {
        debug!("No chart-data element found on this page.");
        return ChartLoad::NoChartData;
    };
    match render_charts(page, &raw) {
        Ok(()) => ChartLoad::Rendered,
        Err(e) => {
            error!("Error parsing or rendering charts: {e}");
            for mut surface in page.all_surfaces() {
                let shown = surface
                    .clear()
                    .and_then(|_| show_no_data(&mut surface, ERROR_MESSAGE));
                if let Err(e) = shown {
                    error!("unable to show chart error placeholder {e}");
                }
            }
            ChartLoad::Failed
        }
    }
}

fn render_charts<P: ChartPage>(page: &P, raw: &str) -> AppResult<()> {
    if raw.trim().is_empty() {
        return Err(AppError::EmptyPayload);
    }
    let data = ChartDataset::from_json(raw)?;
    if let Some(mut svg) = page.surface(REVENUE_CHART_ID) {
        debug!("Rendering {REVENUE_CHART_ID}");
        render_line_chart(&mut svg, &data.labels, data.revenue.as_ref())?;
    }
    if let Some(mut svg) = page.surface(FCF_CHART_ID) {
        debug!("Rendering {FCF_CHART_ID}");
        render_bar_chart(&mut svg, &data.labels, data.fcf.as_ref())?;
    }
    Ok(())
}
