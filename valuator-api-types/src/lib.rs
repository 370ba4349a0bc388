mod chart;
mod valuation;

pub use chart::{ChartDataset, Period, SeriesMap};
pub use valuation::{Inputs, Output, ScenarioResult, ValuationResponse};
