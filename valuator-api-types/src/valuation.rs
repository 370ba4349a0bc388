use serde::{Deserialize, Serialize};

use crate::ChartDataset;

/// Operating, discount-rate and strategic assumptions for one valuation.
/// Percentages are fractions (`0.18` for 18%), strategic scores run 0 to 100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inputs {
    pub revenue0: f64,
    pub ebit_margin: f64,
    pub tax_rate: f64,
    pub da_pct: f64,
    pub capex_pct: f64,
    /// Change in net working capital as a share of revenue.
    pub nwc_pct: f64,
    pub years: u32,

    pub wacc: f64,
    pub terminal_g: f64,

    pub moat: u32,
    pub competition: u32,
    pub supplier_risk: u32,
    pub execution: u32,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            revenue0: 0.0,
            ebit_margin: 0.0,
            tax_rate: 0.0,
            da_pct: 0.0,
            capex_pct: 0.0,
            nwc_pct: 0.0,
            years: 5,
            wacc: 0.0,
            terminal_g: 0.0,
            moat: 50,
            competition: 50,
            supplier_risk: 50,
            execution: 50,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub growth: f64,
    pub wacc: f64,
    pub enterprise_value: f64,
    pub pv_fcfs: f64,
    pub pv_terminal: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub base: ScenarioResult,
    pub optimistic: ScenarioResult,
    pub pessimistic: ScenarioResult,
    /// Share of the base enterprise value that comes from the terminal value.
    pub terminal_share_base: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValuationResponse {
    pub output: Output,
    pub chart: ChartDataset,
}
