use valuator_api_types::Inputs;

/// One projected year of the simplified free cash flow build.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YearProjection {
    pub revenue: f64,
    pub ebit: f64,
    pub nopat: f64,
    pub depreciation: f64,
    pub capex: f64,
    pub delta_nwc: f64,
    pub fcf: f64,
}

/// Grows revenue at `growth` for `inputs.years` years.
///
/// EBIT = revenue * margin, NOPAT = EBIT * (1 - tax), and
/// FCF = NOPAT + D&A - CAPEX - change in NWC, each of the last three being a share of revenue.
pub fn project(inputs: &Inputs, growth: f64) -> Vec<YearProjection> {
    let mut revenue = inputs.revenue0;
    (0..inputs.years)
        .map(|_| {
            revenue *= 1.0 + growth;
            let ebit = revenue * inputs.ebit_margin;
            let nopat = ebit * (1.0 - inputs.tax_rate);
            let depreciation = revenue * inputs.da_pct;
            let capex = revenue * inputs.capex_pct;
            let delta_nwc = revenue * inputs.nwc_pct;
            YearProjection {
                revenue,
                ebit,
                nopat,
                depreciation,
                capex,
                delta_nwc,
                fcf: nopat + depreciation - capex - delta_nwc,
            }
        })
        .collect()
}

pub fn project_fcfs(inputs: &Inputs, growth: f64) -> Vec<f64> {
    project(inputs, growth).into_iter().map(|y| y.fcf).collect()
}

/// Present value of `values`, the first one discounted a full period.
pub fn discount(values: &[f64], wacc: f64) -> f64 {
    values
        .iter()
        .zip(1..)
        .map(|(value, t)| value / (1.0 + wacc).powi(t))
        .sum()
}

/// Gordon growth terminal value. Zero when the discount rate doesn't exceed growth.
pub fn terminal_value(last_fcf: f64, wacc: f64, g: f64) -> f64 {
    let fcf_next = last_fcf * (1.0 + g);
    let denom = wacc - g;
    if denom <= 0.0 {
        return 0.0;
    }
    fcf_next / denom
}
