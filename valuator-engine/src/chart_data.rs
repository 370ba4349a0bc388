use valuator_api_types::{ChartDataset, Inputs, Period, SeriesMap};

use crate::{
    finance::{project, YearProjection},
    scenarios::{scenario_rates, Scenario},
};

/// Revenue and free cash flow per year for every scenario, labelled `1..=years`.
pub fn chart_dataset(inputs: &Inputs) -> ChartDataset {
    let [base, opt, pes] = Scenario::ALL.map(|scenario| {
        let rates = scenario_rates(inputs, scenario);
        project(inputs, rates.growth)
    });

    let series = |metric: fn(&YearProjection) -> f64| {
        let collect = |years: &[YearProjection]| years.iter().map(metric).collect::<Vec<_>>();
        SeriesMap::new(collect(&base))
            .with_optimistic(collect(&opt))
            .with_pessimistic(collect(&pes))
    };

    ChartDataset {
        labels: (1..=inputs.years).map(Period::from).collect(),
        revenue: Some(series(|y: &YearProjection| y.revenue)),
        fcf: Some(series(|y: &YearProjection| y.fcf)),
    }
}
