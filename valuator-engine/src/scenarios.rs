use log::debug;
use valuator_api_types::{Inputs, Output, ScenarioResult};

use crate::{
    finance::{discount, project_fcfs, terminal_value},
    strategy::adjust_assumptions,
};

/// Discount rates never drop below this floor.
const MIN_WACC: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Base,
    Optimistic,
    Pessimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Base, Scenario::Optimistic, Scenario::Pessimistic];

    /// (growth delta, wacc delta) applied on top of the adjusted base assumptions.
    pub fn deltas(self) -> (f64, f64) {
        match self {
            Scenario::Base => (0.0, 0.0),
            Scenario::Optimistic => (0.02, -0.005),
            Scenario::Pessimistic => (-0.02, 0.01),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Base => "Base",
            Scenario::Optimistic => "Otimista",
            Scenario::Pessimistic => "Pessimista",
        }
    }
}

/// Growth and discount rate a scenario runs with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioRates {
    pub growth: f64,
    pub wacc: f64,
}

pub fn scenario_rates(inputs: &Inputs, scenario: Scenario) -> ScenarioRates {
    let adj = adjust_assumptions(inputs);
    let base_wacc = (inputs.wacc + adj.wacc_adj).max(MIN_WACC);
    let (growth_delta, wacc_delta) = scenario.deltas();
    ScenarioRates {
        growth: adj.growth_base + growth_delta,
        wacc: (base_wacc + wacc_delta).max(MIN_WACC),
    }
}

pub fn run_one(inputs: &Inputs, name: &str, growth: f64, wacc: f64) -> ScenarioResult {
    let fcfs = project_fcfs(inputs, growth);
    let pv_fcfs = discount(&fcfs, wacc);

    let tv = fcfs
        .last()
        .map(|last| terminal_value(*last, wacc, inputs.terminal_g))
        .unwrap_or_default();
    let pv_terminal = tv / (1.0 + wacc).powi(inputs.years as i32);

    ScenarioResult {
        name: name.to_string(),
        growth,
        wacc,
        enterprise_value: pv_fcfs + pv_terminal,
        pv_fcfs,
        pv_terminal,
    }
}

pub fn run_scenario(inputs: &Inputs, scenario: Scenario) -> ScenarioResult {
    let rates = scenario_rates(inputs, scenario);
    run_one(inputs, scenario.name(), rates.growth, rates.wacc)
}

pub fn run_valuation(inputs: &Inputs) -> Output {
    let base = run_scenario(inputs, Scenario::Base);
    let optimistic = run_scenario(inputs, Scenario::Optimistic);
    let pessimistic = run_scenario(inputs, Scenario::Pessimistic);

    let terminal_share_base = if base.enterprise_value > 0.0 {
        base.pv_terminal / base.enterprise_value
    } else {
        0.0
    };
    debug!(
        "valuation done: base ev {} terminal share {terminal_share_base}",
        base.enterprise_value
    );

    Output {
        base,
        optimistic,
        pessimistic,
        terminal_share_base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> Inputs {
        Inputs {
            revenue0: 1000.0,
            ebit_margin: 0.2,
            tax_rate: 0.25,
            da_pct: 0.05,
            capex_pct: 0.04,
            nwc_pct: 0.01,
            years: 5,
            wacc: 0.12,
            terminal_g: 0.03,
            ..Default::default()
        }
    }

    #[test]
    fn scenario_rates_follow_deltas() {
        let inputs = inputs();
        let base = scenario_rates(&inputs, Scenario::Base);
        let opt = scenario_rates(&inputs, Scenario::Optimistic);
        let pes = scenario_rates(&inputs, Scenario::Pessimistic);
        assert!((base.growth - 0.06).abs() < 1e-12);
        assert!((base.wacc - 0.12).abs() < 1e-12);
        assert!((opt.growth - 0.08).abs() < 1e-12);
        assert!((opt.wacc - 0.115).abs() < 1e-12);
        assert!((pes.growth - 0.04).abs() < 1e-12);
        assert!((pes.wacc - 0.13).abs() < 1e-12);
    }

    #[test]
    fn wacc_is_floored() {
        let inputs = Inputs {
            wacc: 0.0,
            ..inputs()
        };
        assert_eq!(scenario_rates(&inputs, Scenario::Base).wacc, MIN_WACC);
        assert_eq!(scenario_rates(&inputs, Scenario::Optimistic).wacc, MIN_WACC);
        assert!((scenario_rates(&inputs, Scenario::Pessimistic).wacc - 0.011).abs() < 1e-12);
    }

    #[test]
    fn scenarios_are_ordered() {
        let output = run_valuation(&inputs());
        assert_eq!(output.base.name, "Base");
        assert_eq!(output.optimistic.name, "Otimista");
        assert_eq!(output.pessimistic.name, "Pessimista");
        assert!(output.optimistic.enterprise_value > output.base.enterprise_value);
        assert!(output.base.enterprise_value > output.pessimistic.enterprise_value);
        let share = output.base.pv_terminal / output.base.enterprise_value;
        assert!((output.terminal_share_base - share).abs() < 1e-12);
        assert!(output.terminal_share_base > 0.0 && output.terminal_share_base < 1.0);
    }

    #[test]
    fn enterprise_value_adds_up() {
        let result = run_one(&inputs(), "Base", 0.06, 0.12);
        assert!((result.enterprise_value - (result.pv_fcfs + result.pv_terminal)).abs() < 1e-9);
    }

    #[test]
    fn empty_horizon_is_worthless() {
        let output = run_valuation(&Inputs {
            years: 0,
            ..inputs()
        });
        assert_eq!(output.base.enterprise_value, 0.0);
        assert_eq!(output.terminal_share_base, 0.0);
    }
}
