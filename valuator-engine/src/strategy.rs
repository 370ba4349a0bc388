//! Turns the quantified strategic scores into a base growth rate and a WACC adjustment.

use valuator_api_types::Inputs;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdjustedAssumptions {
    pub growth_base: f64,
    pub wacc_adj: f64,
}

pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

pub fn score01(score: u32) -> f64 {
    clamp01(f64::from(score) / 100.0)
}

/// Growth starts at 6% and moves with the strategic signals. Moat and execution
/// help, competition and supplier risk hurt; the WACC adjustment moves the other way.
pub fn adjust_assumptions(inputs: &Inputs) -> AdjustedAssumptions {
    let moat = score01(inputs.moat);
    let competition = score01(inputs.competition);
    let supplier = score01(inputs.supplier_risk);
    let execution = score01(inputs.execution);

    let mut growth_base = 0.06;
    growth_base += 0.06 * (moat - 0.5);
    growth_base += 0.04 * (execution - 0.5);
    growth_base -= 0.05 * (competition - 0.5);
    growth_base -= 0.03 * (supplier - 0.5);
    let growth_base = growth_base.clamp(-0.05, 0.30);

    let mut wacc_adj = 0.0;
    wacc_adj -= 0.02 * (moat - 0.5);
    wacc_adj -= 0.01 * (execution - 0.5);
    wacc_adj += 0.02 * (competition - 0.5);
    wacc_adj += 0.015 * (supplier - 0.5);

    AdjustedAssumptions {
        growth_base,
        wacc_adj,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_scores() {
        let adj = adjust_assumptions(&Inputs::default());
        assert!((adj.growth_base - 0.06).abs() < 1e-12);
        assert!(adj.wacc_adj.abs() < 1e-12);
    }

    #[test]
    fn best_case_scores() {
        let adj = adjust_assumptions(&Inputs {
            moat: 100,
            execution: 100,
            competition: 0,
            supplier_risk: 0,
            ..Default::default()
        });
        // 0.06 + 0.03 + 0.02 + 0.025 + 0.015
        assert!((adj.growth_base - 0.15).abs() < 1e-12);
        // -0.01 - 0.005 - 0.01 - 0.0075
        assert!((adj.wacc_adj + 0.0325).abs() < 1e-12);
    }

    #[test]
    fn scores_above_range_are_clamped() {
        assert_eq!(score01(250), 1.0);
        let clamped = adjust_assumptions(&Inputs {
            moat: 1000,
            ..Default::default()
        });
        let max = adjust_assumptions(&Inputs {
            moat: 100,
            ..Default::default()
        });
        assert_eq!(clamped, max);
    }
}
