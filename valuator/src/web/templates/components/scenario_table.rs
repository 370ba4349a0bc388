use maud::{html, Render};
use valuator_api_types::{Output, ScenarioResult};

use super::numbers::{fmt_amount, fmt_pct};

pub(crate) struct ScenarioTable<'a> {
    pub(crate) output: &'a Output,
}

impl<'a> ScenarioTable<'a> {
    fn rows(&self) -> [&'a ScenarioResult; 3] {
        let output = self.output;
        [&output.pessimistic, &output.base, &output.optimistic]
    }
}

impl<'a> Render for ScenarioTable<'a> {
    fn render(&self) -> maud::Markup {
        html! {
            table class="scenario-table" {
                thead {
                    tr {
                        th { "Cenário" }
                        th { "Crescimento" }
                        th { "WACC" }
                        th { "VP dos FCFs" }
                        th { "VP terminal" }
                        th { "Enterprise value" }
                    }
                }
                tbody {
                    @for scenario in self.rows() {
                        tr {
                            td { (scenario.name) }
                            td { (fmt_pct(scenario.growth)) }
                            td { (fmt_pct(scenario.wacc)) }
                            td { (fmt_amount(scenario.pv_fcfs)) }
                            td { (fmt_amount(scenario.pv_terminal)) }
                            td class="ev" { (fmt_amount(scenario.enterprise_value)) }
                        }
                    }
                }
            }
        }
    }
}
