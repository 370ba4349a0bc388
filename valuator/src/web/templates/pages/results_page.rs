use maud::{html, Markup, PreEscaped};
use valuator_api_types::{ChartDataset, Output};
use valuator_app::charts::CHART_DATA_ID;
use valuator_charts::SvgDocument;

use crate::web::templates::{
    components::{
        help_tooltip::HelpTooltip,
        numbers::{fmt_amount, fmt_pct},
        scenario_table::ScenarioTable,
    },
    page::Page,
};

pub(crate) struct ResultsPage {
    pub(crate) output: Output,
    /// Serialized [`ChartDataset`], already safe to place inside a `<script>` element.
    pub(crate) chart_json: String,
    pub(crate) revenue_chart: SvgDocument,
    pub(crate) fcf_chart: SvgDocument,
}

/// JSON for an inline `<script>`: a `</` inside a string would otherwise end the element.
pub(crate) fn embeddable_json(data: &ChartDataset) -> serde_json::Result<String> {
    Ok(serde_json::to_string(data)?.replace("</", "<\\/"))
}

impl Page for ResultsPage {
    fn get_name(&'_ self) -> String {
        "Resultado".to_string()
    }

    fn draw_body(&self) -> Markup {
        let base = &self.output.base;
        html! {
            div class="container" {
                h1 class="hero-title" { "Resultado" }
                div class="content-well headline" {
                    span { "Enterprise value (base): " }
                    strong { (fmt_amount(base.enterprise_value)) }
                }
                div class="content-well" {
                    span { "Participação do valor terminal: " (fmt_pct(self.output.terminal_share_base)) }
                    ((HelpTooltip {
                        id: "terminal-share",
                        text: "Parte do enterprise value base que vem da perpetuidade. Acima de 75% o resultado depende muito das premissas de longo prazo.",
                    }))
                }
                ((ScenarioTable { output: &self.output }))
                div class="charts" {
                    figure {
                        figcaption { "Receita por cenário" }
                        (PreEscaped(self.revenue_chart.to_svg_string()))
                    }
                    figure {
                        figcaption { "Fluxo de caixa livre por cenário" }
                        (PreEscaped(self.fcf_chart.to_svg_string()))
                    }
                }
                script id=(CHART_DATA_ID) type="application/json" { (PreEscaped(&self.chart_json)) }
                a href="/" { "Nova avaliação" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use valuator_api_types::{Period, SeriesMap};

    use super::*;

    #[test]
    fn escapes_script_end() {
        let data = ChartDataset {
            labels: vec![Period::from("</script>"), Period::from(2u32)],
            revenue: Some(SeriesMap::new(vec![1.0, 2.0])),
            fcf: None,
        };
        let json = embeddable_json(&data).unwrap();
        assert!(!json.contains("</"));
        let back = ChartDataset::from_json(&json).unwrap();
        assert_eq!(back.labels[0].to_string(), "</script>");
    }
}
