use std::collections::HashMap;

use valuator_api_types::Inputs;

use super::error::WebError;

/// Longest projection horizon accepted from a form or query string.
pub(crate) const MAX_YEARS: u32 = 100;
/// Strategic scores run from 0 to this.
pub(crate) const MAX_SCORE: u32 = 100;

pub(crate) type Fields = HashMap<String, String>;

/// One input of the valuation form.
pub(crate) struct FieldSpec {
    pub(crate) name: &'static str,
    pub(crate) label: &'static str,
    pub(crate) help: &'static str,
    pub(crate) step: &'static str,
    pub(crate) placeholder: &'static str,
}

pub(crate) const OPERATING_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "revenue0",
        label: "Receita atual",
        help: "Receita do último ano fiscal. É o ponto de partida da projeção.",
        step: "any",
        placeholder: "1000000",
    },
    FieldSpec {
        name: "ebit_margin",
        label: "Margem EBIT",
        help: "Lucro operacional dividido pela receita, em fração (0.18 para 18%).",
        step: "0.001",
        placeholder: "0.18",
    },
    FieldSpec {
        name: "tax_rate",
        label: "Alíquota de imposto",
        help: "Imposto sobre o lucro operacional, em fração (0.34 para 34%).",
        step: "0.001",
        placeholder: "0.34",
    },
    FieldSpec {
        name: "da_pct",
        label: "D&A / receita",
        help: "Depreciação e amortização como fração da receita. Somada de volta ao fluxo de caixa.",
        step: "0.001",
        placeholder: "0.04",
    },
    FieldSpec {
        name: "capex_pct",
        label: "Capex / receita",
        help: "Investimento em ativos fixos como fração da receita.",
        step: "0.001",
        placeholder: "0.05",
    },
    FieldSpec {
        name: "nwc_pct",
        label: "Capital de giro / receita",
        help: "Variação do capital de giro como fração da receita.",
        step: "0.001",
        placeholder: "0.01",
    },
    FieldSpec {
        name: "years",
        label: "Anos de projeção",
        help: "Horizonte explícito antes do valor terminal (máximo 100).",
        step: "1",
        placeholder: "5",
    },
];

pub(crate) const DISCOUNT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "wacc",
        label: "WACC",
        help: "Custo médio ponderado de capital, em fração. Ajustado pelos fatores estratégicos.",
        step: "0.001",
        placeholder: "0.12",
    },
    FieldSpec {
        name: "terminal_g",
        label: "Crescimento na perpetuidade",
        help: "Crescimento após o horizonte explícito. Precisa ficar abaixo do WACC.",
        step: "0.001",
        placeholder: "0.03",
    },
];

pub(crate) const STRATEGY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "moat",
        label: "Vantagem competitiva",
        help: "0 a 100. Um fosso forte aumenta o crescimento e reduz o risco.",
        step: "1",
        placeholder: "50",
    },
    FieldSpec {
        name: "competition",
        label: "Competição",
        help: "0 a 100. Mercado disputado reduz o crescimento e aumenta o WACC.",
        step: "1",
        placeholder: "50",
    },
    FieldSpec {
        name: "supplier_risk",
        label: "Risco de fornecedores",
        help: "0 a 100. Dependência de poucos fornecedores pesa no crescimento e no risco.",
        step: "1",
        placeholder: "50",
    },
    FieldSpec {
        name: "execution",
        label: "Execução",
        help: "0 a 100. Histórico de entrega da gestão.",
        step: "1",
        placeholder: "50",
    },
];

/// Builds valuation inputs from submitted fields. Missing or blank fields take their default.
pub(crate) fn parse_inputs(fields: &Fields) -> Result<Inputs, WebError> {
    let defaults = Inputs::default();
    Ok(Inputs {
        revenue0: number(fields, "revenue0", defaults.revenue0)?,
        ebit_margin: number(fields, "ebit_margin", defaults.ebit_margin)?,
        tax_rate: number(fields, "tax_rate", defaults.tax_rate)?,
        da_pct: number(fields, "da_pct", defaults.da_pct)?,
        capex_pct: number(fields, "capex_pct", defaults.capex_pct)?,
        nwc_pct: number(fields, "nwc_pct", defaults.nwc_pct)?,
        years: whole(fields, "years", defaults.years, MAX_YEARS)?,
        wacc: number(fields, "wacc", defaults.wacc)?,
        terminal_g: number(fields, "terminal_g", defaults.terminal_g)?,
        moat: whole(fields, "moat", defaults.moat, MAX_SCORE)?,
        competition: whole(fields, "competition", defaults.competition, MAX_SCORE)?,
        supplier_risk: whole(fields, "supplier_risk", defaults.supplier_risk, MAX_SCORE)?,
        execution: whole(fields, "execution", defaults.execution, MAX_SCORE)?,
    })
}

fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

fn invalid(field: &'static str, value: &str) -> WebError {
    WebError::InvalidField {
        field,
        value: value.to_string(),
    }
}

fn number(fields: &Fields, name: &'static str, default: f64) -> Result<f64, WebError> {
    let Some(value) = field(fields, name) else {
        return Ok(default);
    };
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(name, value))
}

/// Integer field clamped into `0..=max`.
fn whole(fields: &Fields, name: &'static str, default: u32, max: u32) -> Result<u32, WebError> {
    let Some(value) = field(fields, name) else {
        return Ok(default);
    };
    let parsed = value.parse::<i64>().map_err(|_| invalid(name, value))?;
    Ok(parsed.clamp(0, i64::from(max)) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_fields_use_defaults() {
        let inputs = parse_inputs(&fields(&[("revenue0", ""), ("moat", "  ")])).unwrap();
        assert_eq!(inputs, Inputs::default());
    }

    #[test]
    fn parses_submitted_values() {
        let inputs = parse_inputs(&fields(&[
            ("revenue0", "1000"),
            ("ebit_margin", " 0.2 "),
            ("years", "3"),
            ("moat", "80"),
        ]))
        .unwrap();
        assert_eq!(inputs.revenue0, 1000.0);
        assert_eq!(inputs.ebit_margin, 0.2);
        assert_eq!(inputs.years, 3);
        assert_eq!(inputs.moat, 80);
        assert_eq!(inputs.competition, 50);
    }

    #[test]
    fn caps_years() {
        let inputs = parse_inputs(&fields(&[("years", "5000")])).unwrap();
        assert_eq!(inputs.years, MAX_YEARS);
    }

    #[test]
    fn clamps_scores_into_range() {
        let inputs = parse_inputs(&fields(&[
            ("moat", "-1"),
            ("competition", "250"),
            ("execution", "100"),
            ("years", "-3"),
        ]))
        .unwrap();
        assert_eq!(inputs.moat, 0);
        assert_eq!(inputs.competition, MAX_SCORE);
        assert_eq!(inputs.execution, 100);
        assert_eq!(inputs.years, 0);
    }

    #[test]
    fn rejects_garbage() {
        for (name, value) in [
            ("wacc", "abc"),
            ("wacc", "NaN"),
            ("revenue0", "inf"),
            ("years", "2.5"),
            ("moat", "high"),
        ] {
            match parse_inputs(&fields(&[(name, value)])) {
                Err(WebError::InvalidField { field, .. }) => assert_eq!(field, name),
                other => panic!("{name}={value} gave {other:?}"),
            }
        }
    }
}
