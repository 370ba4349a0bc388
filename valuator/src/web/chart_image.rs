use axum::{
    extract::{Path, Query},
    http::header,
    response::IntoResponse,
};
use valuator_api_types::ChartDataset;
use valuator_app::charts::{FCF_CHART_ID, REVENUE_CHART_ID};
use valuator_charts::{render_bar_chart, render_line_chart, ChartError, SvgDocument};
use valuator_engine::chart_dataset;

use super::{
    error::WebError,
    form::{parse_inputs, Fields},
};

const SIZE: (f64, f64) = (600.0, 220.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChartKind {
    Revenue,
    Fcf,
}

impl ChartKind {
    fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "revenue.svg" => Some(Self::Revenue),
            "fcf.svg" => Some(Self::Fcf),
            _ => None,
        }
    }

    fn element_id(self) -> &'static str {
        match self {
            Self::Revenue => REVENUE_CHART_ID,
            Self::Fcf => FCF_CHART_ID,
        }
    }
}

/// Draws a chart the same way the browser does, at the default size with the
/// fallback palette.
pub(crate) fn render_chart(
    kind: ChartKind,
    data: &ChartDataset,
) -> Result<SvgDocument, ChartError> {
    let (width, height) = SIZE;
    let mut svg = SvgDocument::new()
        .with_client_size(width, height)
        .with_attribute("id", kind.element_id())
        .with_attribute("class", "chart")
        .with_attribute("width", &width.to_string())
        .with_attribute("height", &height.to_string());
    match kind {
        ChartKind::Revenue => render_line_chart(&mut svg, &data.labels, data.revenue.as_ref())?,
        ChartKind::Fcf => render_bar_chart(&mut svg, &data.labels, data.fcf.as_ref())?,
    }
    Ok(svg)
}

pub(crate) async fn chart_svg(
    Path(file): Path<String>,
    Query(fields): Query<Fields>,
) -> Result<impl IntoResponse, WebError> {
    let kind = ChartKind::from_file_name(&file).ok_or(WebError::UnknownChart(file))?;
    let inputs = parse_inputs(&fields)?;
    let svg = render_chart(kind, &chart_dataset(&inputs))?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg.to_svg_string()))
}

#[cfg(test)]
mod tests {
    use valuator_api_types::{Period, SeriesMap};
    use valuator_charts::{SvgTag, NO_DATA_MESSAGE};

    use super::*;

    #[test]
    fn renders_both_kinds() {
        let data = ChartDataset {
            labels: vec![Period::from(1u32), Period::from(2u32)],
            revenue: Some(SeriesMap::new(vec![100.0, 110.0]).with_optimistic(vec![100.0, 120.0])),
            fcf: None,
        };
        let revenue = render_chart(ChartKind::Revenue, &data).unwrap();
        assert_eq!(revenue.attribute("viewBox"), Some("0 0 600 220"));
        assert_eq!(revenue.attribute("id"), Some("revenueChart"));
        assert_eq!(revenue.count(SvgTag::Path), 2);

        let fcf = render_chart(ChartKind::Fcf, &data).unwrap();
        assert_eq!(fcf.texts().collect::<Vec<_>>(), vec![NO_DATA_MESSAGE]);
        assert!(fcf
            .to_svg_string()
            .starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" id="fcfChart""#));
    }

    #[test]
    fn file_names() {
        assert_eq!(ChartKind::from_file_name("fcf.svg"), Some(ChartKind::Fcf));
        assert_eq!(ChartKind::from_file_name("revenue"), None);
    }
}
