mod chart_image;
pub(crate) mod error;
mod form;
mod templates;

use std::net::SocketAddr;

use axum::{
    extract::{Form, Query},
    http::{header, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeader, trace::TraceLayer};
use tracing::info;
use valuator_api_types::ValuationResponse;
use valuator_engine::{chart_dataset, run_valuation};

use self::chart_image::{chart_svg, render_chart, ChartKind};
use self::error::WebError;
use self::form::{parse_inputs, Fields};
use self::templates::{
    page::RenderPage,
    pages::{
        home_page::HomePage,
        results_page::{embeddable_json, ResultsPage},
    },
};
use crate::config::Config;

async fn root() -> RenderPage<HomePage> {
    RenderPage(HomePage {})
}

async fn results(Form(fields): Form<Fields>) -> Result<RenderPage<ResultsPage>, WebError> {
    let inputs = parse_inputs(&fields)?;
    let output = run_valuation(&inputs);
    let chart = chart_dataset(&inputs);
    Ok(RenderPage(ResultsPage {
        output,
        chart_json: embeddable_json(&chart)?,
        revenue_chart: render_chart(ChartKind::Revenue, &chart)?,
        fcf_chart: render_chart(ChartKind::Fcf, &chart)?,
    }))
}

async fn valuation_api(Query(fields): Query<Fields>) -> Result<Json<ValuationResponse>, WebError> {
    let inputs = parse_inputs(&fields)?;
    Ok(Json(ValuationResponse {
        output: run_valuation(&inputs),
        chart: chart_dataset(&inputs),
    }))
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Static files with caching turned off while debugging.
fn file_service(dir: &std::path::Path, debug: bool) -> SetResponseHeader<ServeDir, HeaderValue> {
    let cache = if debug {
        HeaderValue::from_static("no-store")
    } else {
        HeaderValue::from_static("public, max-age=86400")
    };
    SetResponseHeader::overriding(ServeDir::new(dir), header::CACHE_CONTROL, cache)
}

pub(crate) fn router(config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/results", post(results))
        .route("/api/valuation", get(valuation_api))
        .route("/charts/{file}", get(chart_svg))
        .nest_service("/static", file_service(&config.static_dir, config.debug))
        .nest_service("/pkg", file_service(&config.pkg_dir, config.debug))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn start_web(config: Config) -> anyhow::Result<()> {
    let app = router(&config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on {addr}");
    info!(
        "serving static files from {} and the client from {}",
        config.static_dir.display(),
        config.pkg_dir.display()
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, Response},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn send(request: Request<Body>) -> Response<Body> {
        router(&Config::default()).oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/results")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn home_page_has_help_tooltips() {
        let response = send(get_request("/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"name="revenue0""#));
        assert!(html.contains(r#"class="help-btn" aria-expanded="false""#));
        assert!(html.contains("/pkg/valuator_client.js"));
        assert!(!html.contains("chart-data"));
    }

    #[tokio::test]
    async fn results_page_embeds_charts() {
        let response = send(post_form(
            "revenue0=1000&ebit_margin=0.2&tax_rate=0.3&da_pct=0.05&capex_pct=0.04&nwc_pct=0.01&years=3&wacc=0.1&terminal_g=0.02&moat=&competition=50",
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(
            r#"<script id="chart-data" type="application/json">{"labels":[1,2,3],"#
        ));
        assert!(html.contains(r#"id="revenueChart""#));
        assert!(html.contains(r#"id="fcfChart""#));
        assert!(html.contains("<path"));
        assert!(html.contains("<rect"));
        for name in ["Base", "Otimista", "Pessimista"] {
            assert!(html.contains(&format!("<td>{name}</td>")), "missing {name}");
        }
    }

    #[tokio::test]
    async fn invalid_field_is_a_bad_request() {
        let response = send(post_form("wacc=abc")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("wacc"));
    }

    #[tokio::test]
    async fn api_returns_output_and_chart() {
        let response = send(get_request(
            "/api/valuation?revenue0=1000&ebit_margin=0.2&tax_rate=0.3&years=4&wacc=0.1&terminal_g=0.02",
        ))
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: ValuationResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body.chart.labels.len(), 4);
        assert_eq!(body.output.base.name, "Base");
        assert!(body.output.optimistic.enterprise_value > body.output.pessimistic.enterprise_value);
    }

    #[tokio::test]
    async fn standalone_chart_images() {
        let response = send(get_request("/charts/revenue.svg?revenue0=500&years=2")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
        let svg = body_text(response).await;
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<path").count(), 3);

        let response = send(get_request("/charts/profit.svg")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() {
        let response = send(get_request("/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Not found");
    }
}
