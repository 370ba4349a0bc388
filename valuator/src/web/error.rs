use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use valuator_charts::ChartError;

#[derive(Debug, Error)]
pub(crate) enum WebError {
    #[error("Invalid value {value:?} for field {field}")]
    InvalidField { field: &'static str, value: String },
    #[error("Unknown chart {0}")]
    UnknownChart(String),
    #[error("Chart rendering failed {0}")]
    Chart(#[from] ChartError),
    #[error("Serializing chart data failed {0}")]
    Json(#[from] serde_json::Error),
}

impl WebError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            WebError::InvalidField { .. } => StatusCode::BAD_REQUEST,
            WebError::UnknownChart(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!("Error returned {self:?}");
        (self.as_status_code(), format!("{self}")).into_response()
    }
}
