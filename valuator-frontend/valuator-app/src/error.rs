use thiserror::Error;
use valuator_charts::ChartError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Chart data is empty")]
    EmptyPayload,
    #[error("JSON {0}")]
    Json(#[from] serde_json::Error),
    #[error("Chart error {0}")]
    Chart(#[from] ChartError),
    #[error("DOM error {0}")]
    Dom(String),
}

pub type AppResult<T> = Result<T, AppError>;
