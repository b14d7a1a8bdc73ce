use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Why a raw recipe identifier could not be resolved to a dataset row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("recipe id {0:?} is not an integer")]
    Malformed(String),

    #[error("recipe {0} is not in the dataset")]
    NotFound(i64),
}

/// Request-level failures on the JSON API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingField(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
