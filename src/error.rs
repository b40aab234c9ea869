use crate::{dto::output, repository};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("notification not exist")]
    NotificationNotExist,

    #[error("route not exist")]
    RouteNotExist,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: message too large {size}/{max_size}B")]
    ValidationMessageTooLarge { size: usize, max_size: usize },

    #[error("invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let status = match &self {
            Error::NotificationNotExist => StatusCode::NOT_FOUND,
            Error::RouteNotExist => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationMessageTooLarge {
                size: _,
                max_size: _,
            } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::InvalidBody(rejection) => rejection.status(),
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let detail = output::ErrorDetail {
            detail: self.to_string(),
        };

        (status, Json(detail)).into_response()
    }
}
