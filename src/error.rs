//! Application error type and its HTTP mapping.
//!
//! Handled errors become `{"error": "<message>"}` with their status code.
//! Everything else is logged and answered with a bare
//! `500 Internal Server Error`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required body field is absent or empty.
    #[error("Пропущенное поле")]
    MissingField,

    /// The referenced owner does not exist. Reported as 400, not 404.
    #[error("Пользователь не найден")]
    UserNotFound,

    #[error("Объявление не найдено")]
    AdvertisementNotFound,

    /// A body value cannot be coerced into the column it targets.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: String },

    /// The request body is JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A handled error that escaped a handler which does not translate it.
    #[error("uncaught: {0}")]
    Uncaught(Box<AppError>),
}

impl AppError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Turns a handled error into one that surfaces as a generic server error.
    pub fn uncaught(self) -> Self {
        match self {
            AppError::MissingField | AppError::UserNotFound | AppError::AdvertisementNotFound => {
                AppError::Uncaught(Box::new(self))
            }
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField | AppError::UserNotFound => StatusCode::BAD_REQUEST,
            AppError::AdvertisementNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidValue { .. }
            | AppError::NotAnObject
            | AppError::Database(_)
            | AppError::Uncaught(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is answered with a structured JSON body.
    pub fn is_handled(&self) -> bool {
        matches!(
            self,
            AppError::MissingField | AppError::UserNotFound | AppError::AdvertisementNotFound
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_handled() {
            let body = ErrorBody {
                error: self.to_string(),
            };
            return (status, Json(body)).into_response();
        }

        tracing::error!(error = %self, "Unhandled error while serving request");
        (status, "Internal Server Error").into_response()
    }
}
