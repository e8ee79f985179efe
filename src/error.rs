// classifieds/src/error.rs

use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum ClassifiedsError {
    #[display(fmt = "Not Found")]
    NotFound,
    #[display(fmt = "Bad Request: {}", _0)]
    BadRequest(String),
    #[display(fmt = "Internal Server Error")]
    InternalError,
}

impl std::error::Error for ClassifiedsError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for ClassifiedsError {
    fn error_response(&self) -> HttpResponse {
        let status = match self {
            ClassifiedsError::NotFound => actix_web::http::StatusCode::NOT_FOUND,
            ClassifiedsError::BadRequest(_) => actix_web::http::StatusCode::BAD_REQUEST,
            ClassifiedsError::InternalError => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Why a remote catalog call produced no data. Never leaves the services
/// layer; callers only see the fallback value.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_decode() {
            FetchError::Decode(err)
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Defects in the static field tables.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("family `{0}` has no slug matches")]
    NoMatches(String),
    #[error("field `{field}` is defined more than once for family `{family}`")]
    DuplicateField { family: String, field: String },
    #[error("field `{field}` of family `{family}` lacks a bilingual label")]
    MissingTranslation { family: String, field: String },
    #[error("field `{field}` of family `{family}`: {reason}")]
    InvalidField {
        family: String,
        field: String,
        reason: String,
    },
}
