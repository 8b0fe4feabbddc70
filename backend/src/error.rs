//! Error types for the report backend.
//!
//! Every request failure maps onto one of these variants; the
//! `ResponseError` impl turns a variant into a plain-text HTTP response,
//! so no error is silently swallowed and no failure takes down the
//! process.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// The main error type for backend operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A report or template id that does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A create/edit payload failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The template bytes cannot be parsed as a docx document.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    /// A database operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// File I/O against the data directory failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::InvalidTemplate(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Storage(_) | Error::Io(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
