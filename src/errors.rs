use actix_web::{HttpResponse, ResponseError};

use crate::auth::SignInError;
use crate::models::invoice::PersistenceError;

/// Failures that escape a request handler. Everything here is logged and
/// rendered without internal detail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Session error: {0}")]
    Session(String),
    #[error("Sign-in failed: {0}")]
    SignIn(#[from] SignInError),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        HttpResponse::InternalServerError().body("Internal Server Error")
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(e: actix_session::SessionInsertError) -> Self {
        AppError::Session(e.to_string())
    }
}
