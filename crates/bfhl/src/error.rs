use crate::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bfhl_core::input::InputError;
use std::any::Any;

/// Message returned to clients for any server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    BadRequest(#[from] InputError),

    #[error("Route not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to expose; internal details stay in the logs
    pub fn client_message(&self) -> String {
        match self {
            Error::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::BadRequest(err) => log::warn!("Rejected request: {err}"),
            Error::NotFound => log::debug!("No route matched"),
            Error::Internal(detail) => log::error!("Error processing request: {detail}"),
        }

        (self.status(), Json(ErrorResponse::new(self.client_message()))).into_response()
    }
}

/// Turn a handler panic into the generic 500 envelope
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    Error::Internal(format!("handler panicked: {detail}")).into_response()
}
