use crate::cli::Identity;
use crate::error::Error;
use crate::response::{ClassifyResponse, Endpoints, HealthResponse, OperationCode};
use crate::server::CLASSIFY_PATH;
use axum::{body::Bytes, extract::State, Json};
use bfhl_core::{classify::classify, input::decode_body, transform::transform};
use std::sync::Arc;

/// Operation code advertised on `GET /bfhl`
pub const OPERATION_CODE: u32 = 1;

pub async fn classify_handler(
    State(identity): State<Arc<Identity>>,
    body: Bytes,
) -> Result<Json<ClassifyResponse>, Error> {
    let tokens = decode_body(&body)?;

    let result = classify(&tokens);
    let concat_string = transform(&result.alphabets);

    log::debug!(
        "Classified {} tokens: {} odd, {} even, {} alphabets, {} special, sum {}",
        tokens.len(),
        result.odd_numbers.len(),
        result.even_numbers.len(),
        result.alphabets.len(),
        result.special_characters.len(),
        result.sum
    );

    Ok(Json(ClassifyResponse::new(&identity, result, concat_string)))
}

pub async fn operation_code() -> Json<OperationCode> {
    Json(OperationCode {
        operation_code: OPERATION_CODE,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "BFHL API is running".to_string(),
        endpoints: Endpoints {
            post: CLASSIFY_PATH.to_string(),
            get: CLASSIFY_PATH.to_string(),
        },
    })
}

pub async fn not_found() -> Error {
    Error::NotFound
}
