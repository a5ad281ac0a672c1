//! JSON envelopes returned by the HTTP handlers

use crate::cli::Identity;
use bfhl_core::classify::ClassificationResult;
use serde::{Deserialize, Serialize};

/// Successful classification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassifyResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

impl ClassifyResponse {
    pub fn new(identity: &Identity, result: ClassificationResult, concat_string: String) -> Self {
        Self {
            is_success: true,
            user_id: identity.user_id.clone(),
            email: identity.email.clone(),
            roll_number: identity.roll_number.clone(),
            odd_numbers: result.odd_numbers,
            even_numbers: result.even_numbers,
            alphabets: result.alphabets,
            special_characters: result.special_characters,
            sum: result.sum,
            concat_string,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub is_success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            error: error.into(),
        }
    }
}

/// Capability marker served on `GET /bfhl`
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct OperationCode {
    pub operation_code: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub message: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub post: String,
    pub get: String,
}
