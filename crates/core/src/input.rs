//! Request body decoding
//!
//! Turns a raw JSON body into the token list consumed by [`crate::classify`].

use bigdecimal::BigDecimal;
use serde_json::{Number, Value};
use std::str::FromStr;

/// Client-side input errors; the message is safe to return to the caller
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum InputError {
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid input: 'data' must be an array")]
    DataNotArray,

    #[error("Invalid input: 'data' elements must be strings, numbers, or booleans")]
    UnsupportedElement,
}

/// Decode a request body into tokens
///
/// An empty body is treated like `{}`, so it reports the missing `data` field
/// rather than a JSON syntax error.
pub fn decode_body(body: &[u8]) -> Result<Vec<String>, InputError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(InputError::DataNotArray);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| InputError::InvalidJson(e.to_string()))?;

    decode_tokens(&value)
}

/// Extract the `data` array from a parsed body
///
/// Strings pass through; booleans become `true`/`false` and numbers their
/// plain decimal text.
pub fn decode_tokens(body: &Value) -> Result<Vec<String>, InputError> {
    let data = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or(InputError::DataNotArray)?;

    data.iter().map(token_from_value).collect()
}

fn token_from_value(value: &Value) -> Result<String, InputError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_text(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(InputError::UnsupportedElement),
    }
}

/// Plain decimal text for a JSON number, never in exponent form
///
/// Integral floats drop their trailing ".0" so `1e3` reads as "1000".
fn number_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        return i.to_string();
    }
    if let Some(u) = number.as_u64() {
        return u.to_string();
    }

    let text = number.to_string();
    match BigDecimal::from_str(&text) {
        Ok(decimal) => decimal.normalized().to_plain_string(),
        Err(_) => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_tokens_strings() {
        let tokens = decode_tokens(&json!({ "data": ["a", "1", "$"] })).unwrap();
        assert_eq!(tokens, vec!["a", "1", "$"]);
    }

    #[test]
    fn test_decode_tokens_empty_array() {
        assert!(decode_tokens(&json!({ "data": [] })).unwrap().is_empty());
    }

    #[test]
    fn test_decode_tokens_coerces_scalars() {
        let tokens = decode_tokens(&json!({ "data": [5, -2.5, true] })).unwrap();
        assert_eq!(tokens, vec!["5", "-2.5", "true"]);
    }

    #[test]
    fn test_decode_tokens_numbers_stay_plain() {
        let tokens = decode_body(br#"{"data": [1e21, 100000000000000000000000, 1e3, 2.0, 0.1]}"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                "1000000000000000000000",
                "100000000000000000000000",
                "1000",
                "2",
                "0.1"
            ]
        );
    }

    #[test]
    fn test_decode_tokens_large_numbers_classify_as_numeric() {
        let tokens = decode_body(br#"{"data": [1e21, 100000000000000000000000, 1e3, 2.0]}"#).unwrap();
        let result = crate::classify::classify(&tokens);

        assert!(result.special_characters.is_empty());
        assert_eq!(result.even_numbers.len(), 4);
        assert_eq!(result.sum, "101000000000000000001002");
    }

    #[test]
    fn test_decode_tokens_u64_beyond_i64() {
        let tokens = decode_tokens(&json!({ "data": [u64::MAX] })).unwrap();
        assert_eq!(tokens, vec!["18446744073709551615"]);
    }

    #[test]
    fn test_decode_tokens_missing_data() {
        assert_eq!(
            decode_tokens(&json!({ "items": [] })),
            Err(InputError::DataNotArray)
        );
    }

    #[test]
    fn test_decode_tokens_data_wrong_shape() {
        for body in [
            json!({ "data": "a,b" }),
            json!({ "data": null }),
            json!({ "data": { "0": "a" } }),
            json!(["a"]),
        ] {
            assert_eq!(decode_tokens(&body), Err(InputError::DataNotArray));
        }
    }

    #[test]
    fn test_decode_tokens_rejects_nested_values() {
        assert_eq!(
            decode_tokens(&json!({ "data": ["a", null] })),
            Err(InputError::UnsupportedElement)
        );
        assert_eq!(
            decode_tokens(&json!({ "data": [["a"]] })),
            Err(InputError::UnsupportedElement)
        );
    }

    #[test]
    fn test_decode_body_empty() {
        assert_eq!(decode_body(b""), Err(InputError::DataNotArray));
        assert_eq!(decode_body(b"  \n"), Err(InputError::DataNotArray));
    }

    #[test]
    fn test_decode_body_invalid_json() {
        let err = decode_body(b"{\"data\": [").unwrap_err();
        assert!(matches!(err, InputError::InvalidJson(_)));
        assert!(err.to_string().starts_with("Invalid JSON body: "));
    }

    #[test]
    fn test_decode_body_valid() {
        let tokens = decode_body(br#"{"data": ["A", "2"]}"#).unwrap();
        assert_eq!(tokens, vec!["A", "2"]);
    }
}
