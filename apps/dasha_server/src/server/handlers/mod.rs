pub mod compare;
pub mod dasha;
pub mod numerology;
pub mod records;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, Uri};
use axum::response::IntoResponse;
use jyotish::BirthRecord;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "Dasha server is running"
}

/// Unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Known path, wrong verb
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Bodies are parsed here rather than by the `Json` extractor so that
/// malformed JSON and oversized bodies still get the `{ success, error }`
/// payload.
fn parse_body<T: DeserializeOwned>(body: Result<Bytes, BytesRejection>) -> ApiResult<T> {
    let body = body?;
    Ok(serde_json::from_slice(&body)?)
}

fn required_date(value: Option<&str>, field: &'static str) -> ApiResult<BirthRecord> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(BirthRecord::parse(v)?),
        _ => Err(jyotish::Error::MissingField(field).into()),
    }
}
