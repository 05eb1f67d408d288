use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::Json;
use jyotish::NumerologyProfile;

use super::{parse_body, required_date};
use crate::error::ApiResult;
use crate::types::{NumerologyRequest, NumerologyResponse};

/// POST /api/numerology - name number, Bhagyank, Moolank and grid
pub async fn calculate(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<NumerologyResponse>> {
    let request: NumerologyRequest = parse_body(body)?;
    let name = request
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or(jyotish::Error::MissingField("name"))?;
    let birth = required_date(request.birth_date.as_deref(), "birth_date")?;

    let profile = NumerologyProfile::compute(&name, &birth);
    log::debug!(
        "Numerology request: {:?} -> {} (name number {})",
        name,
        profile.converted_name,
        profile.name_number.value
    );

    Ok(Json(NumerologyResponse {
        success: true,
        profile,
    }))
}
