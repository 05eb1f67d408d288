use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use jyotish::{Granularity, TimelineBuilder};

use super::{parse_body, required_date};
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;
use crate::types::{CompareRequest, CompareResponse};

/// POST /api/compare - side-by-side timeline for two birth dates
pub async fn calculate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<CompareResponse>> {
    let request: CompareRequest = parse_body(body)?;
    let a = required_date(request.birth_date_a.as_deref(), "birth_date_a")?;
    let b = required_date(request.birth_date_b.as_deref(), "birth_date_b")?;
    let settings = state.settings();

    let granularity = request
        .granularity
        .as_deref()
        .map(str::parse::<Granularity>)
        .transpose()?
        .unwrap_or_default();

    let years = request.years.unwrap_or(settings.default_years);
    if years == 0 || years > settings.max_years {
        return Err(ApiError::Validation(format!(
            "years must be between 1 and {}, got {}",
            settings.max_years, years
        )));
    }

    log::debug!(
        "Compare request: {} vs {} ({}, {} years)",
        a.date(),
        b.date(),
        granularity.as_str(),
        years
    );

    let timeline = TimelineBuilder::new(granularity)
        .years(years)
        .max_periods(settings.max_periods)
        .build(&a, &b);

    Ok(Json(CompareResponse {
        success: true,
        start_number_a: a.start_number(),
        start_number_b: b.start_number(),
        granularity: timeline.granularity,
        start: timeline.start,
        end: timeline.end,
        rows: timeline.rows,
    }))
}
