use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use jyotish::MahaDashaIter;

use super::{parse_body, required_date};
use crate::error::ApiResult;
use crate::server::state::AppState;
use crate::types::{DashaRequest, DashaResponse, PeriodView};

/// POST /api/dasha - Maha/Antara periods for one birth date
pub async fn calculate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<DashaResponse>> {
    let request: DashaRequest = parse_body(body)?;
    let birth = required_date(request.birth_date.as_deref(), "birth_date")?;
    let settings = state.settings();
    let today = state.today();

    log::debug!(
        "Dasha request: birth_date={} save={}",
        birth.date(),
        request.save
    );

    let periods = MahaDashaIter::new(birth, settings.max_periods)
        .take(settings.display_periods)
        .map(|p| PeriodView::new(&p, today))
        .collect();

    let record_id = if request.save {
        let record = state.records().write().await.insert(&birth).await?;
        Some(record.id)
    } else {
        None
    };

    Ok(Json(DashaResponse {
        success: true,
        start_number: birth.start_number(),
        periods,
        record_id,
    }))
}
