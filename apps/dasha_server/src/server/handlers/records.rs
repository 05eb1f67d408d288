use axum::{extract::State, Json};

use crate::server::state::AppState;
use crate::types::RecordsResponse;

/// GET /api/records - saved birth dates, newest first
pub async fn list(State(state): State<AppState>) -> Json<RecordsResponse> {
    let records = state.records().read().await.list();
    Json(RecordsResponse {
        success: true,
        records,
    })
}
