use axum::{Json, extract::State};
use serde::Serialize;
use ts_rs::TS;

use crate::state::AppState;

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub twilio_configured: bool,
}

/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        twilio_configured: !state.dispatcher().is_simulated(),
    })
}
