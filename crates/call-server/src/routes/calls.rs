//! Outbound call routes
//!
//! POST /api/calls compiles the requested script and dispatches it; the
//! preview route stops after compilation so the UI can show the script.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use callscript::{Locale, ResolvedSegment, Tone, Voice, prepare_call};
use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

use crate::{error::ApiError, state::AppState};

const SIMULATED_MESSAGE: &str = "Call simulation complete (Twilio credentials not configured).";

/// Outcome of a call request
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct CallResponse {
    pub sid: String,
    pub status: String,
    pub simulated: bool,
    /// Rendered TwiML, only echoed for simulated calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twiml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Compiled script for display before dialing
#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub template_id: String,
    pub template_label: String,
    pub tone: Tone,
    pub voice: Voice,
    pub locale: Locale,
    pub segments: Vec<ResolvedSegment>,
    pub recommended_next_steps: Vec<String>,
    pub twiml: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calls", post(create_call))
        .route("/calls/preview", post(preview_call))
}

/// Place a call
///
/// POST /api/calls
///
/// 201 with the provider sid for live calls, 200 with the TwiML for
/// simulated ones.
pub async fn create_call(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let prepared = prepare_call(&payload)?;

    let outcome = state
        .dispatcher()
        .place_call(&prepared.request.to, &prepared.twiml)
        .await?;

    tracing::info!(
        "Call {} for template '{}' is {}{}",
        outcome.sid,
        prepared.template.id(),
        outcome.status,
        if outcome.simulated { " (simulated)" } else { "" }
    );

    let response = if outcome.simulated {
        (
            StatusCode::OK,
            Json(CallResponse {
                sid: outcome.sid,
                status: outcome.status,
                simulated: true,
                twiml: Some(prepared.twiml),
                message: Some(SIMULATED_MESSAGE.to_string()),
            }),
        )
    } else {
        (
            StatusCode::CREATED,
            Json(CallResponse {
                sid: outcome.sid,
                status: outcome.status,
                simulated: false,
                twiml: None,
                message: None,
            }),
        )
    };

    Ok(response.into_response())
}

/// Compile a call script without dialing
///
/// POST /api/calls/preview
pub async fn preview_call(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let Json(payload) = payload?;
    let prepared = prepare_call(&payload)?;

    Ok(Json(PreviewResponse {
        template_id: prepared.template.id().to_string(),
        template_label: prepared.template.label().to_string(),
        tone: prepared.request.tone,
        voice: prepared.request.voice,
        locale: prepared.request.locale,
        segments: prepared.script.segments,
        recommended_next_steps: prepared.template.recommended_next_steps().to_vec(),
        twiml: prepared.twiml,
    }))
}
