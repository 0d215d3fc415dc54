use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use callscript::{CallScriptError, TwilioError, ValidationIssues};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationIssues),
    #[error("Unknown template: {0}")]
    TemplateNotFound(String),
    #[error(transparent)]
    Dispatch(#[from] TwilioError),
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[from] JsonRejection),
}

impl From<CallScriptError> for ApiError {
    fn from(err: CallScriptError) -> Self {
        match err {
            CallScriptError::Validation(issues) => ApiError::Validation(issues),
            CallScriptError::TemplateNotFound(id) => ApiError::TemplateNotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, body) = match &self {
            ApiError::Validation(issues) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid call configuration",
                    "issues": issues.issues,
                }),
            ),
            ApiError::TemplateNotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Unknown template",
                    "templateId": id,
                }),
            ),
            ApiError::Dispatch(err) => {
                tracing::error!("Call creation failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Unable to place call",
                        "details": err.to_string(),
                    }),
                )
            }
            ApiError::InvalidJson(rejection) => (
                rejection.status(),
                json!({
                    "error": "Invalid JSON body",
                    "details": rejection.body_text(),
                }),
            ),
        };

        (status_code, Json(body)).into_response()
    }
}
