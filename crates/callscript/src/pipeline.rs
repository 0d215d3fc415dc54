//! End-to-end preparation of an outbound call
//!
//! validate -> template lookup -> compile -> serialize. Validation and lookup
//! failures stop the pipeline before any compilation happens.

use serde_json::Value;

use crate::{
    catalog::{find_template, Template},
    compiler::{compile_script, ResolvedScript},
    twiml::serialize_markup,
    validator::{validate_request, CallRequest, ValidationIssues},
};

/// Why a call request could not be turned into TwiML
#[derive(Debug, thiserror::Error)]
pub enum CallScriptError {
    #[error(transparent)]
    Validation(#[from] ValidationIssues),

    #[error("Unknown template: {0}")]
    TemplateNotFound(String),
}

/// A request that is ready to dispatch
#[derive(Debug, Clone)]
pub struct PreparedCall {
    pub request: CallRequest,
    pub template: &'static Template,
    pub script: ResolvedScript,
    pub twiml: String,
}

/// Validate `payload` and render its script against the built-in catalog
pub fn prepare_call(payload: &Value) -> Result<PreparedCall, CallScriptError> {
    let request = validate_request(payload)?;

    let template = find_template(&request.template_id)
        .ok_or_else(|| CallScriptError::TemplateNotFound(request.template_id.clone()))?;

    let script = compile_script(template, request.tone, &request.variables);
    let twiml = serialize_markup(&script, request.voice, request.locale);

    tracing::info!(
        "Prepared '{}' script ({} tone, {} segments)",
        template.id(),
        request.tone,
        script.len()
    );

    Ok(PreparedCall {
        request,
        template,
        script,
        twiml,
    })
}
