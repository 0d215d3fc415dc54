//! Read-only catalog routes used to populate the call configuration form

use axum::{
    Json, Router,
    extract::Path,
    routing::get,
};
use callscript::{Locale, Template, Tone, Voice, catalog, find_template, placeholders};
use serde::Serialize;
use ts_rs::TS;

use crate::{error::ApiError, state::AppState};

/// Template listing entry
#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: String,
    pub label: String,
    pub description: String,
    /// Variables referenced by any tone of any segment
    pub variables: Vec<String>,
    pub recommended_next_steps: Vec<String>,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        let mut variables: Vec<String> = Vec::new();
        for segment in template.segments() {
            for tone in Tone::ALL {
                let Some(phrasing) = segment.phrasing(tone) else {
                    continue;
                };
                for name in placeholders(phrasing) {
                    if !variables.contains(&name) {
                        variables.push(name);
                    }
                }
            }
        }

        Self {
            id: template.id().to_string(),
            label: template.label().to_string(),
            description: template.description().to_string(),
            variables,
            recommended_next_steps: template.recommended_next_steps().to_vec(),
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct OptionEntry {
    pub id: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// Closed sets a request may choose from
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct CallOptions {
    pub tones: Vec<OptionEntry>,
    pub voices: Vec<OptionEntry>,
    pub locales: Vec<OptionEntry>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(list_templates))
        .route("/templates/{id}", get(get_template))
        .route("/options", get(call_options))
}

/// GET /api/templates
pub async fn list_templates() -> Json<Vec<TemplateSummary>> {
    Json(catalog().templates().iter().map(TemplateSummary::from).collect())
}

/// GET /api/templates/{id} - full template with every tone's phrasing
pub async fn get_template(Path(id): Path<String>) -> Result<Json<&'static Template>, ApiError> {
    find_template(&id)
        .map(Json)
        .ok_or(ApiError::TemplateNotFound(id))
}

/// GET /api/options
pub async fn call_options() -> Json<CallOptions> {
    Json(CallOptions {
        tones: Tone::ALL
            .into_iter()
            .map(|tone| OptionEntry {
                id: tone.as_str(),
                label: tone.label(),
                description: Some(tone.description()),
            })
            .collect(),
        voices: Voice::ALL
            .into_iter()
            .map(|voice| OptionEntry {
                id: voice.as_str(),
                label: voice.label(),
                description: None,
            })
            .collect(),
        locales: Locale::ALL
            .into_iter()
            .map(|locale| OptionEntry {
                id: locale.as_str(),
                label: locale.label(),
                description: None,
            })
            .collect(),
    })
}
