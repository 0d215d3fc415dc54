//! Schema validation for inbound call requests
//!
//! Works on raw JSON so that every problem in a payload can be reported at
//! once instead of stopping at the first deserialization error.

use std::{collections::HashMap, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::{
    binder::Bindings,
    tone::Tone,
    voice::{Locale, Voice},
};

static PHONE_CHARS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ().\-]+$").expect("phone pattern is valid"));

/// A validated outbound call request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Destination number, trimmed
    pub to: String,
    pub template_id: String,
    pub tone: Tone,
    pub voice: Voice,
    pub locale: Locale,
    pub variables: Bindings,
}

/// One violated field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// Every problem found in a call request payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS, thiserror::Error)]
#[ts(export)]
#[error("Invalid call configuration: {}", summary(.issues))]
pub struct ValidationIssues {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationIssues {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether any issue concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

fn summary(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate an untyped request payload.
///
/// Wire names: `to`, `templateId`, `style` (or `tone`), `voice`, `language`,
/// `variables`. Absent tone/voice/language take their defaults; present but
/// unknown values are rejected.
pub fn validate_request(payload: &Value) -> Result<CallRequest, ValidationIssues> {
    let mut issues = ValidationIssues::default();

    let Some(fields) = payload.as_object() else {
        issues.push("body", "Request body must be a JSON object");
        return Err(issues);
    };

    let to = validate_destination(fields, &mut issues);
    let template_id = validate_template_id(fields, &mut issues);

    let (tone_field, tone_value) = match fields.get("style") {
        Some(value) => ("style", Some(value)),
        None => ("tone", fields.get("tone")),
    };
    let tone = validate_enum::<Tone>(tone_field, tone_value, &mut issues);
    let voice = validate_enum::<Voice>("voice", fields.get("voice"), &mut issues);
    let locale = validate_enum::<Locale>("language", fields.get("language"), &mut issues);
    let variables = validate_variables(fields.get("variables"), &mut issues);

    if !issues.is_empty() {
        tracing::debug!("Rejected call request: {}", issues);
        return Err(issues);
    }

    match (to, template_id, tone, voice, locale, variables) {
        (Some(to), Some(template_id), Some(tone), Some(voice), Some(locale), Some(variables)) => {
            Ok(CallRequest {
                to,
                template_id,
                tone,
                voice,
                locale,
                variables,
            })
        }
        _ => Err(issues),
    }
}

fn validate_destination(fields: &Map<String, Value>, issues: &mut ValidationIssues) -> Option<String> {
    let raw = match fields.get("to") {
        None | Some(Value::Null) => {
            issues.push("to", "Destination number is required");
            return None;
        }
        Some(Value::String(raw)) => raw,
        Some(_) => {
            issues.push("to", "Destination number must be a string");
            return None;
        }
    };

    let number = raw.trim();
    if number.chars().count() <= 1 {
        issues.push("to", "Destination number is too short");
        return None;
    }
    if !PHONE_CHARS_REGEX.is_match(number) || !number.chars().any(|c| c.is_ascii_digit()) {
        issues.push(
            "to",
            "Destination number may only contain digits, spaces, '+', '-', '(', ')' and '.'",
        );
        return None;
    }

    Some(number.to_string())
}

fn validate_template_id(fields: &Map<String, Value>, issues: &mut ValidationIssues) -> Option<String> {
    match fields.get("templateId") {
        Some(Value::String(id)) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Some(Value::String(_)) => {
            issues.push("templateId", "Template id must not be empty");
            None
        }
        None | Some(Value::Null) => {
            issues.push("templateId", "Template id is required");
            None
        }
        Some(_) => {
            issues.push("templateId", "Template id must be a string");
            None
        }
    }
}

/// Parse a closed-set value; absent (or null) selects the default.
fn validate_enum<T>(field: &str, value: Option<&Value>, issues: &mut ValidationIssues) -> Option<T>
where
    T: FromStr<Err = String> + Default,
{
    match value {
        None | Some(Value::Null) => Some(T::default()),
        Some(Value::String(raw)) => match raw.parse::<T>() {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                issues.push(field, message);
                None
            }
        },
        Some(_) => {
            issues.push(field, format!("{} must be a string", field));
            None
        }
    }
}

fn validate_variables(value: Option<&Value>, issues: &mut ValidationIssues) -> Option<Bindings> {
    let entries = match value {
        None | Some(Value::Null) => return Some(HashMap::new()),
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            issues.push("variables", "Variables must be an object of string values");
            return None;
        }
    };

    let mut bindings = HashMap::with_capacity(entries.len());
    let mut valid = true;
    for (name, value) in entries {
        match value {
            Value::String(text) => {
                bindings.insert(name.clone(), text.clone());
            }
            _ => {
                issues.push(&format!("variables.{}", name), "Variable values must be strings");
                valid = false;
            }
        }
    }

    valid.then_some(bindings)
}
