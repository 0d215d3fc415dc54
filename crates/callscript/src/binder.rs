//! Placeholder substitution for `{{name}}` tokens

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Caller-supplied variable values, keyed by placeholder name
pub type Bindings = HashMap<String, String>;

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// Replaces placeholders with bound values, rendering a fallback for gaps
#[derive(Debug, Clone, Default)]
pub struct VariableBinder {
    fallback: String,
}

impl VariableBinder {
    /// Binder that renders `fallback` for missing or empty bindings
    pub fn with_fallback(fallback: &str) -> Self {
        Self {
            fallback: fallback.to_string(),
        }
    }

    /// Substitute every placeholder in `phrasing` in a single pass.
    ///
    /// Bound values are inserted verbatim and never expanded again.
    pub fn substitute(&self, phrasing: &str, bindings: &Bindings) -> String {
        PLACEHOLDER_REGEX
            .replace_all(phrasing, |caps: &Captures| {
                let name = &caps[1];
                match bindings.get(name) {
                    Some(value) if !value.is_empty() => value.clone(),
                    _ => {
                        tracing::debug!("No value bound for placeholder '{}'", name);
                        self.fallback.clone()
                    }
                }
            })
            .into_owned()
    }
}

/// Substitute placeholders, rendering missing bindings as empty text
pub fn substitute(phrasing: &str, bindings: &Bindings) -> String {
    VariableBinder::default().substitute(phrasing, bindings)
}

/// Placeholder names referenced by `phrasing`, in order of first use
pub fn placeholders(phrasing: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(phrasing) {
        let name = &caps[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}
