//! Script compilation: tone selection + variable binding per segment

use serde::Serialize;
use ts_rs::TS;

use crate::{
    binder::{Bindings, VariableBinder},
    catalog::Template,
    tone::{resolve_phrasing, Tone},
};

/// A segment after tone resolution and substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSegment {
    pub id: String,
    pub text: String,
    pub pause_seconds: Option<u32>,
}

/// Ordered, speakable segments of one call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedScript {
    pub segments: Vec<ResolvedSegment>,
}

impl ResolvedScript {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// All segment texts joined with single spaces
    pub fn preview_text(&self) -> String {
        self.segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Compile `template` for `tone` using the default (empty) fallback
pub fn compile_script(template: &Template, tone: Tone, bindings: &Bindings) -> ResolvedScript {
    compile_with_binder(template, tone, bindings, &VariableBinder::default())
}

/// Compile `template` with a custom binder.
///
/// Segments whose text trims to nothing are dropped together with their pause.
pub fn compile_with_binder(
    template: &Template,
    tone: Tone,
    bindings: &Bindings,
    binder: &VariableBinder,
) -> ResolvedScript {
    let segments = template
        .segments()
        .iter()
        .filter_map(|segment| {
            let phrasing = resolve_phrasing(segment, tone);
            let rendered = binder.substitute(phrasing, bindings);
            let text = rendered.trim();

            if text.is_empty() {
                tracing::debug!(
                    "Dropping empty segment '{}' from template '{}'",
                    segment.id(),
                    template.id()
                );
                return None;
            }

            Some(ResolvedSegment {
                id: segment.id().to_string(),
                text: text.to_string(),
                pause_seconds: segment.pause_seconds(),
            })
        })
        .collect();

    ResolvedScript { segments }
}
