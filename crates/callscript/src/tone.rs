//! Delivery tones and phrasing selection
//!
//! Every segment carries one phrasing per tone it supports. Selection walks
//! the chain requested tone -> default tone -> nothing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Segment;

/// Delivery tone for a call script
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Friendly,
    Formal,
    Urgent,
    Empathetic,
}

impl Tone {
    /// Tone used when a segment has no phrasing for the requested one
    pub const DEFAULT: Tone = Tone::Friendly;

    pub const ALL: [Tone; 4] = [Tone::Friendly, Tone::Formal, Tone::Urgent, Tone::Empathetic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Urgent => "urgent",
            Tone::Empathetic => "empathetic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Urgent => "Urgent",
            Tone::Empathetic => "Empathetic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tone::Friendly => "Warm and conversational, first-name basis",
            Tone::Formal => "Polished and courteous, suited to executives",
            Tone::Urgent => "Direct and time-sensitive, gets to the point",
            Tone::Empathetic => "Patient and reassuring, acknowledges the recipient's time",
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::DEFAULT
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    /// Exact, case-sensitive match against the wire identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| format!("Unknown tone: {}", s))
    }
}

/// Pick the phrasing a segment should use for `tone`.
///
/// Returns the exact tone's phrasing, else the default tone's, else `""`.
pub fn resolve_phrasing(segment: &Segment, tone: Tone) -> &str {
    if let Some(text) = segment.phrasing(tone) {
        return text;
    }

    match segment.phrasing(Tone::DEFAULT) {
        Some(text) => {
            tracing::debug!(
                "Segment '{}' has no {} phrasing, using {}",
                segment.id(),
                tone,
                Tone::DEFAULT
            );
            text
        }
        None => {
            tracing::debug!(
                "Segment '{}' has neither {} nor {} phrasing, skipping",
                segment.id(),
                tone,
                Tone::DEFAULT
            );
            ""
        }
    }
}
