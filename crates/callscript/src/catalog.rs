//! Built-in call script templates
//!
//! The catalog is assembled once on first access and never mutated afterwards.
//! Callers only ever receive shared references into it.

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;
use ts_rs::TS;

use crate::tone::Tone;

/// A single spoken unit of a template
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    id: String,
    phrasings: BTreeMap<Tone, String>,
    pause_seconds: Option<u32>,
}

impl Segment {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            phrasings: BTreeMap::new(),
            pause_seconds: None,
        }
    }

    /// Set the phrasing used for `tone`
    pub fn phrase(mut self, tone: Tone, text: &str) -> Self {
        self.phrasings.insert(tone, text.to_string());
        self
    }

    /// Pause inserted after this segment when it is spoken
    pub fn pause(mut self, seconds: u32) -> Self {
        self.pause_seconds = Some(seconds);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phrasing(&self, tone: Tone) -> Option<&str> {
        self.phrasings.get(&tone).map(String::as_str)
    }

    pub fn pause_seconds(&self) -> Option<u32> {
        self.pause_seconds
    }
}

/// A named call script
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    id: String,
    label: String,
    description: String,
    segments: Vec<Segment>,
    recommended_next_steps: Vec<String>,
}

impl Template {
    pub fn new(id: &str, label: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            segments: Vec::new(),
            recommended_next_steps: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn next_step(mut self, step: &str) -> Self {
        self.recommended_next_steps.push(step.to_string());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn recommended_next_steps(&self) -> &[String] {
        &self.recommended_next_steps
    }
}

/// Read-only registry of templates, kept in definition order
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Look up a template by id
    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Authoring mistakes that would make a template misbehave at runtime.
    ///
    /// Empty for a well-formed catalog.
    pub fn authoring_defects(&self) -> Vec<String> {
        let mut defects = Vec::new();
        let mut template_ids = HashSet::new();

        for template in &self.templates {
            if !template_ids.insert(template.id.as_str()) {
                defects.push(format!("Duplicate template id '{}'", template.id));
            }

            let mut segment_ids = HashSet::new();
            for segment in &template.segments {
                if !segment_ids.insert(segment.id.as_str()) {
                    defects.push(format!(
                        "Duplicate segment id '{}' in template '{}'",
                        segment.id, template.id
                    ));
                }
                if segment.phrasing(Tone::DEFAULT).is_none() {
                    defects.push(format!(
                        "Segment '{}' in template '{}' has no {} phrasing",
                        segment.id,
                        template.id,
                        Tone::DEFAULT
                    ));
                }
            }
        }

        defects
    }
}

static CATALOG: Lazy<TemplateCatalog> = Lazy::new(|| TemplateCatalog::new(builtin_templates()));

/// The process-wide template catalog
pub fn catalog() -> &'static TemplateCatalog {
    &CATALOG
}

/// Look up a template in the process-wide catalog
pub fn find_template(id: &str) -> Option<&'static Template> {
    CATALOG.find(id)
}

fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new(
            "intro-and-close",
            "Intro & Close",
            "Short introduction followed by a single direct ask.",
        )
        .segment(
            Segment::new("greeting")
                .phrase(
                    Tone::Friendly,
                    "Hi {{customerName}}, this is {{agentName}} from {{companyName}}.",
                )
                .phrase(
                    Tone::Formal,
                    "Good day {{customerName}}, my name is {{agentName}} and I am calling on behalf of {{companyName}}.",
                )
                .phrase(
                    Tone::Urgent,
                    "Hi {{customerName}}, {{agentName}} from {{companyName}} here with a quick, time-sensitive note.",
                )
                .phrase(
                    Tone::Empathetic,
                    "Hi {{customerName}}, this is {{agentName}} from {{companyName}}. I hope I'm not catching you at a bad time.",
                )
                .pause(1),
        )
        .segment(
            Segment::new("ask")
                .phrase(Tone::Friendly, "Would you be open to {{nextStep}}?")
                .phrase(Tone::Formal, "Would you be available to {{nextStep}}?")
                .phrase(Tone::Urgent, "Can we lock in {{nextStep}} today?"),
        )
        .next_step("Send a calendar invite within the hour")
        .next_step("Log the outcome in the CRM"),
        Template::new(
            "discovery-call",
            "Discovery Call",
            "Introduce the team, share the value proposition and book a discovery session.",
        )
        .segment(
            Segment::new("greeting")
                .phrase(
                    Tone::Friendly,
                    "Hi {{customerName}}, it's {{agentName}} from {{companyName}}. Thanks for picking up!",
                )
                .phrase(
                    Tone::Formal,
                    "Good day {{customerName}}. This is {{agentName}} calling from {{companyName}}.",
                )
                .phrase(
                    Tone::Urgent,
                    "{{customerName}}, {{agentName}} from {{companyName}} here. I'll keep this brief.",
                )
                .phrase(
                    Tone::Empathetic,
                    "Hi {{customerName}}, this is {{agentName}} with {{companyName}}. I know your time is valuable, so thank you for answering.",
                )
                .pause(1),
        )
        .segment(
            Segment::new("objective")
                .phrase(Tone::Friendly, "I'm reaching out to {{objective}}.")
                .phrase(Tone::Formal, "The purpose of my call is to {{objective}}.")
                .phrase(Tone::Urgent, "I'm calling today to {{objective}}.")
                .pause(1),
        )
        .segment(
            Segment::new("value-prop")
                .phrase(
                    Tone::Friendly,
                    "We've been helping teams like yours {{valueProp}}.",
                )
                .phrase(
                    Tone::Formal,
                    "Our organisation helps companies {{valueProp}}.",
                )
                .phrase(
                    Tone::Urgent,
                    "Teams are already using us to {{valueProp}}, and spots for this quarter are filling fast.",
                )
                .phrase(
                    Tone::Empathetic,
                    "A lot of teams tell us they're stretched thin, and we help them {{valueProp}}.",
                ),
        )
        .segment(
            Segment::new("ask")
                .phrase(Tone::Friendly, "Could we {{nextStep}}?")
                .phrase(Tone::Formal, "Would it be possible to {{nextStep}}?")
                .phrase(Tone::Urgent, "Can we {{nextStep}}? I'd like to get this moving.")
                .phrase(
                    Tone::Empathetic,
                    "Whenever it suits you, would you be willing to {{nextStep}}?",
                )
                .pause(1),
        )
        .segment(Segment::new("notes").phrase(Tone::Friendly, "{{notes}}"))
        .segment(
            Segment::new("sign-off")
                .phrase(Tone::Friendly, "Thanks so much, {{customerName}}. Talk soon!")
                .phrase(
                    Tone::Formal,
                    "Thank you for your time, {{customerName}}. Have a pleasant day.",
                )
                .phrase(Tone::Urgent, "Thanks {{customerName}}, speak shortly."),
        )
        .next_step("Share a discovery agenda by email")
        .next_step("Confirm attendees and time zone")
        .next_step("Prepare a tailored case study"),
        Template::new(
            "follow-up",
            "Follow-up",
            "Reconnect after a previous conversation and move the deal forward.",
        )
        .segment(
            Segment::new("greeting")
                .phrase(
                    Tone::Friendly,
                    "Hey {{customerName}}, {{agentName}} from {{companyName}} again.",
                )
                .phrase(
                    Tone::Formal,
                    "Hello {{customerName}}, this is {{agentName}} from {{companyName}} following up on our earlier conversation.",
                )
                .phrase(
                    Tone::Urgent,
                    "Hi {{customerName}}, {{agentName}} from {{companyName}} following up on something time-sensitive.",
                )
                .phrase(
                    Tone::Empathetic,
                    "Hi {{customerName}}, it's {{agentName}} from {{companyName}}. I wanted to check in and see how things are going.",
                )
                .pause(1),
        )
        .segment(
            Segment::new("recap")
                .phrase(
                    Tone::Friendly,
                    "Last time we chatted about how we could {{valueProp}}.",
                )
                .phrase(
                    Tone::Formal,
                    "When we last spoke, we discussed how {{companyName}} could {{valueProp}}.",
                ),
        )
        .segment(
            Segment::new("ask")
                .phrase(
                    Tone::Friendly,
                    "I'd love to {{objective}}. Would you be up for {{nextStep}}?",
                )
                .phrase(
                    Tone::Formal,
                    "I would like to {{objective}}. Might you be available to {{nextStep}}?",
                )
                .phrase(
                    Tone::Urgent,
                    "To {{objective}} in time, we should {{nextStep}} as soon as possible.",
                )
                .pause(1),
        )
        .segment(Segment::new("notes").phrase(Tone::Friendly, "{{notes}}"))
        .next_step("Send recap email with agreed actions")
        .next_step("Update opportunity stage"),
        Template::new(
            "appointment-reminder",
            "Appointment Reminder",
            "Remind the recipient of an upcoming session and confirm attendance.",
        )
        .segment(
            Segment::new("greeting")
                .phrase(
                    Tone::Friendly,
                    "Hi {{customerName}}, this is {{agentName}} from {{companyName}} with a quick reminder.",
                )
                .phrase(
                    Tone::Formal,
                    "Good day {{customerName}}. This is a courtesy reminder from {{agentName}} at {{companyName}}.",
                )
                .phrase(
                    Tone::Urgent,
                    "{{customerName}}, this is {{agentName}} from {{companyName}} with an important reminder.",
                )
                .pause(1),
        )
        .segment(
            Segment::new("details")
                .phrase(Tone::Friendly, "We're all set to {{nextStep}}.")
                .phrase(Tone::Formal, "You are scheduled to {{nextStep}}.")
                .phrase(Tone::Urgent, "We're due to {{nextStep}} very soon.")
                .pause(1),
        )
        .segment(
            Segment::new("confirm")
                .phrase(
                    Tone::Friendly,
                    "If anything's changed, just let us know. See you then!",
                )
                .phrase(
                    Tone::Formal,
                    "Should you need to reschedule, please let us know at your earliest convenience.",
                )
                .phrase(
                    Tone::Urgent,
                    "Please let us know right away if you can't make it.",
                )
                .phrase(
                    Tone::Empathetic,
                    "If the timing no longer works for you, that's completely fine. Just let us know and we'll find another slot.",
                ),
        )
        .segment(Segment::new("notes").phrase(Tone::Friendly, "{{notes}}"))
        .next_step("Send a confirmation text")
        .next_step("Flag no-shows for a reschedule call"),
    ]
}
