//! Supported Twilio voices and speech locales

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Amazon Polly voice used by Twilio `<Say>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Voice {
    #[serde(rename = "Polly.Joanna")]
    PollyJoanna,
    #[serde(rename = "Polly.Matthew")]
    PollyMatthew,
    #[serde(rename = "Polly.Kendra")]
    PollyKendra,
}

impl Voice {
    pub const ALL: [Voice; 3] = [Voice::PollyJoanna, Voice::PollyMatthew, Voice::PollyKendra];

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::PollyJoanna => "Polly.Joanna",
            Voice::PollyMatthew => "Polly.Matthew",
            Voice::PollyKendra => "Polly.Kendra",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Voice::PollyJoanna => "Polly Joanna (Female)",
            Voice::PollyMatthew => "Polly Matthew (Male)",
            Voice::PollyKendra => "Polly Kendra (Warm)",
        }
    }
}

impl Default for Voice {
    fn default() -> Self {
        Voice::PollyJoanna
    }
}

impl std::fmt::Display for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Voice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::ALL
            .into_iter()
            .find(|voice| voice.as_str() == s)
            .ok_or_else(|| format!("Unknown voice: {}", s))
    }
}

/// Speech locale passed as the `language` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "es-ES")]
    EsEs,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::EnGb, Locale::EsEs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::EsEs => "es-ES",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::EnUs => "English (United States)",
            Locale::EnGb => "English (United Kingdom)",
            Locale::EsEs => "Spanish (Spain)",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::EnUs
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| format!("Unknown locale: {}", s))
    }
}
