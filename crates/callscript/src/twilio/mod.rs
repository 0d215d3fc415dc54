//! Twilio outbound calling
//!
//! Places the compiled TwiML as a live call when credentials are configured,
//! otherwise simulates the dispatch so the rest of the flow still works.

pub mod dispatch;

pub use dispatch::{dispatcher_from_env, CallDispatcher, SimulatedDispatcher, TwilioDispatcher};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Credentials and caller id for the Twilio REST API
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verified number calls are placed from
    pub caller_id: String,
    /// REST API base URL
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    "https://api.twilio.com".to_string()
}

impl TwilioConfig {
    /// Check if Twilio is configured
    pub fn is_configured(&self) -> bool {
        !self.account_sid.trim().is_empty()
            && !self.auth_token.trim().is_empty()
            && !self.caller_id.trim().is_empty()
    }

    /// Create config from environment variables.
    ///
    /// Returns `None` unless `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN` and
    /// `TWILIO_CALLER_ID` are all set and non-blank.
    pub fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok()?;
        let caller_id = std::env::var("TWILIO_CALLER_ID").ok()?;

        let config = Self {
            account_sid,
            auth_token,
            caller_id,
            api_base_url: std::env::var("TWILIO_API_BASE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(default_api_base_url),
        };

        config.is_configured().then_some(config)
    }
}

/// Result of handing a call to the telephony provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DispatchOutcome {
    /// Provider call identifier (`SIM-...` when simulated)
    pub sid: String,
    /// Provider status string, e.g. `queued`
    pub status: String,
    pub simulated: bool,
}

/// Twilio error types
#[derive(Debug, thiserror::Error)]
pub enum TwilioError {
    #[error("Twilio not configured")]
    NotConfigured,

    #[error("Twilio rejected the call ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid Twilio response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

pub type TwilioResult<T> = Result<T, TwilioError>;
