//! Call dispatch: live Twilio REST calls or a local simulation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use super::{DispatchOutcome, TwilioConfig, TwilioError, TwilioResult};

/// Places an outbound call that executes `twiml` once answered
#[async_trait]
pub trait CallDispatcher: Send + Sync {
    /// Hand the call to the provider
    async fn place_call(&self, to: &str, twiml: &str) -> TwilioResult<DispatchOutcome>;

    /// Whether calls are simulated rather than placed
    fn is_simulated(&self) -> bool;
}

/// Subset of Twilio's call resource we care about
#[derive(Debug, Deserialize)]
struct TwilioCallResource {
    sid: String,
    status: String,
}

/// Twilio REST error body
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    message: String,
}

/// Dispatcher backed by the Twilio Calls API
pub struct TwilioDispatcher {
    client: Client,
    config: TwilioConfig,
}

impl TwilioDispatcher {
    pub fn new(config: TwilioConfig) -> TwilioResult<Self> {
        if !config.is_configured() {
            return Err(TwilioError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    fn calls_endpoint(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Calls.json",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl CallDispatcher for TwilioDispatcher {
    async fn place_call(&self, to: &str, twiml: &str) -> TwilioResult<DispatchOutcome> {
        let params = [
            ("To", to),
            ("From", self.config.caller_id.as_str()),
            ("Twiml", twiml),
        ];

        let response = self
            .client
            .post(self.calls_endpoint())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TwilioErrorBody>(&body)
                .map(|err| err.message)
                .unwrap_or(body);

            warn!("Twilio rejected call ({}): {}", status, message);
            return Err(TwilioError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let call: TwilioCallResource = response
            .json()
            .await
            .map_err(|e| TwilioError::InvalidResponse(e.to_string()))?;

        info!("Twilio call {} created with status {}", call.sid, call.status);

        Ok(DispatchOutcome {
            sid: call.sid,
            status: call.status,
            simulated: false,
        })
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// Dispatcher used when no Twilio credentials are configured
#[derive(Debug, Clone, Default)]
pub struct SimulatedDispatcher;

#[async_trait]
impl CallDispatcher for SimulatedDispatcher {
    async fn place_call(&self, _to: &str, _twiml: &str) -> TwilioResult<DispatchOutcome> {
        let sid = format!("SIM-{}", Utc::now().timestamp_millis());
        info!("Simulated call {} queued", sid);

        Ok(DispatchOutcome {
            sid,
            status: "queued".to_string(),
            simulated: true,
        })
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Live dispatcher when Twilio is configured, simulated otherwise
pub fn dispatcher_from_env() -> Arc<dyn CallDispatcher> {
    match TwilioConfig::from_env().map(TwilioDispatcher::new) {
        Some(Ok(dispatcher)) => {
            info!("Twilio dispatcher initialized successfully");
            Arc::new(dispatcher)
        }
        Some(Err(e)) => {
            warn!("Twilio dispatcher unavailable ({}), simulating calls", e);
            Arc::new(SimulatedDispatcher)
        }
        None => {
            warn!("Twilio is not configured, simulating calls");
            Arc::new(SimulatedDispatcher)
        }
    }
}
