use std::sync::Arc;

use callscript::{CallDispatcher, dispatcher_from_env};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<dyn CallDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Arc<dyn CallDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// State with a live Twilio dispatcher when credentials are present
    pub fn from_env() -> Self {
        Self::new(dispatcher_from_env())
    }

    pub fn dispatcher(&self) -> &dyn CallDispatcher {
        self.dispatcher.as_ref()
    }
}
