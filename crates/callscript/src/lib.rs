//! # Callscript
//!
//! Turns an outbound call request (template, tone, variables, voice and
//! locale) into a tone-adjusted TwiML document and hands it to Twilio.
//!
//! Everything up to the TwiML document is pure and synchronous; only the
//! [`twilio`] dispatch layer performs I/O.

pub mod binder;
pub mod catalog;
pub mod compiler;
pub mod pipeline;
pub mod tone;
pub mod twilio;
pub mod twiml;
pub mod validator;
pub mod voice;

#[cfg(test)]
mod binder_tests;
#[cfg(test)]
mod compiler_tests;

pub use binder::{placeholders, substitute, Bindings, VariableBinder};
pub use catalog::{catalog, find_template, Segment, Template, TemplateCatalog};
pub use compiler::{compile_script, compile_with_binder, ResolvedScript, ResolvedSegment};
pub use pipeline::{prepare_call, CallScriptError, PreparedCall};
pub use tone::{resolve_phrasing, Tone};
pub use twilio::{
    dispatcher_from_env, CallDispatcher, DispatchOutcome, SimulatedDispatcher, TwilioConfig,
    TwilioDispatcher, TwilioError, TwilioResult,
};
pub use twiml::{serialize_markup, TwimlBuilder};
pub use validator::{validate_request, CallRequest, ValidationIssue, ValidationIssues};
pub use voice::{Locale, Voice};
