//! Submission handlers: confirm to the user, then log the accepted values.
//! Nothing leaves the browser.

use serde::Serialize;

use crate::features::auth::types::{SignInValues, SignUpValues};
use crate::services::config::SubmissionConfig;
use crate::console_log;
use crate::services::errors::AuthResult;
#[cfg(feature = "web")]
use crate::services::errors::AuthError;

/// An accepted form, ready for its handler
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    SignUp(SignUpValues),
    SignIn(SignInValues),
}

impl Submission {
    pub fn alert_message<'a>(&self, config: &'a SubmissionConfig) -> &'a str {
        match self {
            Submission::SignUp(_) => &config.sign_up_alert,
            Submission::SignIn(_) => &config.sign_in_alert,
        }
    }

    pub fn log_label<'a>(&self, config: &'a SubmissionConfig) -> &'a str {
        match self {
            Submission::SignUp(_) => &config.sign_up_log_label,
            Submission::SignIn(_) => &config.sign_in_log_label,
        }
    }

    pub fn payload_json(&self) -> AuthResult<String> {
        match self {
            Submission::SignUp(values) => to_log_json(values),
            Submission::SignIn(values) => to_log_json(values),
        }
    }
}

fn to_log_json<T: Serialize>(value: &T) -> AuthResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Where submission feedback goes
pub trait SubmissionSink {
    /// Blocking user-facing confirmation
    fn notify(&mut self, message: &str) -> AuthResult<()>;

    fn log(&mut self, label: &str, payload: &str);
}

/// Alerts through `window.alert` and logs to the browser console
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSink;

impl SubmissionSink for BrowserSink {
    #[cfg(feature = "web")]
    fn notify(&mut self, message: &str) -> AuthResult<()> {
        let window = web_sys::window().ok_or_else(|| AuthError::unavailable("window"))?;
        window
            .alert_with_message(message)
            .map_err(|err| AuthError::alert(describe_js_error(err)))
    }

    #[cfg(not(feature = "web"))]
    fn notify(&mut self, message: &str) -> AuthResult<()> {
        crate::console_info!("[Submission] {}", message);
        Ok(())
    }

    fn log(&mut self, label: &str, payload: &str) {
        console_log!("{} {}", label, payload);
    }
}

#[cfg(feature = "web")]
fn describe_js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Runs the configured feedback for an accepted form: the alert first, then
/// the console line with the values as JSON.
pub fn handle_submission<S: SubmissionSink>(
    submission: &Submission,
    config: &SubmissionConfig,
    sink: &mut S,
) -> AuthResult<()> {
    if config.alert_on_submit {
        sink.notify(submission.alert_message(config))?;
    }

    if config.log_submissions {
        let payload = submission.payload_json()?;
        sink.log(submission.log_label(config), &payload);
    }

    Ok(())
}
