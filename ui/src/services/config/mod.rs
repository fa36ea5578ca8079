//! Portal Configuration
//!
//! Validation thresholds, user-facing messages, submission behaviour and
//! toggle timing, collected in one serde-friendly structure so a host page can
//! override any of them.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the auth portal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub validation: ValidationConfig,
    pub submission: SubmissionConfig,
    pub toggle: ToggleConfig,
}

/// Field rules and their messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length on sign-up, counted in UTF-16 code units
    pub min_password_length: usize,

    /// Exact number of digits a phone number must have
    pub phone_digits: usize,

    pub messages: ValidationMessages,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub number_required: String,
    pub number_invalid: String,
    pub password_required: String,
    pub password_too_short: String,
    pub confirm_password_required: String,
    pub passwords_mismatch: String,
}

/// What happens to an accepted form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub alert_on_submit: bool,
    pub log_submissions: bool,
    pub sign_up_alert: String,
    pub sign_in_alert: String,
    pub sign_up_log_label: String,
    pub sign_in_log_label: String,
}

/// Overlay slide timing; keep in sync with the CSS transition duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub transition_ms: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            phone_digits: 10,
            messages: ValidationMessages::default(),
        }
    }
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            name_required: "Name is required".to_string(),
            email_required: "Email is required".to_string(),
            email_invalid: "Invalid email format".to_string(),
            number_required: "Phone number is required".to_string(),
            number_invalid: "Must be exactly 10 digits".to_string(),
            password_required: "Password is required".to_string(),
            password_too_short: "Password must be at least 6 characters".to_string(),
            confirm_password_required: "Confirm Password is required".to_string(),
            passwords_mismatch: "Passwords must match".to_string(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            alert_on_submit: true,
            log_submissions: true,
            sign_up_alert: "Account created successfully.".to_string(),
            sign_in_alert: "Login Successful.".to_string(),
            sign_up_log_label: "Signup Data:".to_string(),
            sign_in_log_label: "Login Data:".to_string(),
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self { transition_ms: 600 }
    }
}

impl AuthConfig {
    /// HTML `pattern` attribute matching the phone rule
    pub fn phone_input_pattern(&self) -> String {
        format!("[0-9]{{{}}}", self.validation.phone_digits)
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.validation.min_password_length == 0 {
            errors.push("Validation min_password_length must be greater than 0".to_string());
        }

        if self.validation.phone_digits == 0 {
            errors.push("Validation phone_digits must be greater than 0".to_string());
        }

        if self.submission.alert_on_submit
            && (self.submission.sign_up_alert.is_empty() || self.submission.sign_in_alert.is_empty())
        {
            errors.push("Submission alerts must not be empty when alert_on_submit is set".to_string());
        }

        if self.submission.log_submissions
            && (self.submission.sign_up_log_label.is_empty()
                || self.submission.sign_in_log_label.is_empty())
        {
            errors.push("Submission log labels must not be empty when log_submissions is set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AuthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.validation.min_password_length, 6);
        assert_eq!(config.validation.phone_digits, 10);
        assert_eq!(config.toggle.transition_ms, 600);
    }

    #[test]
    fn test_phone_input_pattern_follows_digit_count() {
        let mut config = AuthConfig::default();
        assert_eq!(config.phone_input_pattern(), "[0-9]{10}");

        config.validation.phone_digits = 8;
        assert_eq!(config.phone_input_pattern(), "[0-9]{8}");
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let mut config = AuthConfig::default();
        config.validation.min_password_length = 0;
        config.validation.phone_digits = 0;
        config.submission.sign_in_alert.clear();

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_empty_alert_allowed_when_alerts_disabled() {
        let mut config = AuthConfig::default();
        config.submission.alert_on_submit = false;
        config.submission.sign_up_alert.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_keep_defaults() {
        let config: AuthConfig =
            serde_json::from_str(r#"{"validation":{"min_password_length":8},"toggle":{"transition_ms":300}}"#)
                .unwrap();
        assert_eq!(config.validation.min_password_length, 8);
        assert_eq!(config.validation.phone_digits, 10);
        assert_eq!(config.validation.messages.name_required, "Name is required");
        assert_eq!(config.toggle.transition_ms, 300);
        assert!(config.submission.alert_on_submit);
    }
}
