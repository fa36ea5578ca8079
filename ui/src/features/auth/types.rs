// Core types for the auth portal - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::console_debug;
use crate::features::auth::schema::{sign_in_schema, sign_up_schema, FieldErrors, FormValues, Schema};
use crate::features::auth::submission::Submission;
use crate::services::config::AuthConfig;

/// Which form the container currently shows
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum SignUpField {
    Name,
    Email,
    Number,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    /// The input's `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            SignUpField::Name => "name",
            SignUpField::Email => "email",
            SignUpField::Number => "number",
            SignUpField::Password => "password",
            SignUpField::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum SignInField {
    Email,
    Password,
}

impl SignInField {
    pub fn name(&self) -> &'static str {
        match self {
            SignInField::Email => "email",
            SignInField::Password => "password",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpValues {
    pub name: String,
    pub email: String,
    pub number: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues for SignUpValues {
    type Field = SignUpField;

    const FIELDS: &'static [SignUpField] = &[
        SignUpField::Name,
        SignUpField::Email,
        SignUpField::Number,
        SignUpField::Password,
        SignUpField::ConfirmPassword,
    ];

    fn value(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Name => &self.name,
            SignUpField::Email => &self.email,
            SignUpField::Number => &self.number,
            SignUpField::Password => &self.password,
            SignUpField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set_value(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::Name => self.name = value,
            SignUpField::Email => self.email = value,
            SignUpField::Number => self.number = value,
            SignUpField::Password => self.password = value,
            SignUpField::ConfirmPassword => self.confirm_password = value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignInValues {
    pub email: String,
    pub password: String,
}

impl FormValues for SignInValues {
    type Field = SignInField;

    const FIELDS: &'static [SignInField] = &[SignInField::Email, SignInField::Password];

    fn value(&self, field: SignInField) -> &str {
        match field {
            SignInField::Email => &self.email,
            SignInField::Password => &self.password,
        }
    }

    fn set_value(&mut self, field: SignInField, value: String) {
        match field {
            SignInField::Email => self.email = value,
            SignInField::Password => self.password = value,
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    // Toggle actions
    ShowSignUp,
    ShowSignIn,
    TransitionFinished,

    // Sign-up form actions
    SignUpChanged(SignUpField, String),
    SignUpBlurred(SignUpField),
    SignUpSubmitted,

    // Sign-in form actions
    SignInChanged(SignInField, String),
    SignInBlurred(SignInField),
    SignInSubmitted,
}

/// Values, touched set and errors of one form
#[derive(Clone, Debug)]
pub struct FormState<V: FormValues> {
    pub values: V,
    pub touched: BTreeSet<V::Field>,
    pub errors: FieldErrors<V::Field>,
    pub submit_count: u32,
    /// Last values that passed validation on submit
    pub submitted: Option<V>,
    schema: Schema<V>,
}

impl<V: FormValues> FormState<V> {
    pub fn new(schema: Schema<V>) -> Self {
        Self {
            values: V::default(),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            submit_count: 0,
            submitted: None,
            schema,
        }
    }

    pub fn value(&self, field: V::Field) -> &str {
        self.values.value(field)
    }

    pub fn is_touched(&self, field: V::Field) -> bool {
        self.touched.contains(&field)
    }

    /// The message to render under `field`: only once the field was touched
    pub fn visible_error(&self, field: V::Field) -> Option<&str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn change(&mut self, field: V::Field, value: String) {
        self.values.set_value(field, value);
        self.revalidate();
    }

    pub fn blur(&mut self, field: V::Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Touches every field and validates; returns the values when they pass
    pub fn submit(&mut self) -> Option<V> {
        self.touched.extend(V::FIELDS.iter().copied());
        self.submit_count += 1;
        self.revalidate();

        if self.has_errors() {
            return None;
        }
        self.submitted = Some(self.values.clone());
        Some(self.values.clone())
    }

    fn revalidate(&mut self) {
        self.errors = self.schema.validate(&self.values);
    }
}

#[derive(Clone, Debug)]
pub struct AuthState {
    pub mode: AuthMode,
    pub sign_up: FormState<SignUpValues>,
    pub sign_in: FormState<SignInValues>,
    /// Set while the overlay slides between panels
    pub transitioning: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

impl AuthState {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            mode: AuthMode::default(),
            sign_up: FormState::new(sign_up_schema(&config.validation)),
            sign_in: FormState::new(sign_in_schema(&config.validation)),
            transitioning: false,
        }
    }

    pub fn is_sign_up_active(&self) -> bool {
        self.mode == AuthMode::SignUp
    }

    pub fn container_class(&self) -> String {
        let mut class = String::from("container");
        if self.is_sign_up_active() {
            class.push_str(" active");
        }
        if self.transitioning {
            class.push_str(" transitioning");
        }
        class
    }

    /// Class for the form panel belonging to `panel`; the inactive one is hidden
    pub fn panel_class(&self, panel: AuthMode) -> &'static str {
        match (panel, panel == self.mode) {
            (AuthMode::SignUp, true) => "form-container sign-up",
            (AuthMode::SignUp, false) => "form-container sign-up hidden",
            (AuthMode::SignIn, true) => "form-container sign-in",
            (AuthMode::SignIn, false) => "form-container sign-in hidden",
        }
    }

    /// Applies `action` in place (preserves Dioxus Signal reactivity).
    /// Returns the accepted submission, if the action was a successful submit.
    pub fn reduce_in_place(&mut self, action: AuthAction) -> Option<Submission> {
        match action {
            AuthAction::ShowSignUp => self.switch_mode(AuthMode::SignUp),
            AuthAction::ShowSignIn => self.switch_mode(AuthMode::SignIn),
            AuthAction::TransitionFinished => {
                self.transitioning = false;
            }

            AuthAction::SignUpChanged(field, value) => self.sign_up.change(field, value),
            AuthAction::SignUpBlurred(field) => self.sign_up.blur(field),
            AuthAction::SignUpSubmitted => {
                let accepted = self.sign_up.submit();
                if accepted.is_none() {
                    console_debug!(
                        "[REDUCER] Sign-up submit #{} blocked by {} field error(s)",
                        self.sign_up.submit_count,
                        self.sign_up.errors.len()
                    );
                }
                return accepted.map(Submission::SignUp);
            }

            AuthAction::SignInChanged(field, value) => self.sign_in.change(field, value),
            AuthAction::SignInBlurred(field) => self.sign_in.blur(field),
            AuthAction::SignInSubmitted => {
                let accepted = self.sign_in.submit();
                if accepted.is_none() {
                    console_debug!(
                        "[REDUCER] Sign-in submit #{} blocked by {} field error(s)",
                        self.sign_in.submit_count,
                        self.sign_in.errors.len()
                    );
                }
                return accepted.map(Submission::SignIn);
            }
        }
        None
    }

    fn switch_mode(&mut self, mode: AuthMode) {
        if self.mode == mode {
            return;
        }
        console_debug!("[FORM] Transitioning from {:?} to {:?}", self.mode, mode);
        self.mode = mode;
        self.transitioning = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_sign_up(state: &mut AuthState) {
        for (field, value) in [
            (SignUpField::Name, "Grace Hopper"),
            (SignUpField::Email, "grace@example.com"),
            (SignUpField::Number, "5551234567"),
            (SignUpField::Password, "cobol59"),
            (SignUpField::ConfirmPassword, "cobol59"),
        ] {
            state.reduce_in_place(AuthAction::SignUpChanged(field, value.to_string()));
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AuthState::default();
        assert_eq!(state.mode, AuthMode::SignIn);
        assert!(!state.transitioning);
        assert_eq!(state.sign_up.values, SignUpValues::default());
        assert_eq!(state.sign_in.values, SignInValues::default());
        assert!(state.sign_up.touched.is_empty());
        assert!(!state.sign_up.has_errors());
        assert_eq!(state.container_class(), "container");
    }

    #[test]
    fn test_toggle_sets_mode_and_classes() {
        let mut state = AuthState::default();
        assert_eq!(state.panel_class(AuthMode::SignUp), "form-container sign-up hidden");
        assert_eq!(state.panel_class(AuthMode::SignIn), "form-container sign-in");

        state.reduce_in_place(AuthAction::ShowSignUp);
        assert_eq!(state.mode, AuthMode::SignUp);
        assert!(state.transitioning);
        assert_eq!(state.container_class(), "container active transitioning");
        assert_eq!(state.panel_class(AuthMode::SignUp), "form-container sign-up");
        assert_eq!(state.panel_class(AuthMode::SignIn), "form-container sign-in hidden");

        state.reduce_in_place(AuthAction::TransitionFinished);
        assert_eq!(state.container_class(), "container active");

        state.reduce_in_place(AuthAction::ShowSignIn);
        assert_eq!(state.mode, AuthMode::SignIn);
        assert_eq!(state.container_class(), "container transitioning");
    }

    #[test]
    fn test_reselecting_current_mode_is_noop() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::ShowSignIn);
        assert_eq!(state.mode, AuthMode::SignIn);
        assert!(!state.transitioning);
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SignUpChanged(SignUpField::Email, "nope".to_string()));

        assert_eq!(
            state.sign_up.errors.get(&SignUpField::Email).map(String::as_str),
            Some("Invalid email format")
        );
        assert_eq!(state.sign_up.visible_error(SignUpField::Email), None);

        state.reduce_in_place(AuthAction::SignUpBlurred(SignUpField::Email));
        assert_eq!(
            state.sign_up.visible_error(SignUpField::Email),
            Some("Invalid email format")
        );
        // Other untouched fields stay quiet even though they fail
        assert_eq!(state.sign_up.visible_error(SignUpField::Name), None);
    }

    #[test]
    fn test_blur_on_empty_field_shows_required() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SignInBlurred(SignInField::Password));
        assert_eq!(
            state.sign_in.visible_error(SignInField::Password),
            Some("Password is required")
        );
    }

    #[test]
    fn test_error_clears_when_value_fixed() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SignUpBlurred(SignUpField::Number));
        assert!(state.sign_up.visible_error(SignUpField::Number).is_some());

        state.reduce_in_place(AuthAction::SignUpChanged(
            SignUpField::Number,
            "0123456789".to_string(),
        ));
        assert_eq!(state.sign_up.visible_error(SignUpField::Number), None);
    }

    #[test]
    fn test_invalid_submit_touches_all_and_returns_none() {
        let mut state = AuthState::default();
        let submission = state.reduce_in_place(AuthAction::SignUpSubmitted);

        assert!(submission.is_none());
        assert_eq!(state.sign_up.submit_count, 1);
        assert_eq!(state.sign_up.touched.len(), SignUpValues::FIELDS.len());
        assert!(state.sign_up.submitted.is_none());
        assert_eq!(
            state.sign_up.visible_error(SignUpField::ConfirmPassword),
            Some("Confirm Password is required")
        );
        // The other form is untouched
        assert!(state.sign_in.touched.is_empty());
    }

    #[test]
    fn test_valid_sign_up_submit_returns_values() {
        let mut state = AuthState::default();
        fill_sign_up(&mut state);

        let submission = state.reduce_in_place(AuthAction::SignUpSubmitted);
        match submission {
            Some(Submission::SignUp(values)) => {
                assert_eq!(values.name, "Grace Hopper");
                assert_eq!(values.confirm_password, "cobol59");
            }
            other => panic!("expected sign-up submission, got {:?}", other),
        }
        assert_eq!(state.sign_up.submitted.as_ref().map(|v| v.number.as_str()), Some("5551234567"));
        // Values stay in place after submit
        assert_eq!(state.sign_up.value(SignUpField::Email), "grace@example.com");
    }

    #[test]
    fn test_valid_sign_in_submit() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SignInChanged(SignInField::Email, "a@b.co".to_string()));
        state.reduce_in_place(AuthAction::SignInChanged(SignInField::Password, "p".to_string()));

        let submission = state.reduce_in_place(AuthAction::SignInSubmitted);
        assert_eq!(
            submission,
            Some(Submission::SignIn(SignInValues {
                email: "a@b.co".to_string(),
                password: "p".to_string(),
            }))
        );
    }

    #[test]
    fn test_toggle_keeps_form_state() {
        let mut state = AuthState::default();
        state.reduce_in_place(AuthAction::SignInChanged(SignInField::Email, "x".to_string()));
        state.reduce_in_place(AuthAction::SignInBlurred(SignInField::Email));

        state.reduce_in_place(AuthAction::ShowSignUp);
        state.reduce_in_place(AuthAction::ShowSignIn);

        assert_eq!(state.sign_in.value(SignInField::Email), "x");
        assert!(state.sign_in.is_touched(SignInField::Email));
        assert_eq!(
            state.sign_in.visible_error(SignInField::Email),
            Some("Invalid email format")
        );
    }

    #[test]
    fn test_changing_password_revalidates_confirmation() {
        let mut state = AuthState::default();
        fill_sign_up(&mut state);
        state.reduce_in_place(AuthAction::SignUpBlurred(SignUpField::ConfirmPassword));
        assert_eq!(state.sign_up.visible_error(SignUpField::ConfirmPassword), None);

        state.reduce_in_place(AuthAction::SignUpChanged(
            SignUpField::Password,
            "fortran57".to_string(),
        ));
        assert_eq!(
            state.sign_up.visible_error(SignUpField::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[test]
    fn test_field_names_match_inputs() {
        assert_eq!(SignUpField::ConfirmPassword.name(), "confirmPassword");
        assert_eq!(SignUpField::Number.name(), "number");
        assert_eq!(SignInField::Email.name(), "email");
    }

    #[test]
    fn test_sign_up_values_serialize_camel_case() {
        let json = serde_json::to_value(SignUpValues {
            confirm_password: "pw".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["confirmPassword"], "pw");
        assert!(json.get("confirm_password").is_none());
    }
}
