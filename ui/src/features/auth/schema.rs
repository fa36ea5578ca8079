//! Declarative field rules for the sign-up and sign-in forms.
//!
//! Each field carries an ordered rule list; the first rule that fails supplies
//! the single message shown under that field.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;

use crate::features::auth::types::{SignInField, SignInValues, SignUpField, SignUpValues};
use crate::services::config::ValidationConfig;
use crate::utils::validation::{has_min_length, is_exact_digits, is_valid_email};

/// Failing fields mapped to their first message
pub type FieldErrors<F> = BTreeMap<F, String>;

/// A flat record of string-valued form fields
pub trait FormValues: Clone + Debug + Default + Serialize {
    type Field: Copy + Ord + Debug + 'static;

    /// Every field in display order
    const FIELDS: &'static [Self::Field];

    fn value(&self, field: Self::Field) -> &str;

    fn set_value(&mut self, field: Self::Field, value: String);
}

#[derive(Clone, Debug, PartialEq)]
pub enum Rule<F> {
    /// Fails on the empty string only; whitespace counts as a value
    Required { message: String },
    /// Skipped for empty values so `Required` owns that case
    Email { message: String },
    ExactDigits { count: usize, message: String },
    MinLength { min: usize, message: String },
    EqualsField { other: F, message: String },
}

impl<F: Copy> Rule<F> {
    pub fn required(message: &str) -> Self {
        Rule::Required {
            message: message.to_string(),
        }
    }

    pub fn email(message: &str) -> Self {
        Rule::Email {
            message: message.to_string(),
        }
    }

    pub fn exact_digits(count: usize, message: &str) -> Self {
        Rule::ExactDigits {
            count,
            message: message.to_string(),
        }
    }

    pub fn min_length(min: usize, message: &str) -> Self {
        Rule::MinLength {
            min,
            message: message.to_string(),
        }
    }

    pub fn equals_field(other: F, message: &str) -> Self {
        Rule::EqualsField {
            other,
            message: message.to_string(),
        }
    }

    /// Returns the message when `value` breaks this rule
    pub fn check<V>(&self, value: &str, values: &V) -> Option<&str>
    where
        V: FormValues<Field = F>,
    {
        let passes = match self {
            Rule::Required { .. } => !value.is_empty(),
            Rule::Email { .. } => value.is_empty() || is_valid_email(value),
            Rule::ExactDigits { count, .. } => is_exact_digits(value, *count),
            Rule::MinLength { min, .. } => has_min_length(value, *min),
            Rule::EqualsField { other, .. } => value == values.value(*other),
        };

        if passes {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::Email { message }
            | Rule::ExactDigits { message, .. }
            | Rule::MinLength { message, .. }
            | Rule::EqualsField { message, .. } => message,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Schema<V: FormValues> {
    fields: Vec<(V::Field, Vec<Rule<V::Field>>)>,
}

impl<V: FormValues> Default for Schema<V> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<V: FormValues> Schema<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: V::Field, rules: Vec<Rule<V::Field>>) -> Self {
        self.fields.push((field, rules));
        self
    }

    pub fn rules(&self, field: V::Field) -> &[Rule<V::Field>] {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn validate_field(&self, field: V::Field, values: &V) -> Option<String> {
        let value = values.value(field);
        self.rules(field)
            .iter()
            .find_map(|rule| rule.check(value, values))
            .map(str::to_string)
    }

    pub fn validate(&self, values: &V) -> FieldErrors<V::Field> {
        self.fields
            .iter()
            .filter_map(|(field, _)| {
                self.validate_field(*field, values)
                    .map(|message| (*field, message))
            })
            .collect()
    }
}

pub fn sign_up_schema(config: &ValidationConfig) -> Schema<SignUpValues> {
    let messages = &config.messages;
    Schema::<SignUpValues>::new()
        .field(SignUpField::Name, vec![Rule::required(&messages.name_required)])
        .field(
            SignUpField::Email,
            vec![
                Rule::required(&messages.email_required),
                Rule::email(&messages.email_invalid),
            ],
        )
        .field(
            SignUpField::Number,
            vec![
                Rule::required(&messages.number_required),
                Rule::exact_digits(config.phone_digits, &messages.number_invalid),
            ],
        )
        .field(
            SignUpField::Password,
            vec![
                Rule::required(&messages.password_required),
                Rule::min_length(config.min_password_length, &messages.password_too_short),
            ],
        )
        .field(
            SignUpField::ConfirmPassword,
            vec![
                Rule::required(&messages.confirm_password_required),
                Rule::equals_field(SignUpField::Password, &messages.passwords_mismatch),
            ],
        )
}

/// Sign-in only checks presence and email shape; password length is not enforced
pub fn sign_in_schema(config: &ValidationConfig) -> Schema<SignInValues> {
    let messages = &config.messages;
    Schema::<SignInValues>::new()
        .field(
            SignInField::Email,
            vec![
                Rule::required(&messages.email_required),
                Rule::email(&messages.email_invalid),
            ],
        )
        .field(
            SignInField::Password,
            vec![Rule::required(&messages.password_required)],
        )
}
