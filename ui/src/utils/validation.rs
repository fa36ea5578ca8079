//! Field-level predicates shared by the form schemas

use once_cell::sync::Lazy;
use regex::Regex;

// Same address grammar browsers apply to `<input type="email">`
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// True when `value` is exactly `count` ASCII digits, i.e. `^[0-9]{count}$`
pub fn is_exact_digits(value: &str, count: usize) -> bool {
    value.len() == count && value.bytes().all(|b| b.is_ascii_digit())
}

/// Length check in UTF-16 code units, the unit browser string lengths use
pub fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}
