use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Alert error: {message}")]
    Alert { message: String },

    #[error("Browser API unavailable: {api}")]
    Unavailable { api: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

pub type AuthResult<T> = Result<T, AuthError>;

impl AuthError {
    pub fn alert(message: impl Into<String>) -> Self {
        AuthError::Alert {
            message: message.into(),
        }
    }

    pub fn unavailable(api: impl Into<String>) -> Self {
        AuthError::Unavailable { api: api.into() }
    }

    /// Whether the user may never have seen the confirmation alert
    pub fn is_user_visible_failure(&self) -> bool {
        matches!(self, AuthError::Alert { .. } | AuthError::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_converts() {
        let err: AuthError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, AuthError::Serialization { .. }));
        assert!(!err.is_user_visible_failure());
        assert!(err.to_string().starts_with("Serialization error:"));
    }

    #[test]
    fn test_alert_errors_are_user_visible() {
        assert!(AuthError::alert("blocked").is_user_visible_failure());
        assert!(AuthError::unavailable("window").is_user_visible_failure());
        assert_eq!(
            AuthError::unavailable("window").to_string(),
            "Browser API unavailable: window"
        );
    }
}
