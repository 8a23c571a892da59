use thiserror::Error;

/// Ошибки загрузки страницы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// Message shown in the table; details go to diagnostics via `to_string()`
    pub fn user_message(&self) -> &'static str {
        "Failed to load data"
    }

    /// Все ошибки загрузки можно повторить тем же запросом
    pub fn is_retryable(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_diagnostics() {
        let err = FetchError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "server responded with 503: Service Unavailable");
        assert_eq!(err.user_message(), "Failed to load data");
    }

    #[test]
    fn test_malformed_is_shown_like_transport_failure() {
        let malformed = FetchError::Malformed("missing field `total`".into());
        let transport = FetchError::Transport("connection refused".into());
        assert_eq!(malformed.user_message(), transport.user_message());
        assert!(malformed.is_retryable());
    }
}
