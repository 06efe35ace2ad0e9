use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Required ambient state (effective chat, callback query, ...) is missing; no request was made.
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Telegram answered with `ok: false`.
    #[error("Telegram API error {code}: {description}")]
    Api {
        code: i32,
        description: String,
        retry_after: Option<u64>,
        migrate_to_chat_id: Option<i64>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DbotError {
    pub fn precondition(what: impl Into<String>) -> Self {
        DbotError::Precondition(what.into())
    }

    /// True when the request never left the process because ambient state was missing.
    pub fn is_precondition(&self) -> bool {
        matches!(self, DbotError::Precondition(_))
    }

    /// Seconds Telegram asked us to wait (flood control), if any.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            DbotError::Api { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message_names_missing_state() {
        let err = DbotError::precondition("no precheckout query");
        assert!(err.is_precondition());
        assert!(err.to_string().contains("no precheckout query"));
    }

    #[test]
    fn test_api_error_display_and_retry_after() {
        let err = DbotError::Api {
            code: 429,
            description: "Too Many Requests: retry after 5".to_string(),
            retry_after: Some(5),
            migrate_to_chat_id: None,
        };
        assert_eq!(
            err.to_string(),
            "Telegram API error 429: Too Many Requests: retry after 5"
        );
        assert_eq!(err.retry_after(), Some(5));
        assert!(!err.is_precondition());
    }
}
