//! Bot API collaborator: the one call every fluent request funnels into.
//!
//! [`BotApi`] is transport-agnostic; `dbot-fluent` implements it for `teloxide::Bot`, tests substitute recorders.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{DbotError, Result};

/// Performs a single Bot API method call. `params` is the JSON object of the request; the
/// returned value is the `result` field of a successful response.
#[async_trait]
pub trait BotApi: Send + Sync {
    async fn call(
        &self,
        method: &str,
        params: Value,
        options: Option<&RequestOptions>,
    ) -> Result<Value>;
}

/// Per-request transport options. Absent until a builder first asks for one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Passed through to the HTTP client unchanged.
    pub timeout: Option<Duration>,
    /// Alternate Bot API server (e.g. a local `telegram-bot-api`), without the `/bot<token>` part.
    pub api_url: Option<String>,
}

impl RequestOptions {
    pub fn is_empty(&self) -> bool {
        self.timeout.is_none() && self.api_url.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct ResponseParameters {
    migrate_to_chat_id: Option<i64>,
    retry_after: Option<u64>,
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    result: Option<Value>,
    error_code: Option<i32>,
    description: Option<String>,
    parameters: Option<ResponseParameters>,
}

/// Decodes a raw Bot API response body into its `result`, or into [`DbotError::Api`].
pub fn decode_response(body: &[u8]) -> Result<Value> {
    let response: ApiResponse = serde_json::from_slice(body).map_err(|e| {
        let preview = String::from_utf8_lossy(&body[..body.len().min(200)]);
        warn!(error = %e, body = %preview, "Bot API response is not an envelope");
        DbotError::InvalidResponse(format!("{} (body: {})", e, preview))
    })?;

    if response.ok {
        return response.result.ok_or_else(|| {
            warn!("Bot API response has ok=true but no result");
            DbotError::InvalidResponse("ok response without result".to_string())
        });
    }

    let (retry_after, migrate_to_chat_id) = response
        .parameters
        .map(|p| (p.retry_after, p.migrate_to_chat_id))
        .unwrap_or((None, None));
    let code = response.error_code.unwrap_or_default();
    let description = response.description.unwrap_or_default();
    debug!(
        code = code,
        description = %description,
        retry_after = ?retry_after,
        migrate_to_chat_id = ?migrate_to_chat_id,
        "Bot API returned an error"
    );
    Err(DbotError::Api {
        code,
        description,
        retry_after,
        migrate_to_chat_id,
    })
}

/// Builds `{api_url}/bot{token}/{method}`; tolerates a trailing slash on `api_url`.
pub fn method_url(api_url: &str, token: &str, method: &str) -> String {
    format!("{}/bot{}/{}", api_url.trim_end_matches('/'), token, method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ok_response() {
        let body = br#"{"ok":true,"result":{"message_id":7}}"#;
        assert_eq!(decode_response(body).unwrap(), json!({"message_id": 7}));
    }

    #[test]
    fn test_decode_ok_true_result() {
        let body = br#"{"ok":true,"result":true}"#;
        assert_eq!(decode_response(body).unwrap(), json!(true));
    }

    #[test]
    fn test_decode_error_response_with_parameters() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":12}}"#;
        match decode_response(body).unwrap_err() {
            DbotError::Api {
                code,
                description,
                retry_after,
                migrate_to_chat_id,
            } => {
                assert_eq!(code, 429);
                assert_eq!(description, "Too Many Requests");
                assert_eq!(retry_after, Some(12));
                assert_eq!(migrate_to_chat_id, None);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_garbage_is_invalid_response() {
        let err = decode_response(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, DbotError::InvalidResponse(_)));
    }

    #[test]
    fn test_decode_ok_without_result() {
        let err = decode_response(br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, DbotError::InvalidResponse(_)));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn decode_with_log(body: &[u8]) -> (Result<Value>, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || decode_response(body));
        (result, log.contents())
    }

    #[test]
    fn test_decode_failures_are_logged() {
        let (result, log) = decode_with_log(b"Bad Gateway");
        assert!(result.is_err());
        assert!(log.contains("WARN"));
        assert!(log.contains("Bot API response is not an envelope"));

        let (result, log) = decode_with_log(
            br#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        );
        assert!(result.is_err());
        assert!(log.contains("Bot API returned an error"));
        assert!(log.contains("code=400"));
    }

    #[test]
    fn test_method_url() {
        assert_eq!(
            method_url("https://api.telegram.org/", "123:abc", "sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
        assert_eq!(
            method_url("http://localhost:8081", "t", "getMe"),
            "http://localhost:8081/bott/getMe"
        );
    }

    #[test]
    fn test_request_options_is_empty() {
        assert!(RequestOptions::default().is_empty());
        let opts = RequestOptions {
            timeout: Some(Duration::from_secs(3)),
            api_url: None,
        };
        assert!(!opts.is_empty());
    }
}
