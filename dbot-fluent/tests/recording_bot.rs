//! [`BotApi`] test double: records every call and answers with a canned `result` value
//! (or a canned API error).

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use dbot_fluent::{BotApi, Context, DbotError, RequestOptions, Result};
use serde_json::{json, Value};
use teloxide::types::{ChatId, UserId};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub params: Value,
    pub options: Option<RequestOptions>,
}

pub struct RecordingBot {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Value,
    api_error: Option<(i32, String)>,
}

impl RecordingBot {
    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply,
            api_error: None,
        })
    }

    pub fn failing(code: i32, description: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Value::Null,
            api_error: Some((code, description.to_string())),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only call made; panics unless exactly one call was recorded.
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl BotApi for RecordingBot {
    async fn call(
        &self,
        method: &str,
        params: Value,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            params,
            options: options.cloned(),
        });
        match &self.api_error {
            Some((code, description)) => Err(DbotError::Api {
                code: *code,
                description: description.clone(),
                retry_after: None,
                migrate_to_chat_id: None,
            }),
            None => Ok(self.reply.clone()),
        }
    }
}

/// Context of a private chat 42 with user 42, effective message 10.
pub fn private_context(bot: Arc<RecordingBot>) -> Context {
    Context::new(bot)
        .with_chat(ChatId(42))
        .with_user(UserId(42))
        .with_message(10)
}

/// Minimal `Message` the Bot API would return for chat 42.
pub fn message_json(message_id: i32, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1706529600,
        "chat": {"id": 42, "type": "private", "first_name": "Ann"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
        "text": text
    })
}

static TRACING_INIT: Once = Once::new();

/// Routes `tracing` output to the test console; control verbosity with `RUST_LOG`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,dbot_fluent=debug"));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}
