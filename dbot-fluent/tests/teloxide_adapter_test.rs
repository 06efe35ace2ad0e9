//! End-to-end tests of `BotApi for teloxide::Bot` against a mock Bot API server.
//!
//! Requests go to `/bot<token>/<method>` with a JSON body; the mock guards must be held until
//! the request completes, else the server answers with an empty body.

use std::sync::Arc;
use std::time::Duration;

use dbot_fluent::{Context, DbotError};
use mockito::Matcher;
use serde_json::json;
use teloxide::types::ChatId;

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

fn bot_for(server_url: &str) -> teloxide::Bot {
    teloxide::Bot::new(TEST_BOT_TOKEN)
        .set_api_url(reqwest::Url::parse(server_url).expect("mock server URL"))
}

/// **Test: a fluent sendMessage is posted as JSON and its result decoded.**
#[tokio::test]
async fn test_send_message_through_teloxide_bot() {
    let mut server = mockito::Server::new_async().await;
    let mock_send = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_body(Matcher::Json(json!({"chat_id": 42, "text": "hello", "parse_mode": "HTML"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1706529600,
                "chat": {"id": 42, "type": "private", "first_name": "Ann"},
                "from": {"id": 123456789, "is_bot": true, "first_name": "TestBot", "username": "testbot"},
                "text": "hello"
            }
        }"#,
        )
        .create_async()
        .await;

    let ctx = Context::new(Arc::new(bot_for(&server.url()))).with_chat(ChatId(42));
    let message = ctx
        .send_message("hello")
        .html()
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .unwrap();

    assert_eq!(message.id.0, 1);
    mock_send.assert_async().await;
}

/// **Test: `ok: false` responses become API errors carrying retry_after.**
#[tokio::test]
async fn test_flood_control_error_is_decoded() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{}/leaveChat", TEST_BOT_TOKEN).as_str())
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}"#,
        )
        .create_async()
        .await;

    let ctx = Context::new(Arc::new(bot_for(&server.url()))).with_chat(ChatId(42));
    let err = ctx.leave_chat().send().await.unwrap_err();

    assert_eq!(err.retry_after(), Some(5));
    assert!(matches!(err, DbotError::Api { code: 429, .. }));
}

/// **Test: a per-request api_url sends the call to another server.**
#[tokio::test]
async fn test_api_url_override() {
    let mut local = mockito::Server::new_async().await;
    let mock_local = local
        .mock("POST", format!("/bot{}/getChatMemberCount", TEST_BOT_TOKEN).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":17}"#)
        .create_async()
        .await;

    // Nothing listens on the bot's own API URL.
    let ctx = Context::new(Arc::new(bot_for("http://127.0.0.1:9"))).with_chat(ChatId(42));
    let count = ctx
        .get_chat_member_count()
        .api_url(local.url())
        .send()
        .await
        .unwrap();

    assert_eq!(count, 17);
    mock_local.assert_async().await;
}

/// **Test: a non-JSON body is reported as an invalid response.**
#[tokio::test]
async fn test_garbage_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{}/getMe", TEST_BOT_TOKEN).as_str())
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let ctx = Context::new(Arc::new(bot_for(&server.url())));
    let err = ctx.get_me().send().await.unwrap_err();

    assert!(matches!(err, DbotError::InvalidResponse(_)));
}
