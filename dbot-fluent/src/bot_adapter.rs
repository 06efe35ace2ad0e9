//! [`BotApi`] for `teloxide::Bot`: reuses the bot's token, API URL and `reqwest` client, and
//! posts each fluent request as a JSON body to `/bot<token>/<method>`.

use async_trait::async_trait;
use dbot_core::{decode_response, method_url, BotApi, RequestOptions, Result};
use serde_json::Value;
use tracing::{debug, error};

#[async_trait]
impl BotApi for teloxide::Bot {
    async fn call(
        &self,
        method: &str,
        params: Value,
        options: Option<&RequestOptions>,
    ) -> Result<Value> {
        let api_url = match options.and_then(|o| o.api_url.as_deref()) {
            Some(url) => url.to_string(),
            None => self.api_url().to_string(),
        };

        let mut request = self
            .client()
            .post(method_url(&api_url, self.token(), method))
            .json(&params);
        if let Some(timeout) = options.and_then(|o| o.timeout) {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            error!(method = %method, error = %e, "Bot API request failed");
            e
        })?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(method = %method, status = %status, bytes = body.len(), "Bot API responded");

        decode_response(&body).map_err(|e| {
            error!(method = %method, error = %e, "Bot API returned an error");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teloxide_bot_is_bot_api() {
        fn assert_bot_api<T: BotApi>(_: &T) {}
        let bot = teloxide::Bot::new("dummy_token");
        assert_bot_api(&bot);
    }
}
