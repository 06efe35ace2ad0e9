//! Builds a [`Context`] from teloxide updates: extracts the effective chat, user, message and
//! query ids the dispatch layer already parsed.

use std::sync::Arc;

use dbot_core::BotApi;
use teloxide::types::{Message, Update, UpdateKind};

use crate::context::Context;

impl Context {
    /// Context for any update kind. Unknown kinds still carry chat/user when teloxide exposes them.
    pub fn from_update(bot: Arc<dyn BotApi>, update: Update) -> Self {
        let mut ctx = Context::new(bot);
        ctx.chat_id = update.chat().map(|chat| chat.id);
        ctx.user_id = update.from().map(|user| user.id);

        match &update.kind {
            UpdateKind::Message(message)
            | UpdateKind::EditedMessage(message)
            | UpdateKind::ChannelPost(message)
            | UpdateKind::EditedChannelPost(message) => ctx.absorb_message(message),
            UpdateKind::CallbackQuery(query) => {
                ctx.callback_query_id = Some(query.id.to_string());
                ctx.inline_message_id = query.inline_message_id.clone();
                if let Some(message) = query.regular_message() {
                    ctx.absorb_message(message);
                }
            }
            UpdateKind::InlineQuery(query) => {
                ctx.inline_query_id = Some(query.id.to_string());
                ctx.inline_query = Some(query.query.clone());
            }
            UpdateKind::ShippingQuery(query) => {
                ctx.shipping_query_id = Some(query.id.to_string());
            }
            UpdateKind::PreCheckoutQuery(query) => {
                ctx.pre_checkout_query_id = Some(query.id.to_string());
            }
            _ => {}
        }

        ctx.update = Some(update);
        ctx
    }

    /// Context for a plain message, as handed out by `teloxide::repl`.
    pub fn from_message(bot: Arc<dyn BotApi>, message: &Message) -> Self {
        let mut ctx = Context::new(bot);
        ctx.user_id = message.from.as_ref().map(|user| user.id);
        ctx.absorb_message(message);
        ctx
    }

    fn absorb_message(&mut self, message: &Message) {
        self.chat_id.get_or_insert(message.chat.id);
        self.message_id = Some(message.id.0);
        self.text = message
            .text()
            .or_else(|| message.caption())
            .map(str::to_owned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use dbot_core::RequestOptions;
    use serde_json::{json, Value};
    use teloxide::types::{ChatId, UserId};

    use crate::types::Edited;

    /// Records `(method, params)` and answers every call with `true`.
    #[derive(Default)]
    struct RecordingBot {
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl RecordingBot {
        fn calls(&self) -> Vec<(String, Value)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BotApi for RecordingBot {
        async fn call(
            &self,
            method: &str,
            params: Value,
            _options: Option<&RequestOptions>,
        ) -> dbot_core::Result<Value> {
            self.calls.lock().unwrap().push((method.to_string(), params));
            Ok(Value::Bool(true))
        }
    }

    fn user_json(id: u64, name: &str) -> Value {
        json!({"id": id, "is_bot": false, "first_name": name})
    }

    fn message_json(text: &str) -> Value {
        json!({
            "message_id": 10,
            "date": 1700000000,
            "chat": {"id": 42, "type": "private", "first_name": "Ann"},
            "from": user_json(42, "Ann"),
            "text": text
        })
    }

    fn context_for(bot: &Arc<RecordingBot>, update: Value) -> Context {
        let update: Update = serde_json::from_value(update).unwrap();
        Context::from_update(bot.clone(), update)
    }

    /// **Test: a message update yields chat, user, message id and command args.**
    #[test]
    fn test_from_update_message() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({"update_id": 1, "message": message_json("/start arg1 arg2 arg3")}),
        );

        assert_eq!(ctx.effective_chat_id(), Some(ChatId(42)));
        assert_eq!(ctx.effective_user_id(), Some(UserId(42)));
        assert_eq!(ctx.effective_message_id(), Some(10));
        assert_eq!(ctx.args(), vec!["arg1", "arg2", "arg3"]);
        assert!(ctx.inline_query().is_none());
        assert!(ctx.update().is_some());
    }

    /// **Test: a bare command has no args.**
    #[test]
    fn test_from_message_without_args() {
        let message: Message = serde_json::from_value(message_json("/start")).unwrap();
        let ctx = Context::from_message(Arc::new(RecordingBot::default()), &message);
        assert!(ctx.args().is_empty());
        assert_eq!(ctx.effective_message_id(), Some(10));
    }

    /// **Test: a callback query carries its id plus the message it was attached to.**
    #[test]
    fn test_from_update_callback_query() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({
                "update_id": 2,
                "callback_query": {
                    "id": "cbq-1",
                    "from": user_json(7, "Bob"),
                    "chat_instance": "ci",
                    "data": "vote:up",
                    "message": message_json("pick one")
                }
            }),
        );

        assert_eq!(ctx.callback_query_id(), Some("cbq-1"));
        assert_eq!(ctx.effective_user_id(), Some(UserId(7)));
        assert_eq!(ctx.effective_chat_id(), Some(ChatId(42)));
        assert_eq!(ctx.effective_message_id(), Some(10));
        assert!(ctx.inline_message_id().is_none());
    }

    /// **Test: a callback on an inline message has no chat; edits target the inline message.**
    #[tokio::test]
    async fn test_from_update_callback_on_inline_message() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({
                "update_id": 3,
                "callback_query": {
                    "id": "cbq-2",
                    "from": user_json(7, "Bob"),
                    "chat_instance": "ci",
                    "inline_message_id": "inl-7",
                    "data": "more"
                }
            }),
        );

        assert_eq!(ctx.callback_query_id(), Some("cbq-2"));
        assert_eq!(ctx.inline_message_id(), Some("inl-7"));
        assert_eq!(ctx.effective_user_id(), Some(UserId(7)));
        assert!(ctx.effective_chat_id().is_none());
        assert!(ctx.effective_message_id().is_none());

        let edited = ctx.edit_message_text("updated").send().await.unwrap();

        assert!(matches!(edited, Edited::Inline(true)));
        assert_eq!(
            bot.calls(),
            vec![(
                "editMessageText".to_string(),
                json!({"inline_message_id": "inl-7", "text": "updated"})
            )]
        );
    }

    /// **Test: an inline query keeps its text apart from the message text and args.**
    #[tokio::test]
    async fn test_from_update_inline_query() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({
                "update_id": 4,
                "inline_query": {
                    "id": "iq-1",
                    "from": user_json(7, "Bob"),
                    "query": "cats dogs",
                    "offset": ""
                }
            }),
        );

        assert_eq!(ctx.inline_query_id(), Some("iq-1"));
        assert_eq!(ctx.inline_query(), Some("cats dogs"));
        assert_eq!(ctx.effective_user_id(), Some(UserId(7)));
        assert!(ctx.text().is_none());
        assert!(ctx.args().is_empty());

        ctx.answer_inline_query().cache_time(0).send().await.unwrap();

        let calls = bot.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "answerInlineQuery");
        assert_eq!(calls[0].1["inline_query_id"], "iq-1");
    }

    /// **Test: a shipping query supplies the id answerShippingQuery needs.**
    #[tokio::test]
    async fn test_from_update_shipping_query() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({
                "update_id": 5,
                "shipping_query": {
                    "id": "sq-1",
                    "from": user_json(7, "Bob"),
                    "invoice_payload": "order-1",
                    "shipping_address": {
                        "country_code": "US",
                        "state": "CA",
                        "city": "San Francisco",
                        "street_line1": "1 Market St",
                        "street_line2": "",
                        "post_code": "94105"
                    }
                }
            }),
        );

        assert_eq!(ctx.shipping_query_id(), Some("sq-1"));
        assert_eq!(ctx.effective_user_id(), Some(UserId(7)));
        assert!(ctx.pre_checkout_query_id().is_none());

        ctx.answer_shipping_query(false)
            .error_message("No delivery to this address")
            .send()
            .await
            .unwrap();

        assert_eq!(
            bot.calls(),
            vec![(
                "answerShippingQuery".to_string(),
                json!({
                    "shipping_query_id": "sq-1",
                    "ok": false,
                    "error_message": "No delivery to this address"
                })
            )]
        );
    }

    /// **Test: a pre-checkout query supplies the id answerPreCheckoutQuery needs.**
    #[tokio::test]
    async fn test_from_update_pre_checkout_query() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({
                "update_id": 6,
                "pre_checkout_query": {
                    "id": "pcq-1",
                    "from": user_json(7, "Bob"),
                    "currency": "USD",
                    "total_amount": 500,
                    "invoice_payload": "order-1"
                }
            }),
        );

        assert_eq!(ctx.pre_checkout_query_id(), Some("pcq-1"));
        assert_eq!(ctx.effective_user_id(), Some(UserId(7)));

        ctx.answer_pre_checkout_query(true).send().await.unwrap();

        assert_eq!(
            bot.calls(),
            vec![(
                "answerPreCheckoutQuery".to_string(),
                json!({"pre_checkout_query_id": "pcq-1", "ok": true})
            )]
        );
    }

    /// **Test: a chat join request gives chat and user but no query ids.**
    #[tokio::test]
    async fn test_from_update_chat_join_request_has_no_query() {
        let bot = Arc::new(RecordingBot::default());
        let ctx = context_for(
            &bot,
            json!({
                "update_id": 7,
                "chat_join_request": {
                    "chat": {"id": -1001234567890i64, "type": "supergroup", "title": "Releases"},
                    "from": user_json(7, "Bob"),
                    "user_chat_id": 7,
                    "date": 1700000000
                }
            }),
        );

        assert_eq!(ctx.effective_chat_id(), Some(ChatId(-1001234567890)));
        assert_eq!(ctx.effective_user_id(), Some(UserId(7)));
        assert!(ctx.effective_message_id().is_none());

        let err = ctx.answer_pre_checkout_query(true).send().await.unwrap_err();

        assert!(err.is_precondition());
        assert!(err.to_string().contains("no precheckout query"));
        assert!(bot.calls().is_empty());
    }
}
