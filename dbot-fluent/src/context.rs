//! Per-update context: the bot handle plus the chat, user, message and query the update was about.
//! Builders created from a [`Context`] fall back to these ambient values when a field is left unset.

use std::sync::Arc;

use dbot_core::{BotApi, DbotError, RequestOptions, Result};
use teloxide::types::{ChatId, Recipient, Update, UserId};

/// Ambient state of one inbound update. Build it once (usually via
/// [`Context::from_update`] / [`Context::from_message`]), then hand out `&Context` to any
/// number of builders.
#[derive(Clone)]
pub struct Context {
    pub(crate) bot: Arc<dyn BotApi>,
    pub(crate) chat_id: Option<ChatId>,
    pub(crate) user_id: Option<UserId>,
    pub(crate) message_id: Option<i32>,
    pub(crate) text: Option<String>,
    pub(crate) inline_message_id: Option<String>,
    pub(crate) callback_query_id: Option<String>,
    pub(crate) inline_query_id: Option<String>,
    pub(crate) inline_query: Option<String>,
    pub(crate) shipping_query_id: Option<String>,
    pub(crate) pre_checkout_query_id: Option<String>,
    pub(crate) default_options: Option<RequestOptions>,
    pub(crate) update: Option<Update>,
}

impl Context {
    /// A context with no ambient state: every chat/user/message must be given explicitly.
    pub fn new(bot: Arc<dyn BotApi>) -> Self {
        Self {
            bot,
            chat_id: None,
            user_id: None,
            message_id: None,
            text: None,
            inline_message_id: None,
            callback_query_id: None,
            inline_query_id: None,
            inline_query: None,
            shipping_query_id: None,
            pre_checkout_query_id: None,
            default_options: None,
            update: None,
        }
    }

    pub fn with_chat(mut self, chat_id: ChatId) -> Self {
        self.chat_id = Some(chat_id);
        self
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_message(mut self, message_id: i32) -> Self {
        self.message_id = Some(message_id);
        self
    }

    /// Text (or caption) of the effective message; source of [`Context::args`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_inline_message(mut self, inline_message_id: impl Into<String>) -> Self {
        self.inline_message_id = Some(inline_message_id.into());
        self
    }

    pub fn with_callback_query(mut self, id: impl Into<String>) -> Self {
        self.callback_query_id = Some(id.into());
        self
    }

    pub fn with_inline_query(mut self, id: impl Into<String>) -> Self {
        self.inline_query_id = Some(id.into());
        self
    }

    /// What the user typed after the bot's username; kept apart from the message text.
    pub fn with_inline_query_text(mut self, query: impl Into<String>) -> Self {
        self.inline_query = Some(query.into());
        self
    }

    pub fn with_shipping_query(mut self, id: impl Into<String>) -> Self {
        self.shipping_query_id = Some(id.into());
        self
    }

    pub fn with_pre_checkout_query(mut self, id: impl Into<String>) -> Self {
        self.pre_checkout_query_id = Some(id.into());
        self
    }

    /// Options every builder starts from (e.g. a configured default timeout).
    pub fn with_default_options(mut self, options: RequestOptions) -> Self {
        self.default_options = if options.is_empty() {
            None
        } else {
            Some(options)
        };
        self
    }

    pub fn bot(&self) -> &Arc<dyn BotApi> {
        &self.bot
    }

    pub fn effective_chat_id(&self) -> Option<ChatId> {
        self.chat_id
    }

    pub fn effective_user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn effective_message_id(&self) -> Option<i32> {
        self.message_id
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn inline_message_id(&self) -> Option<&str> {
        self.inline_message_id.as_deref()
    }

    pub fn callback_query_id(&self) -> Option<&str> {
        self.callback_query_id.as_deref()
    }

    pub fn inline_query_id(&self) -> Option<&str> {
        self.inline_query_id.as_deref()
    }

    /// Text of the inline query. Never feeds [`Context::text`] or [`Context::args`].
    pub fn inline_query(&self) -> Option<&str> {
        self.inline_query.as_deref()
    }

    pub fn shipping_query_id(&self) -> Option<&str> {
        self.shipping_query_id.as_deref()
    }

    pub fn pre_checkout_query_id(&self) -> Option<&str> {
        self.pre_checkout_query_id.as_deref()
    }

    pub fn default_options(&self) -> Option<&RequestOptions> {
        self.default_options.as_ref()
    }

    /// The raw update this context was built from, if any.
    pub fn update(&self) -> Option<&Update> {
        self.update.as_ref()
    }

    /// Command arguments: the whitespace-separated words after the first word of the
    /// effective message text. `"/start a b"` gives `["a", "b"]`; `"/start"` or no text gives `[]`.
    pub fn args(&self) -> Vec<String> {
        self.text
            .as_deref()
            .map(|text| text.split_whitespace().skip(1).map(str::to_owned).collect())
            .unwrap_or_default()
    }

    pub(crate) fn fill_chat(&self, slot: &mut Option<Recipient>) -> Result<()> {
        if slot.is_none() {
            let chat_id = self
                .chat_id
                .ok_or_else(|| DbotError::precondition("no effective chat"))?;
            *slot = Some(Recipient::Id(chat_id));
        }
        Ok(())
    }

    pub(crate) fn fill_user(&self, slot: &mut Option<UserId>) -> Result<()> {
        if slot.is_none() {
            *slot = Some(
                self.user_id
                    .ok_or_else(|| DbotError::precondition("no effective user"))?,
            );
        }
        Ok(())
    }

    pub(crate) fn fill_message(&self, slot: &mut Option<i32>) -> Result<()> {
        if slot.is_none() {
            *slot = Some(
                self.message_id
                    .ok_or_else(|| DbotError::precondition("no effective message"))?,
            );
        }
        Ok(())
    }

    pub(crate) fn fill_callback_query(&self, slot: &mut Option<String>) -> Result<()> {
        fill_id(slot, &self.callback_query_id, "no callback query")
    }

    pub(crate) fn fill_inline_query(&self, slot: &mut Option<String>) -> Result<()> {
        fill_id(slot, &self.inline_query_id, "no inline query")
    }

    pub(crate) fn fill_shipping_query(&self, slot: &mut Option<String>) -> Result<()> {
        fill_id(slot, &self.shipping_query_id, "no shipping query")
    }

    pub(crate) fn fill_pre_checkout_query(&self, slot: &mut Option<String>) -> Result<()> {
        fill_id(slot, &self.pre_checkout_query_id, "no precheckout query")
    }

    /// Target of edit-style methods: an explicit or ambient inline message, otherwise
    /// chat + message (each defaulted independently).
    pub(crate) fn fill_edit_target(
        &self,
        chat_id: &mut Option<Recipient>,
        message_id: &mut Option<i32>,
        inline_message_id: &mut Option<String>,
    ) -> Result<()> {
        if inline_message_id.is_some() {
            return Ok(());
        }
        let explicit_target = chat_id.is_some() || message_id.is_some();
        if !explicit_target && self.message_id.is_none() {
            if let Some(id) = &self.inline_message_id {
                *inline_message_id = Some(id.clone());
                return Ok(());
            }
        }
        self.fill_chat(chat_id)?;
        self.fill_message(message_id)
    }
}

fn fill_id(slot: &mut Option<String>, ambient: &Option<String>, missing: &str) -> Result<()> {
    if slot.is_none() {
        *slot = Some(
            ambient
                .clone()
                .ok_or_else(|| DbotError::precondition(missing))?,
        );
    }
    Ok(())
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("chat_id", &self.chat_id)
            .field("user_id", &self.user_id)
            .field("message_id", &self.message_id)
            .field("callback_query_id", &self.callback_query_id)
            .field("inline_query_id", &self.inline_query_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::Value;

    struct NullBot;

    #[async_trait]
    impl BotApi for NullBot {
        async fn call(
            &self,
            _method: &str,
            _params: Value,
            _options: Option<&RequestOptions>,
        ) -> Result<Value> {
            Ok(Value::Bool(true))
        }
    }

    fn ctx() -> Context {
        Context::new(Arc::new(NullBot))
    }

    #[test]
    fn test_args_splits_after_command() {
        let ctx = ctx().with_text("/start arg1 arg2 arg3");
        assert_eq!(ctx.args(), vec!["arg1", "arg2", "arg3"]);
    }

    #[test]
    fn test_args_empty_without_arguments() {
        assert!(ctx().with_text("/start").args().is_empty());
        assert!(ctx().args().is_empty());
    }

    #[test]
    fn test_args_collapses_repeated_whitespace() {
        let ctx = ctx().with_text("/ban   42 \n spam");
        assert_eq!(ctx.args(), vec!["42", "spam"]);
    }

    #[test]
    fn test_inline_query_text_does_not_become_args() {
        let ctx = ctx().with_inline_query("q-1").with_inline_query_text("cats dogs");
        assert_eq!(ctx.inline_query(), Some("cats dogs"));
        assert!(ctx.text().is_none());
        assert!(ctx.args().is_empty());
    }

    #[test]
    fn test_fill_chat_keeps_explicit_zero() {
        let ctx = ctx().with_chat(ChatId(77));
        let mut slot = Some(Recipient::Id(ChatId(0)));
        ctx.fill_chat(&mut slot).unwrap();
        assert_eq!(slot, Some(Recipient::Id(ChatId(0))));
    }

    #[test]
    fn test_fill_chat_uses_ambient() {
        let ctx = ctx().with_chat(ChatId(77));
        let mut slot = None;
        ctx.fill_chat(&mut slot).unwrap();
        assert_eq!(slot, Some(Recipient::Id(ChatId(77))));
    }

    #[test]
    fn test_fill_without_ambient_is_precondition_error() {
        let mut slot = None;
        let err = ctx().fill_pre_checkout_query(&mut slot).unwrap_err();
        assert!(err.is_precondition());
        assert!(err.to_string().contains("no precheckout query"));

        let mut user = None;
        let err = ctx().fill_user(&mut user).unwrap_err();
        assert!(err.to_string().contains("no effective user"));
    }

    #[test]
    fn test_edit_target_prefers_ambient_inline_message_without_message() {
        let ctx = ctx().with_inline_message("inl-1");
        let (mut chat, mut msg, mut inline) = (None, None, None);
        ctx.fill_edit_target(&mut chat, &mut msg, &mut inline).unwrap();
        assert_eq!(inline.as_deref(), Some("inl-1"));
        assert!(chat.is_none() && msg.is_none());
    }

    #[test]
    fn test_edit_target_uses_chat_and_message() {
        let ctx = ctx().with_chat(ChatId(5)).with_message(9);
        let (mut chat, mut msg, mut inline) = (None, None, None);
        ctx.fill_edit_target(&mut chat, &mut msg, &mut inline).unwrap();
        assert_eq!(chat, Some(Recipient::Id(ChatId(5))));
        assert_eq!(msg, Some(9));
        assert!(inline.is_none());
    }

    #[test]
    fn test_default_options_ignore_empty_bag() {
        let ctx = ctx().with_default_options(RequestOptions::default());
        assert!(ctx.default_options().is_none());
    }
}
