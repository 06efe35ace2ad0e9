//! Editing, stopping and deleting messages that were already sent.

use dbot_core::Result;
use serde::Serialize;
use teloxide::types::{
    InlineKeyboardMarkup, LinkPreviewOptions, MessageEntity, ParseMode, Poll, Recipient,
};

use crate::context::Context;
use crate::request::{Method, Request};
use crate::types::Edited;

/// Edit methods target an inline message or chat + message; see `Context::fill_edit_target`.
macro_rules! impl_edit_method {
    ($ty:ident, $name:literal) => {
        impl Method for $ty {
            const NAME: &'static str = $name;
            type Response = Edited;

            fn apply_defaults(&mut self, ctx: &Context) -> Result<()> {
                ctx.fill_edit_target(
                    &mut self.chat_id,
                    &mut self.message_id,
                    &mut self.inline_message_id,
                )
            }
        }
    };
}

macro_rules! edit_target_setters {
    () => {
        setters! {
            business_connection_id: String,
            /// Defaults to the effective chat.
            chat_id: Recipient,
            /// Defaults to the effective message.
            message_id: i32,
            /// Edit an inline message instead of a chat message.
            inline_message_id: String,
            reply_markup: InlineKeyboardMarkup,
        }
    };
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditMessageText {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_edit_method!(EditMessageText, "editMessageText");

impl<'a> Request<'a, EditMessageText> {
    edit_target_setters!();
    setters! {
        parse_mode: ParseMode,
        entities: Vec<MessageEntity>,
        link_preview_options: LinkPreviewOptions,
    }

    pub fn html(self) -> Self {
        self.parse_mode(ParseMode::Html)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditMessageCaption {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_edit_method!(EditMessageCaption, "editMessageCaption");

impl<'a> Request<'a, EditMessageCaption> {
    edit_target_setters!();
    setters! {
        /// Leaving the caption unset removes it.
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        show_caption_above_media: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditMessageReplyMarkup {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_edit_method!(EditMessageReplyMarkup, "editMessageReplyMarkup");

impl<'a> Request<'a, EditMessageReplyMarkup> {
    edit_target_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditMessageLiveLocation {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub live_period: Option<u32>,
    pub horizontal_accuracy: Option<f64>,
    pub heading: Option<u16>,
    pub proximity_alert_radius: Option<u32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_edit_method!(EditMessageLiveLocation, "editMessageLiveLocation");

impl<'a> Request<'a, EditMessageLiveLocation> {
    edit_target_setters!();
    setters! {
        live_period: u32,
        horizontal_accuracy: f64,
        heading: u16,
        proximity_alert_radius: u32,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StopMessageLiveLocation {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub inline_message_id: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_edit_method!(StopMessageLiveLocation, "stopMessageLiveLocation");

impl<'a> Request<'a, StopMessageLiveLocation> {
    edit_target_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StopPoll {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_method!(StopPoll, "stopPoll" => Poll; chat_id: fill_chat, message_id: fill_message);

impl<'a> Request<'a, StopPoll> {
    setters! {
        business_connection_id: String,
        chat_id: Recipient,
        message_id: i32,
        reply_markup: InlineKeyboardMarkup,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteMessage {
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
}
impl_method!(DeleteMessage, "deleteMessage" => bool; chat_id: fill_chat, message_id: fill_message);

impl<'a> Request<'a, DeleteMessage> {
    setters! {
        chat_id: Recipient,
        message_id: i32,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteMessages {
    pub chat_id: Option<Recipient>,
    pub message_ids: Vec<i32>,
}
impl_method!(DeleteMessages, "deleteMessages" => bool; chat_id: fill_chat);

impl<'a> Request<'a, DeleteMessages> {
    setters! {
        chat_id: Recipient,
    }

    /// Appends message ids (1..=100 per call on Telegram's side).
    pub fn add_messages(mut self, message_ids: impl IntoIterator<Item = i32>) -> Self {
        self.payload.message_ids.extend(message_ids);
        self
    }

    pub fn add_message(mut self, message_id: i32) -> Self {
        self.payload.message_ids.push(message_id);
        self
    }
}

impl Context {
    /// Edits the effective message (or the ambient inline message) unless a target is set.
    pub fn edit_message_text(&self, text: impl Into<String>) -> Request<'_, EditMessageText> {
        Request::new(
            self,
            EditMessageText {
                text: text.into(),
                ..Default::default()
            },
        )
    }

    pub fn edit_message_caption(&self) -> Request<'_, EditMessageCaption> {
        Request::new(self, EditMessageCaption::default())
    }

    pub fn edit_message_reply_markup(&self) -> Request<'_, EditMessageReplyMarkup> {
        Request::new(self, EditMessageReplyMarkup::default())
    }

    pub fn edit_message_live_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Request<'_, EditMessageLiveLocation> {
        Request::new(
            self,
            EditMessageLiveLocation {
                latitude,
                longitude,
                ..Default::default()
            },
        )
    }

    pub fn stop_message_live_location(&self) -> Request<'_, StopMessageLiveLocation> {
        Request::new(self, StopMessageLiveLocation::default())
    }

    pub fn stop_poll(&self) -> Request<'_, StopPoll> {
        Request::new(self, StopPoll::default())
    }

    /// Deletes the effective message unless `message_id` is set.
    pub fn delete_message(&self) -> Request<'_, DeleteMessage> {
        Request::new(self, DeleteMessage::default())
    }

    pub fn delete_messages(&self) -> Request<'_, DeleteMessages> {
        Request::new(self, DeleteMessages::default())
    }
}
