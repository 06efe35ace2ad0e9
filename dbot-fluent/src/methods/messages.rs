//! Sending, forwarding and copying messages.

use serde::Serialize;
use teloxide::types::{
    ChatAction, LinkPreviewOptions, Message, MessageEntity, MessageId, ParseMode, PollType,
    ReactionType, Recipient, ReplyMarkup, ReplyParameters,
};

use crate::context::Context;
use crate::request::Request;
use crate::types::InputPollOption;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendMessage {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub link_preview_options: Option<LinkPreviewOptions>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendMessage, "sendMessage" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendMessage> {
    setters! {
        /// Target chat; defaults to the effective chat.
        chat_id: Recipient,
        parse_mode: ParseMode,
        entities: Vec<MessageEntity>,
        link_preview_options: LinkPreviewOptions,
    }
    send_setters!();

    /// Replaces the text given to the factory.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.payload.text = text.into();
        self
    }

    pub fn html(self) -> Self {
        self.parse_mode(ParseMode::Html)
    }

    pub fn markdown(self) -> Self {
        self.parse_mode(ParseMode::MarkdownV2)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForwardMessage {
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: Recipient,
    pub video_start_timestamp: Option<u32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_id: i32,
}
impl_method!(ForwardMessage, "forwardMessage" => Message; chat_id: fill_chat);

impl<'a> Request<'a, ForwardMessage> {
    setters! {
        /// Destination chat; defaults to the effective chat.
        chat_id: Recipient,
        message_thread_id: i32,
        video_start_timestamp: u32,
        disable_notification: bool,
        protect_content: bool,
    }
}

/// Forwards several messages at once; album grouping is kept.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForwardMessages {
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: Option<Recipient>,
    pub message_ids: Vec<i32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
}
impl_method!(ForwardMessages, "forwardMessages" => Vec<MessageId>; chat_id: fill_chat, from_chat_id: fill_chat);

impl<'a> Request<'a, ForwardMessages> {
    setters! {
        message_thread_id: i32,
        disable_notification: bool,
        protect_content: bool,
    }

    /// Source chat; defaults to the effective chat.
    pub fn from(mut self, chat_id: impl Into<Recipient>) -> Self {
        self.payload.from_chat_id = Some(chat_id.into());
        self
    }

    /// Destination chat; defaults to the effective chat.
    pub fn to(mut self, chat_id: impl Into<Recipient>) -> Self {
        self.payload.chat_id = Some(chat_id.into());
        self
    }

    /// Appends message ids; order is preserved and duplicates are kept.
    pub fn add_messages(mut self, message_ids: impl IntoIterator<Item = i32>) -> Self {
        self.payload.message_ids.extend(message_ids);
        self
    }

    pub fn add_message(mut self, message_id: i32) -> Self {
        self.payload.message_ids.push(message_id);
        self
    }
}

/// Copies a message without the "forwarded from" header.
#[derive(Debug, Clone, Serialize)]
pub struct CopyMessage {
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: Recipient,
    pub message_id: i32,
    pub video_start_timestamp: Option<u32>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(CopyMessage, "copyMessage" => MessageId; chat_id: fill_chat);

impl<'a> Request<'a, CopyMessage> {
    setters! {
        chat_id: Recipient,
        message_thread_id: i32,
        video_start_timestamp: u32,
        /// New caption; keeps the original when unset.
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        show_caption_above_media: bool,
        disable_notification: bool,
        protect_content: bool,
        allow_paid_broadcast: bool,
        reply_parameters: ReplyParameters,
        reply_markup: ReplyMarkup,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CopyMessages {
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub from_chat_id: Option<Recipient>,
    pub message_ids: Vec<i32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub remove_caption: Option<bool>,
}
impl_method!(CopyMessages, "copyMessages" => Vec<MessageId>; chat_id: fill_chat, from_chat_id: fill_chat);

impl<'a> Request<'a, CopyMessages> {
    setters! {
        message_thread_id: i32,
        disable_notification: bool,
        protect_content: bool,
        remove_caption: bool,
    }

    pub fn from(mut self, chat_id: impl Into<Recipient>) -> Self {
        self.payload.from_chat_id = Some(chat_id.into());
        self
    }

    pub fn to(mut self, chat_id: impl Into<Recipient>) -> Self {
        self.payload.chat_id = Some(chat_id.into());
        self
    }

    pub fn add_messages(mut self, message_ids: impl IntoIterator<Item = i32>) -> Self {
        self.payload.message_ids.extend(message_ids);
        self
    }

    pub fn add_message(mut self, message_id: i32) -> Self {
        self.payload.message_ids.push(message_id);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendLocation {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: Option<f64>,
    /// Seconds the live location stays updatable (60..=86400, or 0x7FFFFFFF for indefinitely).
    pub live_period: Option<u32>,
    pub heading: Option<u16>,
    pub proximity_alert_radius: Option<u32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendLocation, "sendLocation" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendLocation> {
    setters! {
        chat_id: Recipient,
        horizontal_accuracy: f64,
        live_period: u32,
        heading: u16,
        proximity_alert_radius: u32,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendVenue {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendVenue, "sendVenue" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendVenue> {
    setters! {
        chat_id: Recipient,
        foursquare_id: String,
        foursquare_type: String,
        google_place_id: String,
        google_place_type: String,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendContact {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub vcard: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendContact, "sendContact" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendContact> {
    setters! {
        chat_id: Recipient,
        last_name: String,
        vcard: String,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendPoll {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub question: String,
    pub question_parse_mode: Option<ParseMode>,
    pub question_entities: Option<Vec<MessageEntity>>,
    pub options: Vec<InputPollOption>,
    pub is_anonymous: Option<bool>,
    #[serde(rename = "type")]
    pub poll_type: Option<PollType>,
    pub allows_multiple_answers: Option<bool>,
    pub correct_option_id: Option<u8>,
    pub explanation: Option<String>,
    pub explanation_parse_mode: Option<ParseMode>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<u16>,
    pub close_date: Option<i64>,
    pub is_closed: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendPoll, "sendPoll" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendPoll> {
    setters! {
        chat_id: Recipient,
        question_parse_mode: ParseMode,
        question_entities: Vec<MessageEntity>,
        is_anonymous: bool,
        poll_type: PollType,
        allows_multiple_answers: bool,
        /// Zero-based index of the right answer (quiz polls).
        correct_option_id: u8,
        explanation: String,
        explanation_parse_mode: ParseMode,
        explanation_entities: Vec<MessageEntity>,
        open_period: u16,
        /// Unix time the poll closes at.
        close_date: i64,
        is_closed: bool,
    }
    send_setters!();

    /// Appends a plain-text answer option.
    pub fn add_option(mut self, text: impl Into<String>) -> Self {
        self.payload.options.push(InputPollOption {
            text: text.into(),
            text_parse_mode: None,
            text_entities: None,
        });
        self
    }

    /// Starts a formatted answer option; `.done()` appends it and returns this request.
    pub fn option(self, text: impl Into<String>) -> PollOptionBuilder<'a> {
        PollOptionBuilder {
            parent: self,
            option: InputPollOption {
                text: text.into(),
                text_parse_mode: None,
                text_entities: None,
            },
        }
    }
}

/// One answer option of a poll under construction.
#[must_use = "call `.done()` to attach the option to the poll"]
pub struct PollOptionBuilder<'a> {
    parent: Request<'a, SendPoll>,
    option: InputPollOption,
}

impl<'a> PollOptionBuilder<'a> {
    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.option.text_parse_mode = Some(parse_mode);
        self
    }

    pub fn html(self) -> Self {
        self.parse_mode(ParseMode::Html)
    }

    pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.option.text_entities = Some(entities);
        self
    }

    pub fn done(mut self) -> Request<'a, SendPoll> {
        self.parent.payload.options.push(self.option);
        self.parent
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendDice {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    /// 🎲 by default; also 🎯 🏀 ⚽ 🎳 🎰.
    pub emoji: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendDice, "sendDice" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendDice> {
    setters! {
        chat_id: Recipient,
        emoji: String,
    }
    send_setters!();
}

#[derive(Debug, Clone, Serialize)]
pub struct SendChatAction {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub action: ChatAction,
}
impl_method!(SendChatAction, "sendChatAction" => bool; chat_id: fill_chat);

impl<'a> Request<'a, SendChatAction> {
    setters! {
        business_connection_id: String,
        chat_id: Recipient,
        message_thread_id: i32,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMessageReaction {
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub reaction: Option<Vec<ReactionType>>,
    pub is_big: Option<bool>,
}
impl_method!(SetMessageReaction, "setMessageReaction" => bool; chat_id: fill_chat, message_id: fill_message);

impl<'a> Request<'a, SetMessageReaction> {
    setters! {
        chat_id: Recipient,
        message_id: i32,
        is_big: bool,
    }

    /// Appends a reaction; an empty list (no call) removes the bot's reactions.
    pub fn add_reaction(mut self, reaction: ReactionType) -> Self {
        self.payload
            .reaction
            .get_or_insert_with(Vec::new)
            .push(reaction);
        self
    }

    /// Shorthand for an emoji reaction.
    pub fn emoji(self, emoji: impl Into<String>) -> Self {
        self.add_reaction(ReactionType::Emoji {
            emoji: emoji.into(),
        })
    }
}

impl Context {
    pub fn send_message(&self, text: impl Into<String>) -> Request<'_, SendMessage> {
        Request::new(
            self,
            SendMessage {
                text: text.into(),
                ..Default::default()
            },
        )
    }

    pub fn forward_message(
        &self,
        from_chat_id: impl Into<Recipient>,
        message_id: i32,
    ) -> Request<'_, ForwardMessage> {
        Request::new(
            self,
            ForwardMessage {
                chat_id: None,
                message_thread_id: None,
                from_chat_id: from_chat_id.into(),
                video_start_timestamp: None,
                disable_notification: None,
                protect_content: None,
                message_id,
            },
        )
    }

    pub fn forward_messages(&self) -> Request<'_, ForwardMessages> {
        Request::new(self, ForwardMessages::default())
    }

    pub fn copy_message(
        &self,
        from_chat_id: impl Into<Recipient>,
        message_id: i32,
    ) -> Request<'_, CopyMessage> {
        Request::new(
            self,
            CopyMessage {
                chat_id: None,
                message_thread_id: None,
                from_chat_id: from_chat_id.into(),
                message_id,
                video_start_timestamp: None,
                caption: None,
                parse_mode: None,
                caption_entities: None,
                show_caption_above_media: None,
                disable_notification: None,
                protect_content: None,
                allow_paid_broadcast: None,
                reply_parameters: None,
                reply_markup: None,
            },
        )
    }

    pub fn copy_messages(&self) -> Request<'_, CopyMessages> {
        Request::new(self, CopyMessages::default())
    }

    pub fn send_location(&self, latitude: f64, longitude: f64) -> Request<'_, SendLocation> {
        Request::new(
            self,
            SendLocation {
                latitude,
                longitude,
                ..Default::default()
            },
        )
    }

    pub fn send_venue(
        &self,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Request<'_, SendVenue> {
        Request::new(
            self,
            SendVenue {
                latitude,
                longitude,
                title: title.into(),
                address: address.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_contact(
        &self,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Request<'_, SendContact> {
        Request::new(
            self,
            SendContact {
                phone_number: phone_number.into(),
                first_name: first_name.into(),
                ..Default::default()
            },
        )
    }

    /// Options are added with `add_option` / `option(..).done()`.
    pub fn send_poll(&self, question: impl Into<String>) -> Request<'_, SendPoll> {
        Request::new(
            self,
            SendPoll {
                question: question.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_dice(&self) -> Request<'_, SendDice> {
        Request::new(self, SendDice::default())
    }

    pub fn send_chat_action(&self, action: ChatAction) -> Request<'_, SendChatAction> {
        Request::new(
            self,
            SendChatAction {
                business_connection_id: None,
                chat_id: None,
                message_thread_id: None,
                action,
            },
        )
    }

    /// Reacts to the effective message unless `message_id` is set.
    pub fn set_message_reaction(&self) -> Request<'_, SetMessageReaction> {
        Request::new(self, SetMessageReaction::default())
    }
}
