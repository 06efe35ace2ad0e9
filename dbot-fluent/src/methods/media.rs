//! Media messages. Files are referenced by `file_id` or HTTP URL; uploads are out of scope.

use serde::Serialize;
use teloxide::types::{Message, MessageEntity, ParseMode, Recipient, ReplyMarkup, ReplyParameters};

use crate::context::Context;
use crate::request::Request;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendPhoto {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub photo: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendPhoto, "sendPhoto" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendPhoto> {
    setters! {
        chat_id: Recipient,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        show_caption_above_media: bool,
        /// Blur the photo until tapped.
        has_spoiler: bool,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendAudio {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub audio: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<u32>,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendAudio, "sendAudio" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendAudio> {
    setters! {
        chat_id: Recipient,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        duration: u32,
        performer: String,
        title: String,
        thumbnail: String,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendDocument {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub document: String,
    pub thumbnail: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub disable_content_type_detection: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendDocument, "sendDocument" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendDocument> {
    setters! {
        chat_id: Recipient,
        thumbnail: String,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        disable_content_type_detection: bool,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendVideo {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub video: String,
    pub duration: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub thumbnail: Option<String>,
    pub cover: Option<String>,
    pub start_timestamp: Option<u32>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
    pub supports_streaming: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendVideo, "sendVideo" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendVideo> {
    setters! {
        chat_id: Recipient,
        duration: u32,
        width: u32,
        height: u32,
        thumbnail: String,
        cover: String,
        /// Playback start offset in seconds.
        start_timestamp: u32,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        show_caption_above_media: bool,
        has_spoiler: bool,
        supports_streaming: bool,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendAnimation {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub animation: String,
    pub duration: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub thumbnail: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub show_caption_above_media: Option<bool>,
    pub has_spoiler: Option<bool>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendAnimation, "sendAnimation" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendAnimation> {
    setters! {
        chat_id: Recipient,
        duration: u32,
        width: u32,
        height: u32,
        thumbnail: String,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        show_caption_above_media: bool,
        has_spoiler: bool,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendVoice {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub voice: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<u32>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendVoice, "sendVoice" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendVoice> {
    setters! {
        chat_id: Recipient,
        caption: String,
        parse_mode: ParseMode,
        caption_entities: Vec<MessageEntity>,
        duration: u32,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendVideoNote {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub video_note: String,
    pub duration: Option<u32>,
    /// Diameter of the round video.
    pub length: Option<u32>,
    pub thumbnail: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendVideoNote, "sendVideoNote" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendVideoNote> {
    setters! {
        chat_id: Recipient,
        duration: u32,
        length: u32,
        thumbnail: String,
    }
    send_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SendSticker {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_thread_id: Option<i32>,
    pub sticker: String,
    pub emoji: Option<String>,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub allow_paid_broadcast: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<ReplyMarkup>,
}
impl_method!(SendSticker, "sendSticker" => Message; chat_id: fill_chat);

impl<'a> Request<'a, SendSticker> {
    setters! {
        chat_id: Recipient,
        /// Only for freshly uploaded stickers.
        emoji: String,
    }
    send_setters!();
}

impl Context {
    pub fn send_photo(&self, photo: impl Into<String>) -> Request<'_, SendPhoto> {
        Request::new(
            self,
            SendPhoto {
                photo: photo.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_audio(&self, audio: impl Into<String>) -> Request<'_, SendAudio> {
        Request::new(
            self,
            SendAudio {
                audio: audio.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_document(&self, document: impl Into<String>) -> Request<'_, SendDocument> {
        Request::new(
            self,
            SendDocument {
                document: document.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_video(&self, video: impl Into<String>) -> Request<'_, SendVideo> {
        Request::new(
            self,
            SendVideo {
                video: video.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_animation(&self, animation: impl Into<String>) -> Request<'_, SendAnimation> {
        Request::new(
            self,
            SendAnimation {
                animation: animation.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_voice(&self, voice: impl Into<String>) -> Request<'_, SendVoice> {
        Request::new(
            self,
            SendVoice {
                voice: voice.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_video_note(&self, video_note: impl Into<String>) -> Request<'_, SendVideoNote> {
        Request::new(
            self,
            SendVideoNote {
                video_note: video_note.into(),
                ..Default::default()
            },
        )
    }

    pub fn send_sticker(&self, sticker: impl Into<String>) -> Request<'_, SendSticker> {
        Request::new(
            self,
            SendSticker {
                sticker: sticker.into(),
                ..Default::default()
            },
        )
    }
}
