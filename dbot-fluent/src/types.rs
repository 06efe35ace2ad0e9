//! Request-side value objects assembled by sub-builders (checklist tasks, stickers, shipping
//! options, poll options). Everything else reuses `teloxide::types`.

use serde::{Deserialize, Serialize};
use teloxide::types::{MaskPosition, Message, MessageEntity, ParseMode, StickerFormat};

/// Result of an edit: the edited message, or `true` when an inline message was edited.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Edited {
    Message(Box<Message>),
    Inline(bool),
}

impl Edited {
    pub fn message(&self) -> Option<&Message> {
        match self {
            Edited::Message(message) => Some(message),
            Edited::Inline(_) => None,
        }
    }
}

/// One task of a checklist being sent or edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputChecklistTask {
    pub id: i32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputChecklist {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_entities: Option<Vec<MessageEntity>>,
    pub tasks: Vec<InputChecklistTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others_can_add_tasks: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others_can_mark_tasks_as_done: Option<bool>,
}

impl InputChecklist {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parse_mode: None,
            title_entities: None,
            tasks: Vec::new(),
            others_can_add_tasks: None,
            others_can_mark_tasks_as_done: None,
        }
    }
}

/// A sticker to add to a set. `sticker` is a file id or an HTTP URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSticker {
    pub sticker: String,
    pub format: StickerFormat,
    pub emoji_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_position: Option<MaskPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Price portion in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledPrice {
    pub label: String,
    pub amount: u32,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: u32) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputPollOption {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_entities: Option<Vec<MessageEntity>>,
}
