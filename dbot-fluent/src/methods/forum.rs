//! Forum topics in supergroups, including the "General" topic.

use serde::Serialize;
use teloxide::types::{ForumTopic, Recipient, Sticker};

use crate::context::Context;
use crate::request::Request;

/// Payload with the chat plus one topic (`message_thread_id`), answered with `true`.
macro_rules! topic_method {
    ($(#[$attr:meta])* $ty:ident, $name:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Serialize)]
        pub struct $ty {
            pub chat_id: Option<Recipient>,
            pub message_thread_id: i32,
        }
        impl_method!($ty, $name => bool; chat_id: fill_chat);

        impl<'a> Request<'a, $ty> {
            setters! {
                chat_id: Recipient,
            }
        }
    };
}

/// Payload with the chat only, acting on the General topic.
macro_rules! general_topic_method {
    ($(#[$attr:meta])* $ty:ident, $name:literal) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, Serialize)]
        pub struct $ty {
            pub chat_id: Option<Recipient>,
        }
        impl_method!($ty, $name => bool; chat_id: fill_chat);

        impl<'a> Request<'a, $ty> {
            setters! {
                chat_id: Recipient,
            }
        }
    };
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateForumTopic {
    pub chat_id: Option<Recipient>,
    pub name: String,
    /// RGB; Telegram accepts only its six preset colors.
    pub icon_color: Option<u32>,
    pub icon_custom_emoji_id: Option<String>,
}
impl_method!(CreateForumTopic, "createForumTopic" => ForumTopic; chat_id: fill_chat);

impl<'a> Request<'a, CreateForumTopic> {
    setters! {
        chat_id: Recipient,
        icon_color: u32,
        /// Sent alongside `icon_color` when both are set; Telegram decides which applies.
        icon_custom_emoji_id: String,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditForumTopic {
    pub chat_id: Option<Recipient>,
    pub message_thread_id: i32,
    pub name: Option<String>,
    /// Empty string removes the icon.
    pub icon_custom_emoji_id: Option<String>,
}
impl_method!(EditForumTopic, "editForumTopic" => bool; chat_id: fill_chat);

impl<'a> Request<'a, EditForumTopic> {
    setters! {
        chat_id: Recipient,
        name: String,
        icon_custom_emoji_id: String,
    }
}

topic_method!(CloseForumTopic, "closeForumTopic");
topic_method!(ReopenForumTopic, "reopenForumTopic");
topic_method!(
    /// Deletes the topic together with all its messages.
    DeleteForumTopic,
    "deleteForumTopic"
);
topic_method!(UnpinAllForumTopicMessages, "unpinAllForumTopicMessages");

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditGeneralForumTopic {
    pub chat_id: Option<Recipient>,
    pub name: String,
}
impl_method!(EditGeneralForumTopic, "editGeneralForumTopic" => bool; chat_id: fill_chat);

impl<'a> Request<'a, EditGeneralForumTopic> {
    setters! {
        chat_id: Recipient,
    }
}

general_topic_method!(CloseGeneralForumTopic, "closeGeneralForumTopic");
general_topic_method!(ReopenGeneralForumTopic, "reopenGeneralForumTopic");
general_topic_method!(
    /// Also closes the topic if it was open.
    HideGeneralForumTopic,
    "hideGeneralForumTopic"
);
general_topic_method!(UnhideGeneralForumTopic, "unhideGeneralForumTopic");
general_topic_method!(
    UnpinAllGeneralForumTopicMessages,
    "unpinAllGeneralForumTopicMessages"
);

/// Custom emoji stickers usable as topic icons.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetForumTopicIconStickers {}
impl_method!(GetForumTopicIconStickers, "getForumTopicIconStickers" => Vec<Sticker>);

impl Context {
    pub fn create_forum_topic(&self, name: impl Into<String>) -> Request<'_, CreateForumTopic> {
        Request::new(
            self,
            CreateForumTopic {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    pub fn edit_forum_topic(&self, message_thread_id: i32) -> Request<'_, EditForumTopic> {
        Request::new(
            self,
            EditForumTopic {
                message_thread_id,
                ..Default::default()
            },
        )
    }

    pub fn close_forum_topic(&self, message_thread_id: i32) -> Request<'_, CloseForumTopic> {
        Request::new(
            self,
            CloseForumTopic {
                chat_id: None,
                message_thread_id,
            },
        )
    }

    pub fn reopen_forum_topic(&self, message_thread_id: i32) -> Request<'_, ReopenForumTopic> {
        Request::new(
            self,
            ReopenForumTopic {
                chat_id: None,
                message_thread_id,
            },
        )
    }

    pub fn delete_forum_topic(&self, message_thread_id: i32) -> Request<'_, DeleteForumTopic> {
        Request::new(
            self,
            DeleteForumTopic {
                chat_id: None,
                message_thread_id,
            },
        )
    }

    pub fn unpin_all_forum_topic_messages(
        &self,
        message_thread_id: i32,
    ) -> Request<'_, UnpinAllForumTopicMessages> {
        Request::new(
            self,
            UnpinAllForumTopicMessages {
                chat_id: None,
                message_thread_id,
            },
        )
    }

    pub fn edit_general_forum_topic(
        &self,
        name: impl Into<String>,
    ) -> Request<'_, EditGeneralForumTopic> {
        Request::new(
            self,
            EditGeneralForumTopic {
                chat_id: None,
                name: name.into(),
            },
        )
    }

    pub fn close_general_forum_topic(&self) -> Request<'_, CloseGeneralForumTopic> {
        Request::new(self, CloseGeneralForumTopic::default())
    }

    pub fn reopen_general_forum_topic(&self) -> Request<'_, ReopenGeneralForumTopic> {
        Request::new(self, ReopenGeneralForumTopic::default())
    }

    pub fn hide_general_forum_topic(&self) -> Request<'_, HideGeneralForumTopic> {
        Request::new(self, HideGeneralForumTopic::default())
    }

    pub fn unhide_general_forum_topic(&self) -> Request<'_, UnhideGeneralForumTopic> {
        Request::new(self, UnhideGeneralForumTopic::default())
    }

    pub fn unpin_all_general_forum_topic_messages(
        &self,
    ) -> Request<'_, UnpinAllGeneralForumTopicMessages> {
        Request::new(self, UnpinAllGeneralForumTopicMessages::default())
    }

    pub fn get_forum_topic_icon_stickers(&self) -> Request<'_, GetForumTopicIconStickers> {
        Request::new(self, GetForumTopicIconStickers::default())
    }
}
