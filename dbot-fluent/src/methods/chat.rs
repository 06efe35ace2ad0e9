//! Chat information and chat-wide settings.

use serde::Serialize;
use teloxide::types::{ChatFullInfo, ChatMember, ChatPermissions, Recipient, UserId};

use crate::context::Context;
use crate::request::Request;

/// Full chat info: description, permissions, pinned message, invite link and the rest.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChat {
    pub chat_id: Option<Recipient>,
}
impl_method!(GetChat, "getChat" => ChatFullInfo; chat_id: fill_chat);

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChatAdministrators {
    pub chat_id: Option<Recipient>,
}
impl_method!(GetChatAdministrators, "getChatAdministrators" => Vec<ChatMember>; chat_id: fill_chat);

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChatMemberCount {
    pub chat_id: Option<Recipient>,
}
impl_method!(GetChatMemberCount, "getChatMemberCount" => u32; chat_id: fill_chat);

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetChatMember {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
}
impl_method!(GetChatMember, "getChatMember" => ChatMember; chat_id: fill_chat, user_id: fill_user);

#[derive(Debug, Clone, Default, Serialize)]
pub struct LeaveChat {
    pub chat_id: Option<Recipient>,
}
impl_method!(LeaveChat, "leaveChat" => bool; chat_id: fill_chat);

macro_rules! chat_only_setters {
    ($($ty:ident),+) => {
        $(
            impl<'a> Request<'a, $ty> {
                setters! {
                    /// Defaults to the effective chat.
                    chat_id: Recipient,
                }
            }
        )+
    };
}

chat_only_setters!(
    GetChat,
    GetChatAdministrators,
    GetChatMemberCount,
    LeaveChat,
    DeleteChatPhoto,
    UnpinAllChatMessages,
    DeleteChatStickerSet
);

impl<'a> Request<'a, GetChatMember> {
    setters! {
        chat_id: Recipient,
        /// Defaults to the effective user.
        user_id: UserId,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatTitle {
    pub chat_id: Option<Recipient>,
    pub title: String,
}
impl_method!(SetChatTitle, "setChatTitle" => bool; chat_id: fill_chat);

impl<'a> Request<'a, SetChatTitle> {
    setters! {
        chat_id: Recipient,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatDescription {
    pub chat_id: Option<Recipient>,
    pub description: Option<String>,
}
impl_method!(SetChatDescription, "setChatDescription" => bool; chat_id: fill_chat);

impl<'a> Request<'a, SetChatDescription> {
    setters! {
        chat_id: Recipient,
        /// Leaving it unset clears the description.
        description: String,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteChatPhoto {
    pub chat_id: Option<Recipient>,
}
impl_method!(DeleteChatPhoto, "deleteChatPhoto" => bool; chat_id: fill_chat);

#[derive(Debug, Clone, Serialize)]
pub struct SetChatPermissions {
    pub chat_id: Option<Recipient>,
    pub permissions: ChatPermissions,
    pub use_independent_chat_permissions: Option<bool>,
}
impl_method!(SetChatPermissions, "setChatPermissions" => bool; chat_id: fill_chat);

impl<'a> Request<'a, SetChatPermissions> {
    setters! {
        chat_id: Recipient,
        use_independent_chat_permissions: bool,
    }

    pub fn permissions(mut self, permissions: ChatPermissions) -> Self {
        self.payload.permissions = permissions;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PinChatMessage {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub disable_notification: Option<bool>,
}
impl_method!(PinChatMessage, "pinChatMessage" => bool; chat_id: fill_chat, message_id: fill_message);

impl<'a> Request<'a, PinChatMessage> {
    setters! {
        business_connection_id: String,
        chat_id: Recipient,
        /// Defaults to the effective message.
        message_id: i32,
        disable_notification: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UnpinChatMessage {
    pub business_connection_id: Option<String>,
    pub chat_id: Option<Recipient>,
    /// Unset unpins the most recent pinned message; never defaulted.
    pub message_id: Option<i32>,
}
impl_method!(UnpinChatMessage, "unpinChatMessage" => bool; chat_id: fill_chat);

impl<'a> Request<'a, UnpinChatMessage> {
    setters! {
        business_connection_id: String,
        chat_id: Recipient,
        message_id: i32,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UnpinAllChatMessages {
    pub chat_id: Option<Recipient>,
}
impl_method!(UnpinAllChatMessages, "unpinAllChatMessages" => bool; chat_id: fill_chat);

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatStickerSet {
    pub chat_id: Option<Recipient>,
    pub sticker_set_name: String,
}
impl_method!(SetChatStickerSet, "setChatStickerSet" => bool; chat_id: fill_chat);

impl<'a> Request<'a, SetChatStickerSet> {
    setters! {
        chat_id: Recipient,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteChatStickerSet {
    pub chat_id: Option<Recipient>,
}
impl_method!(DeleteChatStickerSet, "deleteChatStickerSet" => bool; chat_id: fill_chat);

impl Context {
    pub fn get_chat(&self) -> Request<'_, GetChat> {
        Request::new(self, GetChat::default())
    }

    pub fn get_chat_administrators(&self) -> Request<'_, GetChatAdministrators> {
        Request::new(self, GetChatAdministrators::default())
    }

    pub fn get_chat_member_count(&self) -> Request<'_, GetChatMemberCount> {
        Request::new(self, GetChatMemberCount::default())
    }

    pub fn get_chat_member(&self) -> Request<'_, GetChatMember> {
        Request::new(self, GetChatMember::default())
    }

    pub fn leave_chat(&self) -> Request<'_, LeaveChat> {
        Request::new(self, LeaveChat::default())
    }

    pub fn set_chat_title(&self, title: impl Into<String>) -> Request<'_, SetChatTitle> {
        Request::new(
            self,
            SetChatTitle {
                chat_id: None,
                title: title.into(),
            },
        )
    }

    pub fn set_chat_description(&self) -> Request<'_, SetChatDescription> {
        Request::new(self, SetChatDescription::default())
    }

    pub fn delete_chat_photo(&self) -> Request<'_, DeleteChatPhoto> {
        Request::new(self, DeleteChatPhoto::default())
    }

    pub fn set_chat_permissions(
        &self,
        permissions: ChatPermissions,
    ) -> Request<'_, SetChatPermissions> {
        Request::new(
            self,
            SetChatPermissions {
                chat_id: None,
                permissions,
                use_independent_chat_permissions: None,
            },
        )
    }

    pub fn pin_chat_message(&self) -> Request<'_, PinChatMessage> {
        Request::new(self, PinChatMessage::default())
    }

    pub fn unpin_chat_message(&self) -> Request<'_, UnpinChatMessage> {
        Request::new(self, UnpinChatMessage::default())
    }

    pub fn unpin_all_chat_messages(&self) -> Request<'_, UnpinAllChatMessages> {
        Request::new(self, UnpinAllChatMessages::default())
    }

    pub fn set_chat_sticker_set(
        &self,
        sticker_set_name: impl Into<String>,
    ) -> Request<'_, SetChatStickerSet> {
        Request::new(
            self,
            SetChatStickerSet {
                chat_id: None,
                sticker_set_name: sticker_set_name.into(),
            },
        )
    }

    pub fn delete_chat_sticker_set(&self) -> Request<'_, DeleteChatStickerSet> {
        Request::new(self, DeleteChatStickerSet::default())
    }
}
