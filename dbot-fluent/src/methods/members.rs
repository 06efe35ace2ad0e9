//! Moderating chat members and sender chats. The user defaults to the effective user.

use serde::Serialize;
use teloxide::types::{ChatId, ChatPermissions, Recipient, UserId};

use crate::context::Context;
use crate::request::Request;

#[derive(Debug, Clone, Default, Serialize)]
pub struct BanChatMember {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
    /// Unix time the ban ends; under 30 seconds or over 366 days means forever.
    pub until_date: Option<i64>,
    pub revoke_messages: Option<bool>,
}
impl_method!(BanChatMember, "banChatMember" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, BanChatMember> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
        until_date: i64,
        /// Also delete the member's messages.
        revoke_messages: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
    pub only_if_banned: Option<bool>,
}
impl_method!(UnbanChatMember, "unbanChatMember" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, UnbanChatMember> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
        /// Without it, unbanning a current member kicks them.
        only_if_banned: bool,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
    pub permissions: ChatPermissions,
    pub use_independent_chat_permissions: Option<bool>,
    pub until_date: Option<i64>,
}
impl_method!(RestrictChatMember, "restrictChatMember" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, RestrictChatMember> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
        use_independent_chat_permissions: bool,
        until_date: i64,
    }

    pub fn permissions(mut self, permissions: ChatPermissions) -> Self {
        self.payload.permissions = permissions;
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PromoteChatMember {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
    pub is_anonymous: Option<bool>,
    pub can_manage_chat: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_manage_video_chats: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_promote_members: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_post_stories: Option<bool>,
    pub can_edit_stories: Option<bool>,
    pub can_delete_stories: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub can_manage_topics: Option<bool>,
    pub can_manage_direct_messages: Option<bool>,
}
impl_method!(PromoteChatMember, "promoteChatMember" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, PromoteChatMember> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
        is_anonymous: bool,
        can_manage_chat: bool,
        can_delete_messages: bool,
        can_manage_video_chats: bool,
        can_restrict_members: bool,
        can_promote_members: bool,
        can_change_info: bool,
        can_invite_users: bool,
        can_post_stories: bool,
        can_edit_stories: bool,
        can_delete_stories: bool,
        can_post_messages: bool,
        can_edit_messages: bool,
        can_pin_messages: bool,
        can_manage_topics: bool,
        can_manage_direct_messages: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
    pub custom_title: String,
}
impl_method!(SetChatAdministratorCustomTitle, "setChatAdministratorCustomTitle" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, SetChatAdministratorCustomTitle> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BanChatSenderChat {
    pub chat_id: Option<Recipient>,
    pub sender_chat_id: ChatId,
}
impl_method!(BanChatSenderChat, "banChatSenderChat" => bool; chat_id: fill_chat);

impl<'a> Request<'a, BanChatSenderChat> {
    setters! {
        chat_id: Recipient,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnbanChatSenderChat {
    pub chat_id: Option<Recipient>,
    pub sender_chat_id: ChatId,
}
impl_method!(UnbanChatSenderChat, "unbanChatSenderChat" => bool; chat_id: fill_chat);

impl<'a> Request<'a, UnbanChatSenderChat> {
    setters! {
        chat_id: Recipient,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApproveChatJoinRequest {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
}
impl_method!(ApproveChatJoinRequest, "approveChatJoinRequest" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, ApproveChatJoinRequest> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeclineChatJoinRequest {
    pub chat_id: Option<Recipient>,
    pub user_id: Option<UserId>,
}
impl_method!(DeclineChatJoinRequest, "declineChatJoinRequest" => bool; chat_id: fill_chat, user_id: fill_user);

impl<'a> Request<'a, DeclineChatJoinRequest> {
    setters! {
        chat_id: Recipient,
        user_id: UserId,
    }
}

impl Context {
    pub fn ban_chat_member(&self) -> Request<'_, BanChatMember> {
        Request::new(self, BanChatMember::default())
    }

    pub fn unban_chat_member(&self) -> Request<'_, UnbanChatMember> {
        Request::new(self, UnbanChatMember::default())
    }

    pub fn restrict_chat_member(
        &self,
        permissions: ChatPermissions,
    ) -> Request<'_, RestrictChatMember> {
        Request::new(
            self,
            RestrictChatMember {
                chat_id: None,
                user_id: None,
                permissions,
                use_independent_chat_permissions: None,
                until_date: None,
            },
        )
    }

    /// Every right left unset is revoked by Telegram.
    pub fn promote_chat_member(&self) -> Request<'_, PromoteChatMember> {
        Request::new(self, PromoteChatMember::default())
    }

    pub fn set_chat_administrator_custom_title(
        &self,
        custom_title: impl Into<String>,
    ) -> Request<'_, SetChatAdministratorCustomTitle> {
        Request::new(
            self,
            SetChatAdministratorCustomTitle {
                custom_title: custom_title.into(),
                ..Default::default()
            },
        )
    }

    pub fn ban_chat_sender_chat(&self, sender_chat_id: ChatId) -> Request<'_, BanChatSenderChat> {
        Request::new(
            self,
            BanChatSenderChat {
                chat_id: None,
                sender_chat_id,
            },
        )
    }

    pub fn unban_chat_sender_chat(
        &self,
        sender_chat_id: ChatId,
    ) -> Request<'_, UnbanChatSenderChat> {
        Request::new(
            self,
            UnbanChatSenderChat {
                chat_id: None,
                sender_chat_id,
            },
        )
    }

    pub fn approve_chat_join_request(&self) -> Request<'_, ApproveChatJoinRequest> {
        Request::new(self, ApproveChatJoinRequest::default())
    }

    pub fn decline_chat_join_request(&self) -> Request<'_, DeclineChatJoinRequest> {
        Request::new(self, DeclineChatJoinRequest::default())
    }
}
