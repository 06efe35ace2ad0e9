//! Invite links, including paid subscription links.

use serde::Serialize;
use teloxide::types::{ChatInviteLink, Recipient};

use crate::context::Context;
use crate::request::Request;

/// Replaces the primary link; the previous one is revoked.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportChatInviteLink {
    pub chat_id: Option<Recipient>,
}
impl_method!(ExportChatInviteLink, "exportChatInviteLink" => String; chat_id: fill_chat);

impl<'a> Request<'a, ExportChatInviteLink> {
    setters! {
        chat_id: Recipient,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateChatInviteLink {
    pub chat_id: Option<Recipient>,
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<u32>,
    pub creates_join_request: Option<bool>,
}
impl_method!(CreateChatInviteLink, "createChatInviteLink" => ChatInviteLink; chat_id: fill_chat);

impl<'a> Request<'a, CreateChatInviteLink> {
    setters! {
        chat_id: Recipient,
        name: String,
        /// Unix time the link expires.
        expire_date: i64,
        member_limit: u32,
        /// Joiners must be approved; incompatible with `member_limit` on Telegram's side.
        creates_join_request: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditChatInviteLink {
    pub chat_id: Option<Recipient>,
    pub invite_link: String,
    pub name: Option<String>,
    pub expire_date: Option<i64>,
    pub member_limit: Option<u32>,
    pub creates_join_request: Option<bool>,
}
impl_method!(EditChatInviteLink, "editChatInviteLink" => ChatInviteLink; chat_id: fill_chat);

impl<'a> Request<'a, EditChatInviteLink> {
    setters! {
        chat_id: Recipient,
        name: String,
        expire_date: i64,
        member_limit: u32,
        creates_join_request: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateChatSubscriptionInviteLink {
    pub chat_id: Option<Recipient>,
    pub name: Option<String>,
    /// Seconds; Telegram currently only accepts 30 days (2592000).
    pub subscription_period: u32,
    /// Telegram Stars per period.
    pub subscription_price: u32,
}
impl_method!(CreateChatSubscriptionInviteLink, "createChatSubscriptionInviteLink" => ChatInviteLink; chat_id: fill_chat);

impl<'a> Request<'a, CreateChatSubscriptionInviteLink> {
    setters! {
        chat_id: Recipient,
        name: String,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EditChatSubscriptionInviteLink {
    pub chat_id: Option<Recipient>,
    pub invite_link: String,
    pub name: Option<String>,
}
impl_method!(EditChatSubscriptionInviteLink, "editChatSubscriptionInviteLink" => ChatInviteLink; chat_id: fill_chat);

impl<'a> Request<'a, EditChatSubscriptionInviteLink> {
    setters! {
        chat_id: Recipient,
        name: String,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RevokeChatInviteLink {
    pub chat_id: Option<Recipient>,
    pub invite_link: String,
}
impl_method!(RevokeChatInviteLink, "revokeChatInviteLink" => ChatInviteLink; chat_id: fill_chat);

impl<'a> Request<'a, RevokeChatInviteLink> {
    setters! {
        chat_id: Recipient,
    }
}

impl Context {
    pub fn export_chat_invite_link(&self) -> Request<'_, ExportChatInviteLink> {
        Request::new(self, ExportChatInviteLink::default())
    }

    pub fn create_chat_invite_link(&self) -> Request<'_, CreateChatInviteLink> {
        Request::new(self, CreateChatInviteLink::default())
    }

    pub fn edit_chat_invite_link(
        &self,
        invite_link: impl Into<String>,
    ) -> Request<'_, EditChatInviteLink> {
        Request::new(
            self,
            EditChatInviteLink {
                invite_link: invite_link.into(),
                ..Default::default()
            },
        )
    }

    pub fn create_chat_subscription_invite_link(
        &self,
        subscription_period: u32,
        subscription_price: u32,
    ) -> Request<'_, CreateChatSubscriptionInviteLink> {
        Request::new(
            self,
            CreateChatSubscriptionInviteLink {
                subscription_period,
                subscription_price,
                ..Default::default()
            },
        )
    }

    pub fn edit_chat_subscription_invite_link(
        &self,
        invite_link: impl Into<String>,
    ) -> Request<'_, EditChatSubscriptionInviteLink> {
        Request::new(
            self,
            EditChatSubscriptionInviteLink {
                invite_link: invite_link.into(),
                ..Default::default()
            },
        )
    }

    pub fn revoke_chat_invite_link(
        &self,
        invite_link: impl Into<String>,
    ) -> Request<'_, RevokeChatInviteLink> {
        Request::new(
            self,
            RevokeChatInviteLink {
                chat_id: None,
                invite_link: invite_link.into(),
            },
        )
    }
}
