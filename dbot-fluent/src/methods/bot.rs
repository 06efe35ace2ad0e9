//! The bot's own profile, command menu and files.

use serde::Serialize;
use teloxide::types::{
    BotCommand, BotCommandScope, ChatId, File, Me, MenuButton, UserId, UserProfilePhotos,
};

use crate::context::Context;
use crate::request::Request;

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMe {}
impl_method!(GetMe, "getMe" => Me);

/// Resolves a file id to a downloadable `file_path` (valid for at least an hour).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetFile {
    pub file_id: String,
}
impl_method!(GetFile, "getFile" => File);

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: Option<UserId>,
    pub offset: Option<u32>,
    pub limit: Option<u8>,
}
impl_method!(GetUserProfilePhotos, "getUserProfilePhotos" => UserProfilePhotos; user_id: fill_user);

impl<'a> Request<'a, GetUserProfilePhotos> {
    setters! {
        user_id: UserId,
        offset: u32,
        /// 1-100, Telegram defaults to 100.
        limit: u8,
    }
}

/// Scope and language shared by the `*MyCommands` methods.
macro_rules! command_scope_setters {
    () => {
        setters! {
            scope: BotCommandScope,
            /// Two-letter ISO 639-1 code; unset applies to users without a dedicated list.
            language_code: String,
        }
    };
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
    pub scope: Option<BotCommandScope>,
    pub language_code: Option<String>,
}
impl_method!(SetMyCommands, "setMyCommands" => bool);

impl<'a> Request<'a, SetMyCommands> {
    command_scope_setters!();

    /// Appends one command; `command` is given without the leading slash.
    pub fn add_command(mut self, command: impl Into<String>, description: impl Into<String>) -> Self {
        self.payload
            .commands
            .push(BotCommand::new(command, description));
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyCommands {
    pub scope: Option<BotCommandScope>,
    pub language_code: Option<String>,
}
impl_method!(GetMyCommands, "getMyCommands" => Vec<BotCommand>);

impl<'a> Request<'a, GetMyCommands> {
    command_scope_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteMyCommands {
    pub scope: Option<BotCommandScope>,
    pub language_code: Option<String>,
}
impl_method!(DeleteMyCommands, "deleteMyCommands" => bool);

impl<'a> Request<'a, DeleteMyCommands> {
    command_scope_setters!();
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyName {
    /// Unset or empty removes the localized name.
    pub name: Option<String>,
    pub language_code: Option<String>,
}
impl_method!(SetMyName, "setMyName" => bool);

impl<'a> Request<'a, SetMyName> {
    setters! {
        name: String,
        language_code: String,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyDescription {
    /// Shown in an empty chat with the bot.
    pub description: Option<String>,
    pub language_code: Option<String>,
}
impl_method!(SetMyDescription, "setMyDescription" => bool);

impl<'a> Request<'a, SetMyDescription> {
    setters! {
        description: String,
        language_code: String,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetMyShortDescription {
    /// Shown on the profile page and in shared links.
    pub short_description: Option<String>,
    pub language_code: Option<String>,
}
impl_method!(SetMyShortDescription, "setMyShortDescription" => bool);

impl<'a> Request<'a, SetMyShortDescription> {
    setters! {
        short_description: String,
        language_code: String,
    }
}

/// Private chats only. An unset `chat_id` changes the default button rather than
/// falling back to the effective chat.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetChatMenuButton {
    pub chat_id: Option<ChatId>,
    pub menu_button: Option<MenuButton>,
}
impl_method!(SetChatMenuButton, "setChatMenuButton" => bool);

impl<'a> Request<'a, SetChatMenuButton> {
    setters! {
        chat_id: ChatId,
        menu_button: MenuButton,
    }

    /// Targets the effective chat, if any.
    pub fn for_current_chat(mut self) -> Self {
        self.payload.chat_id = self.ctx.effective_chat_id();
        self
    }
}

impl Context {
    pub fn get_me(&self) -> Request<'_, GetMe> {
        Request::new(self, GetMe::default())
    }

    pub fn get_file(&self, file_id: impl Into<String>) -> Request<'_, GetFile> {
        Request::new(
            self,
            GetFile {
                file_id: file_id.into(),
            },
        )
    }

    pub fn get_user_profile_photos(&self) -> Request<'_, GetUserProfilePhotos> {
        Request::new(self, GetUserProfilePhotos::default())
    }

    pub fn set_my_commands(&self) -> Request<'_, SetMyCommands> {
        Request::new(self, SetMyCommands::default())
    }

    pub fn get_my_commands(&self) -> Request<'_, GetMyCommands> {
        Request::new(self, GetMyCommands::default())
    }

    pub fn delete_my_commands(&self) -> Request<'_, DeleteMyCommands> {
        Request::new(self, DeleteMyCommands::default())
    }

    pub fn set_my_name(&self) -> Request<'_, SetMyName> {
        Request::new(self, SetMyName::default())
    }

    pub fn set_my_description(&self) -> Request<'_, SetMyDescription> {
        Request::new(self, SetMyDescription::default())
    }

    pub fn set_my_short_description(&self) -> Request<'_, SetMyShortDescription> {
        Request::new(self, SetMyShortDescription::default())
    }

    pub fn set_chat_menu_button(&self) -> Request<'_, SetChatMenuButton> {
        Request::new(self, SetChatMenuButton::default())
    }
}
