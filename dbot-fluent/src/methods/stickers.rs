//! Sticker sets owned by the bot. New stickers are described with [`StickerBuilder`]; the owner
//! defaults to the effective user.

use serde::Serialize;
use teloxide::types::{MaskPosition, StickerFormat, StickerSet, StickerType, UserId};

use dbot_core::{DbotError, Result};

use crate::context::Context;
use crate::request::{Method, Request};
use crate::types::InputSticker;

/// Payloads that take stickers from [`StickerBuilder`].
pub trait TakesStickers {
    fn take_sticker(&mut self, sticker: InputSticker);
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetStickerSet {
    pub name: String,
}
impl_method!(GetStickerSet, "getStickerSet" => StickerSet);

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateNewStickerSet {
    pub user_id: Option<UserId>,
    /// Must end in `_by_<bot_username>`.
    pub name: String,
    pub title: String,
    pub stickers: Vec<InputSticker>,
    pub sticker_type: Option<StickerType>,
    pub needs_repainting: Option<bool>,
}
impl_method!(CreateNewStickerSet, "createNewStickerSet" => bool; user_id: fill_user);

impl TakesStickers for CreateNewStickerSet {
    fn take_sticker(&mut self, sticker: InputSticker) {
        self.stickers.push(sticker);
    }
}

impl<'a> Request<'a, CreateNewStickerSet> {
    setters! {
        user_id: UserId,
        sticker_type: StickerType,
        /// Custom emoji recolored to the text color.
        needs_repainting: bool,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AddStickerToSet {
    pub user_id: Option<UserId>,
    pub name: String,
    pub sticker: Option<InputSticker>,
}

impl Method for AddStickerToSet {
    const NAME: &'static str = "addStickerToSet";
    type Response = bool;

    fn apply_defaults(&mut self, ctx: &Context) -> Result<()> {
        ctx.fill_user(&mut self.user_id)?;
        require_sticker(&self.sticker)
    }
}

impl TakesStickers for AddStickerToSet {
    fn take_sticker(&mut self, sticker: InputSticker) {
        self.sticker = Some(sticker);
    }
}

impl<'a> Request<'a, AddStickerToSet> {
    setters! {
        user_id: UserId,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceStickerInSet {
    pub user_id: Option<UserId>,
    pub name: String,
    pub old_sticker: String,
    pub sticker: Option<InputSticker>,
}

impl Method for ReplaceStickerInSet {
    const NAME: &'static str = "replaceStickerInSet";
    type Response = bool;

    fn apply_defaults(&mut self, ctx: &Context) -> Result<()> {
        ctx.fill_user(&mut self.user_id)?;
        require_sticker(&self.sticker)
    }
}

impl TakesStickers for ReplaceStickerInSet {
    fn take_sticker(&mut self, sticker: InputSticker) {
        self.sticker = Some(sticker);
    }
}

impl<'a> Request<'a, ReplaceStickerInSet> {
    setters! {
        user_id: UserId,
    }
}

fn require_sticker(sticker: &Option<InputSticker>) -> Result<()> {
    match sticker {
        Some(_) => Ok(()),
        None => Err(DbotError::precondition("no sticker")),
    }
}

impl<'a, P: Method + TakesStickers> Request<'a, P> {
    /// Starts describing a sticker (`file` is a file id or URL). For single-sticker methods
    /// the last added sticker wins.
    pub fn sticker(self, file: impl Into<String>, format: StickerFormat) -> StickerBuilder<'a, P> {
        StickerBuilder {
            parent: self,
            sticker: InputSticker {
                sticker: file.into(),
                format,
                emoji_list: Vec::new(),
                mask_position: None,
                keywords: None,
            },
        }
    }
}

/// One sticker under construction.
#[must_use = "call `.add()` to attach the sticker"]
pub struct StickerBuilder<'a, P> {
    parent: Request<'a, P>,
    sticker: InputSticker,
}

impl<'a, P: Method + TakesStickers> StickerBuilder<'a, P> {
    /// Appends one emoji.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.sticker.emoji_list.push(emoji.into());
        self
    }

    /// Replaces all emoji added so far.
    pub fn emoji_list<I, S>(mut self, emoji: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sticker.emoji_list = emoji.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sticker.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Mask stickers only.
    pub fn mask_position(mut self, position: MaskPosition) -> Self {
        self.sticker.mask_position = Some(position);
        self
    }

    pub fn add(mut self) -> Request<'a, P> {
        self.parent.payload.take_sticker(self.sticker);
        self.parent
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetStickerPositionInSet {
    pub sticker: String,
    /// Zero-based.
    pub position: u32,
}
impl_method!(SetStickerPositionInSet, "setStickerPositionInSet" => bool);

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteStickerFromSet {
    pub sticker: String,
}
impl_method!(DeleteStickerFromSet, "deleteStickerFromSet" => bool);

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetStickerSetTitle {
    pub name: String,
    pub title: String,
}
impl_method!(SetStickerSetTitle, "setStickerSetTitle" => bool);

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteStickerSet {
    pub name: String,
}
impl_method!(DeleteStickerSet, "deleteStickerSet" => bool);

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetStickerEmojiList {
    pub sticker: String,
    pub emoji_list: Vec<String>,
}
impl_method!(SetStickerEmojiList, "setStickerEmojiList" => bool);

impl<'a> Request<'a, SetStickerEmojiList> {
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.payload.emoji_list.push(emoji.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SetStickerKeywords {
    pub sticker: String,
    /// Unset removes all keywords.
    pub keywords: Option<Vec<String>>,
}
impl_method!(SetStickerKeywords, "setStickerKeywords" => bool);

impl<'a> Request<'a, SetStickerKeywords> {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.payload
            .keywords
            .get_or_insert_with(Vec::new)
            .push(keyword.into());
        self
    }
}

impl Context {
    pub fn get_sticker_set(&self, name: impl Into<String>) -> Request<'_, GetStickerSet> {
        Request::new(self, GetStickerSet { name: name.into() })
    }

    pub fn create_new_sticker_set(
        &self,
        name: impl Into<String>,
        title: impl Into<String>,
    ) -> Request<'_, CreateNewStickerSet> {
        Request::new(
            self,
            CreateNewStickerSet {
                name: name.into(),
                title: title.into(),
                ..Default::default()
            },
        )
    }

    pub fn add_sticker_to_set(&self, name: impl Into<String>) -> Request<'_, AddStickerToSet> {
        Request::new(
            self,
            AddStickerToSet {
                name: name.into(),
                ..Default::default()
            },
        )
    }

    pub fn replace_sticker_in_set(
        &self,
        name: impl Into<String>,
        old_sticker: impl Into<String>,
    ) -> Request<'_, ReplaceStickerInSet> {
        Request::new(
            self,
            ReplaceStickerInSet {
                name: name.into(),
                old_sticker: old_sticker.into(),
                ..Default::default()
            },
        )
    }

    pub fn set_sticker_position_in_set(
        &self,
        sticker: impl Into<String>,
        position: u32,
    ) -> Request<'_, SetStickerPositionInSet> {
        Request::new(
            self,
            SetStickerPositionInSet {
                sticker: sticker.into(),
                position,
            },
        )
    }

    pub fn delete_sticker_from_set(
        &self,
        sticker: impl Into<String>,
    ) -> Request<'_, DeleteStickerFromSet> {
        Request::new(
            self,
            DeleteStickerFromSet {
                sticker: sticker.into(),
            },
        )
    }

    pub fn set_sticker_set_title(
        &self,
        name: impl Into<String>,
        title: impl Into<String>,
    ) -> Request<'_, SetStickerSetTitle> {
        Request::new(
            self,
            SetStickerSetTitle {
                name: name.into(),
                title: title.into(),
            },
        )
    }

    pub fn delete_sticker_set(&self, name: impl Into<String>) -> Request<'_, DeleteStickerSet> {
        Request::new(self, DeleteStickerSet { name: name.into() })
    }

    pub fn set_sticker_emoji_list(
        &self,
        sticker: impl Into<String>,
    ) -> Request<'_, SetStickerEmojiList> {
        Request::new(
            self,
            SetStickerEmojiList {
                sticker: sticker.into(),
                emoji_list: Vec::new(),
            },
        )
    }

    pub fn set_sticker_keywords(
        &self,
        sticker: impl Into<String>,
    ) -> Request<'_, SetStickerKeywords> {
        Request::new(
            self,
            SetStickerKeywords {
                sticker: sticker.into(),
                keywords: None,
            },
        )
    }
}
