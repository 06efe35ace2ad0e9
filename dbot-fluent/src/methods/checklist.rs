//! Checklists (business accounts). Tasks are assembled with [`TaskBuilder`]:
//!
//! ```ignore
//! ctx.send_checklist("bc-1", "Release")
//!     .task(1, "Tag <b>v1.2</b>").html().add()
//!     .task(2, "Publish notes").add()
//!     .send()
//!     .await?;
//! ```

use serde::Serialize;
use teloxide::types::{InlineKeyboardMarkup, Message, MessageEntity, ParseMode, Recipient, ReplyParameters};

use crate::context::Context;
use crate::request::{Method, Request};
use crate::types::{InputChecklist, InputChecklistTask};

/// Payloads that carry an [`InputChecklist`].
pub trait HasChecklist {
    fn checklist_mut(&mut self) -> &mut InputChecklist;
}

#[derive(Debug, Clone, Serialize)]
pub struct SendChecklist {
    pub business_connection_id: String,
    pub chat_id: Option<Recipient>,
    pub checklist: InputChecklist,
    pub disable_notification: Option<bool>,
    pub protect_content: Option<bool>,
    pub message_effect_id: Option<String>,
    pub reply_parameters: Option<ReplyParameters>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_method!(SendChecklist, "sendChecklist" => Message; chat_id: fill_chat);

impl HasChecklist for SendChecklist {
    fn checklist_mut(&mut self) -> &mut InputChecklist {
        &mut self.checklist
    }
}

impl<'a> Request<'a, SendChecklist> {
    setters! {
        chat_id: Recipient,
        disable_notification: bool,
        protect_content: bool,
        message_effect_id: String,
        reply_parameters: ReplyParameters,
        reply_markup: InlineKeyboardMarkup,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EditMessageChecklist {
    pub business_connection_id: String,
    pub chat_id: Option<Recipient>,
    pub message_id: Option<i32>,
    pub checklist: InputChecklist,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}
impl_method!(EditMessageChecklist, "editMessageChecklist" => Message; chat_id: fill_chat, message_id: fill_message);

impl HasChecklist for EditMessageChecklist {
    fn checklist_mut(&mut self) -> &mut InputChecklist {
        &mut self.checklist
    }
}

impl<'a> Request<'a, EditMessageChecklist> {
    setters! {
        chat_id: Recipient,
        message_id: i32,
        reply_markup: InlineKeyboardMarkup,
    }
}

impl<'a, P: Method + HasChecklist> Request<'a, P> {
    pub fn title_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.payload.checklist_mut().parse_mode = Some(parse_mode);
        self
    }

    pub fn title_entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.payload.checklist_mut().title_entities = Some(entities);
        self
    }

    pub fn others_can_add_tasks(mut self, value: bool) -> Self {
        self.payload.checklist_mut().others_can_add_tasks = Some(value);
        self
    }

    pub fn others_can_mark_tasks_as_done(mut self, value: bool) -> Self {
        self.payload.checklist_mut().others_can_mark_tasks_as_done = Some(value);
        self
    }

    /// Starts a task; `.add()` appends it and returns this request. Ids must be unique
    /// within the checklist.
    pub fn task(self, id: i32, text: impl Into<String>) -> TaskBuilder<'a, P> {
        TaskBuilder {
            parent: self,
            task: InputChecklistTask {
                id,
                text: text.into(),
                parse_mode: None,
                text_entities: None,
            },
        }
    }
}

/// One checklist task under construction.
#[must_use = "call `.add()` to attach the task to the checklist"]
pub struct TaskBuilder<'a, P> {
    parent: Request<'a, P>,
    task: InputChecklistTask,
}

impl<'a, P: Method + HasChecklist> TaskBuilder<'a, P> {
    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.task.parse_mode = Some(parse_mode);
        self
    }

    pub fn html(self) -> Self {
        self.parse_mode(ParseMode::Html)
    }

    pub fn markdown(self) -> Self {
        self.parse_mode(ParseMode::MarkdownV2)
    }

    /// Explicit entities; kept even if a parse mode is also set.
    pub fn entities(mut self, entities: Vec<MessageEntity>) -> Self {
        self.task.text_entities = Some(entities);
        self
    }

    pub fn add(mut self) -> Request<'a, P> {
        self.parent.payload.checklist_mut().tasks.push(self.task);
        self.parent
    }
}

impl Context {
    pub fn send_checklist(
        &self,
        business_connection_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Request<'_, SendChecklist> {
        Request::new(
            self,
            SendChecklist {
                business_connection_id: business_connection_id.into(),
                chat_id: None,
                checklist: InputChecklist::new(title),
                disable_notification: None,
                protect_content: None,
                message_effect_id: None,
                reply_parameters: None,
                reply_markup: None,
            },
        )
    }

    /// Replaces the checklist in the effective message unless `message_id` is set.
    pub fn edit_message_checklist(
        &self,
        business_connection_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Request<'_, EditMessageChecklist> {
        Request::new(
            self,
            EditMessageChecklist {
                business_connection_id: business_connection_id.into(),
                chat_id: None,
                message_id: None,
                checklist: InputChecklist::new(title),
                reply_markup: None,
            },
        )
    }
}
