//! Answers to callback and inline queries. The query id defaults to the one in the context.

use serde::Serialize;
use teloxide::types::{InlineQueryResult, InlineQueryResultsButton};

use crate::context::Context;
use crate::request::Request;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: Option<String>,
    pub text: Option<String>,
    pub show_alert: Option<bool>,
    pub url: Option<String>,
    pub cache_time: Option<u32>,
}
impl_method!(AnswerCallbackQuery, "answerCallbackQuery" => bool; callback_query_id: fill_callback_query);

impl<'a> Request<'a, AnswerCallbackQuery> {
    setters! {
        callback_query_id: String,
        /// Notification text, up to 200 characters.
        text: String,
        /// Modal alert instead of a toast.
        show_alert: bool,
        url: String,
        /// Seconds the client may cache the answer.
        cache_time: u32,
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: Option<String>,
    pub results: Vec<InlineQueryResult>,
    pub cache_time: Option<u32>,
    pub is_personal: Option<bool>,
    pub next_offset: Option<String>,
    pub button: Option<InlineQueryResultsButton>,
}
impl_method!(AnswerInlineQuery, "answerInlineQuery" => bool; inline_query_id: fill_inline_query);

impl<'a> Request<'a, AnswerInlineQuery> {
    setters! {
        inline_query_id: String,
        cache_time: u32,
        is_personal: bool,
        /// Empty string means no more results.
        next_offset: String,
        button: InlineQueryResultsButton,
    }

    /// Appends one result (at most 50 per answer).
    pub fn add_result(mut self, result: impl Into<InlineQueryResult>) -> Self {
        self.payload.results.push(result.into());
        self
    }

    pub fn add_results<I>(mut self, results: I) -> Self
    where
        I: IntoIterator<Item = InlineQueryResult>,
    {
        self.payload.results.extend(results);
        self
    }
}

impl Context {
    /// Must be called for every callback query, even without text.
    pub fn answer_callback_query(&self) -> Request<'_, AnswerCallbackQuery> {
        Request::new(self, AnswerCallbackQuery::default())
    }

    pub fn answer_inline_query(&self) -> Request<'_, AnswerInlineQuery> {
        Request::new(self, AnswerInlineQuery::default())
    }
}
