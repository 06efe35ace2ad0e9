//! # dbot-core
//!
//! Core of the fluent Bot API layer: [`BotApi`] (the wrapped client seen as one `call`),
//! [`RequestOptions`], the [`DbotError`] taxonomy, and tracing initialization.
//! Transport-agnostic; used by dbot-fluent.

pub mod bot;
pub mod error;
pub mod logger;

pub use bot::{decode_response, method_url, BotApi, RequestOptions};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
