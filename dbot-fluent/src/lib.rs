//! # dbot-fluent
//!
//! Fluent Bot API builders on top of teloxide. A [`Context`] captures the chat, user, message
//! and query of one update; each factory on it returns a [`Request`] that is configured with
//! chained setters and executed with `.send().await`. Unset chat/user/message/query ids fall
//! back to the context.
//!
//! ```ignore
//! let ctx = Context::from_message(Arc::new(bot.clone()), &msg);
//! ctx.send_message("<b>hi</b>").html().reply_to(msg.id.0).send().await?;
//! ```

#[macro_use]
mod macros;

mod adapters;
mod bot_adapter;
mod config;
mod context;
pub mod methods;
mod request;
pub mod types;

pub use config::TelegramConfig;
pub use context::Context;
pub use request::{to_params, Method, Request};
pub use types::Edited;

pub use dbot_core::{init_tracing, BotApi, DbotError, RequestOptions, Result};
