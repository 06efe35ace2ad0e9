//! Bot API method payloads, grouped by area. Each submodule also adds the matching factory
//! methods to [`crate::Context`].

pub mod bot;
pub mod chat;
pub mod checklist;
pub mod edit;
pub mod forum;
pub mod invite_links;
pub mod media;
pub mod members;
pub mod messages;
pub mod payments;
pub mod queries;
pub mod stickers;

pub use self::bot::*;
pub use self::chat::*;
pub use self::checklist::*;
pub use self::edit::*;
pub use self::forum::*;
pub use self::invite_links::*;
pub use self::media::*;
pub use self::members::*;
pub use self::messages::*;
pub use self::payments::*;
pub use self::queries::*;
pub use self::stickers::*;
