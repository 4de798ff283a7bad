mod action;
mod api;
mod attachment;
mod author;
mod capability;
mod chat;
mod event;
mod message;
mod profile;
mod screen;
mod session;
mod slash_commands;
mod store;
mod title_edit;

pub use action::*;
pub use api::*;
pub use attachment::*;
pub use author::*;
pub use capability::*;
pub use chat::*;
pub use event::*;
pub use message::*;
pub use profile::*;
pub use screen::*;
pub use session::*;
pub use slash_commands::*;
pub use store::*;
pub use title_edit::*;
