mod action;
mod backend;
mod event;
mod loading;
mod media_type;
mod message;
mod pending_file;
mod sender;
mod session;
mod slash_commands;
mod textarea;

pub use action::*;
pub use backend::*;
pub use event::*;
pub use loading::*;
pub use media_type::*;
pub use message::*;
pub use pending_file::*;
pub use sender::*;
pub use session::*;
pub use slash_commands::*;
pub use textarea::*;
