pub mod actions;
mod app_state;
mod bubble;
mod bubble_list;
mod error_surface;
pub mod events;
mod message_log;
mod scroll;
mod validation;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use error_surface::*;
pub use message_log::*;
pub use scroll::*;
pub use validation::*;
