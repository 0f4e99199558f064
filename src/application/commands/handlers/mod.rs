//! Command Handlers 实现

mod callback_handlers;
mod music_handlers;
mod prompt_handlers;

pub use callback_handlers::*;
pub use music_handlers::*;
pub use prompt_handlers::*;
