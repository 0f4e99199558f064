//! HTTP Handlers

mod callback;
mod music;
mod ping;
mod prompt;

pub use callback::*;
pub use music::*;
pub use ping::*;
pub use prompt::*;
