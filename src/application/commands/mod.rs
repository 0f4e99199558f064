//! 应用层 - 命令
//!
//! 提示词转换、音乐生成、回调落盘

mod callback_commands;
mod music_commands;
mod prompt_commands;

pub mod handlers;

pub use callback_commands::*;
pub use music_commands::*;
pub use prompt_commands::*;
