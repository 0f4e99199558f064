//! Music Adapters - 音乐生成器实现
//!
//! - MusicGen: 本地同步
//! - Suno: 云端异步（回调送达）

mod musicgen_client;
mod suno_client;

pub use musicgen_client::*;
pub use suno_client::*;
