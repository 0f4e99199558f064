//! Music Context - 音乐生成限界上下文
//!
//! 职责:
//! - 提示词与标题推导
//! - 生成器类型
//! - 同步结果 / 异步受理两种完成模型

mod audio_payload;
mod errors;
mod value_objects;

pub use audio_payload::decode_audio_base64;
pub use errors::MusicError;
pub use value_objects::{GenerationOutcome, GenerationResult, GeneratorKind, PendingAck, PromptText};
