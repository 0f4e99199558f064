//! Domain Layer - 领域层
//!
//! - Music Context: 提示词、生成器类型、生成结果
//! - 提示词模板: 语言模型指令

pub mod music;

mod prompt_template;

pub use music::{
    decode_audio_base64, GenerationOutcome, GenerationResult, GeneratorKind, MusicError,
    PendingAck, PromptText,
};
pub use prompt_template::{build_transform_prompt, SYSTEM_INSTRUCTION};
