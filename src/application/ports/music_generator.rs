//! Music Generator Port - 音乐生成器抽象
//!
//! 本地同步生成与云端异步提交统一为同一个接口，
//! 通过 `GenerationOutcome` 区分 `Complete` 和 `Pending`

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{GenerationOutcome, GeneratorKind, PromptText};

/// 生成器错误
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// 未配置凭证
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// 上游不可达或返回非成功状态
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    /// 上游受理响应中没有任务 ID
    #[error("Provider response did not contain a task id")]
    MissingTaskId,

    /// 生成失败（上游报错、缺少音频字段、音频无法解码）
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Music Generator Port
#[async_trait]
pub trait MusicGeneratorPort: Send + Sync {
    /// 生成器类型
    fn kind(&self) -> GeneratorKind;

    /// 为提示词生成音乐
    async fn generate(&self, prompt: &PromptText) -> Result<GenerationOutcome, GeneratorError>;
}
