//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{ArtifactStoreError, GeneratorError, LlmError};
use crate::domain::MusicError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求参数缺失或格式错误
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 请求了未知的生成器
    #[error("Unsupported generator: {0}")]
    UnsupportedGenerator(String),

    /// 上游服务不可达或返回非成功状态
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// 语言模型返回了空文本
    #[error("Language model returned an empty prompt")]
    EmptyGeneration,

    /// 云端受理响应缺少任务 ID
    #[error("Provider did not return a task id")]
    MissingTaskId,

    /// 回调缺少 audio_base64 字段
    #[error("Callback payload is missing audio_base64")]
    MissingAudioField,

    /// 回调负载无法解析或解码
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// 部署配置缺少凭证
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// 生成器失败
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建参数错误
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// 创建解析错误
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }
}

impl From<MusicError> for ApplicationError {
    fn from(err: MusicError) -> Self {
        match err {
            MusicError::EmptyPrompt => Self::InvalidRequest(err.to_string()),
            MusicError::UnsupportedGenerator(name) => Self::UnsupportedGenerator(name),
        }
    }
}

impl From<LlmError> for ApplicationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NetworkError(_) | LlmError::Timeout | LlmError::ServiceError(_) => {
                Self::UpstreamUnavailable(format!("LLM service: {}", err))
            }
            LlmError::InvalidResponse(msg) => Self::GenerationFailed(msg),
        }
    }
}

impl From<GeneratorError> for ApplicationError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::MissingCredential(name) => Self::MissingCredential(name.to_string()),
            GeneratorError::Unavailable(_) | GeneratorError::Timeout => {
                Self::UpstreamUnavailable(err.to_string())
            }
            GeneratorError::MissingTaskId => Self::MissingTaskId,
            GeneratorError::GenerationFailed(msg) => Self::GenerationFailed(msg),
            GeneratorError::StorageError(msg) => Self::StorageError(msg),
        }
    }
}

impl From<ArtifactStoreError> for ApplicationError {
    fn from(err: ArtifactStoreError) -> Self {
        Self::StorageError(err.to_string())
    }
}
