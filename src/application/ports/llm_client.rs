//! LLM Client Port - 文本补全抽象
//!
//! 语言模型被视为无状态、非流式的文本补全服务

use async_trait::async_trait;
use thiserror::Error;

/// LLM 调用错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// LLM Client Port
#[async_trait]
pub trait LlmClientPort: Send + Sync {
    /// 发送完整提示，返回模型生成的原始文本（未裁剪）
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
