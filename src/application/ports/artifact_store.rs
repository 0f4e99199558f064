//! Artifact Store Port - 出站端口
//!
//! 按生成器分目录保存音频文件，并签发可访问的 URL

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::GeneratorKind;

/// 存储错误
#[derive(Debug, Error)]
pub enum ArtifactStoreError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// 已保存的音频文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    /// 文件名
    pub file_name: String,
    /// 磁盘路径
    pub path: PathBuf,
    /// 对外 URL（需配合静态文件服务）
    pub url: String,
}

/// Artifact Store Port
#[async_trait]
pub trait ArtifactStorePort: Send + Sync {
    /// 保存音频数据
    ///
    /// 每次调用都会生成新的随机文件名，不会覆盖已有文件
    async fn store(
        &self,
        generator: GeneratorKind,
        data: &[u8],
    ) -> Result<StoredArtifact, ArtifactStoreError>;
}
