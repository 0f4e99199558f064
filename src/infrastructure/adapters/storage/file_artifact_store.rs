//! File Artifact Store - 文件系统音频存储实现
//!
//! 实现 ArtifactStorePort trait
//!
//! 目录结构:
//! ```text
//! <root_dir>/
//!   local/musicgen_<uuid>.wav
//!   cloud/suno_<uuid>.wav
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::application::ports::{ArtifactStoreError, ArtifactStorePort, StoredArtifact};
use crate::domain::GeneratorKind;

/// 音频文件扩展名
const ARTIFACT_EXTENSION: &str = "wav";

/// 文件系统音频存储
pub struct FileArtifactStore {
    /// 存储根目录（与静态文件服务共享）
    root_dir: PathBuf,
    /// URL 前缀，例如 `http://localhost:8000/generated_audios`
    url_base: String,
}

impl FileArtifactStore {
    /// 创建存储并初始化所有生成器目录
    ///
    /// 必须在开始接收请求之前调用
    pub async fn new(
        root_dir: impl AsRef<Path>,
        url_base: impl Into<String>,
    ) -> Result<Self, ArtifactStoreError> {
        let store = Self {
            root_dir: root_dir.as_ref().to_path_buf(),
            url_base: url_base.into().trim_end_matches('/').to_string(),
        };

        for kind in GeneratorKind::ALL {
            store.ensure_dir(kind).await?;
        }

        tracing::info!(
            root_dir = %store.root_dir.display(),
            url_base = %store.url_base,
            "Artifact store initialized"
        );

        Ok(store)
    }

    /// 获取存储根目录
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// 获取生成器目录
    pub fn generator_dir(&self, generator: GeneratorKind) -> PathBuf {
        self.root_dir.join(generator.dir_name())
    }

    fn artifact_url(&self, generator: GeneratorKind, file_name: &str) -> String {
        format!("{}/{}/{}", self.url_base, generator.dir_name(), file_name)
    }

    async fn ensure_dir(&self, generator: GeneratorKind) -> Result<PathBuf, ArtifactStoreError> {
        let dir = self.generator_dir(generator);
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;
        Ok(dir)
    }
}

fn new_file_name(generator: GeneratorKind) -> String {
    format!(
        "{}_{}.{}",
        generator.file_prefix(),
        Uuid::new_v4().simple(),
        ARTIFACT_EXTENSION
    )
}

#[async_trait]
impl ArtifactStorePort for FileArtifactStore {
    async fn store(
        &self,
        generator: GeneratorKind,
        data: &[u8],
    ) -> Result<StoredArtifact, ArtifactStoreError> {
        let dir = self.ensure_dir(generator).await?;

        let file_name = new_file_name(generator);
        let path = dir.join(&file_name);

        // create_new: 永不覆盖已有文件
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;

        file.write_all(data)
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ArtifactStoreError::IoError(e.to_string()))?;

        tracing::debug!(
            generator = %generator,
            path = %path.display(),
            size = data.len(),
            "Saved artifact"
        );

        let url = self.artifact_url(generator, &file_name);

        Ok(StoredArtifact {
            file_name,
            path,
            url,
        })
    }
}
