//! MusicGen Client - 本地同步音乐生成
//!
//! 实现 MusicGeneratorPort trait，阻塞直到本地服务返回完整音频
//!
//! 外部 API:
//! POST http://localhost:11434/api/generate
//! Request: {"model": "musicgen", "prompt": "...", "stream": false}
//! Response: {"audio": "<base64 wav>"}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ArtifactStorePort, GeneratorError, MusicGeneratorPort};
use crate::domain::{
    decode_audio_base64, GenerationOutcome, GenerationResult, GeneratorKind, PromptText,
};

/// 生成器自报的标题（编排层会用提示词改写）
const MUSICGEN_TITLE: &str = "MusicGen Output";

#[derive(Debug, Serialize)]
struct MusicGenRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct MusicGenResponse {
    #[serde(default)]
    audio: Option<String>,
}

/// MusicGen 客户端配置
#[derive(Debug, Clone)]
pub struct MusicGenClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 模型名称
    pub model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for MusicGenClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "musicgen".to_string(),
            timeout_secs: 300,
        }
    }
}

impl MusicGenClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// MusicGen 客户端
pub struct MusicGenClient {
    client: Client,
    config: MusicGenClientConfig,
    artifact_store: Arc<dyn ArtifactStorePort>,
}

impl MusicGenClient {
    pub fn new(
        config: MusicGenClientConfig,
        artifact_store: Arc<dyn ArtifactStorePort>,
    ) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            config,
            artifact_store,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MusicGeneratorPort for MusicGenClient {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Local
    }

    async fn generate(&self, prompt: &PromptText) -> Result<GenerationOutcome, GeneratorError> {
        let request = MusicGenRequest {
            model: &self.config.model,
            prompt: prompt.as_str(),
            stream: false,
        };

        tracing::debug!(url = %self.generate_url(), model = %self.config.model, "Sending MusicGen request");

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else {
                    GeneratorError::Unavailable(format!("Cannot reach MusicGen service: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::GenerationFailed(format!(
                "MusicGen HTTP {}: {}",
                status, error_text
            )));
        }

        let body: MusicGenResponse = response.json().await.map_err(|e| {
            GeneratorError::GenerationFailed(format!("Invalid MusicGen response: {}", e))
        })?;

        let audio_b64 = body
            .audio
            .filter(|a| !a.is_empty())
            .ok_or_else(|| GeneratorError::GenerationFailed("Response has no audio data".into()))?;

        let audio = decode_audio_base64(&audio_b64).map_err(|e| {
            GeneratorError::GenerationFailed(format!("Invalid base64 audio: {}", e))
        })?;

        let artifact = self
            .artifact_store
            .store(GeneratorKind::Local, &audio)
            .await
            .map_err(|e| GeneratorError::StorageError(e.to_string()))?;

        tracing::info!(
            path = %artifact.path.display(),
            audio_size = audio.len(),
            "MusicGen generation completed"
        );

        Ok(GenerationOutcome::Complete(GenerationResult {
            url: artifact.url,
            title: MUSICGEN_TITLE.to_string(),
            source: GeneratorKind::Local.source_label().to_string(),
        }))
    }
}
