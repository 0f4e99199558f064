//! Suno Client - 云端异步音乐生成
//!
//! 实现 MusicGeneratorPort trait。只负责提交任务，音频由 Suno 通过回调送达
//!
//! 外部 API:
//! POST https://apibox.erweima.ai/api/v1/generate
//! Header: Authorization: Bearer <api_key>
//! Response: {"code": 200, "msg": "success", "data": {"taskId": "..."}}

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GeneratorError, MusicGeneratorPort};
use crate::domain::{GenerationOutcome, GeneratorKind, PendingAck, PromptText};

/// 受理后返回给客户端的提示
const PENDING_MESSAGE: &str =
    "Music generation in progress. It will play automatically once ready.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SunoGenerateRequest<'a> {
    prompt: &'a str,
    #[serde(rename = "duration_seconds")]
    duration_seconds: u32,
    model: &'a str,
    instrumental: bool,
    language: &'a str,
    custom_mode: bool,
    call_back_url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct SunoGenerateResponse {
    #[serde(default)]
    data: Option<SunoTaskData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SunoTaskData {
    #[serde(default)]
    task_id: Option<String>,
}

/// Suno 客户端配置
#[derive(Debug, Clone)]
pub struct SunoClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key，未配置时所有请求返回 MissingCredential
    pub api_key: Option<SecretString>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 模型版本
    pub model: String,
    /// 生成时长（秒）
    pub duration_seconds: u32,
    /// 歌词语言
    pub language: String,
    /// 是否纯音乐
    pub instrumental: bool,
    /// 回调地址（必须能被 Suno 访问）
    pub callback_url: String,
}

impl Default for SunoClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://apibox.erweima.ai".to_string(),
            api_key: None,
            timeout_secs: 60,
            model: "V4".to_string(),
            duration_seconds: 30,
            language: "korean".to_string(),
            instrumental: false,
            callback_url: "http://localhost:8000/api/suno_callback".to_string(),
        }
    }
}

/// Suno 客户端
pub struct SunoClient {
    client: Client,
    config: SunoClientConfig,
}

impl SunoClient {
    pub fn new(config: SunoClientConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::Unavailable(e.to_string()))?;

        if config.api_key.is_none() {
            tracing::warn!("Suno API key is not configured, cloud generation will fail");
        }

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/v1/generate", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MusicGeneratorPort for SunoClient {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Cloud
    }

    async fn generate(&self, prompt: &PromptText) -> Result<GenerationOutcome, GeneratorError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(GeneratorError::MissingCredential("SUNO_API_KEY"))?;

        let request = SunoGenerateRequest {
            prompt: prompt.as_str(),
            duration_seconds: self.config.duration_seconds,
            model: &self.config.model,
            instrumental: self.config.instrumental,
            language: &self.config.language,
            custom_mode: false,
            call_back_url: &self.config.callback_url,
        };

        tracing::debug!(
            url = %self.generate_url(),
            callback_url = %self.config.callback_url,
            "Submitting Suno generation task"
        );

        let response = self
            .client
            .post(self.generate_url())
            .bearer_auth(api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else {
                    GeneratorError::Unavailable(format!("Suno API request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body_text = response.text().await.unwrap_or_default();
        tracing::debug!(status = %status, body = %body_text, "Suno generate response");

        if !status.is_success() {
            return Err(GeneratorError::Unavailable(format!(
                "Suno API HTTP {}: {}",
                status, body_text
            )));
        }

        let body: SunoGenerateResponse = serde_json::from_str(&body_text).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Suno response is not valid JSON");
            SunoGenerateResponse::default()
        });

        let task_id = body
            .data
            .and_then(|d| d.task_id)
            .filter(|id| !id.is_empty())
            .ok_or(GeneratorError::MissingTaskId)?;

        tracing::info!(task_id = %task_id, "Suno task accepted");

        Ok(GenerationOutcome::Pending(PendingAck {
            title: prompt.title(),
            source: GeneratorKind::Cloud.source_label().to_string(),
            message: PENDING_MESSAGE.to_string(),
            task_id,
        }))
    }
}
