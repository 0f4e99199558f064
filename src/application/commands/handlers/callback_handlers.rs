//! Callback Command Handlers - 云端音频回调落盘
//!
//! 回调与发起请求之间没有关联：只负责解码并保存到 cloud 目录

use std::sync::Arc;

use crate::application::commands::{StoreCallbackAudioCommand, StoreCallbackAudioResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::ArtifactStorePort;
use crate::domain::{decode_audio_base64, GeneratorKind};

/// StoreCallbackAudio Handler
pub struct StoreCallbackAudioHandler {
    artifact_store: Arc<dyn ArtifactStorePort>,
}

impl StoreCallbackAudioHandler {
    pub fn new(artifact_store: Arc<dyn ArtifactStorePort>) -> Self {
        Self { artifact_store }
    }

    pub async fn handle(
        &self,
        cmd: StoreCallbackAudioCommand,
    ) -> Result<StoreCallbackAudioResponse, ApplicationError> {
        let audio_base64 = cmd
            .audio_base64
            .filter(|s| !s.is_empty())
            .ok_or(ApplicationError::MissingAudioField)?;

        let audio = decode_audio_base64(&audio_base64)
            .map_err(|e| ApplicationError::malformed(format!("Invalid base64 audio: {}", e)))?;

        let artifact = self
            .artifact_store
            .store(GeneratorKind::Cloud, &audio)
            .await?;

        tracing::info!(
            task_id = cmd.task_id.as_deref().unwrap_or("-"),
            path = %artifact.path.display(),
            size = audio.len(),
            "Callback audio stored"
        );

        Ok(StoreCallbackAudioResponse { url: artifact.url })
    }
}
