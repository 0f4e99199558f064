//! Data Transfer Objects

use serde::{Deserialize, Serialize};

// ============================================================================
// Prompt DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct TransformPromptRequest {
    #[serde(default)]
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct TransformPromptResponseDto {
    pub transformed_prompt: String,
}

// ============================================================================
// Music DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateMusicRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub generator: Option<String>,
}

// ============================================================================
// Callback DTOs
// ============================================================================

/// Suno 回调负载
#[derive(Debug, Deserialize)]
pub struct SunoCallbackRequest {
    #[serde(default)]
    pub audio_base64: Option<String>,
    #[serde(default, alias = "taskId")]
    pub task_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SunoCallbackResponseDto {
    pub status: &'static str,
    pub url: String,
}
