//! Suno Callback Handler
//!
//! 接收 Suno 推送的成品音频。请求体手动解析，
//! 以便区分"缺少字段"(400) 与"无法解析"(500)

use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

use crate::application::{ApplicationError, StoreCallbackAudioCommand};
use crate::infrastructure::http::dto::{SunoCallbackRequest, SunoCallbackResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn suno_callback(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SunoCallbackResponseDto>, ApiError> {
    let req: SunoCallbackRequest = serde_json::from_slice(&body)
        .map_err(|e| ApplicationError::malformed(format!("Invalid callback body: {}", e)))?;

    let result = state
        .store_callback_handler
        .handle(StoreCallbackAudioCommand {
            audio_base64: req.audio_base64,
            task_id: req.task_id,
        })
        .await?;

    Ok(Json(SunoCallbackResponseDto {
        status: "success",
        url: result.url,
    }))
}
