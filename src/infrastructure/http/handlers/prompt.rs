//! Prompt Handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::application::TransformPromptCommand;
use crate::infrastructure::http::dto::{TransformPromptRequest, TransformPromptResponseDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 将用户描述转换为音乐提示词
pub async fn transform_prompt(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransformPromptRequest>, JsonRejection>,
) -> Result<Json<TransformPromptResponseDto>, ApiError> {
    let Json(req) = payload?;

    let result = state
        .transform_prompt_handler
        .handle(TransformPromptCommand {
            user_input: req.user_input,
        })
        .await?;

    Ok(Json(TransformPromptResponseDto {
        transformed_prompt: result.transformed_prompt,
    }))
}
