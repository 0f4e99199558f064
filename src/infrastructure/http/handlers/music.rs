//! Music Handlers
//!
//! 同步生成器返回 200 + {url, title, source}，
//! 异步生成器返回 202 + {title, source, message, task_id}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateMusicCommand;
use crate::domain::GenerationOutcome;
use crate::infrastructure::http::dto::GenerateMusicRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 生成音乐
pub async fn generate_music(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateMusicRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let outcome = state
        .generate_music_handler
        .handle(GenerateMusicCommand {
            prompt: req.prompt,
            generator: req.generator,
        })
        .await?;

    let response = match outcome {
        GenerationOutcome::Complete(result) => (StatusCode::OK, Json(result)).into_response(),
        GenerationOutcome::Pending(ack) => (StatusCode::ACCEPTED, Json(ack)).into_response(),
    };

    Ok(response)
}
