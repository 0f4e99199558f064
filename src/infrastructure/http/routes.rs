//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping               GET   健康检查
//! - /api/transform_prompt   POST  用户描述 → 音乐提示词
//! - /api/generate-music     POST  生成音乐（local 同步 / cloud 异步）
//! - /api/suno_callback      POST  Suno 成品音频回调
//!
//! 音频文件由 server 挂载的静态文件服务提供

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/transform_prompt", post(handlers::transform_prompt))
        .route("/generate-music", post(handlers::generate_music))
        .route("/suno_callback", post(handlers::suno_callback))
}
