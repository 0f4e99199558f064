//! MetaTune - 音乐生成中继服务
//!
//! 启动顺序：配置 → 日志 → 音频目录 → 适配器 → HTTP 服务器

use std::sync::Arc;

use metatune::application::{ArtifactStorePort, MusicGeneratorPort};
use metatune::config::{load_config, print_config, AppConfig};
use metatune::infrastructure::http::{AppState, HttpServer, ServerConfig};
use metatune::infrastructure::{
    FileArtifactStore, MusicGenClient, MusicGenClientConfig, OllamaClient, OllamaClientConfig,
    SunoClient, SunoClientConfig,
};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},metatune={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("MetaTune - music generation relay");
    print_config(&config);

    // 在接收请求前创建 local/ 与 cloud/ 目录
    let artifact_store: Arc<dyn ArtifactStorePort> = Arc::new(
        FileArtifactStore::new(
            &config.storage.audio_dir,
            config.storage.url_base(&config.server),
        )
        .await?,
    );

    let llm_client = Arc::new(OllamaClient::new(
        OllamaClientConfig::new(&config.llm.url)
            .with_model(&config.llm.model)
            .with_timeout(config.llm.timeout_secs),
    )?);

    let musicgen = MusicGenClient::new(
        MusicGenClientConfig {
            base_url: config.musicgen.url.clone(),
            model: config.musicgen.model.clone(),
            timeout_secs: config.musicgen.timeout_secs,
        },
        artifact_store.clone(),
    )?;

    let suno = SunoClient::new(SunoClientConfig {
        base_url: config.suno.url.clone(),
        api_key: config.suno.api_key.clone(),
        timeout_secs: config.suno.timeout_secs,
        model: config.suno.model.clone(),
        duration_seconds: config.suno.duration_seconds,
        language: config.suno.language.clone(),
        instrumental: config.suno.instrumental,
        callback_url: config.suno.resolved_callback_url(&config.server),
    })?;

    let generators: Vec<Arc<dyn MusicGeneratorPort>> = vec![Arc::new(musicgen), Arc::new(suno)];

    let state = AppState::new(llm_client, generators, artifact_store);

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_artifacts(&config.storage.audio_dir, &config.storage.mount_path);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
