//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use secrecy::SecretString;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 兼容的 Suno API Key 环境变量
const SUNO_API_KEY_ENV: &str = "SUNO_API_KEY";

/// 加载应用配置
///
/// # 环境变量示例
/// - `METATUNE_SERVER__PORT=8000`
/// - `METATUNE_LLM__URL=http://ollama:11434`
/// - `METATUNE_SUNO__API_KEY=...`（也可以直接使用 `SUNO_API_KEY`）
/// - `METATUNE_STORAGE__AUDIO_DIR=/data/generated_audios`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("llm.url", "http://localhost:11434")?
        .set_default("llm.model", "mistral")?
        .set_default("llm.timeout_secs", 20)?
        .set_default("musicgen.url", "http://localhost:11434")?
        .set_default("musicgen.model", "musicgen")?
        .set_default("musicgen.timeout_secs", 300)?
        .set_default("suno.url", "https://apibox.erweima.ai")?
        .set_default("suno.timeout_secs", 60)?
        .set_default("storage.audio_dir", "generated_audios")?
        .set_default("storage.mount_path", "/generated_audios")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量
    // 前缀: METATUNE_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("METATUNE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    if app_config.suno.api_key.is_none() {
        app_config.suno.api_key = std::env::var(SUNO_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);
    }

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    for (name, url) in [
        ("LLM", &config.llm.url),
        ("MusicGen", &config.musicgen.url),
        ("Suno", &config.suno.url),
    ] {
        if url.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "{} URL cannot be empty",
                name
            )));
        }
    }

    let mount = &config.storage.mount_path;
    if !mount.starts_with('/') || mount.trim_matches('/').is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "Storage mount path must be a non-root absolute path: {:?}",
            mount
        )));
    }

    if config.storage.audio_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("LLM: {} (model={}, timeout={}s)", config.llm.url, config.llm.model, config.llm.timeout_secs);
    tracing::info!(
        "MusicGen: {} (model={}, timeout={}s)",
        config.musicgen.url,
        config.musicgen.model,
        config.musicgen.timeout_secs
    );
    tracing::info!("Suno: {} (timeout={}s)", config.suno.url, config.suno.timeout_secs);
    tracing::info!("Suno API Key: {}", if config.suno.api_key.is_some() { "configured" } else { "missing" });
    tracing::info!("Suno Callback: {}", config.suno.resolved_callback_url(&config.server));
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Audio URL Base: {}", config.storage.url_base(&config.server));
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
