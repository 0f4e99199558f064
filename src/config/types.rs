//! Configuration Types
//!
//! 定义所有配置结构体

use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 提示词转换用的语言模型
    #[serde(default)]
    pub llm: LlmConfig,

    /// 本地 MusicGen 配置
    #[serde(default)]
    pub musicgen: MusicGenConfig,

    /// Suno 云端配置
    #[serde(default)]
    pub suno: SunoConfig,

    /// 音频存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL（音频 URL 与 Suno 回调地址使用）
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let host = if self.host == "0.0.0.0" {
                    "localhost"
                } else {
                    &self.host
                };
                format!("http://{}:{}", host, self.port)
            }
        }
    }
}

/// 语言模型配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// 服务基础 URL
    #[serde(default = "default_ollama_url")]
    pub url: String,

    /// 模型名称
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_llm_model() -> String {
    "mistral".to_string()
}

fn default_llm_timeout() -> u64 {
    20
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            model: default_llm_model(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

/// 本地 MusicGen 配置
#[derive(Debug, Clone, Deserialize)]
pub struct MusicGenConfig {
    /// 服务基础 URL
    #[serde(default = "default_ollama_url")]
    pub url: String,

    /// 模型名称
    #[serde(default = "default_musicgen_model")]
    pub model: String,

    /// 请求超时时间（秒），生成较慢，默认 5 分钟
    #[serde(default = "default_musicgen_timeout")]
    pub timeout_secs: u64,
}

fn default_musicgen_model() -> String {
    "musicgen".to_string()
}

fn default_musicgen_timeout() -> u64 {
    300
}

impl Default for MusicGenConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            model: default_musicgen_model(),
            timeout_secs: default_musicgen_timeout(),
        }
    }
}

/// Suno 云端配置
#[derive(Debug, Clone, Deserialize)]
pub struct SunoConfig {
    /// API 基础 URL
    #[serde(default = "default_suno_url")]
    pub url: String,

    /// API Key，未设置时 cloud 生成器始终失败
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// 请求超时时间（秒）
    #[serde(default = "default_suno_timeout")]
    pub timeout_secs: u64,

    /// 模型版本
    #[serde(default = "default_suno_model")]
    pub model: String,

    /// 生成时长（秒）
    #[serde(default = "default_suno_duration")]
    pub duration_seconds: u32,

    /// 歌词语言
    #[serde(default = "default_suno_language")]
    pub language: String,

    /// 是否纯音乐
    #[serde(default)]
    pub instrumental: bool,

    /// 回调地址，未设置时使用 {public_base_url}/api/suno_callback
    #[serde(default)]
    pub callback_url: Option<String>,
}

fn default_suno_url() -> String {
    "https://apibox.erweima.ai".to_string()
}

fn default_suno_timeout() -> u64 {
    60
}

fn default_suno_model() -> String {
    "V4".to_string()
}

fn default_suno_duration() -> u32 {
    30
}

fn default_suno_language() -> String {
    "korean".to_string()
}

impl Default for SunoConfig {
    fn default() -> Self {
        Self {
            url: default_suno_url(),
            api_key: None,
            timeout_secs: default_suno_timeout(),
            model: default_suno_model(),
            duration_seconds: default_suno_duration(),
            language: default_suno_language(),
            instrumental: false,
            callback_url: None,
        }
    }
}

impl SunoConfig {
    /// 实际使用的回调地址
    pub fn resolved_callback_url(&self, server: &ServerConfig) -> String {
        self.callback_url
            .clone()
            .unwrap_or_else(|| format!("{}/api/suno_callback", server.public_base_url()))
    }
}

/// 音频存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频根目录（下设 local/ 与 cloud/）
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// 静态文件挂载路径
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("generated_audios")
}

fn default_mount_path() -> String {
    "/generated_audios".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
            mount_path: default_mount_path(),
        }
    }
}

impl StorageConfig {
    /// 音频 URL 前缀
    pub fn url_base(&self, server: &ServerConfig) -> String {
        format!(
            "{}/{}",
            server.public_base_url(),
            self.mount_path.trim_matches('/')
        )
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
