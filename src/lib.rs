//! MetaTune - 情绪描述驱动的音乐生成中继服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Music Context: 提示词、生成器类型、同步结果与异步受理
//! - 提示词模板
//!
//! 应用层 (application/):
//! - Ports: LlmClient, MusicGenerator, ArtifactStore
//! - Commands: 提示词转换、音乐生成编排、回调落盘
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 静态音频文件
//! - Adapters: Ollama 客户端、MusicGen 客户端、Suno 客户端、文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
