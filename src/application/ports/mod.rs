//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod artifact_store;
mod llm_client;
mod music_generator;

pub use artifact_store::{ArtifactStoreError, ArtifactStorePort, StoredArtifact};
pub use llm_client::{LlmClientPort, LlmError};
pub use music_generator::{GeneratorError, MusicGeneratorPort};
