//! LLM Adapter - 提示词转换用的文本补全客户端

mod ollama_client;

pub use ollama_client::*;
