//! Music Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MusicError {
    #[error("提示词不能为空")]
    EmptyPrompt,

    #[error("不支持的生成器: {0}")]
    UnsupportedGenerator(String),
}
