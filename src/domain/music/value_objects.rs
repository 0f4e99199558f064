//! Music Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::MusicError;

/// 音乐生成器类型
///
/// `Local` 为本地同步推理（MusicGen），`Cloud` 为云端异步任务（Suno）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Local,
    Cloud,
}

impl GeneratorKind {
    /// 所有生成器类型（用于启动时初始化目录）
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::Local, GeneratorKind::Cloud];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Cloud => "cloud",
        }
    }

    /// 音频文件存储子目录，同时也是 URL 中的路径段
    pub fn dir_name(&self) -> &'static str {
        self.as_str()
    }

    /// 返回给客户端的来源标签
    pub fn source_label(&self) -> &'static str {
        match self {
            Self::Local => "from MusicGen",
            Self::Cloud => "from Suno",
        }
    }

    /// 文件名前缀
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Self::Local => "musicgen",
            Self::Cloud => "suno",
        }
    }
}

impl Default for GeneratorKind {
    fn default() -> Self {
        Self::Cloud
    }
}

impl FromStr for GeneratorKind {
    type Err = MusicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" | "musicgen" => Ok(Self::Local),
            "cloud" | "suno" => Ok(Self::Cloud),
            _ => Err(MusicError::UnsupportedGenerator(s.to_string())),
        }
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 音乐生成提示词
///
/// 逗号分隔的描述性词组，唯一约束是去除首尾空白后非空
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptText(String);

impl PromptText {
    pub fn new(text: impl Into<String>) -> Result<Self, MusicError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(MusicError::EmptyPrompt);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 提示词标题：第一个逗号之前的部分（去除空白），无逗号时为整个提示词
    pub fn title(&self) -> String {
        self.0
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    }
}

impl std::fmt::Display for PromptText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 已完成的生成结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub url: String,
    pub title: String,
    pub source: String,
}

/// 异步任务已受理，音频将通过回调送达
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingAck {
    pub title: String,
    pub source: String,
    pub message: String,
    pub task_id: String,
}

/// 生成器的两种完成模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// 同步完成，音频已落盘
    Complete(GenerationResult),
    /// 已提交，等待回调
    Pending(PendingAck),
}
