//! Music Commands - 音乐生成命令

/// 生成音乐命令
///
/// `generator` 保留原始字符串，由处理器解析，未知名称返回 UnsupportedGenerator
#[derive(Debug, Clone)]
pub struct GenerateMusicCommand {
    pub prompt: String,
    pub generator: Option<String>,
}
