//! Callback Commands - 云端生成结果回调

/// 保存回调音频命令
#[derive(Debug, Clone)]
pub struct StoreCallbackAudioCommand {
    /// Base64 编码的音频
    pub audio_base64: Option<String>,
    /// 上游任务 ID（仅用于日志，不做关联）
    pub task_id: Option<String>,
}

/// 回调保存结果
#[derive(Debug, Clone)]
pub struct StoreCallbackAudioResponse {
    pub url: String,
}
