//! Prompt Commands - 提示词转换命令

/// 将用户描述转换为音乐生成提示词
#[derive(Debug, Clone)]
pub struct TransformPromptCommand {
    pub user_input: String,
}

/// 转换结果
#[derive(Debug, Clone)]
pub struct TransformPromptResponse {
    pub transformed_prompt: String,
}
