//! 提示词模板
//!
//! 把用户的情绪 / 场景描述包装成发给语言模型的完整指令

/// 固定的系统指令
pub const SYSTEM_INSTRUCTION: &str = "You are a music prompt generator. Convert the user's emotional or situational input into a concise, comma-separated music generation prompt. Include elements like mood, genre, tempo, instruments, rhythm, structure, and atmosphere. Do not use full sentences. Just list all elements clearly, separated by commas.
Example Output: tense, ambient cinematic, 70 BPM, low cello drones and dissonant piano hits, repetitive and sparse rhythm, slow build-up to climax then fade-out, eerie and suspenseful";

/// 构建完整提示：系统指令 + 用户原文
pub fn build_transform_prompt(user_input: &str) -> String {
    format!(
        "{}\n\nUser input: \"{}\"\nOutput:",
        SYSTEM_INSTRUCTION, user_input
    )
}
