//! Base64 音频负载

use base64::{engine::general_purpose::STANDARD, DecodeError, Engine};

/// 解码 Base64 音频（忽略换行等空白）
pub fn decode_audio_base64(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD.decode(compact.as_bytes())
}
