use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::errors::DecodeError;

/// 将 Base64 字符串（可能缺少填充）解码为小写 HEX 格式
pub fn base64_to_hex(input: &str) -> Result<String, DecodeError> {
    // 补齐缺失的填充字符，使长度为4的倍数
    let missing_padding = input.len() % 4;
    let padded = if missing_padding > 0 {
        format!("{}{}", input, "=".repeat(4 - missing_padding))
    } else {
        input.to_string()
    };

    let decoded = STANDARD.decode(padded)?;
    Ok(hex::encode(decoded))
}
