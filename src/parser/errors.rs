use thiserror::Error;

/// 密钥转码错误
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Base64解码错误: {0}")]
    Base64(#[from] base64::DecodeError),
}
