use std::fmt;

/// 密钥对中发生解码失败的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyField {
    Kid,
    K,
}

impl fmt::Display for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kid => write!(f, "kid"),
            Self::K => write!(f, "k"),
        }
    }
}

/// 解析过程中产生的诊断事件，如何展示由调用方决定
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// 区块缺少 tvg-id 或 url，被整体跳过
    SectionSkipped { content: String },

    /// 某组密钥的 Base64 解码失败，对应槽位留空
    KeyDecodeFailed {
        slot: usize,
        field: KeyField,
        value: String,
        reason: String,
    },
}
