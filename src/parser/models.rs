use serde::Serialize;
use serde_derive::Deserialize;
use std::collections::BTreeMap;

use super::diagnostics::Diagnostic;

/// 默认 HTTP User-Agent (电视盒子环境)
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Linux; Android 10; BRAVIA 4K VH2 Build/QTG3.200305.006.S292; wv)";

/// 下游固定使用的分辨率标记
pub const DEFAULT_RESOLUTION: &str = "1280";

/// 每个频道最多保留的密钥对数量
pub const MAX_KEY_SLOTS: usize = 4;

/// 单个频道的流媒体元数据记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub url: String,
    pub key1: String,
    pub key2: String,
    pub key3: String,
    // 如果 key4 是空的，省略输出
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub key4: String,
    #[serde(rename = "useragent")]
    pub user_agent: String,
    pub authorization: String,
    pub proxy: String,
    #[serde(rename = "shaka-packager")]
    pub shaka_packager: bool,
    pub resolution: String,
}

/// 一次解析的完整结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutcome {
    /// tvg-id -> 流记录，同名频道后出现者覆盖先出现者
    pub streams: BTreeMap<String, StreamRecord>,
    /// 解析过程中产生的诊断事件
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn new() -> Self {
        Self::default()
    }
}
