use regex::Regex;
use tracing::debug;

pub mod diagnostics;
pub mod errors;
pub mod key_codec;
pub mod models;

use diagnostics::{Diagnostic, KeyField};
use models::{DEFAULT_RESOLUTION, DEFAULT_USER_AGENT, MAX_KEY_SLOTS, ParseOutcome, StreamRecord};

/// M3U播放列表解析器，持有编译好的各字段匹配模式
pub struct PlaylistParser {
    tvg_id_regex: Regex,
    url_regex: Regex,
    license_key_regex: Regex,
    user_agent_regex: Regex,
}

impl PlaylistParser {
    pub fn new() -> Self {
        Self {
            tvg_id_regex: Regex::new(r#"tvg-id\s*=\s*"([^"]+)""#).unwrap(),
            url_regex: Regex::new(r"(https?://[^\s]+\.mpd)").unwrap(),
            // 源内顺序为先 k 后 kid
            license_key_regex: Regex::new(r#""k"\s*:\s*"([^"]+)"\s*,\s*"kid"\s*:\s*"([^"]+)""#)
                .unwrap(),
            user_agent_regex: Regex::new(r#"#EXTVLCOPT:http-user-agent="([^"]+)""#).unwrap(),
        }
    }

    /// 解析入口：返回频道映射与诊断事件，不会因格式错误而失败
    pub fn parse(&self, content: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::new();

        // 统一换行符为 \n
        let content = content.replace("\r\n", "\n");

        // 按 #EXTINF 分割出各频道区块
        for section in content.split("#EXTINF") {
            if section.is_empty() {
                continue;
            }

            debug!("正在处理区块:\n{}", section);
            self.parse_section(section, &mut outcome);
        }

        outcome
    }

    /// 处理单个频道区块
    fn parse_section(&self, section: &str, outcome: &mut ParseOutcome) {
        // 提取tvg-id和该区块的唯一URL
        let tvg_id = self
            .tvg_id_regex
            .captures(section)
            .map(|caps| caps[1].to_string());
        let url = self.url_regex.find(section).map(|m| m.as_str().to_string());

        let (Some(tvg_id), Some(url)) = (tvg_id, url) else {
            outcome.diagnostics.push(Diagnostic::SectionSkipped {
                content: section.to_string(),
            });
            return;
        };

        debug!("找到 tvg-id: {}, url: {}", tvg_id, url);

        let [key1, key2, key3, key4] = self.extract_keys(section, &mut outcome.diagnostics);

        // 提取user-agent，若没有找到则使用默认值
        let user_agent = self
            .user_agent_regex
            .captures(section)
            .map_or_else(|| DEFAULT_USER_AGENT.to_string(), |caps| caps[1].to_string());

        // 同名频道直接覆盖，不做合并
        outcome.streams.insert(
            tvg_id,
            StreamRecord {
                url,
                key1,
                key2,
                key3,
                key4,
                user_agent,
                authorization: String::new(),
                proxy: String::new(),
                shaka_packager: false,
                resolution: DEFAULT_RESOLUTION.to_string(),
            },
        );
    }

    /// 提取区块内的解密密钥对并转换为hex，最多保留前4组
    fn extract_keys(
        &self,
        section: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> [String; MAX_KEY_SLOTS] {
        let mut slots: [String; MAX_KEY_SLOTS] = Default::default();

        for (i, caps) in self.license_key_regex.captures_iter(section).enumerate() {
            if i >= MAX_KEY_SLOTS {
                break;
            }

            let k_base64 = caps[1].trim().to_string();
            let kid_base64 = caps[2].trim().to_string();

            debug!("找到 kid (Base64): {}, k (Base64): {}", kid_base64, k_base64);

            // Base64 解码并转换为 HEX，任一解码失败则跳过该组
            let kid_hex = match key_codec::base64_to_hex(&kid_base64) {
                Ok(hex) => hex,
                Err(e) => {
                    diagnostics.push(Diagnostic::KeyDecodeFailed {
                        slot: i,
                        field: KeyField::Kid,
                        value: kid_base64,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            let k_hex = match key_codec::base64_to_hex(&k_base64) {
                Ok(hex) => hex,
                Err(e) => {
                    diagnostics.push(Diagnostic::KeyDecodeFailed {
                        slot: i,
                        field: KeyField::K,
                        value: k_base64,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            // 组合为 kid:k 形式
            slots[i] = format!("{}:{}", kid_hex, k_hex);

            debug!("转换后的 key{}: {}", i + 1, slots[i]);
        }

        slots
    }
}
