use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use m3u_json::cli::Cli;
use m3u_json::parser::PlaylistParser;
use m3u_json::parser::diagnostics::Diagnostic;
use m3u_json::{log_error, log_info, log_step, log_success, log_warning};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 确定M3U文件路径：优先使用命令行参数，否则交互式输入
fn resolve_input_path(args: &Cli) -> Result<PathBuf> {
    if let Some(path) = &args.input {
        return Ok(path.clone());
    }

    // 手动输入文件路径
    print!("请输入 M3U 文件路径（如在当前目录下，直接输入M3U文件名就可以）: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        return Err("未提供M3U文件路径".into());
    }

    Ok(PathBuf::from(path))
}

/// 将解析诊断事件输出到控制台
fn report_diagnostics(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        match diag {
            Diagnostic::SectionSkipped { content } => {
                log_warning!("未找到有效的 tvg-id 或 url，该区块已跳过");
                debug!("区块内容:\n{}", content);
            }
            Diagnostic::KeyDecodeFailed {
                slot,
                field,
                value,
                reason,
            } => {
                log_warning!(
                    "解析 key{} 的 {} 时发生错误: {}, Base64 值: {}",
                    slot + 1,
                    field,
                    reason,
                    value
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Cli::parse();

    let input_path = resolve_input_path(&args)?;
    log_step!("读取 M3U 文件: {}", input_path.display());

    let content = tokio::fs::read_to_string(&input_path).await.map_err(|e| {
        log_error!("读取M3U文件失败: {}", e);
        e
    })?;

    // 处理换行符，统一为 \n
    let content = content.replace("\r\n", "\n");

    info!("开始解析...");
    let parser = PlaylistParser::new();
    let outcome = parser.parse(&content);

    report_diagnostics(&outcome.diagnostics);
    log_info!("解析完成，共提取 {} 个频道", outcome.streams.len());

    // 转换为JSON输出
    let json_data = serde_json::to_string_pretty(&outcome.streams)?;
    tokio::fs::write(&args.output, json_data).await.map_err(|e| {
        log_error!("写入结果文件失败: {}", e);
        e
    })?;

    log_success!("转换完成，结果保存在 {} 中", args.output.display());
    Ok(())
}
