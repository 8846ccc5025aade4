use clap::Parser;
use std::path::PathBuf;

/// M3U直播源转JSON工具
#[derive(Parser, Debug)]
#[command(name = "m3u2json")]
#[command(version = "1.0")]
#[command(about = "从M3U播放列表提取频道元数据并输出JSON", long_about = None)]
pub struct Cli {
    /// M3U 文件路径 (不提供时进入交互式输入)
    #[arg(value_name = "FILE")]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// 结果JSON的保存路径
    #[arg(long, value_name = "FILE")]
    #[arg(default_value = "output.json")]
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,
}
