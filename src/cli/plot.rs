//! # plot 子命令 CLI 定义
//!
//! 绘制阻止本领随能量变化的曲线
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::Args;
use std::path::PathBuf;

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input SR output file
    pub input: PathBuf,

    /// Output image (.png or .svg)
    #[arg(short, long, default_value = "stopping.png")]
    pub output: PathBuf,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: disk file name from the report)
    #[arg(long)]
    pub title: Option<String>,
}
