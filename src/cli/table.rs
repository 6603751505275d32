//! # table 子命令 CLI 定义
//!
//! 导出阻止本领/射程表为 CSV
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/table.rs`

use clap::Args;
use std::path::PathBuf;

/// table 子命令参数
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Input SR output file
    pub input: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
