//! # show 子命令 CLI 定义
//!
//! 在终端打印报告摘要
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/show.rs`

use clap::Args;
use std::path::PathBuf;

/// show 子命令参数
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Input SR output file
    pub input: PathBuf,

    /// Number of table rows to print (0 = all)
    #[arg(short = 'n', long, default_value_t = 20)]
    pub rows: usize,
}
