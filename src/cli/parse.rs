//! # parse 子命令 CLI 定义
//!
//! 解析单个 SR 输出为 JSON
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/parse.rs`

use clap::Args;
use std::path::PathBuf;

/// parse 子命令参数
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Input SR output file (default: stdin)
    pub input: Option<PathBuf>,

    /// Output JSON file (default: stdout)
    pub output: Option<PathBuf>,

    /// Include the verbatim source lines in the output
    #[arg(long, default_value_t = false)]
    pub raw: bool,

    /// Write compact single-line JSON
    #[arg(long, default_value_t = false)]
    pub compact: bool,
}
