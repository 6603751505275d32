//! # srim-srout 命令行入口
//!
//! ## 子命令
//! - `parse` - 解析为 JSON（默认 stdin -> stdout）
//! - `table` - 导出阻止本领表为 CSV
//! - `show`  - 终端摘要
//! - `plot`  - 阻止本领曲线图
//! - `batch` - 批量解析目录

use clap::Parser;
use srim_srout::cli::Cli;
use srim_srout::{commands, utils};

/// 输入不是合法的 SR 报告 (sysexits EX_DATAERR)
const EXIT_FORMAT_ERROR: i32 = 65;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        let code = if e.is_format_error() {
            EXIT_FORMAT_ERROR
        } else {
            1
        };
        std::process::exit(code);
    }
}
