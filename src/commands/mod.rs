//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `export/`, `utils/`
//! - 子模块: parse, table, show, plot, batch

pub mod batch;
pub mod parse;
pub mod plot;
pub mod show;
pub mod table;

use crate::cli::Commands;
use crate::error::{Result, SroutError};
use crate::models::Report;
use crate::parsers;

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Parse(args) => parse::execute(args),
        Commands::Table(args) => table::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Plot(args) => plot::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}

/// 检查输入文件存在后解析
pub(crate) fn load_report(path: &Path) -> Result<Report> {
    if !path.is_file() {
        return Err(SroutError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    parsers::parse_file(path)
}
