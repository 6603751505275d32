//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `parse`: 解析 SR 输出为 JSON
//! - `table`: 导出阻止本领表为 CSV
//! - `show`: 终端表格摘要
//! - `plot`: 阻止本领曲线图
//! - `batch`: 批量解析目录
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: parse, table, show, plot, batch

pub mod batch;
pub mod parse;
pub mod plot;
pub mod show;
pub mod table;

use clap::{Parser, Subcommand};

/// srim-srout - SRIM SR 输出解析工具
#[derive(Parser)]
#[command(name = "srim-srout")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Parse SRIM SR.exe / SRModule.exe stopping power and range reports", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Parse an SR output report and write it as JSON
    Parse(parse::ParseArgs),

    /// Export the stopping/range table as CSV
    Table(table::TableArgs),

    /// Print a summary of an SR output report
    Show(show::ShowArgs),

    /// Plot stopping power versus ion energy
    Plot(plot::PlotArgs),

    /// Parse every matching report in a directory to JSON
    Batch(batch::BatchArgs),
}
