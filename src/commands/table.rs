//! # table 命令实现
//!
//! 导出阻止本领/射程表为 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/table.rs` 定义的参数
//! - 使用 `export/table.rs`

use crate::cli::table::TableArgs;
use crate::error::{Result, SroutError};
use crate::export;
use crate::utils::output;

use std::fs::File;
use std::io;

/// 执行 table 命令
pub fn execute(args: TableArgs) -> Result<()> {
    let report = super::load_report(&args.input)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| SroutError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            export::write_table_csv(&report, file)?;
            output::print_success(&format!(
                "{} rows saved to '{}'",
                report.measurement_table.len(),
                path.display()
            ));
        }
        None => export::write_table_csv(&report, io::stdout().lock())?,
    }

    Ok(())
}
