//! # parse 命令实现
//!
//! 解析单个 SR 输出并写出 JSON。输入默认 stdin，输出默认 stdout。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `parsers/`, `export/json.rs`
//! - 使用 `utils/output.rs`

use crate::cli::parse::ParseArgs;
use crate::error::{Result, SroutError};
use crate::export::{self, JsonOptions};
use crate::parsers;
use crate::utils::output;

use std::fs::File;
use std::io::{self, BufWriter, Write};

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    let report = match &args.input {
        Some(path) => super::load_report(path)?,
        None => parsers::parse(io::stdin().lock())?,
    };

    let options = JsonOptions {
        include_raw: args.raw,
        compact: args.compact,
    };

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| SroutError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            let mut writer = BufWriter::new(file);
            export::write_json(&report, options, &mut writer)?;
            writer.flush().map_err(|e| SroutError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;

            output::print_success(&format!(
                "{} rows ({}) -> '{}'",
                report.measurement_table.len(),
                report.file_type,
                path.display()
            ));
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::write_json(&report, options, &mut writer)?;
            writer.flush().map_err(SroutError::StreamWrite)?;
        }
    }

    Ok(())
}
