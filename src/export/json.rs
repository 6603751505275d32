//! # JSON 导出
//!
//! 使用 `serde_json` 序列化报告；原始行视图按需保留。
//!
//! ## 依赖关系
//! - 被 `commands/parse.rs`, `commands/batch.rs` 调用

use crate::error::{Result, SroutError};
use crate::models::Report;

use std::io::Write;

/// JSON 输出选项
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOptions {
    /// 是否包含原始行
    pub include_raw: bool,
    /// 紧凑输出（单行）
    pub compact: bool,
}

/// 序列化为 JSON 字符串
pub fn to_json_string(report: &Report, options: JsonOptions) -> Result<String> {
    let stripped;
    let report = if options.include_raw {
        report
    } else {
        stripped = report.without_raw();
        &stripped
    };

    let json = if options.compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    Ok(json)
}

/// 写入 JSON（末尾带换行）
pub fn write_json<W: Write>(report: &Report, options: JsonOptions, mut writer: W) -> Result<()> {
    let json = to_json_string(report, options)?;
    writeln!(writer, "{}", json).map_err(SroutError::StreamWrite)?;
    Ok(())
}
