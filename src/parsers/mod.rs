//! # 解析器模块
//!
//! 提供 SRIM SR 输出报告的解析入口。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型, `units/` 换算表
//! - 子模块: cursor, rows, sr_output

pub mod cursor;
pub mod rows;
pub mod sr_output;

use crate::error::{Result, SroutError};
use crate::models::Report;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 从任意输入流解析报告
pub fn parse<R: BufRead>(reader: R) -> Result<Report> {
    sr_output::parse_report(reader)
}

/// 从字符串内容解析报告
pub fn parse_content(content: &str) -> Result<Report> {
    parse(content.as_bytes())
}

/// 解析报告文件
pub fn parse_file(path: &Path) -> Result<Report> {
    let file = File::open(path).map_err(|e| SroutError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse(BufReader::new(file))
}
