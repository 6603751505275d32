//! # 报告导出
//!
//! 把解析后的 `Report` 写出为 JSON、CSV 表格或阻止本领曲线图。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/report.rs`
//! - 子模块: json, table, plot

pub mod json;
pub mod plot;
pub mod table;

pub use json::{to_json_string, write_json, JsonOptions};
pub use plot::generate_stopping_plot;
pub use table::write_table_csv;
