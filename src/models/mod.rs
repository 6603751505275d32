//! # 数据模型模块
//!
//! 定义 SR 报告解析结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `export/` 和 `commands/` 使用
//! - 子模块: report

pub mod report;

pub use report::{
    CompositionEntry, FileType, MeasurementRow, Projectile, RawLines, Report, TargetDensity,
};
