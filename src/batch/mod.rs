//! # 批量处理模块
//!
//! 提供目录级的批量解析能力。
//!
//! ## 功能
//! - 收集匹配文件列表
//! - 并行解析
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
