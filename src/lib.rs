//! # srim-srout
//!
//! 把 SRIM 的 SR.exe / SRModule.exe 阻止本领与射程报告解析为结构化数据，
//! 能量统一为 keV，长度统一为 Å。
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = srim_srout::parse_file(Path::new("Hydrogen in Water.txt"))?;
//! for row in &report.measurement_table {
//!     println!("{} keV -> {} A", row.energy, row.projected_range);
//! }
//! # Ok::<(), srim_srout::SroutError>(())
//! ```
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── parsers/   (SR 输出解析器)
//!   ├── units/     (单位换算表)
//!   ├── models/    (数据模型)
//!   ├── export/    (JSON/CSV/绘图)
//!   ├── batch/     (批量处理)
//!   ├── cli/       (命令行参数定义)
//!   ├── commands/  (命令执行逻辑)
//!   ├── utils/     (工具函数)
//!   └── error.rs   (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod models;
pub mod parsers;
pub mod units;
pub mod utils;

pub use error::{FormatError, Result, SroutError};
pub use models::{CompositionEntry, FileType, MeasurementRow, Projectile, Report, TargetDensity};
pub use parsers::{parse, parse_content, parse_file};
