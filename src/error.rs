//! # 统一错误处理模块
//!
//! 定义 srim-srout 的所有错误类型，使用 `thiserror` 派生。
//!
//! - `FormatError`: 报告格式错误（解析核心唯一的错误种类）
//! - `SroutError`: 命令行层的统一错误，包装 I/O、序列化、绘图错误
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// SR 输出格式错误
///
/// 行号由调用方（`SroutError::Format`）附加，行级解析器只描述原因。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("expected at least {expected} tokens in {what}, found {found}")]
    TooFewTokens {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid number '{token}' in {what}")]
    InvalidNumber { what: &'static str, token: String },

    #[error("unknown {kind} unit '{label}'")]
    UnknownUnit { kind: &'static str, label: String },

    #[error("unknown stopping unit title '{0}'")]
    UnknownStoppingUnit(String),

    #[error("missing '{delimiter}' in {what}")]
    MissingDelimiter {
        what: &'static str,
        delimiter: &'static str,
    },

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
}

/// srim-srout 统一错误类型
#[derive(Error, Debug)]
pub enum SroutError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read input stream")]
    StreamRead(#[source] std::io::Error),

    #[error("Failed to write output stream")]
    StreamWrite(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed SR output at line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },

    // ─────────────────────────────────────────────────────────────
    // 导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot error: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SroutError {
    /// 在指定行构造格式错误
    pub fn format(line: usize, source: FormatError) -> Self {
        SroutError::Format { line, source }
    }

    /// 是否为输入格式错误（决定退出码）
    pub fn is_format_error(&self) -> bool {
        matches!(self, SroutError::Format { .. })
    }

    /// 取出底层的格式错误
    pub fn as_format_error(&self) -> Option<&FormatError> {
        match self {
            SroutError::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SroutError>;
