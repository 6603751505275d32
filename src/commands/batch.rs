//! # batch 命令实现
//!
//! 并行解析目录中所有匹配的 SR 输出，每个文件写出 `<stem>.json`，
//! 输出目录镜像输入的子目录结构。
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的参数
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `parsers/`, `export/json.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::batch::BatchArgs;
use crate::error::{Result, SroutError};
use crate::export::{self, JsonOptions};
use crate::parsers;
use crate::utils::output;

use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Parsing SR Output Files");

    if !args.input.is_dir() {
        return Err(SroutError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to parse", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| SroutError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let config = BatchConfig {
        input_root: args.input.clone(),
        output_dir: args.output.clone(),
        options: JsonOptions {
            include_raw: args.raw,
            compact: false,
        },
        overwrite: args.overwrite,
    };

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| process_file(file, &config))?;

    output::print_separator();
    output::print_done(&format!(
        "Parsed {} of {} file(s) into '{}' ({} skipped, {} failed)",
        result.success,
        result.total(),
        args.output.display(),
        result.skipped,
        result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 批量处理配置
struct BatchConfig {
    /// 输入目录，输出按相对路径镜像
    input_root: PathBuf,
    output_dir: PathBuf,
    options: JsonOptions,
    overwrite: bool,
}

/// 输出文件路径
///
/// 保留输入相对 `input_root` 的子目录，递归模式下同名文件不会互相覆盖。
fn output_path(input: &Path, input_root: &Path, output_dir: &Path) -> PathBuf {
    let relative = match input.strip_prefix(input_root) {
        Ok(rel) if rel.file_name().is_some() => rel.to_path_buf(),
        _ => PathBuf::from(input.file_name().unwrap_or_else(|| OsStr::new("report"))),
    };
    output_dir.join(relative).with_extension("json")
}

/// 处理单个文件
fn process_file(input: &PathBuf, config: &BatchConfig) -> ProcessResult {
    let output_file = output_path(input, &config.input_root, &config.output_dir);

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    match convert_file(input, &output_file, config.options) {
        Ok(()) => {
            ProcessResult::Success(format!("{} -> {}", input.display(), output_file.display()))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 解析并写出 JSON
fn convert_file(input: &Path, output: &Path, options: JsonOptions) -> Result<()> {
    let report = parsers::parse_file(input)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| SroutError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let file = File::create(output).map_err(|e| SroutError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    export::write_json(&report, options, &mut writer)?;
    writer.flush().map_err(|e| SroutError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;

    Ok(())
}
