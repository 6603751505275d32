//! # plot 命令实现
//!
//! 绘制阻止本领曲线图 (PNG/SVG)。
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `export/plot.rs`

use crate::cli::plot::PlotArgs;
use crate::error::Result;
use crate::export;
use crate::utils::output;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    let report = super::load_report(&args.input)?;

    let title = args.title.clone().unwrap_or_else(|| {
        if report.disk_file_name.is_empty() {
            format!("{} stopping power", report.projectile.name)
        } else {
            report.disk_file_name.clone()
        }
    });

    export::generate_stopping_plot(&report, &args.output, &title, args.width, args.height)?;

    output::print_success(&format!(
        "Stopping plot saved to '{}'",
        args.output.display()
    ));

    Ok(())
}
