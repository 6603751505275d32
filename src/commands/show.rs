//! # show 命令实现
//!
//! 在终端打印报告摘要：投射离子、靶材、组分表与阻止本领表。
//!
//! ## 依赖关系
//! - 使用 `cli/show.rs` 定义的参数
//! - 使用 `models/report.rs`
//! - 使用 `utils/output.rs`, `tabled`

use crate::cli::show::ShowArgs;
use crate::error::Result;
use crate::models::{CompositionEntry, MeasurementRow, Report};
use crate::utils::output;

use tabled::{Table, Tabled};

/// 组分表行
#[derive(Debug, Clone, Tabled)]
struct CompositionRow {
    #[tabled(rename = "Atom")]
    symbol: String,
    #[tabled(rename = "Z")]
    number: String,
    #[tabled(rename = "Atomic %")]
    atomic_percent: String,
    #[tabled(rename = "Mass %")]
    mass_percent: String,
}

impl From<&CompositionEntry> for CompositionRow {
    fn from(e: &CompositionEntry) -> Self {
        CompositionRow {
            symbol: e.symbol.clone(),
            number: format!("{}", e.atomic_number),
            atomic_percent: format!("{:.2}", e.atomic_percent),
            mass_percent: format!("{:.2}", e.mass_percent),
        }
    }
}

/// 阻止本领表行
#[derive(Debug, Clone, Tabled)]
struct StoppingRow {
    #[tabled(rename = "Energy (keV)")]
    energy: String,
    #[tabled(rename = "dE/dx Elec.")]
    elec: String,
    #[tabled(rename = "dE/dx Nuclear")]
    nuclear: String,
    #[tabled(rename = "Range (Å)")]
    range: String,
    #[tabled(rename = "Long. Strag. (Å)")]
    longitudinal: String,
    #[tabled(rename = "Lat. Strag. (Å)")]
    lateral: String,
}

impl From<&MeasurementRow> for StoppingRow {
    fn from(r: &MeasurementRow) -> Self {
        StoppingRow {
            energy: format!("{:.4}", r.energy),
            elec: format!("{:.3E}", r.elec_stopping),
            nuclear: format!("{:.3E}", r.nuclear_stopping),
            range: format!("{:.1}", r.projected_range),
            longitudinal: format!("{:.1}", r.longitudinal_straggling),
            lateral: format!("{:.1}", r.lateral_straggling),
        }
    }
}

/// 执行 show 命令
pub fn execute(args: ShowArgs) -> Result<()> {
    let report = super::load_report(&args.input)?;

    output::print_header(&format!("SR Report: {}", report.disk_file_name));
    for line in summary_lines(&report) {
        output::print_info(&line);
    }

    if !report.target_composition.is_empty() {
        output::print_header("Target Composition");
        let rows: Vec<CompositionRow> = report
            .target_composition
            .iter()
            .map(CompositionRow::from)
            .collect();
        println!("{}", Table::new(&rows));
    }

    if report.measurement_table.is_empty() {
        output::print_warning("Stopping table is empty");
        return Ok(());
    }

    let limit = if args.rows == 0 {
        report.measurement_table.len()
    } else {
        args.rows.min(report.measurement_table.len())
    };

    output::print_header(&format!(
        "Stopping Table ({} of {} rows, dE/dx in {})",
        limit,
        report.measurement_table.len(),
        report.stopping_unit
    ));
    let rows: Vec<StoppingRow> = report
        .measurement_table
        .iter()
        .take(limit)
        .map(StoppingRow::from)
        .collect();
    println!("{}", Table::new(&rows));

    if let Some(peak) = report.peak_elec_stopping() {
        output::print_separator();
        output::print_info(&format!(
            "Peak electronic stopping {:.4E} at {:.4} keV",
            peak.elec_stopping, peak.energy
        ));
    }

    Ok(())
}

/// 报告头部信息
fn summary_lines(report: &Report) -> Vec<String> {
    let mut lines = vec![
        format!("Format:         {}", report.file_type),
        format!("Version:        {}", report.srim_version),
        format!("Date:           {}", report.calc_date),
        format!(
            "Ion:            {} [{}], {} amu",
            report.projectile.name, report.projectile.atomic_number, report.projectile.mass_amu
        ),
        format!(
            "Density:        {:.4E} g/cm3 = {:.4E} atoms/cm3",
            report.density.mass_density, report.density.atom_density
        ),
        format!("Bragg corr.:    {:.2}%", report.bragg_correction),
        format!(
            "Stopping units: {} (#{})",
            report.stopping_unit, report.stopping_unit.index
        ),
    ];

    if let Some((lo, hi)) = report.energy_range() {
        lines.push(format!("Energy range:   {} - {} keV", lo, hi));
    }

    lines
}
