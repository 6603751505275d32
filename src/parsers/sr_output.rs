//! # SRIM SR 输出解析器
//!
//! 解析 SR.exe (SRIM-2013) 与 SRModule.exe 产生的阻止本领/射程报告。
//!
//! ## 格式说明
//! ```text
//! ==================================================================
//! Calculation using SRIM-2006                  <- 仅 SRModule.exe
//! SRIM version ---> SRIM-2013.00
//! Calc. date   ---> February 22, 2016
//! ==================================================================
//!
//! Disk File Name = Hydrogen in 1_3 Propanediol
//!
//! Ion = Hydrogen [1] , Mass = 1.008 amu
//!
//! Target Density =  1.0597E+00 g/cm3 = 1.0903E+23 atoms/cm3
//! ======= Target  Composition ========
//! Atom   Atom   Atomic    Mass
//! Name   Numb   Percent   Percent
//! ----   ----   -------   -------
//! H      1    061.54    010.60
//! ...
//! ====================================        <- 36 个 '='
//! Bragg Correction = -5.43%
//! Stopping Units =  MeV / (mg/cm2)
//! See bottom of Table for other Stopping units
//!
//! Ion = Hydrogen     [1] , Mass = 1.008 amu   <- 仅 SRModule.exe，后接一空行
//! Ion        dE/dx      dE/dx     Projected  Longitudinal   Lateral
//! Energy      Elec.      Nuclear     Range     Straggling   Straggling
//! -----------  ---------- ---------- ----------  ----------  ----------
//! 10.00 keV   4.945E-01  8.762E-03    2247 A       544 A       576 A
//! ...
//! -----------------------------------------------------------   <- 59 或 61 个 '-'
//! ```
//!
//! 解析按固定阶段顺序进行，每个阶段只消费自己的行：
//! header -> target info -> composition -> stopping units -> table
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `parsers/cursor.rs`, `parsers/rows.rs`
//! - 使用 `models/report.rs`, `units/stopping.rs`

use super::cursor::LineCursor;
use super::rows;
use crate::error::{FormatError, Result, SroutError};
use crate::models::{
    CompositionEntry, FileType, MeasurementRow, Projectile, RawLines, Report, TargetDensity,
};
use crate::units::stopping::{self, StoppingUnit};
use std::io::BufRead;

/// 靶材组分块终止行
pub const COMPOSITION_RULER: &str = "====================================";

/// 数据表终止行（61 个 '-'）
pub const TABLE_RULER: &str = "-------------------------------------------------------------";

/// SR.exe 实际写出的数据表终止行（59 个 '-'）
pub const TABLE_RULER_SHORT: &str = "-----------------------------------------------------------";

/// 从输入流解析完整报告
pub fn parse_report<R: BufRead>(reader: R) -> Result<Report> {
    let mut cursor = LineCursor::new(reader);
    let mut raw = RawLines::default();

    let header = read_header(&mut cursor, &mut raw)?;
    let info = read_target_info(&mut cursor, &mut raw)?;
    let target_composition = read_composition(&mut cursor, &mut raw)?;
    let units = read_stopping_units(&mut cursor, &mut raw, header.file_type)?;
    let measurement_table = read_table(&mut cursor, &mut raw)?;

    Ok(Report {
        file_type: header.file_type,
        srim_version: header.srim_version,
        calc_date: header.calc_date,
        disk_file_name: info.disk_file_name,
        projectile: info.projectile,
        density: info.density,
        target_composition,
        bragg_correction: units.bragg_correction,
        stopping_unit: units.stopping_unit,
        measurement_table,
        raw: Some(raw),
    })
}

/// 把行级错误定位到当前行
fn at_line<R, T>(cursor: &LineCursor<R>, result: std::result::Result<T, FormatError>) -> Result<T> {
    result.map_err(|e| SroutError::format(cursor.line_no(), e))
}

// ─────────────────────────────────────────────────────────────
// 阶段 1: 头部
// ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct Header {
    pub file_type: FileType,
    pub srim_version: String,
    pub calc_date: String,
}

/// 两条标尺之间是版本行与日期行；第一条标尺后若出现
/// SRModule 标记行，则整个文件按旧格式解析
pub(crate) fn read_header<R: BufRead>(
    cursor: &mut LineCursor<R>,
    raw: &mut RawLines,
) -> Result<Header> {
    raw.header_ruler0 = cursor.next_line("header ruler")?;

    let mut line = cursor.next_line("SRIM version line")?;
    let file_type = if line == FileType::SRMODULE_MARKER {
        raw.header_extra = Some(line);
        line = cursor.next_line("SRIM version line")?;
        FileType::SrModule
    } else {
        FileType::SrExe
    };

    raw.header_srim_version = line;
    raw.header_date = cursor.next_line("calculation date line")?;
    raw.header_ruler1 = cursor.next_line("header ruler")?;

    Ok(Header {
        file_type,
        srim_version: raw.header_srim_version.clone(),
        calc_date: raw.header_date.clone(),
    })
}

// ─────────────────────────────────────────────────────────────
// 阶段 2: 文件名、投射离子、密度
// ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct TargetInfo {
    pub disk_file_name: String,
    pub projectile: Projectile,
    pub density: TargetDensity,
}

pub(crate) fn read_target_info<R: BufRead>(
    cursor: &mut LineCursor<R>,
    raw: &mut RawLines,
) -> Result<TargetInfo> {
    cursor.skip("blank line")?;

    raw.disk_file_name = cursor.next_line("disk file name line")?;
    let disk_file_name = at_line(
        cursor,
        rows::value_after_equals(&raw.disk_file_name, "disk file name line"),
    )?
    .to_string();

    cursor.skip("blank line")?;

    raw.projectile = cursor.next_line("projectile line")?;
    let projectile = at_line(cursor, rows::parse_projectile_line(&raw.projectile))?;

    cursor.skip("blank line")?;

    raw.density = cursor.next_line("density line")?;
    let density = at_line(cursor, rows::parse_density_line(&raw.density))?;

    Ok(TargetInfo {
        disk_file_name,
        projectile,
        density,
    })
}

// ─────────────────────────────────────────────────────────────
// 阶段 3: 靶材组分
// ─────────────────────────────────────────────────────────────

pub(crate) fn read_composition<R: BufRead>(
    cursor: &mut LineCursor<R>,
    raw: &mut RawLines,
) -> Result<Vec<CompositionEntry>> {
    raw.target_comp_ruler0 = cursor.next_line("target composition header")?;
    raw.target_comp_header1 = cursor.next_line("target composition header")?;
    raw.target_comp_header2 = cursor.next_line("target composition header")?;
    raw.target_comp_subruler = cursor.next_line("target composition header")?;

    let (lines, ruler) = cursor.read_block(&[COMPOSITION_RULER], "target composition")?;
    raw.target_comp_ruler1 = ruler;

    let mut entries = Vec::with_capacity(lines.len());
    for (line_no, line) in lines {
        let entry = rows::parse_composition_row(&line).map_err(|e| SroutError::format(line_no, e))?;
        entries.push(entry);
        raw.target_composition.push(line);
    }

    Ok(entries)
}

// ─────────────────────────────────────────────────────────────
// 阶段 4: Bragg 修正与阻止本领单位
// ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub(crate) struct UnitsInfo {
    pub bragg_correction: f64,
    pub stopping_unit: &'static StoppingUnit,
}

pub(crate) fn read_stopping_units<R: BufRead>(
    cursor: &mut LineCursor<R>,
    raw: &mut RawLines,
    file_type: FileType,
) -> Result<UnitsInfo> {
    raw.bragg_corr = cursor.next_line("Bragg correction line")?;
    let bragg_correction = at_line(cursor, rows::parse_bragg_line(&raw.bragg_corr))?;

    raw.stopping_units = cursor.next_line("stopping units line")?;
    let title = at_line(cursor, rows::parse_stopping_units_line(&raw.stopping_units))?;
    let stopping_unit = at_line(cursor, stopping::by_title(title))?;

    raw.stopping_units_comment = cursor.next_line("stopping units comment")?;
    cursor.skip("blank line")?;

    if file_type == FileType::SrModule {
        raw.projectile_extra = Some(cursor.next_line("projectile line")?);
        cursor.skip("blank line")?;
    }

    Ok(UnitsInfo {
        bragg_correction,
        stopping_unit,
    })
}

// ─────────────────────────────────────────────────────────────
// 阶段 5: 阻止本领/射程表
// ─────────────────────────────────────────────────────────────

pub(crate) fn read_table<R: BufRead>(
    cursor: &mut LineCursor<R>,
    raw: &mut RawLines,
) -> Result<Vec<MeasurementRow>> {
    raw.tbl_header1 = cursor.next_line("table header")?;
    raw.tbl_header2 = cursor.next_line("table header")?;
    raw.tbl_ruler0 = cursor.next_line("table header")?;

    let (lines, ruler) = cursor.read_block(&[TABLE_RULER, TABLE_RULER_SHORT], "stopping table")?;
    raw.tbl_ruler1 = ruler;

    let mut table = Vec::with_capacity(lines.len());
    for (line_no, line) in lines {
        let row = rows::parse_table_row(&line).map_err(|e| SroutError::format(line_no, e))?;
        table.push(row);
        raw.tbl_data.push(line);
    }

    Ok(table)
}
