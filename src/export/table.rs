//! # 阻止本领表 CSV 导出
//!
//! 每行一个能量点：能量 (keV)、电子/核阻止本领（报告单位）、
//! 射程与歧离 (Å)。
//!
//! ## 依赖关系
//! - 被 `commands/table.rs` 调用
//! - 使用 `csv` 库写入

use crate::error::{Result, SroutError};
use crate::models::Report;

use std::io::Write;

/// 写出阻止本领表为 CSV
pub fn write_table_csv<W: Write>(report: &Report, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let unit = report.stopping_unit.title;
    wtr.write_record([
        "energy_keV".to_string(),
        format!("elec_dEdx [{}]", unit),
        format!("nuclear_dEdx [{}]", unit),
        "projected_range_A".to_string(),
        "longitudinal_straggling_A".to_string(),
        "lateral_straggling_A".to_string(),
    ])?;

    for row in &report.measurement_table {
        wtr.write_record(&[
            format!("{}", row.energy),
            format!("{:.4E}", row.elec_stopping),
            format!("{:.4E}", row.nuclear_stopping),
            format!("{}", row.projected_range),
            format!("{}", row.longitudinal_straggling),
            format!("{}", row.lateral_straggling),
        ])?;
    }

    wtr.flush().map_err(SroutError::StreamWrite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileType, MeasurementRow, Projectile, Report, TargetDensity};
    use crate::units::stopping;

    fn report_with_rows(rows: Vec<MeasurementRow>) -> Report {
        Report {
            file_type: FileType::SrExe,
            srim_version: String::new(),
            calc_date: String::new(),
            disk_file_name: String::new(),
            projectile: Projectile {
                name: "Helium".to_string(),
                atomic_number: 2,
                mass_amu: 4.003,
            },
            density: TargetDensity {
                mass_density: 2.321,
                atom_density: 4.977e22,
            },
            target_composition: vec![],
            bragg_correction: 0.0,
            stopping_unit: stopping::by_index(1).unwrap(),
            measurement_table: rows,
            raw: None,
        }
    }

    #[test]
    fn test_csv_output() {
        let report = report_with_rows(vec![MeasurementRow {
            energy: 10.0,
            elec_stopping: 4.945e-1,
            nuclear_stopping: 8.762e-3,
            projected_range: 2247.0,
            longitudinal_straggling: 544.0,
            lateral_straggling: 576.0,
        }]);

        let mut buf = Vec::new();
        write_table_csv(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "energy_keV,elec_dEdx [eV / Angstrom],nuclear_dEdx [eV / Angstrom],projected_range_A,longitudinal_straggling_A,lateral_straggling_A"
        );
        assert_eq!(lines[1], "10,4.9450E-1,8.7620E-3,2247,544,576");
    }

    #[test]
    fn test_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let report = report_with_rows(vec![]);

        let file = std::fs::File::create(&path).unwrap();
        write_table_csv(&report, file).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), 6);
        assert_eq!(rdr.records().count(), 0);
    }
}
