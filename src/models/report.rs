//! # SR 报告数据模型
//!
//! 存储从 SR.exe / SRModule.exe 输出中提取的投射离子、靶材与
//! 阻止本领/射程表。能量统一为 keV，长度统一为 Å。
//!
//! ## 依赖关系
//! - 被 `parsers/` 构造
//! - 被 `export/` 和 `commands/` 使用
//! - 使用 `units/stopping.rs`

use crate::units::StoppingUnit;
use serde::Serialize;

/// 输出文件来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileType {
    /// SR.exe (SRIM-2013)
    #[serde(rename = "sr.exe")]
    SrExe,
    /// SRModule.exe (SRIM-2006 头，旧格式)
    #[serde(rename = "srmodule.exe")]
    SrModule,
}

impl FileType {
    /// 旧格式在第一条标尺后多一行此标记
    pub const SRMODULE_MARKER: &'static str = "Calculation using SRIM-2006";
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileType::SrExe => write!(f, "sr.exe"),
            FileType::SrModule => write!(f, "srmodule.exe"),
        }
    }
}

/// 投射离子
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projectile {
    /// 元素名 (e.g. "Hydrogen")
    pub name: String,
    /// 原子序数
    pub atomic_number: u32,
    /// 质量 (amu)
    pub mass_amu: f64,
}

/// 靶材密度
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetDensity {
    /// 质量密度 (g/cm3)
    pub mass_density: f64,
    /// 原子数密度 (atoms/cm3)
    pub atom_density: f64,
}

/// 靶材组分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositionEntry {
    pub symbol: String,
    pub atomic_number: f64,
    /// 原子百分比
    pub atomic_percent: f64,
    /// 质量百分比
    pub mass_percent: f64,
}

/// 阻止本领/射程表的一行
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementRow {
    /// 离子能量 (keV)
    pub energy: f64,
    /// 电子阻止本领（报告声明的单位）
    pub elec_stopping: f64,
    /// 核阻止本领（报告声明的单位）
    pub nuclear_stopping: f64,
    /// 投影射程 (Å)
    pub projected_range: f64,
    /// 纵向歧离 (Å)
    pub longitudinal_straggling: f64,
    /// 横向歧离 (Å)
    pub lateral_straggling: f64,
}

impl MeasurementRow {
    /// 总阻止本领
    pub fn total_stopping(&self) -> f64 {
        self.elec_stopping + self.nuclear_stopping
    }
}

/// 原始行（调试视图）
///
/// 每个字段都是去掉首尾空白后的原始行，与结构化字段一一对应。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawLines {
    pub header_ruler0: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_extra: Option<String>,
    pub header_srim_version: String,
    pub header_date: String,
    pub header_ruler1: String,
    pub disk_file_name: String,
    pub projectile: String,
    pub density: String,
    pub target_comp_ruler0: String,
    pub target_comp_header1: String,
    pub target_comp_header2: String,
    pub target_comp_subruler: String,
    pub target_composition: Vec<String>,
    pub target_comp_ruler1: String,
    pub bragg_corr: String,
    pub stopping_units: String,
    pub stopping_units_comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projectile_extra: Option<String>,
    pub tbl_header1: String,
    pub tbl_header2: String,
    pub tbl_ruler0: String,
    pub tbl_data: Vec<String>,
    pub tbl_ruler1: String,
}

/// 解析后的 SR 报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub file_type: FileType,

    /// e.g. "SRIM version ---> SRIM-2013.00"
    pub srim_version: String,

    /// e.g. "Calc. date   ---> February 22, 2016"
    pub calc_date: String,

    /// `Disk File Name =` 之后的文本
    pub disk_file_name: String,

    pub projectile: Projectile,

    pub density: TargetDensity,

    /// 报告顺序
    pub target_composition: Vec<CompositionEntry>,

    /// Bragg 修正 (%)
    pub bragg_correction: f64,

    /// 表中两列阻止本领的单位
    pub stopping_unit: &'static StoppingUnit,

    /// 报告顺序
    pub measurement_table: Vec<MeasurementRow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawLines>,
}

impl Report {
    /// 去掉原始行视图
    pub fn without_raw(&self) -> Report {
        Report {
            raw: None,
            ..self.clone()
        }
    }

    /// 能量范围 (keV)
    pub fn energy_range(&self) -> Option<(f64, f64)> {
        let first = self.measurement_table.first()?;
        let last = self.measurement_table.last()?;
        Some((first.energy, last.energy))
    }

    /// 最大电子阻止本领所在行（Bragg 峰附近）
    pub fn peak_elec_stopping(&self) -> Option<&MeasurementRow> {
        self.measurement_table.iter().max_by(|a, b| {
            a.elec_stopping
                .partial_cmp(&b.elec_stopping)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::stopping;

    fn row(energy: f64, elec: f64) -> MeasurementRow {
        MeasurementRow {
            energy,
            elec_stopping: elec,
            nuclear_stopping: 0.01,
            projected_range: 100.0,
            longitudinal_straggling: 10.0,
            lateral_straggling: 12.0,
        }
    }

    fn sample_report() -> Report {
        Report {
            file_type: FileType::SrExe,
            srim_version: "SRIM version ---> SRIM-2013.00".to_string(),
            calc_date: "Calc. date   ---> February 22, 2016".to_string(),
            disk_file_name: "Hydrogen in Water".to_string(),
            projectile: Projectile {
                name: "Hydrogen".to_string(),
                atomic_number: 1,
                mass_amu: 1.008,
            },
            density: TargetDensity {
                mass_density: 1.0,
                atom_density: 1.0e23,
            },
            target_composition: vec![],
            bragg_correction: 0.0,
            stopping_unit: stopping::by_index(5).unwrap(),
            measurement_table: vec![row(10.0, 0.5), row(50.0, 0.9), row(100.0, 0.7)],
            raw: Some(RawLines::default()),
        }
    }

    #[test]
    fn test_total_stopping() {
        let r = row(10.0, 0.5);
        assert!((r.total_stopping() - 0.51).abs() < 1e-12);
    }

    #[test]
    fn test_energy_range_and_peak() {
        let report = sample_report();
        assert_eq!(report.energy_range(), Some((10.0, 100.0)));
        assert_eq!(report.peak_elec_stopping().unwrap().energy, 50.0);
    }

    #[test]
    fn test_without_raw() {
        let report = sample_report();
        assert!(report.raw.is_some());
        let stripped = report.without_raw();
        assert!(stripped.raw.is_none());
        assert_eq!(stripped.measurement_table, report.measurement_table);
    }

    #[test]
    fn test_file_type_display() {
        assert_eq!(FileType::SrExe.to_string(), "sr.exe");
        assert_eq!(FileType::SrModule.to_string(), "srmodule.exe");
    }
}
