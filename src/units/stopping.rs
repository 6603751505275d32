//! # 阻止本领单位表
//!
//! SR.exe 与 SRModule.exe 对同一单位的写法只差空格，
//! 例如 `MeV / (mg/cm2)` 与 `MeV/(mg/cm2)`，两种写法都要能查到。
//!
//! 换算系数取自报告末尾的单位换算表，以 MeV/(mg/cm2) 为 1。
//!
//! ## 依赖关系
//! - 被 `parsers/sr_output.rs` 使用
//! - 被 `models/report.rs` 引用

use crate::error::FormatError;
use serde::Serialize;

/// 阻止本领单位
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoppingUnit {
    /// 序号 (1-8)
    pub index: u8,
    /// 相对 MeV/(mg/cm2) 的换算系数
    pub coefficient: f64,
    /// SR.exe 写法
    pub title: &'static str,
    /// SRModule.exe 写法
    pub module_title: &'static str,
}

impl StoppingUnit {
    const fn new(
        index: u8,
        coefficient: f64,
        title: &'static str,
        module_title: &'static str,
    ) -> Self {
        StoppingUnit {
            index,
            coefficient,
            title,
            module_title,
        }
    }

    /// 是否匹配任一写法
    pub fn matches(&self, title: &str) -> bool {
        self.title == title || self.module_title == title
    }
}

impl std::fmt::Display for StoppingUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

pub static STOPPING_UNITS: [StoppingUnit; 8] = [
    StoppingUnit::new(1, 1.0597E+01, "eV / Angstrom", "eV/Angstrom"),
    StoppingUnit::new(2, 1.0597E+02, "keV / micron", "keV/micron"),
    StoppingUnit::new(3, 1.0597E+02, "MeV / mm", "MeV/mm"),
    StoppingUnit::new(4, 1.0000E+00, "keV / (ug/cm2)", "keV/(ug/cm2)"),
    StoppingUnit::new(5, 1.0000E+00, "MeV / (mg/cm2)", "MeV/(mg/cm2)"),
    StoppingUnit::new(6, 1.0000E+03, "keV / (mg/cm2)", "keV/(mg/cm2)"),
    StoppingUnit::new(7, 9.7198E+00, "eV / (1E15 atoms/cm2)", "eV/(1E15 atoms/cm2)"),
    StoppingUnit::new(8, 4.3194E+00, "L.S.S. reduced units", "L.S.S. reduced units"),
];

/// 按标题查找（两种写法均可）
pub fn by_title(title: &str) -> Result<&'static StoppingUnit, FormatError> {
    STOPPING_UNITS
        .iter()
        .find(|u| u.matches(title))
        .ok_or_else(|| FormatError::UnknownStoppingUnit(title.to_string()))
}

/// 按序号查找
pub fn by_index(index: u8) -> Option<&'static StoppingUnit> {
    STOPPING_UNITS.iter().find(|u| u.index == index)
}
