//! # 单位换算表
//!
//! SR 输出表格中每一行自带能量与长度单位，这里把它们统一换算到
//! keV 与 Å。阻止本领单位由报告头部统一声明，见 `stopping`。
//!
//! ## 依赖关系
//! - 被 `parsers/rows.rs`, `parsers/sr_output.rs` 使用
//! - 子模块: stopping

pub mod stopping;

pub use stopping::StoppingUnit;

use crate::error::FormatError;

/// 能量单位 -> keV
pub const ENERGY_UNITS: &[(&str, f64)] = &[
    ("eV", 1.0e-3),
    ("keV", 1.0),
    ("MeV", 1.0e3),
    ("GeV", 1.0e6),
];

/// 长度单位 -> Å
///
/// 1 um = 1e4 Å, 1 mm = 1e7 Å
pub const LENGTH_UNITS: &[(&str, f64)] = &[
    ("A", 1.0),
    ("nm", 10.0),
    ("um", 1.0e4),
    ("mm", 1.0e7),
];

fn lookup(table: &[(&str, f64)], label: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, factor)| *factor)
}

/// 能量单位换算系数（到 keV）
pub fn energy_factor(label: &str) -> Result<f64, FormatError> {
    lookup(ENERGY_UNITS, label).ok_or_else(|| FormatError::UnknownUnit {
        kind: "energy",
        label: label.to_string(),
    })
}

/// 长度单位换算系数（到 Å）
pub fn length_factor(label: &str) -> Result<f64, FormatError> {
    lookup(LENGTH_UNITS, label).ok_or_else(|| FormatError::UnknownUnit {
        kind: "length",
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_factors() {
        assert_eq!(energy_factor("eV").unwrap(), 1.0e-3);
        assert_eq!(energy_factor("keV").unwrap(), 1.0);
        assert_eq!(energy_factor("MeV").unwrap(), 1.0e3);
        assert_eq!(energy_factor("GeV").unwrap(), 1.0e6);
    }

    #[test]
    fn test_length_factors() {
        assert_eq!(length_factor("A").unwrap(), 1.0);
        assert_eq!(length_factor("nm").unwrap(), 10.0);
        assert_eq!(length_factor("um").unwrap(), 1.0e4);
        assert_eq!(length_factor("mm").unwrap(), 1.0e7);
    }

    #[test]
    fn test_unknown_unit() {
        let err = energy_factor("TeV").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnknownUnit {
                kind: "energy",
                label: "TeV".to_string()
            }
        );
        // 单位标签区分大小写
        assert!(length_factor("a").is_err());
        assert!(energy_factor("kev").is_err());
    }
}
