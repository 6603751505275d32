//! # 行级解析器
//!
//! 把单行文本拆成空白分隔的 token 并提取数值。
//!
//! ```text
//! Ion = Hydrogen [1] , Mass = 1.008 amu
//! Target Density =  1.0597E+00 g/cm3 = 1.0903E+23 atoms/cm3
//! H      1    061.54    010.60
//! 10.00 keV   4.945E-01  8.762E-03    2247 A       544 A       576 A
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/sr_output.rs` 使用
//! - 使用 `units/` 换算能量与长度

use crate::error::FormatError;
use crate::models::{CompositionEntry, MeasurementRow, Projectile, TargetDensity};
use crate::units;
use std::str::FromStr;

fn tokens<'a>(
    line: &'a str,
    what: &'static str,
    expected: usize,
) -> Result<Vec<&'a str>, FormatError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < expected {
        return Err(FormatError::TooFewTokens {
            what,
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

fn number<T: FromStr>(token: &str, what: &'static str) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        what,
        token: token.to_string(),
    })
}

/// 解析投射离子行
///
/// 两种格式只是元素名后的空格数不同，token 位置一致。
pub fn parse_projectile_line(line: &str) -> Result<Projectile, FormatError> {
    const WHAT: &str = "projectile line";
    let parts = tokens(line, WHAT, 8)?;

    let number_token = parts[3].trim_matches(|c| c == '[' || c == ']');

    Ok(Projectile {
        name: parts[2].to_string(),
        atomic_number: number(number_token, WHAT)?,
        mass_amu: number(parts[7], WHAT)?,
    })
}

/// 解析密度行
///
/// SR.exe 写 `Target Density =`，SRModule.exe 写 `Density =`，
/// 因此从行尾倒数定位。
pub fn parse_density_line(line: &str) -> Result<TargetDensity, FormatError> {
    const WHAT: &str = "density line";
    let parts = tokens(line, WHAT, 5)?;
    let n = parts.len();

    Ok(TargetDensity {
        mass_density: number(parts[n - 5], WHAT)?,
        atom_density: number(parts[n - 2], WHAT)?,
    })
}

/// 解析靶材组分行
pub fn parse_composition_row(line: &str) -> Result<CompositionEntry, FormatError> {
    const WHAT: &str = "composition row";
    let parts = tokens(line, WHAT, 4)?;

    Ok(CompositionEntry {
        symbol: parts[0].to_string(),
        atomic_number: number(parts[1], WHAT)?,
        atomic_percent: number(parts[2], WHAT)?,
        mass_percent: number(parts[3], WHAT)?,
    })
}

/// 解析阻止本领/射程表的一行
///
/// 能量换算到 keV，三个长度换算到 Å，两列阻止本领保持原值。
pub fn parse_table_row(line: &str) -> Result<MeasurementRow, FormatError> {
    const WHAT: &str = "table row";
    let parts = tokens(line, WHAT, 10)?;

    let length = |value: &str, unit: &str| -> Result<f64, FormatError> {
        Ok(number::<f64>(value, WHAT)? * units::length_factor(unit)?)
    };

    Ok(MeasurementRow {
        energy: number::<f64>(parts[0], WHAT)? * units::energy_factor(parts[1])?,
        elec_stopping: number(parts[2], WHAT)?,
        nuclear_stopping: number(parts[3], WHAT)?,
        projected_range: length(parts[4], parts[5])?,
        longitudinal_straggling: length(parts[6], parts[7])?,
        lateral_straggling: length(parts[8], parts[9])?,
    })
}

/// 提取 `key = value` 行中第一个等号之后的文本
pub fn value_after_equals<'a>(line: &'a str, what: &'static str) -> Result<&'a str, FormatError> {
    line.split_once('=')
        .map(|(_, value)| value.trim())
        .ok_or(FormatError::MissingDelimiter {
            what,
            delimiter: "=",
        })
}

/// 解析 `Bragg Correction = -5.43%`
pub fn parse_bragg_line(line: &str) -> Result<f64, FormatError> {
    const WHAT: &str = "Bragg correction line";
    let value = value_after_equals(line, WHAT)?;
    let value = value
        .strip_suffix('%')
        .ok_or(FormatError::MissingDelimiter {
            what: WHAT,
            delimiter: "%",
        })?;
    number(value.trim(), WHAT)
}

/// 解析 `Stopping Units =  MeV / (mg/cm2)`，返回单位标题
pub fn parse_stopping_units_line(line: &str) -> Result<&str, FormatError> {
    value_after_equals(line, "stopping units line")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_both_variants() {
        let sr = parse_projectile_line("Ion = Hydrogen [1] , Mass = 1.008 amu").unwrap();
        let module = parse_projectile_line("Ion = Hydrogen     [1] , Mass = 1.008 amu").unwrap();
        assert_eq!(sr, module);
        assert_eq!(sr.name, "Hydrogen");
        assert_eq!(sr.atomic_number, 1);
        assert_eq!(sr.mass_amu, 1.008);
    }

    #[test]
    fn test_projectile_heavy_ion() {
        let p = parse_projectile_line("Ion = Uranium [92] , Mass = 238.05 amu").unwrap();
        assert_eq!(p.atomic_number, 92);
        assert_eq!(p.mass_amu, 238.05);
    }

    #[test]
    fn test_projectile_too_short() {
        let err = parse_projectile_line("Ion = Hydrogen [1] , Mass =").unwrap_err();
        assert_eq!(
            err,
            FormatError::TooFewTokens {
                what: "projectile line",
                expected: 8,
                found: 7
            }
        );
    }

    #[test]
    fn test_projectile_bad_number() {
        let err = parse_projectile_line("Ion = Hydrogen [one] , Mass = 1.008 amu").unwrap_err();
        assert!(matches!(err, FormatError::InvalidNumber { ref token, .. } if token == "one"));
    }

    #[test]
    fn test_density_both_variants() {
        let sr =
            parse_density_line("Target Density =  1.0597E+00 g/cm3 = 1.0903E+23 atoms/cm3")
                .unwrap();
        assert_eq!(sr.mass_density, 1.0597);
        assert_eq!(sr.atom_density, 1.0903e23);

        let module = parse_density_line("Density =  1.0597E+00 g/cm3 = 1.0902E+23 atoms/cm3")
            .unwrap();
        assert_eq!(module.mass_density, 1.0597);
        assert_eq!(module.atom_density, 1.0902e23);
    }

    #[test]
    fn test_density_too_short() {
        assert!(parse_density_line("g/cm3 = 1.0E+23 atoms/cm3").is_err());
    }

    #[test]
    fn test_composition_row() {
        let entry = parse_composition_row("H      1    061.54    010.60").unwrap();
        assert_eq!(entry.symbol, "H");
        assert_eq!(entry.atomic_number, 1.0);
        assert_eq!(entry.atomic_percent, 61.54);
        assert_eq!(entry.mass_percent, 10.60);
    }

    #[test]
    fn test_composition_row_errors() {
        assert!(matches!(
            parse_composition_row("H 1 100.00"),
            Err(FormatError::TooFewTokens { found: 3, .. })
        ));
        assert!(matches!(
            parse_composition_row("H 1 abc 100.00"),
            Err(FormatError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_table_row_base_units() {
        let row =
            parse_table_row("10.00 keV   4.945E-01  8.762E-03    2247 A       544 A       576 A")
                .unwrap();
        assert_eq!(row.energy, 10.0);
        assert_eq!(row.elec_stopping, 4.945e-1);
        assert_eq!(row.nuclear_stopping, 8.762e-3);
        assert_eq!(row.projected_range, 2247.0);
        assert_eq!(row.longitudinal_straggling, 544.0);
        assert_eq!(row.lateral_straggling, 576.0);
    }

    #[test]
    fn test_table_row_scaled_units() {
        let row =
            parse_table_row("2.00 MeV   2.500E-02  1.700E-05   47.92 um     2.03 um     1.47 um")
                .unwrap();
        assert_eq!(row.energy, 2000.0);
        assert_eq!(row.elec_stopping, 2.5e-2);
        assert!((row.projected_range - 479_200.0).abs() < 1e-6);
        assert!((row.longitudinal_straggling - 20_300.0).abs() < 1e-6);
        assert!((row.lateral_straggling - 14_700.0).abs() < 1e-6);

        let row = parse_table_row("999.99 eV 1.0E-01 2.0E-02 31.50 nm 1.2 mm 1 A").unwrap();
        assert!((row.energy - 0.99999).abs() < 1e-12);
        assert!((row.projected_range - 315.0).abs() < 1e-9);
        assert!((row.longitudinal_straggling - 1.2e7).abs() < 1e-3);
    }

    #[test]
    fn test_table_row_errors() {
        assert!(matches!(
            parse_table_row("10.00 keV 4.945E-01 8.762E-03 2247 A 544 A 576"),
            Err(FormatError::TooFewTokens {
                expected: 10,
                found: 9,
                ..
            })
        ));
        assert_eq!(
            parse_table_row("10.00 keV 4.945E-01 8.762E-03 2247 cm 544 A 576 A").unwrap_err(),
            FormatError::UnknownUnit {
                kind: "length",
                label: "cm".to_string()
            }
        );
        assert!(matches!(
            parse_table_row("10.00 TeV 4.945E-01 8.762E-03 2247 A 544 A 576 A"),
            Err(FormatError::UnknownUnit { kind: "energy", .. })
        ));
    }

    #[test]
    fn test_key_value_lines() {
        assert_eq!(parse_bragg_line("Bragg Correction = -5.43%").unwrap(), -5.43);
        assert_eq!(parse_bragg_line("Bragg Correction = 0.00%").unwrap(), 0.0);
        assert!(matches!(
            parse_bragg_line("Bragg Correction = 0.00"),
            Err(FormatError::MissingDelimiter { delimiter: "%", .. })
        ));
        assert_eq!(
            parse_stopping_units_line("Stopping Units =  MeV / (mg/cm2)").unwrap(),
            "MeV / (mg/cm2)"
        );
        assert_eq!(
            value_after_equals("Disk File Name = H in H2O", "disk file name line").unwrap(),
            "H in H2O"
        );
        assert!(parse_stopping_units_line("Stopping Units").is_err());
    }
}
