//! # 阻止本领曲线图
//!
//! 使用 `plotters` 绘制电子、核与总阻止本领随离子能量的变化，
//! 能量轴取对数坐标。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/report.rs`
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, SroutError};
use crate::models::Report;

use plotters::prelude::*;
use std::path::Path;

/// 绘图用的三条曲线
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoppingCurves {
    pub electronic: Vec<(f64, f64)>,
    pub nuclear: Vec<(f64, f64)>,
    pub total: Vec<(f64, f64)>,
}

impl StoppingCurves {
    /// 从报告提取曲线（跳过非正能量，对数坐标无法表示）
    pub fn from_report(report: &Report) -> Self {
        let mut curves = StoppingCurves::default();
        for row in report.measurement_table.iter().filter(|r| r.energy > 0.0) {
            curves.electronic.push((row.energy, row.elec_stopping));
            curves.nuclear.push((row.energy, row.nuclear_stopping));
            curves.total.push((row.energy, row.total_stopping()));
        }
        curves
    }

    /// 能量范围 (keV)
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let min = self
            .total
            .iter()
            .map(|(x, _)| *x)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .total
            .iter()
            .map(|(x, _)| *x)
            .fold(f64::NEG_INFINITY, f64::max);
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    /// 纵轴上限
    pub fn y_max(&self) -> f64 {
        self.total.iter().map(|(_, y)| *y).fold(0.0, f64::max)
    }
}

/// 生成阻止本领曲线图，按扩展名选择 PNG 或 SVG
pub fn generate_stopping_plot(
    report: &Report,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    let curves = StoppingCurves::from_report(report);
    let unit = report.stopping_unit.title;

    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_stopping_chart(&root, &curves, title, unit)?;
        root.present()
            .map_err(|e| SroutError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_stopping_chart(&root, &curves, title, unit)?;
        root.present()
            .map_err(|e| SroutError::PlotError(e.to_string()))?;
    }
    Ok(())
}

fn draw_stopping_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &StoppingCurves,
    title: &str,
    unit: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = curves
        .x_range()
        .ok_or_else(|| SroutError::PlotError("No positive energies to plot".to_string()))?;
    // 单点时展开一个数量级
    let (x_min, x_max) = if x_max > x_min {
        (x_min, x_max)
    } else {
        (x_min / 10.0, x_max * 10.0)
    };
    let y_max = curves.y_max().max(f64::MIN_POSITIVE) * 1.1;

    root.fill(&WHITE)
        .map_err(|e| SroutError::PlotError(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..y_max)
        .map_err(|e| SroutError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Ion Energy (keV)")
        .y_desc(format!("dE/dx ({})", unit))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| SroutError::PlotError(format!("{:?}", e)))?;

    let series = [
        ("Electronic", &curves.electronic, RGBColor(0, 102, 204)),
        ("Nuclear", &curves.nuclear, RGBColor(204, 51, 0)),
        ("Total", &curves.total, BLACK),
    ];

    for (label, data, color) in series {
        chart
            .draw_series(LineSeries::new(
                data.iter().copied(),
                color.stroke_width(2),
            ))
            .map_err(|e| SroutError::PlotError(format!("{:?}", e)))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| SroutError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileType, MeasurementRow, Projectile, TargetDensity};
    use crate::units::stopping;

    fn report(energies: &[f64]) -> Report {
        Report {
            file_type: FileType::SrExe,
            srim_version: String::new(),
            calc_date: String::new(),
            disk_file_name: String::new(),
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
            measurement_table: energies
                .iter()
                .map(|&e| MeasurementRow {
                    energy: e,
                    elec_stopping: 0.5,
                    nuclear_stopping: 0.25,
                    projected_range: 1.0,
                    longitudinal_straggling: 1.0,
                    lateral_straggling: 1.0,
                })
                .collect(),
            raw: None,
        }
    }

    #[test]
    fn test_curves_from_report() {
        let curves = StoppingCurves::from_report(&report(&[0.0, 10.0, 100.0]));
        assert_eq!(curves.total.len(), 2);
        assert_eq!(curves.electronic[0], (10.0, 0.5));
        assert_eq!(curves.nuclear[1], (100.0, 0.25));
        assert_eq!(curves.total[0], (10.0, 0.75));
        assert_eq!(curves.x_range(), Some((10.0, 100.0)));
        assert_eq!(curves.y_max(), 0.75);
    }

    #[test]
    fn test_render_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopping.svg");
        generate_stopping_plot(&report(&[10.0, 100.0, 1000.0]), &path, "H in H", 640, 480)
            .unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_render_without_energies_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let err = generate_stopping_plot(&report(&[]), &path, "empty", 640, 480).unwrap_err();
        assert!(matches!(err, SroutError::PlotError(_)));
    }

    #[test]
    fn test_empty_curves() {
        let curves = StoppingCurves::from_report(&report(&[]));
        assert_eq!(curves.x_range(), None);
        assert_eq!(curves.y_max(), 0.0);
    }
}
