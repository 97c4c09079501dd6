//! Learning-curve plots from the averaged loss series.

use std::path::{Path, PathBuf};

use plotters::coord::types::{RangedCoordf64, RangedCoordu32};
use plotters::coord::cartesian::Cartesian2d;
use plotters::prelude::*;

use crate::config::PlotSpec;
use crate::error::{Error, Result};
use crate::loss::{all_series, CurveSeries, EpochSeries, LossLog, Split};

use super::style;

type CurveChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordu32, RangedCoordf64>>;

/// Renders one PNG per loss, a primary-loss PNG, and a grid of all losses.
pub struct LearningCurvePlotter<'a> {
    spec: &'a PlotSpec,
    out_dir: &'a Path,
}

impl<'a> LearningCurvePlotter<'a> {
    /// Create a plotter writing into `out_dir`.
    pub fn new(spec: &'a PlotSpec, out_dir: &'a Path) -> Self {
        Self { spec, out_dir }
    }

    /// Render all learning-curve files; returns the written paths.
    ///
    /// A log without any loss names produces no files.
    pub fn create_plots(&self, log: &LossLog) -> Result<Vec<PathBuf>> {
        let names = log.names();
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let processed = all_series(log, &names);
        let primary = log
            .primary_loss()
            .map(str::to_owned)
            .or_else(|| self.spec.primary_loss.clone());

        let mut files = Vec::new();
        for name in &names {
            let path = self.out_dir.join(format!("learning_curve_{name}.png"));
            draw_curve(
                &path,
                &format!("Learning Curve - {name}"),
                &processed[name],
                (1000, 600),
            )
            .map_err(|e| Error::Render(format!("{}: {e}", path.display())))?;
            files.push(path);
        }

        if let Some(primary) = &primary {
            if let Some(curve) = processed.get(primary) {
                let path = self.out_dir.join(format!("primary_loss_{primary}.png"));
                draw_curve(
                    &path,
                    &format!("Primary Loss - {primary}"),
                    curve,
                    (1200, 800),
                )
                .map_err(|e| Error::Render(format!("{}: {e}", path.display())))?;
                files.push(path);
            }
        }

        let grid_path = self.out_dir.join("all_learning_curves.png");
        draw_grid(&grid_path, &names, &processed, primary.as_deref())
            .map_err(|e| Error::Render(format!("{}: {e}", grid_path.display())))?;
        files.push(grid_path);

        Ok(files)
    }
}

fn axis_ranges(curve: &CurveSeries) -> (u32, std::ops::Range<f64>) {
    let x_max = curve
        .train
        .epochs
        .iter()
        .chain(curve.validation.epochs.iter())
        .copied()
        .max()
        .unwrap_or(0)
        + 1;

    let values: Vec<f64> = curve
        .train
        .means
        .iter()
        .chain(curve.validation.means.iter())
        .copied()
        .collect();
    let (lo, hi) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    };
    let pad = if hi > lo { 0.05 * (hi - lo) } else { 0.5 };
    (x_max, (lo - pad)..(hi + pad))
}

fn draw_split_series(
    chart: &mut CurveChart<'_, '_>,
    series: &EpochSeries,
    split: Split,
    label: &str,
    markers: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if series.is_empty() {
        return Ok(());
    }
    let color = style::split_color(split);
    let points: Vec<(u32, f64)> = series
        .epochs
        .iter()
        .copied()
        .zip(series.means.iter().copied())
        .collect();

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(2),
        ))?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    if markers {
        match split {
            Split::Train => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                )?;
            }
            Split::Validation => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Cross::new((x, y), 4, color.filled())),
                )?;
            }
        }
    }
    Ok(())
}

fn draw_curve(
    path: &Path,
    title: &str,
    curve: &CurveSeries,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_max, y_range) = axis_ranges(curve);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..x_max, y_range)?;

    chart.configure_mesh().x_desc("Epoch").y_desc("Loss").draw()?;

    draw_split_series(&mut chart, &curve.train, Split::Train, "Training", true)?;
    draw_split_series(
        &mut chart,
        &curve.validation,
        Split::Validation,
        "Validation",
        true,
    )?;

    if !curve.train.is_empty() || !curve.validation.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Grid layout: up to three columns, surplus cells stay blank.
pub(super) fn grid_dims(n: usize) -> (usize, usize) {
    let cols = n.clamp(1, 3);
    let rows = n.div_ceil(cols);
    (rows, cols)
}

fn draw_grid(
    path: &Path,
    names: &[String],
    processed: &std::collections::BTreeMap<String, CurveSeries>,
    primary: Option<&str>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (rows, cols) = grid_dims(names.len());
    let root = BitMapBackend::new(path, (500 * cols as u32, 400 * rows as u32))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let cells = root.split_evenly((rows, cols));
    for (name, cell) in names.iter().zip(cells.iter()) {
        let curve = &processed[name];
        let title = if primary == Some(name.as_str()) {
            format!("{name}*")
        } else {
            name.clone()
        };

        let (x_max, y_range) = axis_ranges(curve);
        let mut chart = ChartBuilder::on(cell)
            .caption(title, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(0u32..x_max, y_range)?;

        chart.configure_mesh().x_desc("Epoch").y_desc("Loss").draw()?;

        draw_split_series(&mut chart, &curve.train, Split::Train, "Train", false)?;
        draw_split_series(&mut chart, &curve.validation, Split::Validation, "Val", false)?;

        if !curve.train.is_empty() || !curve.validation.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dims() {
        assert_eq!(grid_dims(1), (1, 1));
        assert_eq!(grid_dims(2), (1, 2));
        assert_eq!(grid_dims(3), (1, 3));
        assert_eq!(grid_dims(4), (2, 3));
        assert_eq!(grid_dims(7), (3, 3));
    }

    #[test]
    fn test_axis_ranges_empty_curve() {
        let (x_max, y) = axis_ranges(&CurveSeries::default());
        assert_eq!(x_max, 1);
        assert!(y.start < y.end);
    }

    #[test]
    fn test_axis_ranges_constant_series_padded() {
        let curve = CurveSeries {
            train: EpochSeries {
                epochs: vec![0, 1],
                means: vec![2.0, 2.0],
            },
            validation: EpochSeries::default(),
        };
        let (x_max, y) = axis_ranges(&curve);
        assert_eq!(x_max, 2);
        assert!(y.start < 2.0 && y.end > 2.0);
    }
}
