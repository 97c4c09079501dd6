//! Correlation-factor heatmaps per sample, with deviation-from-FullSim rows.

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::{CorrelationOptions, DiffMode, PlotSpec};
use crate::dataset::{correlation_factor, JetDataset};
use crate::error::{Error, Result};
use crate::samples::{resolve_branch, SampleClass};

use super::style;

/// Cell matrix indexed `[ix][iy]`; uncomputed pairs stay `None`.
type Matrix = Vec<Vec<Option<f64>>>;

/// Renders the combined heatmap canvas plus the two standalone deviation
/// heatmaps for the FastSim and Refined samples.
pub struct CorrelationPlotter<'a> {
    spec: &'a PlotSpec,
    out_dir: &'a Path,
}

impl<'a> CorrelationPlotter<'a> {
    /// Create a plotter writing into `out_dir`.
    pub fn new(spec: &'a PlotSpec, out_dir: &'a Path) -> Self {
        Self { spec, out_dir }
    }

    /// Render all correlation files; returns the written paths.
    ///
    /// A spec without correlation variables produces no files.
    pub fn create_plots(&self, dataset: &JetDataset) -> Result<Vec<PathBuf>> {
        let vars = &self.spec.correlation_variables;
        if vars.is_empty() {
            return Ok(Vec::new());
        }
        let opts = &self.spec.correlation;

        let corr: Vec<Matrix> = SampleClass::ALL
            .iter()
            .map(|&class| self.correlation_matrix(dataset, class))
            .collect();
        let full = &corr[0];

        let diff: Vec<Matrix> = SampleClass::ALL
            .iter()
            .enumerate()
            .map(|(i, &class)| {
                if class == SampleClass::Full {
                    zero_like(full)
                } else {
                    deviation_matrix(&corr[i], full, opts)
                }
            })
            .collect();

        let names: Vec<String> = vars.iter().map(|v| v.name.clone()).collect();
        let mut files = Vec::new();

        let main_path = self.out_dir.join("regcfs.png");
        draw_heatmap_canvas(&main_path, &names, &corr, &diff, opts)
            .map_err(|e| Error::Render(format!("{}: {e}", main_path.display())))?;
        files.push(main_path);

        for (class, stem) in [
            (SampleClass::Fast, "zfastPearsonRes.png"),
            (SampleClass::Refined, "zrefinedFastPearsonRes.png"),
        ] {
            let idx = SampleClass::ALL
                .iter()
                .position(|&c| c == class)
                .unwrap_or(0);
            let path = self.out_dir.join(stem);
            draw_single_heatmap(
                &path,
                &deviation_title(class, opts.diff),
                &names,
                &diff[idx],
                opts,
                true,
            )
            .map_err(|e| Error::Render(format!("{}: {e}", path.display())))?;
            files.push(path);
        }

        Ok(files)
    }

    /// Pairwise correlation factors for one sample.
    fn correlation_matrix(&self, dataset: &JetDataset, class: SampleClass) -> Matrix {
        let vars = &self.spec.correlation_variables;
        let opts = &self.spec.correlation;
        let n = vars.len();
        let mut matrix = vec![vec![None; n]; n];

        for (ix, var_x) in vars.iter().enumerate() {
            for (iy, var_y) in vars.iter().enumerate() {
                if opts.only_upper_half && iy <= ix {
                    continue;
                }
                let branch_x = resolve_branch(&var_x.branch, class);
                let branch_y = resolve_branch(&var_y.branch, class);
                let (xs, ys) = dataset.column_pair(&branch_x, &branch_y, class.selection());
                matrix[ix][iy] = Some(round_to(correlation_factor(&xs, &ys), opts.ndigits));
            }
        }
        matrix
    }
}

/// Round to a fixed number of decimal digits, as shown in the cells.
fn round_to(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

fn zero_like(matrix: &Matrix) -> Matrix {
    matrix
        .iter()
        .map(|col| col.iter().map(|cell| cell.map(|_| 0.0)).collect())
        .collect()
}

/// Deviation of a sample's correlation factors from FullSim.
///
/// In divide mode a vanishing FullSim factor maps to 0 when the sample's
/// factor also vanishes and to 1 otherwise.
fn deviation_matrix(sample: &Matrix, full: &Matrix, opts: &CorrelationOptions) -> Matrix {
    sample
        .iter()
        .zip(full.iter())
        .map(|(col_s, col_f)| {
            col_s
                .iter()
                .zip(col_f.iter())
                .map(|(&s, &f)| {
                    let (s, f) = match (s, f) {
                        (Some(s), Some(f)) => (s, f),
                        _ => return None,
                    };
                    let value = match opts.diff {
                        DiffMode::Subtract => (s - f).abs(),
                        DiffMode::Divide => {
                            if f == 0.0 {
                                if s == 0.0 {
                                    0.0
                                } else {
                                    1.0
                                }
                            } else {
                                1.0 - s / f
                            }
                        }
                    };
                    Some(round_to(value, opts.ndigits))
                })
                .collect()
        })
        .collect()
}

fn deviation_title(class: SampleClass, diff: DiffMode) -> String {
    match diff {
        DiffMode::Divide => format!("1 - r_xy({}) / r_xy(FullSim)", class.label()),
        DiffMode::Subtract => format!("|r_xy({}) - r_xy(FullSim)|", class.label()),
    }
}

fn draw_heatmap_canvas(
    path: &Path,
    names: &[String],
    corr: &[Matrix],
    diff: &[Matrix],
    opts: &CorrelationOptions,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let samples = SampleClass::ALL;
    let root = BitMapBackend::new(path, (800 * samples.len() as u32, 1200)).into_drawing_area();
    root.fill(&WHITE)?;

    let cells = root.split_evenly((2, samples.len()));
    for (i, &class) in samples.iter().enumerate() {
        draw_heatmap_into(
            &cells[i],
            &format!("r_xy ({})", class.label()),
            names,
            &corr[i],
            opts,
            false,
        )?;
        draw_heatmap_into(
            &cells[samples.len() + i],
            &deviation_title(class, opts.diff),
            names,
            &diff[i],
            opts,
            true,
        )?;
    }

    root.present()?;
    Ok(())
}

fn draw_single_heatmap(
    path: &Path,
    title: &str,
    names: &[String],
    matrix: &Matrix,
    opts: &CorrelationOptions,
    text_all_cells: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    draw_heatmap_into(&root, title, names, matrix, opts, text_all_cells)?;
    root.present()?;
    Ok(())
}

/// Draw one heatmap into a drawing area.
///
/// Cell color follows the diverging palette over [-1, 1]. With
/// `text_all_cells` every computed cell gets its value printed; otherwise
/// only cells beyond the white-text threshold do, in white over the
/// saturated cell color.
fn draw_heatmap_into(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    title: &str,
    names: &[String],
    matrix: &Matrix,
    opts: &CorrelationOptions,
    text_all_cells: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let n = names.len();
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|x| axis_label(names, *x))
        .y_label_formatter(&|y| axis_label(names, *y))
        .draw()?;

    for ix in 0..n {
        for iy in 0..n {
            let Some(value) = matrix[ix][iy] else {
                continue;
            };
            chart.draw_series(std::iter::once(Rectangle::new(
                [(ix as f64, iy as f64), (ix as f64 + 1.0, iy as f64 + 1.0)],
                style::diverging_color(value).filled(),
            )))?;

            let white = value.abs() > opts.white_threshold;
            if text_all_cells || white {
                let color: &RGBColor = if white { &WHITE } else { &BLACK };
                let text_style = TextStyle::from(("sans-serif", 16).into_font())
                    .color(color)
                    .pos(Pos::new(HPos::Center, VPos::Center));
                chart.draw_series(std::iter::once(Text::new(
                    format!("{value:.prec$}", prec = opts.ndigits),
                    (ix as f64 + 0.5, iy as f64 + 0.5),
                    text_style,
                )))?;
            }
        }
    }

    Ok(())
}

/// Map a tick position to the variable name of the cell it starts.
fn axis_label(names: &[String], position: f64) -> String {
    let idx = position.floor();
    if idx < 0.0 {
        return String::new();
    }
    names
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(diff: DiffMode) -> CorrelationOptions {
        CorrelationOptions {
            diff,
            ..CorrelationOptions::default()
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.12345, 2), 0.12);
        assert_eq!(round_to(-0.987, 2), -0.99);
        assert_eq!(round_to(0.5, 0), 1.0);
    }

    #[test]
    fn test_deviation_matrix_divide() {
        let sample = vec![vec![None, Some(0.5)], vec![None, None]];
        let full = vec![vec![None, Some(1.0)], vec![None, None]];
        let diff = deviation_matrix(&sample, &full, &opts(DiffMode::Divide));
        assert_eq!(diff[0][1], Some(0.5));
        assert_eq!(diff[0][0], None);
    }

    #[test]
    fn test_deviation_matrix_divide_vanishing_full() {
        let sample = vec![vec![Some(0.0), Some(0.3)]];
        let full = vec![vec![Some(0.0), Some(0.0)]];
        let diff = deviation_matrix(&sample, &full, &opts(DiffMode::Divide));
        assert_eq!(diff[0][0], Some(0.0));
        assert_eq!(diff[0][1], Some(1.0));
    }

    #[test]
    fn test_deviation_matrix_subtract() {
        let sample = vec![vec![Some(0.2)]];
        let full = vec![vec![Some(0.5)]];
        let diff = deviation_matrix(&sample, &full, &opts(DiffMode::Subtract));
        assert_eq!(diff[0][0], Some(0.3));
    }

    #[test]
    fn test_zero_like_preserves_shape() {
        let matrix = vec![vec![None, Some(0.7)], vec![Some(-0.2), None]];
        let zeros = zero_like(&matrix);
        assert_eq!(zeros[0][0], None);
        assert_eq!(zeros[0][1], Some(0.0));
        assert_eq!(zeros[1][0], Some(0.0));
    }

    #[test]
    fn test_axis_label() {
        let names = vec!["pt".to_string(), "eta".to_string()];
        assert_eq!(axis_label(&names, 0.0), "pt");
        assert_eq!(axis_label(&names, 1.5), "eta");
        assert_eq!(axis_label(&names, 2.0), "");
        assert_eq!(axis_label(&names, -1.0), "");
    }
}
