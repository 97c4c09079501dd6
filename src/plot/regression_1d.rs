//! Per-variable sample comparisons: distributions and ratio panels.

use std::path::{Path, PathBuf};

use plotters::coord::CoordTranslate;
use plotters::prelude::*;

use crate::config::{PlotSpec, VariableSpec};
use crate::dataset::{Binning, Histogram1d, JetDataset};
use crate::error::{Error, Result};
use crate::samples::{resolve_branch, SampleClass};

use super::style;

/// Renders one `reg1D_<variable>.png` per configured variable.
///
/// Each file has four panels: linear- and log-scale distributions of all
/// four samples above the corresponding sample-over-FullSim ratio panels.
pub struct Regression1dPlotter<'a> {
    spec: &'a PlotSpec,
    out_dir: &'a Path,
}

impl<'a> Regression1dPlotter<'a> {
    /// Create a plotter writing into `out_dir`.
    pub fn new(spec: &'a PlotSpec, out_dir: &'a Path) -> Self {
        Self { spec, out_dir }
    }

    /// Render all variable comparison files; returns the written paths.
    pub fn create_plots(&self, dataset: &JetDataset) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for var in &self.spec.variables {
            let binning = Binning::from_spec(&var.bins).ok_or_else(|| {
                Error::Config(format!("invalid binning for variable '{}'", var.name))
            })?;

            let mut histos: Vec<(SampleClass, Histogram1d)> = SampleClass::ALL
                .iter()
                .map(|&class| {
                    let branch = resolve_branch(&var.branch, class);
                    let hist = dataset.fill_histogram(&branch, class.selection(), &binning);
                    (class, hist)
                })
                .collect();

            if self.spec.normalize {
                for (_, hist) in &mut histos {
                    hist.normalize();
                }
            }

            let full = histos[0].1.clone();
            let ratios: Vec<(SampleClass, Histogram1d)> = histos
                .iter()
                .filter(|(class, _)| *class != SampleClass::Full)
                .map(|(class, hist)| (*class, hist.ratio(&full)))
                .collect();

            let path = self.out_dir.join(format!("reg1D_{}.png", var.name));
            draw_variable(&path, var, &histos, &ratios, self.spec.normalize)
                .map_err(|e| Error::Render(format!("{}: {e}", path.display())))?;
            files.push(path);
        }
        Ok(files)
    }
}

/// Step outline of a histogram, optionally clamped to a lower floor for
/// log-scale panels.
fn step_points(hist: &Histogram1d, floor: Option<f64>) -> Vec<(f64, f64)> {
    let edges = hist.edges();
    let mut points = Vec::with_capacity(hist.n_bins() * 2);
    for (i, &count) in hist.counts().iter().enumerate() {
        let y = floor.map_or(count, |f| count.max(f));
        points.push((edges[i], y));
        points.push((edges[i + 1], y));
    }
    points
}

fn y_axis_title(normalized: bool) -> &'static str {
    if normalized {
        "Fraction of Jets"
    } else {
        "Jets"
    }
}

fn draw_variable(
    path: &Path,
    var: &VariableSpec,
    histos: &[(SampleClass, Histogram1d)],
    ratios: &[(SampleClass, Histogram1d)],
    normalized: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (1600, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let columns = root.split_evenly((1, 2));
    for (i, column) in columns.iter().enumerate() {
        let (dist_area, ratio_area) = column.split_vertically(520);
        draw_distribution(&dist_area, histos, normalized, i == 1)?;
        draw_ratio(&ratio_area, var, ratios)?;
    }

    root.present()?;
    Ok(())
}

fn draw_distribution(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    histos: &[(SampleClass, Histogram1d)],
    normalized: bool,
    log_scale: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if log_scale {
        draw_distribution_log(area, histos, normalized)
    } else {
        draw_distribution_linear(area, histos, normalized)
    }
}

fn draw_distribution_linear(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    histos: &[(SampleClass, Histogram1d)],
    normalized: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (lo, hi) = (histos[0].1.lo(), histos[0].1.hi());
    let y_max = histos
        .iter()
        .map(|(_, h)| h.max_value())
        .fold(0.0, f64::max);
    let y_max = if y_max > 0.0 { 1.6 * y_max } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(lo..hi, 0.0..y_max)?;

    chart
        .configure_mesh()
        .y_desc(y_axis_title(normalized))
        .draw()?;

    for (class, hist) in histos {
        draw_sample(&mut chart, *class, hist, None)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_distribution_log(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    histos: &[(SampleClass, Histogram1d)],
    normalized: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (lo, hi) = (histos[0].1.lo(), histos[0].1.hi());

    let global_min = histos
        .iter()
        .filter_map(|(_, h)| h.min_positive())
        .fold(f64::INFINITY, f64::min);
    let global_max = histos
        .iter()
        .map(|(_, h)| h.max_value())
        .fold(0.0, f64::max);

    let (y_lo, y_hi) = if global_min.is_finite() && global_max > 0.0 {
        let logrange = global_max.log10() - global_min.log10();
        (0.5 * global_min, global_max * 10f64.powf(logrange.max(1.0)))
    } else {
        (1e-6, 1.0)
    };

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(lo..hi, (y_lo..y_hi).log_scale())?;

    chart
        .configure_mesh()
        .y_desc(y_axis_title(normalized))
        .draw()?;

    for (class, hist) in histos {
        draw_sample(&mut chart, *class, hist, Some(y_lo))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// Draw one sample into a distribution panel and register its legend entry.
fn draw_sample<CT>(
    chart: &mut ChartContext<BitMapBackend, CT>,
    class: SampleClass,
    hist: &Histogram1d,
    floor: Option<f64>,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    CT: CoordTranslate<From = (f64, f64)>,
{
    let color = style::sample_color(class);
    if class.draws_as_points() {
        draw_error_bars(chart, hist, color, floor, Some(class.label()))?;
        return Ok(());
    }

    if class == SampleClass::Full {
        let bottom = floor.unwrap_or(0.0);
        chart.draw_series(hist.counts().iter().enumerate().map(|(i, &c)| {
            Rectangle::new(
                [
                    (hist.edges()[i], bottom),
                    (hist.edges()[i + 1], c.max(bottom)),
                ],
                color.mix(0.15).filled(),
            )
        }))?;
    }

    chart
        .draw_series(LineSeries::new(
            step_points(hist, floor),
            color.stroke_width(3),
        ))?
        .label(class.label())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    Ok(())
}

/// Vertical error bars for bins with content, with an optional legend entry.
fn draw_error_bars<CT>(
    chart: &mut ChartContext<BitMapBackend, CT>,
    hist: &Histogram1d,
    color: RGBColor,
    floor: Option<f64>,
    label: Option<&str>,
) -> std::result::Result<(), Box<dyn std::error::Error>>
where
    CT: CoordTranslate<From = (f64, f64)>,
{
    let centers = hist.bin_centers();
    let errors = hist.errors();
    let counts = hist.counts();
    let clamp = move |v: f64| floor.map_or(v, |f| v.max(f));

    let bars: Vec<_> = (0..hist.n_bins())
        .filter(|&i| counts[i] > 0.0)
        .map(|i| {
            ErrorBar::new_vertical(
                centers[i],
                clamp(counts[i] - errors[i]),
                clamp(counts[i]),
                clamp(counts[i] + errors[i]),
                color.filled(),
                6,
            )
        })
        .collect();

    let anno = chart.draw_series(bars)?;
    if let Some(label) = label {
        anno.label(label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
        });
    }
    Ok(())
}

fn draw_ratio(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    var: &VariableSpec,
    ratios: &[(SampleClass, Histogram1d)],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (lo, hi) = (ratios[0].1.lo(), ratios[0].1.hi());
    let y_lo = 1.0 - var.ratio_range + 1e-4;
    let y_hi = 1.0 + var.ratio_range - 1e-4;

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(lo..hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(&var.title)
        .y_desc("FastSim / FullSim")
        .draw()?;

    for (class, ratio) in ratios {
        let color = style::sample_color(*class);
        if class.draws_as_points() {
            draw_error_bars(&mut chart, ratio, color, None, None)?;
        } else {
            chart.draw_series(LineSeries::new(
                step_points(ratio, None),
                color.stroke_width(3),
            ))?;
        }
    }

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(lo, 1.0), (hi, 1.0)],
        BLACK,
    )))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_points_shape() {
        let binning = Binning::from_spec(&[2.0, 0.0, 2.0]).unwrap();
        let mut hist = Histogram1d::new(&binning);
        hist.fill(0.5);
        let points = step_points(&hist, None);
        assert_eq!(
            points,
            vec![(0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (2.0, 0.0)]
        );
    }

    #[test]
    fn test_step_points_floor_clamps_empty_bins() {
        let binning = Binning::from_spec(&[2.0, 0.0, 2.0]).unwrap();
        let mut hist = Histogram1d::new(&binning);
        hist.fill(0.5);
        let points = step_points(&hist, Some(0.1));
        assert_eq!(points[2], (1.0, 0.1));
        assert_eq!(points[3], (2.0, 0.1));
    }

    #[test]
    fn test_y_axis_title() {
        assert_eq!(y_axis_title(true), "Fraction of Jets");
        assert_eq!(y_axis_title(false), "Jets");
    }
}
