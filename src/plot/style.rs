//! Shared colors and palette helpers for the plot families.

use plotters::style::RGBColor;

use crate::loss::Split;
use crate::samples::SampleClass;

/// Fixed per-sample colors for the regression comparisons.
#[must_use]
pub fn sample_color(class: SampleClass) -> RGBColor {
    match class {
        SampleClass::Full => RGBColor(45, 135, 70),
        SampleClass::Fast => RGBColor(200, 60, 50),
        SampleClass::Refined => RGBColor(50, 90, 200),
        SampleClass::RefinedTest => RGBColor(100, 150, 230),
    }
}

/// Learning-curve series colors per split.
#[must_use]
pub fn split_color(split: Split) -> RGBColor {
    match split {
        Split::Train => RGBColor(66, 133, 244),
        Split::Validation => RGBColor(255, 128, 0),
    }
}

/// Diverging green/white/pink map for correlation values in [-1, 1].
///
/// Negative values fade toward green, positive toward pink, zero is white.
#[must_use]
pub fn diverging_color(value: f64) -> RGBColor {
    let t = value.clamp(-1.0, 1.0);
    let (r, g, b) = if t < 0.0 {
        (27.0, 158.0, 119.0)
    } else {
        (231.0, 41.0, 138.0)
    };
    let mag = t.abs();
    let lerp = |c: f64| (255.0 + (c - 255.0) * mag).round() as u8;
    RGBColor(lerp(r), lerp(g), lerp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diverging_color_endpoints() {
        assert_eq!(diverging_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(diverging_color(-1.0), RGBColor(27, 158, 119));
        assert_eq!(diverging_color(1.0), RGBColor(231, 41, 138));
        // out-of-range values are clamped
        assert_eq!(diverging_color(5.0), diverging_color(1.0));
    }

    #[test]
    fn test_sample_colors_distinct() {
        let colors: Vec<_> = SampleClass::ALL.iter().map(|&c| sample_color(c)).collect();
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }
}
