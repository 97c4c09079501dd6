//! 1D histograms and the correlation factor.

/// Histogram binning: uniform bins over a range, or explicit bin edges.
///
/// The plot spec carries binning as a bare number list; three entries mean
/// `[bins, lo, hi]`, more than three mean explicit ascending edges.
#[derive(Debug, Clone, PartialEq)]
pub enum Binning {
    /// `bins` equal-width bins covering `[lo, hi)`
    Uniform {
        /// Number of bins
        bins: usize,
        /// Lower edge
        lo: f64,
        /// Upper edge
        hi: f64,
    },
    /// Explicit ascending bin edges
    Edges(Vec<f64>),
}

impl Binning {
    /// Interpret a spec-format number list.
    ///
    /// Returns `None` for lists a validated spec can never contain (fewer
    /// than three entries, non-positive bin count, inverted range, unsorted
    /// edges).
    #[must_use]
    pub fn from_spec(spec: &[f64]) -> Option<Self> {
        if spec.len() > 3 {
            if spec.windows(2).any(|w| w[0] >= w[1]) {
                return None;
            }
            return Some(Self::Edges(spec.to_vec()));
        }
        if spec.len() < 3 {
            return None;
        }
        let bins = spec[0];
        if bins < 1.0 || bins.fract() != 0.0 || spec[1] >= spec[2] {
            return None;
        }
        Some(Self::Uniform {
            bins: bins as usize,
            lo: spec[1],
            hi: spec[2],
        })
    }

    /// Materialized bin edges, ascending, `bins + 1` entries.
    #[must_use]
    pub fn edges(&self) -> Vec<f64> {
        match self {
            Self::Uniform { bins, lo, hi } => {
                let width = (hi - lo) / *bins as f64;
                (0..=*bins).map(|i| lo + width * i as f64).collect()
            }
            Self::Edges(edges) => edges.clone(),
        }
    }
}

/// A 1D histogram with sum-of-squared-weights error tracking.
///
/// Fills outside the bin range are dropped, so [`integral`](Self::integral)
/// equals the accepted fill count and unit normalization is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram1d {
    edges: Vec<f64>,
    counts: Vec<f64>,
    sumw2: Vec<f64>,
}

impl Histogram1d {
    /// Create an empty histogram for the given binning.
    #[must_use]
    pub fn new(binning: &Binning) -> Self {
        let edges = binning.edges();
        let bins = edges.len().saturating_sub(1);
        Self {
            edges,
            counts: vec![0.0; bins],
            sumw2: vec![0.0; bins],
        }
    }

    /// Number of bins.
    #[must_use]
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Lower edge of the axis.
    #[must_use]
    pub fn lo(&self) -> f64 {
        self.edges.first().copied().unwrap_or(0.0)
    }

    /// Upper edge of the axis.
    #[must_use]
    pub fn hi(&self) -> f64 {
        self.edges.last().copied().unwrap_or(0.0)
    }

    /// Bin edges, ascending.
    #[must_use]
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Bin contents.
    #[must_use]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Per-bin errors, `sqrt(sum w^2)`.
    #[must_use]
    pub fn errors(&self) -> Vec<f64> {
        self.sumw2.iter().map(|w| w.sqrt()).collect()
    }

    /// Bin centers, aligned with [`counts`](Self::counts).
    #[must_use]
    pub fn bin_centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|w| 0.5 * (w[0] + w[1]))
            .collect()
    }

    fn bin_index(&self, value: f64) -> Option<usize> {
        // the comparison also rejects NaN
        if self.counts.is_empty() || !(value >= self.lo() && value < self.hi()) {
            return None;
        }
        // first edge strictly above the value; bins are [edge[i], edge[i+1])
        let idx = self.edges.partition_point(|&edge| edge <= value);
        Some(idx - 1)
    }

    /// Fill with unit weight; values outside the axis range are dropped.
    pub fn fill(&mut self, value: f64) {
        self.fill_weighted(value, 1.0);
    }

    /// Fill with an explicit weight.
    pub fn fill_weighted(&mut self, value: f64, weight: f64) {
        if let Some(idx) = self.bin_index(value) {
            self.counts[idx] += weight;
            self.sumw2[idx] += weight * weight;
        }
    }

    /// Sum of bin contents.
    #[must_use]
    pub fn integral(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Multiply all contents by a factor.
    pub fn scale(&mut self, factor: f64) {
        for count in &mut self.counts {
            *count *= factor;
        }
        for w2 in &mut self.sumw2 {
            *w2 *= factor * factor;
        }
    }

    /// Scale to unit integral; a no-op on an empty histogram.
    pub fn normalize(&mut self) {
        let integral = self.integral();
        if integral > 0.0 {
            self.scale(1.0 / integral);
        }
    }

    /// Bin-wise ratio against a denominator with the same binning.
    ///
    /// Bins with an empty denominator go to zero, and the per-bin error is
    /// propagated in quadrature from both inputs.
    #[must_use]
    pub fn ratio(&self, denominator: &Histogram1d) -> Histogram1d {
        let mut out = Histogram1d {
            edges: self.edges.clone(),
            counts: vec![0.0; self.counts.len()],
            sumw2: vec![0.0; self.counts.len()],
        };
        for i in 0..self.counts.len() {
            let num = self.counts[i];
            let den = denominator.counts.get(i).copied().unwrap_or(0.0);
            if den == 0.0 {
                continue;
            }
            let value = num / den;
            out.counts[i] = value;
            if num != 0.0 {
                let rel_num = self.sumw2[i].sqrt() / num;
                let rel_den = denominator.sumw2[i].sqrt() / den;
                let err = value.abs() * (rel_num * rel_num + rel_den * rel_den).sqrt();
                out.sumw2[i] = err * err;
            }
        }
        out
    }

    /// Largest bin content.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.counts.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest strictly positive bin content, for log-scale axes.
    #[must_use]
    pub fn min_positive(&self) -> Option<f64> {
        self.counts
            .iter()
            .copied()
            .filter(|&c| c > 0.0)
            .reduce(f64::min)
    }
}

/// Pearson correlation factor over paired columns.
///
/// Degenerate input (fewer than two pairs, or zero variance in either
/// column) yields 0.0, the neutral value an empty heatmap cell shows.
#[must_use]
pub fn correlation_factor(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / nf;
    let mean_y = ys[..n].iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x <= 0.0 || var_y <= 0.0 {
        return 0.0;
    }
    (cov / (var_x * var_y).sqrt()).clamp(-1.0, 1.0)
}
