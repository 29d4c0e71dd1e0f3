//! Unsupervised binning with fixed strategies.

use super::sort::{check_values, min_max};
use super::traits::Discretizer;
use crate::error::{Error, Result};
use tracing::debug;

/// How [`BinDiscretizer`] places its cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinStrategy {
    /// Equal-width bins between the minimum and maximum.
    Uniform,
    /// Equal-frequency bins from linearly interpolated percentiles.
    Quantile,
    /// Proportional k-interval: quantile bins with `max(3, floor(sqrt(n)))` bins.
    Proportional,
}

/// Equal-width / equal-frequency discretizer. Labels are ignored.
#[derive(Debug, Clone)]
pub struct BinDiscretizer {
    n_bins: usize,
    strategy: BinStrategy,
    cut_points: Option<Vec<f32>>,
}

const MIN_BINS: usize = 3;

impl BinDiscretizer {
    /// Create a binner with `n_bins` bins (at least 3).
    pub fn new(n_bins: usize, strategy: BinStrategy) -> Self {
        Self {
            n_bins,
            strategy,
            cut_points: None,
        }
    }

    /// Proportional k-interval discretization; the bin count follows the data size.
    pub fn proportional() -> Self {
        Self::new(MIN_BINS, BinStrategy::Proportional)
    }

    /// Number of bins used by the last fit (or the configured count before one).
    pub fn bins(&self) -> usize {
        self.n_bins
    }

    fn fit_uniform(&self, values: &[f32], n_bins: usize) -> Result<Vec<f32>> {
        let (lo, hi) = min_max(values)?;
        Ok(linspace(f64::from(lo), f64::from(hi), n_bins + 1)
            .into_iter()
            .map(|v| v as f32)
            .collect())
    }

    fn fit_quantile(&self, values: &[f32], n_bins: usize) -> Vec<f32> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f32::total_cmp);
        let (first, last) = (sorted[0], sorted[sorted.len() - 1]);
        if first == last {
            return vec![first, first];
        }
        percentiles(&sorted, &linspace(0.0, 100.0, n_bins + 1))
    }
}

impl Discretizer for BinDiscretizer {
    fn fit(&mut self, values: &[f32], _labels: &[i32]) -> Result<()> {
        self.cut_points = None;
        check_values(values)?;

        if self.strategy == BinStrategy::Proportional {
            self.n_bins = ((values.len() as f64).sqrt() as usize).max(MIN_BINS);
        }
        if self.n_bins < MIN_BINS {
            return Err(Error::InvalidParameter {
                name: "n_bins",
                message: "must be at least 3",
            });
        }
        if values.len() < self.n_bins {
            return Err(Error::InvalidParameter {
                name: "n_bins",
                message: "must not exceed the number of samples",
            });
        }

        let cuts = match self.strategy {
            BinStrategy::Uniform => self.fit_uniform(values, self.n_bins)?,
            BinStrategy::Quantile | BinStrategy::Proportional => {
                self.fit_quantile(values, self.n_bins)
            }
        };
        debug!(
            n_items = values.len(),
            n_bins = self.n_bins,
            strategy = ?self.strategy,
            n_cuts = cuts.len(),
            "bin fit complete"
        );
        self.cut_points = Some(cuts);
        Ok(())
    }

    fn cut_points(&self) -> Result<&[f32]> {
        self.cut_points.as_deref().ok_or(Error::NotFitted)
    }
}

/// `num` evenly spaced points from `start` to `end` inclusive.
fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    if start == end || num < 2 {
        return vec![start, end];
    }
    let delta = (end - start) / (num - 1) as f64;
    (0..num).map(|i| start + delta * i as f64).collect()
}

/// Linearly interpolated percentiles of sorted data (at least two samples).
///
/// A percentile equal to the previously kept one is skipped.
fn percentiles(sorted: &[f32], pcts: &[f64]) -> Vec<f32> {
    let last = (sorted.len() - 1) as f64;
    let mut out: Vec<f32> = Vec::with_capacity(pcts.len());
    for &pct in pcts {
        let q = pct / 100.0;
        let lower = ((last * q).floor() as usize).min(sorted.len() - 2);
        let lower_q = lower as f64 / last;
        let fraction = (q - lower_q) / ((lower + 1) as f64 / last - lower_q);
        let (a, b) = (f64::from(sorted[lower]), f64::from(sorted[lower + 1]));
        let value = (a + (b - a) * fraction) as f32;
        if out.last() != Some(&value) {
            out.push(value);
        }
    }
    out
}
