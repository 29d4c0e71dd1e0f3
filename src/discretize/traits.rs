use crate::error::{Error, Result};

/// Common interface for one-dimensional discretizers.
///
/// A fitted discretizer holds an ascending list of cut points whose first and
/// last entries are sentinels (the minimum and maximum of the fitted data).
/// Only the interior cut points separate bins.
pub trait Discretizer {
    /// Fit cut points to `values`, optionally guided by parallel class `labels`.
    fn fit(&mut self, values: &[f32], labels: &[i32]) -> Result<()>;

    /// The fitted cut points, sentinels included.
    fn cut_points(&self) -> Result<&[f32]>;

    /// Map each value to its bin index.
    ///
    /// A value's bin is the number of interior cut points that are `<=` the value,
    /// so a value equal to a cut point falls into the bin to its right.
    fn transform(&self, values: &[f32]) -> Result<Vec<usize>> {
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        let interior = interior(self.cut_points()?)?;
        Ok(values
            .iter()
            .map(|&v| interior.partition_point(|&cut| cut <= v))
            .collect())
    }

    /// Fit on `values` and return their bin indices.
    fn fit_transform(&mut self, values: &[f32], labels: &[i32]) -> Result<Vec<usize>> {
        self.fit(values, labels)?;
        self.transform(values)
    }

    /// Number of bins implied by the current cut points (0 when unfitted).
    fn n_bins(&self) -> usize {
        match self.cut_points() {
            Ok(cuts) if cuts.len() >= 2 => cuts.len() - 1,
            _ => 0,
        }
    }
}

fn interior(cuts: &[f32]) -> Result<&[f32]> {
    match cuts.len() {
        0 | 1 => Err(Error::NotFitted),
        n => Ok(&cuts[1..n - 1]),
    }
}
