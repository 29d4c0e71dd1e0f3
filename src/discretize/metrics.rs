//! Class statistics over intervals of a sorted feature.
//!
//! All ranges are half-open `[start, end)` positions in the sort permutation,
//! not positions in the caller's original order.

use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Memoized class counts, entropy and information gain over permutation intervals.
///
/// Queries take `&self`; the caches are guarded by locks so a single instance
/// can serve concurrent evaluations of the same fit. [`reset`](Self::reset)
/// swaps in a new dataset and drops every cached value.
#[derive(Debug, Default)]
pub struct IntervalStatistics {
    /// Dense class index of each sample, in permutation order.
    classes: Vec<usize>,
    num_classes: usize,
    entropy_cache: Mutex<HashMap<(usize, usize), f64>>,
    gain_cache: Mutex<HashMap<(usize, usize, usize), f64>>,
}

impl IntervalStatistics {
    /// Create an empty instance. Call [`reset`](Self::reset) before querying.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the statistics at a new `(labels, permutation)` pair and clear all caches.
    ///
    /// Every entry of `permutation` must index into `labels`.
    pub fn reset(&mut self, labels: &[i32], permutation: &[usize]) -> Result<()> {
        let mut distinct = labels.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let mut classes = Vec::with_capacity(permutation.len());
        for &i in permutation {
            let label = labels.get(i).ok_or(Error::IndexOutOfBounds {
                index: i,
                len: labels.len(),
            })?;
            let class = distinct
                .binary_search(label)
                .map_err(|index| Error::IndexOutOfBounds {
                    index,
                    len: distinct.len(),
                })?;
            classes.push(class);
        }

        self.classes = classes;
        self.num_classes = distinct.len();
        self.entropy_cache.get_mut().clear();
        self.gain_cache.get_mut().clear();
        Ok(())
    }

    /// Number of samples in the current dataset.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no dataset has been loaded.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of distinct labels in the whole dataset.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Dense class index of the sample at permutation position `pos`.
    pub(crate) fn class_at(&self, pos: usize) -> Result<usize> {
        self.classes.get(pos).copied().ok_or(Error::IndexOutOfBounds {
            index: pos,
            len: self.classes.len(),
        })
    }

    fn range(&self, start: usize, end: usize) -> Result<&[usize]> {
        if start > end {
            return Err(Error::IndexOutOfBounds {
                index: start,
                len: end,
            });
        }
        self.classes.get(start..end).ok_or(Error::IndexOutOfBounds {
            index: end,
            len: self.classes.len(),
        })
    }

    /// Number of distinct classes in `[start, end)`; 0 for an empty range.
    pub fn class_count(&self, start: usize, end: usize) -> Result<usize> {
        let mut seen = vec![false; self.num_classes];
        let mut count = 0;
        for &c in self.range(start, end)? {
            if !seen[c] {
                seen[c] = true;
                count += 1;
            }
        }
        Ok(count)
    }

    /// Shannon entropy (bits) of the label distribution in `[start, end)`.
    ///
    /// Intervals shorter than two samples carry no information and return 0.
    pub fn entropy(&self, start: usize, end: usize) -> Result<f64> {
        let slice = self.range(start, end)?;
        if slice.len() < 2 {
            return Ok(0.0);
        }

        let mut cache = self.entropy_cache.lock();
        if let Some(&e) = cache.get(&(start, end)) {
            return Ok(e);
        }

        let mut counts = vec![0usize; self.num_classes];
        for &c in slice {
            counts[c] += 1;
        }
        let n = slice.len() as f64;
        let e = counts
            .iter()
            .filter(|&&count| count > 0)
            .map(|&count| {
                let p = count as f64 / n;
                -p * p.log2()
            })
            .sum();

        cache.insert((start, end), e);
        Ok(e)
    }

    /// Entropy reduction from splitting `[start, end)` at `cut`.
    ///
    /// ```text
    /// IG = E(start, end) - [(cut - start)·E(start, cut) + (end - cut)·E(cut, end)] / (end - start)
    /// ```
    pub fn information_gain(&self, start: usize, cut: usize, end: usize) -> Result<f64> {
        if cut < start || end < cut || end == start {
            return Err(Error::IndexOutOfBounds {
                index: cut,
                len: end,
            });
        }
        if let Some(&g) = self.gain_cache.lock().get(&(start, cut, end)) {
            return Ok(g);
        }

        let whole = self.entropy(start, end)?;
        let left = self.entropy(start, cut)?;
        let right = self.entropy(cut, end)?;
        let n_left = (cut - start) as f64;
        let n_right = (end - cut) as f64;
        let gain = whole - (n_left * left + n_right * right) / (end - start) as f64;

        self.gain_cache.lock().insert((start, cut, end), gain);
        Ok(gain)
    }

    #[cfg(test)]
    fn cached_entries(&self) -> (usize, usize) {
        (self.entropy_cache.lock().len(), self.gain_cache.lock().len())
    }
}
