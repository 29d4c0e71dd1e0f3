//! MDLP: entropy-based discretization with a minimum description length stopping rule.
//!
//! # The Algorithm (Fayyad & Irani, 1993)
//!
//! The samples are sorted by value and the sorted range is split recursively:
//!
//! 1. Among the *boundary points* of the interval (positions where the class
//!    label changes between neighbours), pick the one minimizing the weighted
//!    class entropy of the two halves.
//! 2. Accept the split only if its information gain clears the MDL threshold:
//!
//! ```text
//! Gain(A, T; S) > log2(N - 1) / N + Δ(A, T; S) / N
//! Δ(A, T; S) = log2(3^k - 2) - [k·Ent(S) - k1·Ent(S1) - k2·Ent(S2)]
//! ```
//!
//!    where `k`, `k1`, `k2` are the number of classes present in the interval
//!    and in each half.
//! 3. Recurse on both halves until the interval is too short, the depth limit is
//!    reached, or no split is accepted.
//!
//! A boundary must fall between two *distinct* values, so a candidate sitting
//! inside a run of equal values is moved to the edge of that run before the
//! split is recorded.
//!
//! Optionally the final set is pruned greedily down to a cut point budget.
//!
//! ## Complexity
//!
//! - **Time**: O(n log n) for the sort plus O(n²) per level in the worst case
//!   for candidate scoring (entropies are memoized per interval).
//! - **Space**: O(n) for the sorted view plus the interval caches.
//!
//! ## References
//!
//! Fayyad, U. M., Irani, K. B. (1993). "Multi-Interval Discretization of
//! Continuous-Valued Attributes for Classification Learning." IJCAI-93.

use super::metrics::IntervalStatistics;
use super::prune::BudgetPruner;
use super::sort::{check_shape, min_max, sort_permutation};
use super::traits::Discretizer;
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Upper bound on the number of interior cut points kept after the search.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CutBudget {
    /// Keep every accepted cut point.
    #[default]
    Unbounded,
    /// Keep at most this many cut points. `Count(0)` is the same as `Unbounded`.
    Count(usize),
    /// Keep at most `round(n_items * f)` cut points, with `f` in `(0, 1)`.
    Fraction(f32),
}

impl CutBudget {
    /// Interpret a single numeric budget.
    ///
    /// `0` means unbounded, a value in `(0, 1)` is a fraction of the dataset
    /// size, and an integral value `>= 1` is an absolute count.
    pub fn from_proposed(proposed: f32) -> Result<Self> {
        if !proposed.is_finite() || proposed < 0.0 {
            return Err(Error::InvalidParameter {
                name: "cut_budget",
                message: "must be finite and non-negative",
            });
        }
        if proposed == 0.0 {
            Ok(Self::Unbounded)
        } else if proposed < 1.0 {
            Ok(Self::Fraction(proposed))
        } else if proposed.fract() == 0.0 {
            Ok(Self::Count(proposed as usize))
        } else {
            Err(Error::InvalidParameter {
                name: "cut_budget",
                message: "must be a fraction in (0, 1) or a whole count",
            })
        }
    }

    /// Concrete budget for a dataset of `n_items` samples; `None` disables pruning.
    fn resolve(self, n_items: usize) -> Result<Option<usize>> {
        match self {
            Self::Unbounded | Self::Count(0) => Ok(None),
            Self::Count(requested) if requested > n_items => {
                Err(Error::InvalidCutBudget { requested, n_items })
            }
            Self::Count(requested) => Ok(Some(requested)),
            Self::Fraction(f) if !(f > 0.0 && f < 1.0) => Err(Error::InvalidParameter {
                name: "cut_budget",
                message: "fraction must lie in (0, 1)",
            }),
            Self::Fraction(f) => {
                let n = (n_items as f64 * f64::from(f)).round() as usize;
                Ok((n > 0).then_some(n))
            }
        }
    }
}

/// Fayyad–Irani MDLP discretizer.
///
/// Interior cut points are midpoints between neighbouring distinct values.
/// When those values are adjacent `f32`s the cut point is the upper value,
/// so it can coincide with the fitted maximum.
#[derive(Debug)]
pub struct Mdlp {
    /// Intervals shorter than this are never split.
    min_length: usize,
    /// Maximum recursion depth (the full range is depth 1).
    max_depth: usize,
    cut_budget: CutBudget,

    /// Feature values in sort-permutation order.
    sorted_values: Vec<f32>,
    stats: IntervalStatistics,
    cut_points: Vec<f32>,
    depth: usize,
    fitted: bool,
}

impl Mdlp {
    /// Create a discretizer with default parameters.
    ///
    /// Defaults: `min_length = 3`, unlimited depth, no cut point budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum interval length eligible for splitting (at least 3).
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the maximum recursion depth (at least 1).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the cut point budget applied after the search.
    pub fn with_cut_budget(mut self, cut_budget: CutBudget) -> Self {
        self.cut_budget = cut_budget;
        self
    }

    /// Deepest recursion level reached by the last fit (0 before any fit).
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn validate(&self) -> Result<()> {
        if self.min_length < 3 {
            return Err(Error::InvalidParameter {
                name: "min_length",
                message: "must be at least 3",
            });
        }
        if self.max_depth == 0 {
            return Err(Error::InvalidParameter {
                name: "max_depth",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Build the sorted view and point the statistics at it.
    fn prepare(&mut self, values: &[f32], labels: &[i32]) -> Result<()> {
        let perm = sort_permutation(values, labels);
        self.sorted_values = perm.iter().map(|&i| values[i]).collect();
        self.stats.reset(labels, &perm)
    }

    #[inline]
    fn value_at(&self, pos: usize) -> Result<f32> {
        self.sorted_values
            .get(pos)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index: pos,
                len: self.sorted_values.len(),
            })
    }

    /// Split `[start, end)` recursively, collecting accepted cut values.
    fn compute_cut_points(&mut self, start: usize, end: usize) -> Result<()> {
        // Work stack instead of call recursion: degenerate data can peel one
        // sample per level.
        let mut pending = vec![(start, end, 1usize)];
        while let Some((start, end, depth)) = pending.pop() {
            if end < start || end - start < self.min_length || depth > self.max_depth {
                continue;
            }
            self.depth = self.depth.max(depth);

            let Some(candidate) = self.select_candidate(start, end)? else {
                continue;
            };
            if !self.accepts_split(start, candidate, end)? {
                continue;
            }

            let (value, cut) = self.resolve_cut_point(start, candidate, end)?;
            trace!(start, end, depth, candidate, cut, value, "accepted cut point");
            self.cut_points.push(value);

            pending.push((cut, end, depth + 1));
            pending.push((start, cut, depth + 1));
        }
        Ok(())
    }

    /// Boundary point of `[start, end)` with minimal weighted class entropy.
    ///
    /// Only positions where the label changes are eligible. A candidate must
    /// beat the entropy of the unsplit interval; ties keep the first position.
    fn select_candidate(&self, start: usize, end: usize) -> Result<Option<usize>> {
        let window = self
            .sorted_values
            .get(start..end)
            .ok_or(Error::IndexOutOfBounds {
                index: end,
                len: self.sorted_values.len(),
            })?;
        match window.first() {
            Some(&first) if window.iter().any(|&v| v != first) => {}
            _ => return Ok(None),
        }

        let n = (end - start) as f64;
        let mut best = self.stats.entropy(start, end)?;
        let mut candidate = None;
        for idx in (start + 1)..end {
            if self.stats.class_at(idx)? == self.stats.class_at(idx - 1)? {
                continue;
            }
            let left = (idx - start) as f64 / n * self.stats.entropy(start, idx)?;
            let right = (end - idx) as f64 / n * self.stats.entropy(idx, end)?;
            if left + right < best {
                best = left + right;
                candidate = Some(idx);
            }
        }
        Ok(candidate)
    }

    /// MDL acceptance test for splitting `[start, end)` at `cut`.
    fn accepts_split(&self, start: usize, cut: usize, end: usize) -> Result<bool> {
        let n = end.saturating_sub(start);
        if n < 2 {
            return Ok(false);
        }
        let s = &self.stats;
        let k = s.class_count(start, end)? as f64;
        let k1 = s.class_count(start, cut)? as f64;
        let k2 = s.class_count(cut, end)? as f64;
        let ent = s.entropy(start, end)?;
        let ent1 = s.entropy(start, cut)?;
        let ent2 = s.entropy(cut, end)?;
        let gain = s.information_gain(start, cut, end)?;

        let delta = (3f64.powf(k) - 2.0).log2() - (k * ent - k1 * ent1 - k2 * ent2);
        let n = n as f64;
        let threshold = ((n - 1.0).log2() + delta) / n;
        Ok(gain > threshold)
    }

    /// Move `cut` off any run of values equal to the value at `cut`.
    ///
    /// Returns the boundary value (midpoint between the last value of the left
    /// half and the first value of the right half) and the adjusted split index.
    /// The run normally moves into the right half; when it reaches back to
    /// `start` it moves into the left half instead.
    fn resolve_cut_point(&self, start: usize, cut: usize, end: usize) -> Result<(f32, usize)> {
        let actual = self.value_at(cut)?;

        let mut prev_idx = if cut > start { cut - 1 } else { cut };
        let mut previous = self.value_at(prev_idx)?;
        while prev_idx > start && previous == actual {
            prev_idx -= 1;
            previous = self.value_at(prev_idx)?;
        }
        let back_wall = prev_idx == start && previous == actual;

        let mut next_idx = if cut + 1 < end { cut + 1 } else { cut };
        let mut next = self.value_at(next_idx)?;
        while next_idx + 1 < end && next == actual {
            next_idx += 1;
            next = self.value_at(next_idx)?;
        }

        let resolved = if back_wall {
            next_idx.max(cut + 1)
        } else {
            prev_idx + 1
        };
        if resolved <= start || resolved >= end {
            return Err(Error::IndexOutOfBounds {
                index: resolved,
                len: end,
            });
        }

        // Sum in f64; two large finite f32 values can overflow.
        let right = self.value_at(resolved)?;
        let mid = ((f64::from(previous) + f64::from(right)) / 2.0) as f32;
        // Adjacent floats have no midpoint; the upper value still separates them.
        let value = if mid > previous { mid } else { right };
        Ok((value, resolved))
    }
}

impl Default for Mdlp {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_depth: usize::MAX,
            cut_budget: CutBudget::Unbounded,
            sorted_values: Vec::new(),
            stats: IntervalStatistics::new(),
            cut_points: Vec::new(),
            depth: 0,
            fitted: false,
        }
    }
}

impl Discretizer for Mdlp {
    /// Search for cut points separating the classes in `labels`.
    ///
    /// Any previous fit is discarded first, so a failed fit leaves the
    /// discretizer unfitted.
    fn fit(&mut self, values: &[f32], labels: &[i32]) -> Result<()> {
        self.fitted = false;
        self.cut_points.clear();
        self.depth = 0;

        self.validate()?;
        check_shape(values, labels)?;
        let budget = self.cut_budget.resolve(values.len())?;

        self.prepare(values, labels)?;
        self.compute_cut_points(0, self.stats.len())?;
        self.cut_points.sort_by(f32::total_cmp);
        let found = self.cut_points.len();

        if let Some(budget) = budget {
            BudgetPruner::new(&self.sorted_values, &self.stats)
                .prune(&mut self.cut_points, budget)?;
        }

        let (lo, hi) = min_max(values)?;
        self.cut_points.insert(0, lo);
        self.cut_points.push(hi);
        self.fitted = true;

        debug!(
            n_items = values.len(),
            n_classes = self.stats.num_classes(),
            found,
            kept = self.cut_points.len() - 2,
            depth = self.depth,
            "mdlp fit complete"
        );
        Ok(())
    }

    fn cut_points(&self) -> Result<&[f32]> {
        if self.fitted {
            Ok(&self.cut_points)
        } else {
            Err(Error::NotFitted)
        }
    }
}
