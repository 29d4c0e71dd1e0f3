use super::metrics::IntervalStatistics;
use crate::error::Result;
use tracing::debug;

/// Greedy reduction of a sorted cut point set down to a fixed budget.
///
/// Each round splits the sorted samples into the bins implied by the current
/// cut points, finds the bin with the highest label entropy, and drops the cut
/// point that closes that bin. Removals are never revisited.
pub(crate) struct BudgetPruner<'a> {
    sorted_values: &'a [f32],
    stats: &'a IntervalStatistics,
}

impl<'a> BudgetPruner<'a> {
    pub(crate) fn new(sorted_values: &'a [f32], stats: &'a IntervalStatistics) -> Self {
        Self {
            sorted_values,
            stats,
        }
    }

    /// Remove cut points from `cuts` (ascending, no sentinels) until at most `budget` remain.
    pub(crate) fn prune(&self, cuts: &mut Vec<f32>, budget: usize) -> Result<()> {
        while cuts.len() > budget {
            let idx = self.noisiest_bin(cuts)?;
            let removed = cuts.remove(idx);
            debug!(cut = removed, remaining = cuts.len(), budget, "pruned cut point");
        }
        Ok(())
    }

    /// Index of the cut point closing the highest-entropy bin.
    ///
    /// Only bins to the left of a cut point are scored; the trailing bin above
    /// the last cut point never is. Ties keep the leftmost bin, and when every
    /// bin is pure the first cut point goes.
    fn noisiest_bin(&self, cuts: &[f32]) -> Result<usize> {
        let mut max_entropy = 0.0;
        let mut max_idx = 0;
        let mut begin = 0;
        for (idx, &cut) in cuts.iter().enumerate() {
            let end = begin + self.sorted_values[begin..].partition_point(|&v| v < cut);
            let entropy = self.stats.entropy(begin, end)?;
            if entropy > max_entropy {
                max_entropy = entropy;
                max_idx = idx;
            }
            begin = end;
        }
        Ok(max_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(labels: &[i32]) -> (Vec<f32>, IntervalStatistics) {
        let values: Vec<f32> = (1..=labels.len()).map(|v| v as f32).collect();
        let perm: Vec<usize> = (0..labels.len()).collect();
        let mut stats = IntervalStatistics::new();
        stats.reset(labels, &perm).unwrap();
        (values, stats)
    }

    #[test]
    fn drops_cut_closing_mixed_bin() {
        // Bins: {1, 2} pure, {3..6} mixed, {7, 8} unscored.
        let (values, stats) = setup(&[0, 0, 0, 1, 0, 1, 1, 1]);
        let pruner = BudgetPruner::new(&values, &stats);
        let mut cuts = vec![2.5, 6.5];
        pruner.prune(&mut cuts, 1).unwrap();
        assert_eq!(cuts, vec![2.5]);
    }

    #[test]
    fn pure_bins_drop_first_cut() {
        let (values, stats) = setup(&[0, 0, 1, 1, 2, 2]);
        let pruner = BudgetPruner::new(&values, &stats);
        let mut cuts = vec![2.5, 4.5];
        pruner.prune(&mut cuts, 1).unwrap();
        assert_eq!(cuts, vec![4.5]);
    }

    #[test]
    fn prunes_down_to_budget() {
        let (values, stats) = setup(&[0, 1, 0, 1, 0, 1, 0, 1, 0, 1]);
        let pruner = BudgetPruner::new(&values, &stats);
        let mut cuts = vec![2.5, 4.5, 6.5, 8.5];
        pruner.prune(&mut cuts, 2).unwrap();
        assert_eq!(cuts.len(), 2);
        assert!(cuts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn within_budget_is_untouched() {
        let (values, stats) = setup(&[0, 0, 1, 1]);
        let pruner = BudgetPruner::new(&values, &stats);
        let mut cuts = vec![2.5];
        pruner.prune(&mut cuts, 3).unwrap();
        assert_eq!(cuts, vec![2.5]);
    }
}
