use mdlp::discretize::{BinDiscretizer, BinStrategy, CutBudget, Discretizer, Mdlp};
use proptest::prelude::*;

fn split(pairs: &[(i32, i32)]) -> (Vec<f32>, Vec<i32>) {
    // Half-unit grid so equal values are common.
    pairs.iter().map(|&(v, l)| (v as f32 / 2.0, l)).unzip()
}

fn fit_cuts(model: &mut Mdlp, values: &[f32], labels: &[i32]) -> Vec<f32> {
    model.fit(values, labels).unwrap();
    model.cut_points().unwrap().to_vec()
}

fn dataset() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0i32..24, 0i32..3), 1..80)
}

proptest! {
    #[test]
    fn prop_reordering_keeps_cut_points(
        (data, shuffled) in dataset().prop_flat_map(|d| (Just(d.clone()), Just(d).prop_shuffle()))
    ) {
        let (values, labels) = split(&data);
        let (values2, labels2) = split(&shuffled);
        let a = fit_cuts(&mut Mdlp::new(), &values, &labels);
        let b = fit_cuts(&mut Mdlp::new(), &values2, &labels2);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_sentinels_and_order(data in dataset(), min_length in 3usize..8) {
        let (values, labels) = split(&data);
        let cuts = fit_cuts(&mut Mdlp::new().with_min_length(min_length), &values, &labels);

        let lo = values.iter().copied().fold(f32::INFINITY, f32::min);
        let hi = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(cuts.len() >= 2);
        prop_assert_eq!(cuts[0], lo);
        prop_assert_eq!(cuts[cuts.len() - 1], hi);
        prop_assert!(cuts.windows(2).all(|w| w[0] <= w[1]));
        for &c in &cuts[1..cuts.len() - 1] {
            prop_assert!(lo < c && c < hi);
        }
    }

    #[test]
    fn prop_constant_values_never_split(
        value in -100i32..100,
        labels in prop::collection::vec(0i32..4, 1..50)
    ) {
        let values = vec![value as f32; labels.len()];
        let cuts = fit_cuts(&mut Mdlp::new(), &values, &labels);
        prop_assert_eq!(cuts, vec![value as f32, value as f32]);
    }

    #[test]
    fn prop_budget_respected(data in dataset(), budget in 1usize..4) {
        let (values, labels) = split(&data);
        prop_assume!(budget <= values.len());
        let mut model = Mdlp::new().with_cut_budget(CutBudget::Count(budget));
        let cuts = fit_cuts(&mut model, &values, &labels);
        prop_assert!(cuts.len() - 2 <= budget);

        // Pruning only removes cut points found by the unconstrained search.
        let full = fit_cuts(&mut Mdlp::new(), &values, &labels);
        for c in &cuts[1..cuts.len() - 1] {
            prop_assert!(full.contains(c));
        }
    }

    #[test]
    fn prop_cuts_sit_on_label_changes(
        (labels, order) in prop::collection::vec(0i32..3, 2..60)
            .prop_flat_map(|l| {
                let n = l.len();
                (Just(l), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
            })
    ) {
        // Distinct integer values, presented in shuffled order.
        let values: Vec<f32> = order.iter().map(|&i| i as f32).collect();
        let shuffled_labels: Vec<i32> = order.iter().map(|&i| labels[i]).collect();
        let cuts = fit_cuts(&mut Mdlp::new(), &values, &shuffled_labels);

        for &c in &cuts[1..cuts.len() - 1] {
            let below = c.floor() as usize;
            prop_assert_eq!(c, below as f32 + 0.5);
            prop_assert_ne!(labels[below], labels[below + 1]);
        }
    }

    #[test]
    fn prop_transform_in_range(data in dataset(), n_bins in 3usize..6) {
        let (values, labels) = split(&data);

        let mut mdlp = Mdlp::new();
        let bins = mdlp.fit_transform(&values, &labels).unwrap();
        prop_assert_eq!(bins.len(), values.len());
        prop_assert!(bins.iter().all(|&b| b < mdlp.n_bins()));

        prop_assume!(values.len() >= n_bins);
        for strategy in [BinStrategy::Uniform, BinStrategy::Quantile] {
            let mut binner = BinDiscretizer::new(n_bins, strategy);
            let bins = binner.fit_transform(&values, &[]).unwrap();
            prop_assert!(bins.iter().all(|&b| b < binner.n_bins()));
        }
    }
}
