//! Discretizers for continuous features.
//!
//! A discretizer learns an ascending list of cut points for one feature and
//! then maps values to integer bin indices. The first and last cut points are
//! sentinels (the fitted minimum and maximum); only interior cut points
//! separate bins.
//!
//! ## Supervised vs Unsupervised
//!
//! **Supervised** discretization looks at the class labels and puts boundaries
//! where they help separate classes. It adapts the number of bins to the data
//! and can decide that a feature deserves no split at all.
//!
//! **Unsupervised** binning only looks at the values. It is cheap and
//! predictable, but a boundary can land in the middle of a pure region.
//!
//! ## Algorithms (implemented)
//!
//! ### MDLP
//!
//! Recursive binary splitting on class entropy, stopped by the minimum
//! description length principle (Fayyad & Irani, 1993).
//!
//! **Objective**: at each interval, pick the boundary point `T` minimizing
//!
//! ```text
//! E(T; S) = |S1|/|S| · Ent(S1) + |S2|/|S| · Ent(S2)
//! ```
//!
//! and keep it only if the information gain pays for encoding the split.
//!
//! **When to use**: features feeding a classifier that wants a few, meaningful
//! bins (naive Bayes, Bayesian network classifiers, rule learners).
//!
//! ### Fixed-strategy bins
//!
//! Equal-width, equal-frequency, and proportional k-interval (`sqrt(n)`
//! equal-frequency bins).
//!
//! ## Usage
//!
//! ```rust
//! use mdlp::discretize::{BinDiscretizer, BinStrategy, CutBudget, Discretizer, Mdlp};
//!
//! let values: Vec<f32> = (1..=16).map(|v| v as f32).collect();
//! let labels = [1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3];
//!
//! // Supervised: boundaries follow the label transitions.
//! let mut mdlp = Mdlp::new().with_cut_budget(CutBudget::Unbounded);
//! mdlp.fit(&values, &labels).unwrap();
//! assert_eq!(mdlp.cut_points().unwrap(), &[1.0, 5.5, 10.5, 16.0]);
//! assert_eq!(mdlp.transform(&[2.0, 7.0, 15.0]).unwrap(), vec![0, 1, 2]);
//!
//! // Unsupervised: four equal-width bins, labels ignored.
//! let mut bins = BinDiscretizer::new(4, BinStrategy::Uniform);
//! let binned = bins.fit_transform(&values, &[]).unwrap();
//! assert_eq!(binned.len(), values.len());
//! ```

mod bins;
mod mdlp;
mod metrics;
mod prune;
mod sort;
mod traits;

pub use bins::{BinDiscretizer, BinStrategy};
pub use mdlp::{CutBudget, Mdlp};
pub use metrics::IntervalStatistics;
pub use sort::sort_permutation;
pub use traits::Discretizer;
