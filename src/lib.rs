//! Supervised discretization of continuous features.
//!
//! `mdlp` turns a continuous feature into a handful of ordered bins whose
//! boundaries separate the feature's class labels as well as possible.
//!
//! The primary public API is under [`discretize`], which provides:
//! - [`Mdlp`]: recursive entropy minimization with the Fayyad–Irani MDL stopping rule
//! - [`BinDiscretizer`]: equal-width, equal-frequency and proportional k-interval binning
//! - [`Discretizer`]: the shared fit / transform interface

#![forbid(unsafe_code)]

pub mod discretize;
pub mod error;

pub use discretize::{
    sort_permutation, BinDiscretizer, BinStrategy, CutBudget, Discretizer, IntervalStatistics,
    Mdlp,
};
pub use error::{Error, Result};
