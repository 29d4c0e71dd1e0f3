use thiserror::Error;

/// Errors returned by the discretizers in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cut point budget is incompatible with the dataset.
    #[error("invalid cut budget: requested {requested}, but dataset has {n_items} items")]
    InvalidCutBudget {
        /// Requested maximum number of cut points.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Values and labels have different lengths.
    #[error("length mismatch: {values} values but {labels} labels")]
    LengthMismatch {
        /// Number of feature values.
        values: usize,
        /// Number of class labels.
        labels: usize,
    },

    /// A feature value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the offending value in the caller's slice.
        index: usize,
    },

    /// Cut points were requested before a successful `fit`.
    #[error("discretizer has not been fitted")]
    NotFitted,

    /// Internal index arithmetic left the valid range.
    ///
    /// This indicates a bug in the crate, not bad input.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Offending index.
        index: usize,
        /// Length of the indexed range.
        len: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
