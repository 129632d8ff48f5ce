use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A write would store a non-positive weight, or a required input was absent.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// An index-based operation got an index outside the pool's bounds.
    #[error("index {index} is out of range for a pool of {count} entries")]
    OutOfRange { index: usize, count: usize },

    /// Sampling was attempted on a pool with no entries.
    #[error("pool contains no entries")]
    EmptyCollection,

    /// The pool or its random source broke an invariant it relies on.
    #[error("internal error: {0}")]
    Internal(String),
}

impl PoolError {
    pub(crate) fn non_positive_weight(weight: i32) -> Self {
        PoolError::InvalidArgument {
            name: "weight",
            reason: format!("weight must be greater than zero, got {}", weight),
        }
    }

    pub(crate) fn argument_required(name: &'static str) -> Self {
        PoolError::InvalidArgument {
            name,
            reason: "argument required".to_string(),
        }
    }
}
