use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoolingError {
    #[error("invalid estimate: expected low <= mid <= high, got ({low}, {mid}, {high})")]
    InvalidEstimate { low: f64, mid: f64, high: f64 },
    #[error("estimate has zero variance: low and high are both {value}")]
    ZeroVariance { value: f64 },
    #[error("no inputs to pool")]
    EmptyInput,
    #[error("basis {index} does not match the shape of basis 0")]
    MismatchedShape { index: usize },
    #[error("basis {index} holds a negative or non-finite mass")]
    InvalidBasis { index: usize },
    #[error("likelihood must be within [0, 1], got {0}")]
    InvalidLikelihood(f64),
    #[error("resolution must be greater than zero")]
    InvalidResolution,
    #[error("invalid domain [{min_point}, {max_point}]")]
    InvalidDomain { min_point: f64, max_point: f64 },
    #[error("geometric pool has no mass left to normalize")]
    ZeroConsensusMass,
}
