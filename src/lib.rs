pub mod commands;
pub mod domain;
pub mod services;

pub use domain::distribution::{Basis, Distribution, Domain};
pub use domain::error::PoolingError;
pub use domain::estimate::{RiskEventInput, RiskItemInput, ThreePointEstimate};
pub use services::aggregation::{
    AggregationError, RiskEventAggregate, aggregate_estimates, aggregate_risk_events,
    aggregate_risk_items,
};
pub use services::discretizer::discretize;
pub use services::estimate_statistics::{EstimateStats, estimate_stats};
pub use services::pooling::{pool, pool_linear, pool_logistic_normalized, pool_logistic_raw};
pub use services::pooling_config::{DEFAULT_RESOLUTION, PoolingConfig, PoolingRule, RangePolicy};
pub use services::range::determine_range;
