use serde::Serialize;

use crate::services::pooling_config::{PoolingRule, RangePolicy};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PoolingPercentiles {
    pub p5: Option<f64>,
    pub p50: Option<f64>,
    pub p85: Option<f64>,
    pub p95: Option<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PoolingReport {
    pub data_source: String,
    pub risk: String,
    pub rule: PoolingRule,
    pub range_policy: RangePolicy,
    pub inputs: usize,
    pub resolution: usize,
    pub min_point: f64,
    pub max_point: f64,
    pub total_mass: f64,
    pub mean: Option<f64>,
    pub peak: Option<f64>,
    pub percentiles: PoolingPercentiles,
    pub average_likelihood: Option<f64>,
}
