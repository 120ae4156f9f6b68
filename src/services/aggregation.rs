use thiserror::Error;
use tracing::{debug, info};

use crate::domain::distribution::Distribution;
use crate::domain::error::PoolingError;
use crate::domain::estimate::{RiskEventInput, RiskItemInput, ThreePointEstimate};
use crate::domain::risk::{Risk, RiskInputs};
use crate::services::discretizer::construct_input_bases;
use crate::services::pooling::pool;
use crate::services::pooling_config::PoolingConfig;
use crate::services::range::determine_range;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregationError {
    #[error("input {index} is invalid: {source}")]
    Input {
        index: usize,
        #[source]
        source: PoolingError,
    },
    #[error("failed to pool inputs: {0}")]
    Pooling(#[from] PoolingError),
}

/// Pooled distribution of a set of risk events, with their mean likelihood.
///
/// `average_likelihood` is informational only; it does not weight `distribution`.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskEventAggregate {
    pub distribution: Distribution,
    pub average_likelihood: f64,
}

/// Runs range selection, discretization and pooling over a set of estimates.
pub fn aggregate_estimates(
    estimates: &[ThreePointEstimate],
    config: &PoolingConfig,
) -> Result<Distribution, AggregationError> {
    if estimates.is_empty() {
        return Err(PoolingError::EmptyInput.into());
    }
    if config.resolution == 0 {
        return Err(PoolingError::InvalidResolution.into());
    }
    for (index, estimate) in estimates.iter().enumerate() {
        estimate
            .validate()
            .map_err(|source| AggregationError::Input { index, source })?;
    }

    let domain = determine_range(estimates, config.range_policy)?;
    let bases = construct_input_bases(estimates, domain, config.resolution)
        .map_err(|(index, source)| AggregationError::Input { index, source })?;
    let pooled = pool(&bases, config.rule)?;

    debug!(
        inputs = estimates.len(),
        rule = ?config.rule,
        total_mass = pooled.total_mass(),
        "pooled estimates"
    );
    Ok(pooled.into())
}

pub fn aggregate_risk_items(
    items: &[RiskItemInput],
    config: &PoolingConfig,
) -> Result<Distribution, AggregationError> {
    let estimates: Vec<ThreePointEstimate> = items.iter().map(|item| item.estimate).collect();
    aggregate_estimates(&estimates, config)
}

pub fn aggregate_risk_events(
    events: &[RiskEventInput],
    config: &PoolingConfig,
) -> Result<RiskEventAggregate, AggregationError> {
    let estimates: Vec<ThreePointEstimate> = events.iter().map(|event| event.estimate).collect();
    let distribution = aggregate_estimates(&estimates, config)?;
    let average_likelihood =
        events.iter().map(|event| event.likelihood).sum::<f64>() / events.len() as f64;

    Ok(RiskEventAggregate {
        distribution,
        average_likelihood,
    })
}

/// Pools a parsed risk; the likelihood is only present for risk events.
pub fn aggregate_risk(
    risk: &Risk,
    config: &PoolingConfig,
) -> Result<(Distribution, Option<f64>), AggregationError> {
    info!(risk = %risk.name, inputs = risk.inputs.len(), "aggregating risk");
    match &risk.inputs {
        RiskInputs::Items(items) => Ok((aggregate_risk_items(items, config)?, None)),
        RiskInputs::Events(events) => {
            let aggregate = aggregate_risk_events(events, config)?;
            Ok((aggregate.distribution, Some(aggregate.average_likelihood)))
        }
    }
}
