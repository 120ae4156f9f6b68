use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::error::PoolingError;
use crate::domain::estimate::{RiskEventInput, RiskItemInput, ThreePointEstimate};
use crate::domain::risk::{Risk, RiskInputs};

#[derive(Error, Debug)]
pub enum RiskYamlError {
    #[error("failed to read risk yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse risk yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("risk has no estimates")]
    NoEstimates,
    #[error("estimate {index} is invalid: {source}")]
    InvalidEstimate {
        index: usize,
        #[source]
        source: PoolingError,
    },
    #[error("estimate {index} of a risk event is missing its likelihood")]
    MissingLikelihood { index: usize },
    #[error("estimate {index} of a risk item must not carry a likelihood")]
    UnexpectedLikelihood { index: usize },
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RiskRecord {
    RiskItem {
        name: String,
        estimates: Vec<EstimateRecord>,
    },
    RiskEvent {
        name: String,
        estimates: Vec<EstimateRecord>,
    },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EstimateRecord {
    low: f64,
    mid: f64,
    high: f64,
    likelihood: Option<f64>,
}

pub fn load_risk_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Risk, RiskYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_risk_from_yaml_str(&contents)
}

pub fn deserialize_risk_from_yaml_str(input: &str) -> Result<Risk, RiskYamlError> {
    let record: RiskRecord = serde_yaml::from_str(input)?;
    match record {
        RiskRecord::RiskItem { name, estimates } => {
            let items = estimates
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    if record.likelihood.is_some() {
                        return Err(RiskYamlError::UnexpectedLikelihood { index });
                    }
                    Ok(RiskItemInput::new(estimate_from_record(index, &record)?))
                })
                .collect::<Result<Vec<_>, _>>()?;
            build_risk(name, RiskInputs::Items(items))
        }
        RiskRecord::RiskEvent { name, estimates } => {
            let events = estimates
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    let likelihood = record
                        .likelihood
                        .ok_or(RiskYamlError::MissingLikelihood { index })?;
                    let estimate = estimate_from_record(index, &record)?;
                    RiskEventInput::new(estimate, likelihood)
                        .map_err(|source| RiskYamlError::InvalidEstimate { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?;
            build_risk(name, RiskInputs::Events(events))
        }
    }
}

fn build_risk(name: String, inputs: RiskInputs) -> Result<Risk, RiskYamlError> {
    if inputs.is_empty() {
        return Err(RiskYamlError::NoEstimates);
    }
    Ok(Risk { name, inputs })
}

fn estimate_from_record(
    index: usize,
    record: &EstimateRecord,
) -> Result<ThreePointEstimate, RiskYamlError> {
    ThreePointEstimate::new(record.low, record.mid, record.high)
        .map_err(|source| RiskYamlError::InvalidEstimate { index, source })
}
