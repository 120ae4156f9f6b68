use thiserror::Error;
use tracing::info;

use crate::domain::distribution::Distribution;
use crate::domain::risk::Risk;
use crate::services::aggregation::{AggregationError, aggregate_risk};
use crate::services::distribution_plot::{PlotError, write_distribution_png};
use crate::services::pooling_config::PoolingConfig;
use crate::services::pooling_types::{PoolingPercentiles, PoolingReport};
use crate::services::risk_yaml::{RiskYamlError, load_risk_from_yaml_file};

#[derive(Error, Debug)]
pub enum PoolingRunError {
    #[error(transparent)]
    ReadRisk(#[from] RiskYamlError),
    #[error("failed to aggregate risk: {0}")]
    Aggregate(#[from] AggregationError),
    #[error(transparent)]
    Plot(#[from] PlotError),
}

pub struct PoolingOutput {
    pub report: PoolingReport,
    pub distribution: Distribution,
}

/// Loads a risk file, pools it and optionally renders the consensus to a PNG.
pub fn pool_from_risk_file(
    risk_path: &str,
    config: &PoolingConfig,
    plot_path: Option<&str>,
) -> Result<PoolingReport, PoolingRunError> {
    let risk = load_risk_from_yaml_file(risk_path)?;
    let mut output = run_pooling(&risk, config)?;
    output.report.data_source = data_source_name(risk_path);

    if let Some(path) = plot_path {
        write_distribution_png(path, &output.distribution, &risk.name)?;
        info!(path, "wrote distribution plot");
    }
    Ok(output.report)
}

pub fn run_pooling(risk: &Risk, config: &PoolingConfig) -> Result<PoolingOutput, PoolingRunError> {
    let (distribution, average_likelihood) = aggregate_risk(risk, config)?;
    let report = build_report(risk, config, &distribution, average_likelihood);
    Ok(PoolingOutput {
        report,
        distribution,
    })
}

fn build_report(
    risk: &Risk,
    config: &PoolingConfig,
    distribution: &Distribution,
    average_likelihood: Option<f64>,
) -> PoolingReport {
    PoolingReport {
        data_source: String::new(),
        risk: risk.name.clone(),
        rule: config.rule,
        range_policy: config.range_policy,
        inputs: risk.inputs.len(),
        resolution: distribution.resolution(),
        min_point: distribution.min_point(),
        max_point: distribution.max_point(),
        total_mass: distribution.total_mass(),
        mean: distribution.mean(),
        peak: distribution.peak_x(),
        percentiles: PoolingPercentiles {
            p5: distribution.percentile(5.0),
            p50: distribution.percentile(50.0),
            p85: distribution.percentile(85.0),
            p95: distribution.percentile(95.0),
        },
        average_likelihood,
    }
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
