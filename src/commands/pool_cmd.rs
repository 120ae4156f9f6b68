use thiserror::Error;

use crate::commands::base_commands::{Commands, ReportFormat, pooling_config};
use crate::commands::report_format::format_pooling_report;
use crate::services::pooling_run::{PoolingRunError, pool_from_risk_file};
use crate::services::pooling_types::PoolingReport;

#[derive(Error, Debug)]
pub enum PoolCommandError {
    #[error(transparent)]
    Run(#[from] PoolingRunError),
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn pool_command(cmd: Commands) -> Result<(), PoolCommandError> {
    if let Commands::Pool {
        input,
        rule,
        resolution,
        range,
        plot,
        format,
    } = cmd
    {
        let config = pooling_config(rule, resolution, range);
        let report = pool_from_risk_file(&input, &config, plot.as_deref())?;

        println!("{}", render_report(&report, format)?);
        if let Some(path) = plot {
            println!("Distribution plot written to {path}");
        }
    }
    Ok(())
}

fn render_report(report: &PoolingReport, format: ReportFormat) -> Result<String, PoolCommandError> {
    Ok(match format {
        ReportFormat::Text => format_pooling_report(report),
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::pooling_config::{PoolingRule, RangePolicy};
    use crate::services::pooling_types::PoolingPercentiles;

    fn build_report() -> PoolingReport {
        PoolingReport {
            data_source: "risk.yaml".to_string(),
            risk: "Permit delay".to_string(),
            rule: PoolingRule::LogisticNormalized,
            range_policy: RangePolicy::LegacyNarrowestMin,
            inputs: 2,
            resolution: 10,
            min_point: 0.0,
            max_point: 10.0,
            total_mass: 1.0,
            mean: Some(5.0),
            peak: Some(5.0),
            percentiles: PoolingPercentiles {
                p5: Some(1.0),
                p50: Some(5.0),
                p85: None,
                p95: Some(9.0),
            },
            average_likelihood: Some(0.25),
        }
    }

    #[test]
    fn render_report_as_yaml_uses_snake_case_enums() {
        let output = render_report(&build_report(), ReportFormat::Yaml).unwrap();
        assert!(output.contains("rule: logistic_normalized"));
        assert!(output.contains("range_policy: legacy_narrowest_min"));
        assert!(output.contains("average_likelihood: 0.25"));
        assert!(output.contains("p85: null"));
    }

    #[test]
    fn render_report_as_json_is_parseable() {
        let output = render_report(&build_report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["risk"], "Permit delay");
        assert_eq!(value["resolution"], 10);
        assert_eq!(value["percentiles"]["p50"], 5.0);
    }
}
