use crate::services::pooling_config::{PoolingRule, RangePolicy};
use crate::services::pooling_types::PoolingReport;

pub fn format_pooling_report(report: &PoolingReport) -> String {
    let likelihood = match report.average_likelihood {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push("Pooling Report".to_string());
    lines.push(format!("Data source: {}", report.data_source));
    lines.push(format!("Risk: {}", report.risk));
    lines.push(format!("Rule: {}", rule_name(report.rule)));
    lines.push(format!("Range policy: {}", range_policy_name(report.range_policy)));
    lines.push(format!("Inputs: {}", report.inputs));
    lines.push(format!("Resolution: {}", report.resolution));
    lines.push(format!(
        "Domain: [{:.2}, {:.2}]",
        report.min_point, report.max_point
    ));
    lines.push(format!("Total mass: {:.6}", report.total_mass));
    lines.push(format!("Mean: {}", format_value(report.mean)));
    lines.push(format!("Peak: {}", format_value(report.peak)));
    lines.push(format!("Average likelihood: {likelihood}"));
    lines.push(String::new());
    lines.push("Percentiles:".to_string());
    lines.push("Percentile | Value".to_string());
    lines.push("-----------|------".to_string());
    lines.push(format_percentile_row("P5", report.percentiles.p5));
    lines.push(format_percentile_row("P50", report.percentiles.p50));
    lines.push(format_percentile_row("P85", report.percentiles.p85));
    lines.push(format_percentile_row("P95", report.percentiles.p95));

    lines.join("\n")
}

fn rule_name(rule: PoolingRule) -> &'static str {
    match rule {
        PoolingRule::Linear => "linear",
        PoolingRule::Logistic => "logistic",
        PoolingRule::LogisticNormalized => "logistic (normalized)",
    }
}

fn range_policy_name(policy: RangePolicy) -> &'static str {
    match policy {
        RangePolicy::Union => "union",
        RangePolicy::LegacyNarrowestMin => "legacy narrowest min",
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}

fn format_percentile_row(label: &str, value: Option<f64>) -> String {
    format!("{label} | {value}", value = format_value(value))
}
