use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESOLUTION: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PoolingRule {
    /// Arithmetic mean per bin ("any expert could be right")
    Linear,
    /// Geometric mean per bin, left un-normalized
    #[default]
    Logistic,
    /// Geometric mean per bin, rescaled to sum to one
    LogisticNormalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Union of every estimate's 8 sigma window
    #[default]
    Union,
    /// Window of the estimate with the smallest lower bound only
    LegacyNarrowestMin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolingConfig {
    pub resolution: usize,
    pub rule: PoolingRule,
    pub range_policy: RangePolicy,
}

impl Default for PoolingConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            rule: PoolingRule::default(),
            range_policy: RangePolicy::default(),
        }
    }
}

impl PoolingConfig {
    pub fn with_rule(mut self, rule: PoolingRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_thousand_bins_and_union_range() {
        let config = PoolingConfig::default();
        assert_eq!(config.resolution, 1000);
        assert_eq!(config.rule, PoolingRule::Logistic);
        assert_eq!(config.range_policy, RangePolicy::Union);
    }

    #[test]
    fn rules_deserialize_from_snake_case() {
        let rule: PoolingRule = serde_yaml::from_str("logistic_normalized").unwrap();
        assert_eq!(rule, PoolingRule::LogisticNormalized);
        let policy: RangePolicy = serde_yaml::from_str("legacy_narrowest_min").unwrap();
        assert_eq!(policy, RangePolicy::LegacyNarrowestMin);
    }
}
