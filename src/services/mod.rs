pub mod aggregation;
pub mod discretizer;
pub mod distribution_plot;
pub mod estimate_statistics;
pub mod percentiles;
pub mod pooling;
pub mod pooling_config;
pub mod pooling_run;
pub mod pooling_types;
pub mod range;
pub mod risk_yaml;
