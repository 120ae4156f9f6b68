use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::services::pooling_config::{DEFAULT_RESOLUTION, PoolingConfig, PoolingRule, RangePolicy};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pool expert three-point estimates of a risk into one distribution
    Pool {
        /// Risk YAML file
        #[arg(short, long)]
        input: String,
        /// Pooling rule
        #[arg(short, long, value_enum, default_value_t = PoolingRule::default())]
        rule: PoolingRule,
        /// Number of bins the output range is split into
        #[arg(short = 'n', long, default_value_t = DEFAULT_RESOLUTION)]
        resolution: usize,
        /// How the shared output range is chosen
        #[arg(long, value_enum, default_value_t = RangePolicy::default())]
        range: RangePolicy,
        /// Optional PNG file for a scatter plot of the pooled distribution
        #[arg(short, long)]
        plot: Option<String>,
        /// Report format written to stdout
        #[arg(short, long, value_enum, default_value_t = ReportFormat::default())]
        format: ReportFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn pooling_config(rule: PoolingRule, resolution: usize, range: RangePolicy) -> PoolingConfig {
    PoolingConfig {
        resolution,
        rule,
        range_policy: range,
    }
}
