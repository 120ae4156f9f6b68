use statrs::distribution::{ContinuousCDF, Normal};
use tracing::{debug, warn};

use crate::domain::distribution::{Basis, Domain};
use crate::domain::error::PoolingError;
use crate::domain::estimate::ThreePointEstimate;
use crate::services::estimate_statistics::estimate_stats;

/// Mass lost outside the domain above which a warning is logged.
const LOST_MASS_WARNING: f64 = 1e-6;

/// Splits `domain` into `resolution` equal bins and assigns each bin the mass
/// the estimate's normal approximation puts on it, `CDF(right) - CDF(left)`.
pub fn discretize(
    estimate: &ThreePointEstimate,
    domain: Domain,
    resolution: usize,
) -> Result<Basis, PoolingError> {
    if resolution == 0 {
        return Err(PoolingError::InvalidResolution);
    }
    let stats = estimate_stats(estimate)?;
    if estimate.is_zero_width() || stats.std_dev <= 0.0 {
        return Err(PoolingError::ZeroVariance {
            value: estimate.low,
        });
    }
    if !domain.min_point.is_finite()
        || !domain.max_point.is_finite()
        || domain.max_point <= domain.min_point
    {
        return Err(PoolingError::InvalidDomain {
            min_point: domain.min_point,
            max_point: domain.max_point,
        });
    }

    let normal = Normal::new(stats.mean, stats.std_dev).map_err(|_| PoolingError::ZeroVariance {
        value: estimate.low,
    })?;

    // Edges are computed from the bin index so the last edge lands on max_point.
    let interval = domain.interval(resolution);
    let edge = |index: usize| {
        if index == resolution {
            domain.max_point
        } else {
            domain.min_point + index as f64 * interval
        }
    };

    let mut masses = Vec::with_capacity(resolution);
    let mut left_cdf = normal.cdf(edge(0));
    for index in 1..=resolution {
        let right_cdf = normal.cdf(edge(index));
        masses.push((right_cdf - left_cdf).max(0.0));
        left_cdf = right_cdf;
    }

    let basis = Basis { masses, domain };
    let total = basis.total_mass();
    debug!(
        mean = stats.mean,
        std_dev = stats.std_dev,
        total_mass = total,
        "discretized estimate"
    );
    if 1.0 - total > LOST_MASS_WARNING {
        warn!(
            mean = stats.mean,
            std_dev = stats.std_dev,
            lost_mass = 1.0 - total,
            "estimate is not fully covered by the output range"
        );
    }
    Ok(basis)
}

/// Discretizes every estimate over the same domain and resolution.
pub fn construct_input_bases(
    estimates: &[ThreePointEstimate],
    domain: Domain,
    resolution: usize,
) -> Result<Vec<Basis>, (usize, PoolingError)> {
    estimates
        .iter()
        .enumerate()
        .map(|(index, estimate)| {
            discretize(estimate, domain, resolution).map_err(|error| (index, error))
        })
        .collect()
}
