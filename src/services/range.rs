use tracing::debug;

use crate::domain::distribution::Domain;
use crate::domain::error::PoolingError;
use crate::domain::estimate::ThreePointEstimate;
use crate::services::estimate_statistics::estimate_stats;
use crate::services::pooling_config::RangePolicy;

/// Picks the shared domain for a set of estimates from their 8 sigma windows.
///
/// With [`RangePolicy::Union`] both bounds are chosen independently, so the
/// result covers every window. [`RangePolicy::LegacyNarrowestMin`] keeps the
/// whole window of the estimate with the smallest lower bound, which can cut
/// off another estimate's right tail.
pub fn determine_range(
    estimates: &[ThreePointEstimate],
    policy: RangePolicy,
) -> Result<Domain, PoolingError> {
    let (first, rest) = estimates.split_first().ok_or(PoolingError::EmptyInput)?;
    let (mut min_point, mut max_point) = estimate_stats(first)?.window();

    for estimate in rest {
        let (low, high) = estimate_stats(estimate)?.window();
        match policy {
            RangePolicy::Union => {
                min_point = min_point.min(low);
                max_point = max_point.max(high);
            }
            RangePolicy::LegacyNarrowestMin => {
                if low < min_point {
                    min_point = low;
                    max_point = high;
                }
            }
        }
    }

    debug!(min_point, max_point, ?policy, estimates = estimates.len(), "determined output range");
    Ok(Domain::new(min_point, max_point))
}
