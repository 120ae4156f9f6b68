use crate::domain::error::PoolingError;
use crate::domain::estimate::ThreePointEstimate;

/// Width of the window around the mean, in standard deviations, that an
/// estimate is expected to occupy.
pub const SIGMA_WINDOW: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl EstimateStats {
    /// `(mean - 8 sigma, mean + 8 sigma)`
    pub fn window(&self) -> (f64, f64) {
        let spread = SIGMA_WINDOW * self.std_dev;
        (self.mean - spread, self.mean + spread)
    }
}

/// PERT mean and standard deviation of a three-point estimate.
///
/// - `mean = (low + 4 mid + high) / 6`
/// - `std_dev = sqrt((mean - low) (high - mean) / 7)`
///
/// A zero-width estimate yields `std_dev == 0`; rejecting it is left to the
/// discretizer, which is the only step that divides by it.
pub fn estimate_stats(estimate: &ThreePointEstimate) -> Result<EstimateStats, PoolingError> {
    estimate.validate()?;

    let mean = (estimate.low + 4.0 * estimate.mid + estimate.high) / 6.0;
    // rounding can push mean a hair outside [low, high]
    let radicand = ((mean - estimate.low) * (estimate.high - mean) / 7.0).max(0.0);
    let std_dev = if estimate.is_zero_width() {
        0.0
    } else {
        radicand.sqrt()
    };

    Ok(EstimateStats { mean, std_dev })
}
