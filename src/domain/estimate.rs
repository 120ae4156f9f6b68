use crate::domain::error::PoolingError;

/// An expert's optimistic, most likely and pessimistic guess for one quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePointEstimate {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

impl ThreePointEstimate {
    pub fn new(low: f64, mid: f64, high: f64) -> Result<Self, PoolingError> {
        let estimate = Self { low, mid, high };
        estimate.validate()?;
        Ok(estimate)
    }

    /// Checks `low <= mid <= high` with every component finite.
    pub fn validate(&self) -> Result<(), PoolingError> {
        let finite = self.low.is_finite() && self.mid.is_finite() && self.high.is_finite();
        if !finite || self.low > self.mid || self.mid > self.high {
            return Err(PoolingError::InvalidEstimate {
                low: self.low,
                mid: self.mid,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn is_zero_width(&self) -> bool {
        self.low == self.high
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskItemInput {
    pub estimate: ThreePointEstimate,
}

impl RiskItemInput {
    pub fn new(estimate: ThreePointEstimate) -> Self {
        Self { estimate }
    }
}

/// A risk that may or may not occur. The likelihood is carried along and
/// averaged, it never weights the pooled distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskEventInput {
    pub estimate: ThreePointEstimate,
    pub likelihood: f64,
}

impl RiskEventInput {
    pub fn new(estimate: ThreePointEstimate, likelihood: f64) -> Result<Self, PoolingError> {
        if !(0.0..=1.0).contains(&likelihood) {
            return Err(PoolingError::InvalidLikelihood(likelihood));
        }
        Ok(Self {
            estimate,
            likelihood,
        })
    }
}
