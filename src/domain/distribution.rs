use serde::Serialize;

use crate::services::percentiles;

/// Shared numeric range every basis of one pooling run is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min_point: f64,
    pub max_point: f64,
}

impl Domain {
    pub fn new(min_point: f64, max_point: f64) -> Self {
        Self {
            min_point,
            max_point,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_point - self.min_point
    }

    /// Width of one of `bins` equal bins.
    pub fn interval(&self, bins: usize) -> f64 {
        self.width() / bins as f64
    }

    /// Left edge of bin `index` when the domain is split into `bins` bins.
    pub fn x_at(&self, index: usize, bins: usize) -> f64 {
        self.min_point + index as f64 * self.interval(bins)
    }

    pub fn contains(&self, other: &Domain) -> bool {
        self.min_point <= other.min_point && self.max_point >= other.max_point
    }
}

/// Probability mass per bin for a single estimate, kept together with the
/// domain it was discretized over.
#[derive(Debug, Clone, PartialEq)]
pub struct Basis {
    pub masses: Vec<f64>,
    pub domain: Domain,
}

impl Basis {
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }
}

/// Pooled output: `points[i]` is the mass of the bin starting at `x_at(i)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub points: Vec<f64>,
    pub domain: Domain,
}

impl From<Basis> for Distribution {
    fn from(basis: Basis) -> Self {
        Self {
            points: basis.masses,
            domain: basis.domain,
        }
    }
}

impl Distribution {
    pub fn min_point(&self) -> f64 {
        self.domain.min_point
    }

    pub fn max_point(&self) -> f64 {
        self.domain.max_point
    }

    pub fn resolution(&self) -> usize {
        self.points.len()
    }

    pub fn x_at(&self, index: usize) -> f64 {
        self.domain.x_at(index, self.points.len())
    }

    /// `(x, mass)` pairs in bin order, as handed to a renderer.
    pub fn xy_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .enumerate()
            .map(move |(index, mass)| (self.x_at(index), *mass))
    }

    pub fn total_mass(&self) -> f64 {
        self.points.iter().sum()
    }

    /// Mass-weighted mean of the bin centres, normalized by the total mass.
    pub fn mean(&self) -> Option<f64> {
        let total = self.total_mass();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        let half_bin = self.domain.interval(self.points.len()) / 2.0;
        let weighted: f64 = self
            .xy_points()
            .map(|(x, mass)| (x + half_bin) * mass)
            .sum();
        Some(weighted / total)
    }

    /// Index of the first bin holding the largest mass.
    pub fn peak_index(&self) -> Option<usize> {
        let mut peak: Option<(usize, f64)> = None;
        for (index, mass) in self.points.iter().enumerate() {
            let is_higher = match peak {
                Some((_, best)) => *mass > best,
                None => true,
            };
            if is_higher {
                peak = Some((index, *mass));
            }
        }
        peak.map(|(index, _)| index)
    }

    pub fn peak_x(&self) -> Option<f64> {
        self.peak_index().map(|index| self.x_at(index))
    }

    pub fn percentile(&self, percentile: f64) -> Option<f64> {
        percentiles::value_from_masses(&self.points, &self.domain, percentile)
    }
}
