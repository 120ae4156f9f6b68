//! Percentile lookup over a binned probability mass array.
//!
//! - Zero (or non-finite) total mass => `None`.
//! - Masses are normalized by their total before accumulating, so the raw
//!   geometric pool can be queried as well.
//! - `percentile <= 0` => left edge of the first bin with mass.
//! - `percentile >= 100` => right edge of the last bin with mass.
//! - Otherwise the right edge of the first bin whose cumulative share reaches
//!   the requested percentile.

use crate::domain::distribution::Domain;

pub fn value_from_masses(masses: &[f64], domain: &Domain, percentile: f64) -> Option<f64> {
    let total: f64 = masses.iter().sum();
    if masses.is_empty() || total <= 0.0 || !total.is_finite() {
        return None;
    }
    let bins = masses.len();
    let right_edge = |index: usize| domain.x_at(index + 1, bins);

    if percentile <= 0.0 {
        let first = masses.iter().position(|mass| *mass > 0.0)?;
        return Some(domain.x_at(first, bins));
    }
    if percentile >= 100.0 {
        let last = masses.iter().rposition(|mass| *mass > 0.0)?;
        return Some(right_edge(last));
    }

    let target = percentile / 100.0;
    let mut cumulative = 0.0;
    for (index, mass) in masses.iter().enumerate() {
        cumulative += mass / total;
        if cumulative >= target {
            return Some(right_edge(index));
        }
    }
    masses
        .iter()
        .rposition(|mass| *mass > 0.0)
        .map(right_edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> Domain {
        Domain::new(0.0, 5.0)
    }

    #[test]
    fn value_from_masses_returns_none_without_mass() {
        assert_eq!(value_from_masses(&[], &domain(), 50.0), None);
        assert_eq!(value_from_masses(&[0.0, 0.0], &domain(), 50.0), None);
    }

    #[test]
    fn value_from_masses_clamps_to_occupied_bins() {
        let masses = [0.0, 0.5, 0.5, 0.0, 0.0];
        assert_eq!(value_from_masses(&masses, &domain(), -1.0), Some(1.0));
        assert_eq!(value_from_masses(&masses, &domain(), 0.0), Some(1.0));
        assert_eq!(value_from_masses(&masses, &domain(), 100.0), Some(3.0));
        assert_eq!(value_from_masses(&masses, &domain(), 1000.0), Some(3.0));
    }

    #[test]
    fn value_from_masses_uses_cumulative_share() {
        // 0.2 per bin over [0, 5) => p50 is reached at the end of bin 2
        let masses = [0.2, 0.2, 0.2, 0.2, 0.2];
        assert_eq!(value_from_masses(&masses, &domain(), 10.0), Some(1.0));
        assert_eq!(value_from_masses(&masses, &domain(), 50.0), Some(3.0));
        assert_eq!(value_from_masses(&masses, &domain(), 85.0), Some(5.0));
    }

    #[test]
    fn value_from_masses_normalizes_unscaled_masses() {
        let scaled = [0.1, 0.1, 0.1, 0.1, 0.1];
        assert_eq!(value_from_masses(&scaled, &domain(), 50.0), Some(3.0));
    }
}
