use crate::domain::distribution::{Basis, Domain};
use crate::domain::error::PoolingError;
use crate::services::pooling_config::PoolingRule;

/// Elementwise arithmetic mean of the input bases.
pub fn pool_linear(bases: &[Basis]) -> Result<Basis, PoolingError> {
    let (resolution, domain) = check_shape(bases)?;
    let count = bases.len() as f64;

    let masses = (0..resolution)
        .map(|bin| bases.iter().map(|basis| basis.masses[bin]).sum::<f64>() / count)
        .collect();

    Ok(Basis { masses, domain })
}

/// Elementwise geometric mean of the input bases, `(prod b[i])^(1/n)`.
///
/// The result is not rescaled, so it generally sums to less than one. Use
/// [`pool_logistic_normalized`] for a proper probability mass array.
pub fn pool_logistic_raw(bases: &[Basis]) -> Result<Basis, PoolingError> {
    let (resolution, domain) = check_shape(bases)?;
    if let [only] = bases {
        return Ok(only.clone());
    }
    let count = bases.len() as f64;

    // Averaging logarithms keeps products of many tiny tail masses from
    // underflowing to zero before the root is taken.
    let masses = (0..resolution)
        .map(|bin| {
            if bases.iter().any(|basis| basis.masses[bin] <= 0.0) {
                return 0.0;
            }
            let log_sum: f64 = bases.iter().map(|basis| basis.masses[bin].ln()).sum();
            (log_sum / count).exp()
        })
        .collect();

    Ok(Basis { masses, domain })
}

/// Geometric mean pooling rescaled so the bins sum to one.
pub fn pool_logistic_normalized(bases: &[Basis]) -> Result<Basis, PoolingError> {
    let mut pooled = pool_logistic_raw(bases)?;
    let total = pooled.total_mass();
    if total <= 0.0 || !total.is_finite() {
        return Err(PoolingError::ZeroConsensusMass);
    }
    for mass in pooled.masses.iter_mut() {
        *mass /= total;
    }
    Ok(pooled)
}

pub fn pool(bases: &[Basis], rule: PoolingRule) -> Result<Basis, PoolingError> {
    match rule {
        PoolingRule::Linear => pool_linear(bases),
        PoolingRule::Logistic => pool_logistic_raw(bases),
        PoolingRule::LogisticNormalized => pool_logistic_normalized(bases),
    }
}

fn check_shape(bases: &[Basis]) -> Result<(usize, Domain), PoolingError> {
    let first = bases.first().ok_or(PoolingError::EmptyInput)?;
    for (index, basis) in bases.iter().enumerate() {
        if basis.len() != first.len() || basis.domain != first.domain {
            return Err(PoolingError::MismatchedShape { index });
        }
        if basis
            .masses
            .iter()
            .any(|mass| !mass.is_finite() || *mass < 0.0)
        {
            return Err(PoolingError::InvalidBasis { index });
        }
    }
    Ok((first.len(), first.domain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn basis(masses: &[f64]) -> Basis {
        Basis {
            masses: masses.to_vec(),
            domain: Domain::new(0.0, masses.len() as f64),
        }
    }

    #[test]
    fn pool_linear_averages_each_bin() {
        let bases = [basis(&[0.1, 0.6, 0.3]), basis(&[0.3, 0.2, 0.5])];
        let pooled = pool_linear(&bases).unwrap();

        assert_eq!(pooled.domain, bases[0].domain);
        assert!((pooled.masses[0] - 0.2).abs() < 1e-15);
        assert!((pooled.masses[1] - 0.4).abs() < 1e-15);
        assert!((pooled.masses[2] - 0.4).abs() < 1e-15);
    }

    #[test]
    fn pool_logistic_raw_takes_geometric_mean() {
        let bases = [basis(&[0.25, 0.5, 0.25]), basis(&[0.04, 0.5, 0.46])];
        let pooled = pool_logistic_raw(&bases).unwrap();

        assert!((pooled.masses[0] - 0.1).abs() < 1e-12);
        assert!((pooled.masses[1] - 0.5).abs() < 1e-12);
        assert!((pooled.masses[2] - (0.25_f64 * 0.46).sqrt()).abs() < 1e-12);
        // not renormalized
        assert!(pooled.total_mass() < 1.0);
    }

    #[test]
    fn pool_logistic_raw_single_basis_is_identity() {
        let only = basis(&[0.2, 0.7, 0.1]);
        let pooled = pool_logistic_raw(std::slice::from_ref(&only)).unwrap();
        assert_eq!(pooled, only);
    }

    #[test]
    fn pooling_rejects_nan_mass() {
        let bases = [basis(&[f64::NAN, 0.5]), basis(&[0.5, 0.5])];
        assert_eq!(
            pool_linear(&bases),
            Err(PoolingError::InvalidBasis { index: 0 })
        );
        assert_eq!(
            pool_logistic_raw(&bases),
            Err(PoolingError::InvalidBasis { index: 0 })
        );
    }

    #[test]
    fn pooling_rejects_negative_mass() {
        let bases = [basis(&[0.5, 0.5]), basis(&[1.5, -0.5])];
        assert_eq!(
            pool_linear(&bases),
            Err(PoolingError::InvalidBasis { index: 1 })
        );
        assert_eq!(
            pool_logistic_raw(&bases),
            Err(PoolingError::InvalidBasis { index: 1 })
        );
    }

    #[test]
    fn pooling_rejects_infinite_mass_in_single_basis() {
        let bases = [basis(&[f64::INFINITY, 0.0])];
        assert_eq!(
            pool(&bases, PoolingRule::LogisticNormalized),
            Err(PoolingError::InvalidBasis { index: 0 })
        );
    }

    #[test]
    fn pool_logistic_raw_zero_bin_stays_zero() {
        let bases = [basis(&[0.0, 1.0]), basis(&[0.5, 0.5])];
        let pooled = pool_logistic_raw(&bases).unwrap();
        assert_eq!(pooled.masses[0], 0.0);
        assert!(pooled.masses.iter().all(|mass| mass.is_finite()));
    }

    #[test]
    fn pool_logistic_raw_does_not_underflow_for_tiny_masses() {
        let bases = [basis(&[1e-200, 1.0]), basis(&[1e-200, 1.0]), basis(&[1e-200, 1.0])];
        let pooled = pool_logistic_raw(&bases).unwrap();
        assert!((pooled.masses[0] / 1e-200 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pool_logistic_normalized_sums_to_one() {
        let bases = [basis(&[0.25, 0.5, 0.25]), basis(&[0.04, 0.5, 0.46])];
        let pooled = pool_logistic_normalized(&bases).unwrap();
        assert!((pooled.total_mass() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pool_logistic_normalized_rejects_disjoint_opinions() {
        let bases = [basis(&[1.0, 0.0]), basis(&[0.0, 1.0])];
        assert_eq!(
            pool_logistic_normalized(&bases),
            Err(PoolingError::ZeroConsensusMass)
        );
    }

    #[test]
    fn pooling_rejects_empty_input() {
        assert_eq!(pool_linear(&[]), Err(PoolingError::EmptyInput));
        assert_eq!(pool_logistic_raw(&[]), Err(PoolingError::EmptyInput));
        assert_eq!(pool_logistic_normalized(&[]), Err(PoolingError::EmptyInput));
    }

    #[test]
    fn pooling_rejects_mismatched_length() {
        let bases = [basis(&[0.5, 0.5]), basis(&[0.2, 0.3, 0.5])];
        assert_eq!(
            pool_linear(&bases),
            Err(PoolingError::MismatchedShape { index: 1 })
        );
        assert_eq!(
            pool_logistic_raw(&bases),
            Err(PoolingError::MismatchedShape { index: 1 })
        );
    }

    #[test]
    fn pooling_rejects_mismatched_domain() {
        let mut shifted = basis(&[0.5, 0.5]);
        shifted.domain = Domain::new(1.0, 3.0);
        let bases = [basis(&[0.5, 0.5]), basis(&[0.4, 0.6]), shifted];
        assert_eq!(
            pool(&bases, PoolingRule::Linear),
            Err(PoolingError::MismatchedShape { index: 2 })
        );
    }

    #[test]
    fn pooling_does_not_mutate_inputs() {
        let bases = vec![basis(&[0.25, 0.75]), basis(&[0.5, 0.5])];
        let before = bases.clone();
        pool(&bases, PoolingRule::LogisticNormalized).unwrap();
        pool(&bases, PoolingRule::Linear).unwrap();
        assert_eq!(bases, before);
    }

    fn bases_strategy() -> impl Strategy<Value = Vec<Basis>> {
        (1usize..6, 1usize..20).prop_flat_map(|(count, bins)| {
            prop::collection::vec(prop::collection::vec(1e-6f64..1.0, bins), count)
                .prop_map(|rows| rows.iter().map(|row| basis(row)).collect())
        })
    }

    proptest! {
        #[test]
        fn pool_linear_matches_arithmetic_mean(bases in bases_strategy()) {
            let pooled = pool_linear(&bases).unwrap();
            prop_assert_eq!(pooled.len(), bases[0].len());
            for bin in 0..pooled.len() {
                let expected = bases.iter().map(|b| b.masses[bin]).sum::<f64>() / bases.len() as f64;
                prop_assert!((pooled.masses[bin] - expected).abs() <= 4.0 * f64::EPSILON);
            }
        }

        #[test]
        fn pool_logistic_raw_single_basis_is_bit_identical(masses in prop::collection::vec(1e-3f64..1.0, 1..50)) {
            let only = basis(&masses);
            let pooled = pool_logistic_raw(std::slice::from_ref(&only)).unwrap();
            prop_assert_eq!(pooled.masses, only.masses);
        }

        #[test]
        fn pool_logistic_raw_matches_geometric_mean(bases in bases_strategy()) {
            let pooled = pool_logistic_raw(&bases).unwrap();
            let exponent = 1.0 / bases.len() as f64;
            for bin in 0..pooled.len() {
                let product: f64 = bases.iter().map(|b| b.masses[bin]).product();
                let expected = product.powf(exponent);
                prop_assert!((pooled.masses[bin] - expected).abs() <= 1e-9 * expected);
            }
        }
    }
}
