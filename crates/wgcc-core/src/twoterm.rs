// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Two-Term Connection Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-term connection coefficients CC^(0,d)_l = ∫ phi(x) phi^(d)(x - l) dx.
//!
//! Eigen-value problem from the auto-correlation of the filter (Fukuda,
//! 2013), normalized by a moment equation (Goedecker, 2009):
//!
//! 1. `ac = correlate(a, a, "full")`, length `2N - 1`.
//! 2. `T[i][j] = ac[j - 2i + D]` with `D = 2N - 3`, zero outside `ac`.
//! 3. `(T - 2^(1-d) I) x = 0`.
//! 4. Normalization row `sum_i (i - (N/2 - 1))^d x_i = d!`.
//! 5. Least squares on the `(D + 1) x D` system.
//!
//! Index `i` of the result is the shift `l = i - (N - 2)`.

use std::ops::RangeInclusive;

use ndarray::Array1;
use ndarray::Array2;
use wgcc_math::correlate::autocorrelate_full;
use wgcc_math::moments::{centered_moment, factorial};
use wgcc_types::config::SolverConfig;
use wgcc_types::constants::MAX_DERIVATIVE_ORDER;
use wgcc_types::error::{CcError, CcResult};
use wgcc_types::filter::WaveletFilter;

use crate::system::{NormalizedSystem, SolveQuality};

/// Dense two-term coefficient vector CC^(0,d), one value per shift.
#[derive(Debug, Clone)]
pub struct TwoTermCoefficients {
    /// Derivative order d.
    pub derivative: usize,
    /// Values for shifts `-(N-2) ..= N-2`, in order.
    pub values: Array1<f64>,
    /// Residual and rank of the solve.
    pub quality: SolveQuality,
    radius: i64,
}

impl TwoTermCoefficients {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn shifts(&self) -> RangeInclusive<i64> {
        -self.radius..=self.radius
    }

    /// CC^(0,d)_l, zero outside the support.
    pub fn get(&self, shift: i64) -> f64 {
        if shift.abs() > self.radius {
            return 0.0;
        }
        self.values[(shift + self.radius) as usize]
    }

    /// `(shift, value)` pairs in ascending shift order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.shifts().zip(self.values.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.values.sum()
    }
}

/// CC^(0,d) for filter `a` (taps summing to 2) with the default configuration.
pub fn twoterm_connection_coefficients(a: &[f64], d: usize) -> CcResult<TwoTermCoefficients> {
    twoterm_with_config(a, d, &SolverConfig::default())
}

/// CC^(0,d) for filter `a` under `config`.
pub fn twoterm_with_config(
    a: &[f64],
    d: usize,
    config: &SolverConfig,
) -> CcResult<TwoTermCoefficients> {
    config.validate()?;
    let filter = WaveletFilter::with_config(a.to_vec(), config)?;
    solve_twoterm(&filter, d, config)
}

/// CC^(0,d) for an already validated filter.
pub fn solve_twoterm(
    filter: &WaveletFilter,
    d: usize,
    config: &SolverConfig,
) -> CcResult<TwoTermCoefficients> {
    if d > MAX_DERIVATIVE_ORDER {
        return Err(CcError::InvalidDerivative(format!(
            "derivative order {d} exceeds the supported maximum {MAX_DERIVATIVE_ORDER}"
        )));
    }

    let eigenvalue = 2f64.powi(1 - d as i32);
    let mut system = NormalizedSystem::new(twoterm_matrix(filter), eigenvalue)?;
    system.push_constraint(normalization_row(filter, d), factorial(d))?;

    let (values, quality) = system.solve(config, &format!("two-term d={d}"))?;
    Ok(TwoTermCoefficients {
        derivative: d,
        values,
        quality,
        radius: filter.support_radius(),
    })
}

/// Two-scale matrix `T[i][j] = ac[j - 2i + D]` of dimension `D = 2N - 3`.
///
/// Row `i` is nonzero only for `j` in `[2i - D, 2i + 2)`, so only that band
/// is visited.
pub fn twoterm_matrix(filter: &WaveletFilter) -> Array2<f64> {
    let ac = autocorrelate_full(filter.taps());
    let dim = filter.two_term_len() as i64;
    let mut t = Array2::zeros((dim as usize, dim as usize));
    for i in 0..dim {
        let lo = (2 * i - dim).max(0);
        let hi = (2 * i + 2).min(dim);
        for j in lo..hi {
            t[[i as usize, j as usize]] = ac[(j - 2 * i + dim) as usize];
        }
    }
    t
}

/// Normalization row `moment(N, i, d)` for `i` in `0..D`.
pub fn normalization_row(filter: &WaveletFilter, d: usize) -> Array1<f64> {
    let n = filter.len();
    Array1::from_shape_fn(filter.two_term_len(), |i| centered_moment(n, i, d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;
    use wgcc_types::constants::{DAUBECHIES_1, DAUBECHIES_2, DAUBECHIES_3, DAUBECHIES_4};

    fn scaled(h: &[f64]) -> Vec<f64> {
        h.iter().map(|v| v * SQRT_2).collect()
    }

    #[test]
    fn test_db2_first_derivative_stencil() {
        let cc = twoterm_connection_coefficients(&scaled(&DAUBECHIES_2), 1).unwrap();
        let expected = [1.0 / 12.0, -2.0 / 3.0, 0.0, 2.0 / 3.0, -1.0 / 12.0];
        assert_eq!(cc.len(), 5);
        assert_eq!(cc.shifts(), -2..=2);
        for (i, (&got, &want)) in cc.values.iter().zip(expected.iter()).enumerate() {
            assert!((got - want).abs() < 1e-12, "CC[{i}] = {got}, expected {want}");
        }
        assert!(cc.quality.residual < 1e-20, "residual {}", cc.quality.residual);
        assert!(cc.quality.is_full_rank());
    }

    #[test]
    fn test_db3_second_derivative_known_fractions() {
        let cc = twoterm_connection_coefficients(&scaled(&DAUBECHIES_3), 2).unwrap();
        let expected = [
            3.0 / 560.0,
            4.0 / 35.0,
            -92.0 / 105.0,
            356.0 / 105.0,
            -295.0 / 56.0,
            356.0 / 105.0,
            -92.0 / 105.0,
            4.0 / 35.0,
            3.0 / 560.0,
        ];
        for (l, want) in (-4..=4).zip(expected) {
            let got = cc.get(l);
            assert!((got - want).abs() < 1e-10, "CC({l}) = {got}, expected {want}");
        }
    }

    #[test]
    fn test_order_zero_is_orthonormality() {
        // Orthonormal scaling functions: ∫ phi(x) phi(x - l) = delta_l.
        for h in [&DAUBECHIES_2[..], &DAUBECHIES_3[..], &DAUBECHIES_4[..]] {
            let cc = twoterm_connection_coefficients(&scaled(h), 0).unwrap();
            for (l, v) in cc.iter() {
                let want = if l == 0 { 1.0 } else { 0.0 };
                assert!((v - want).abs() < 1e-12, "N={} CC({l}) = {v}", h.len());
            }
            assert!((cc.sum() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_parity_in_shift() {
        // CC^(0,d)_{-l} = (-1)^d CC^(0,d)_l
        let a = scaled(&DAUBECHIES_4);
        for d in 1..=3 {
            let cc = twoterm_connection_coefficients(&a, d).unwrap();
            let sign = if d % 2 == 0 { 1.0 } else { -1.0 };
            for l in 1..=6 {
                let diff = cc.get(-l) - sign * cc.get(l);
                assert!(diff.abs() < 1e-8, "d={d} l={l}: diff {diff}");
            }
        }
    }

    #[test]
    fn test_repeat_calls_identical() {
        let a = scaled(&DAUBECHIES_3);
        let first = twoterm_connection_coefficients(&a, 1).unwrap();
        let second = twoterm_connection_coefficients(&a, 1).unwrap();
        assert_eq!(first.values, second.values);
        assert_eq!(first.quality, second.quality);
    }

    #[test]
    fn test_matrix_band_matches_dense_definition() {
        let filter = WaveletFilter::from_orthonormal(&DAUBECHIES_3).unwrap();
        let ac = autocorrelate_full(filter.taps());
        let t = twoterm_matrix(&filter);
        let dim = filter.two_term_len() as i64;
        for i in 0..dim {
            for j in 0..dim {
                let idx = j - 2 * i + dim;
                let want = if (0..ac.len() as i64).contains(&idx) {
                    ac[idx as usize]
                } else {
                    0.0
                };
                assert_eq!(t[[i as usize, j as usize]], want, "T[{i}][{j}]");
            }
        }
    }

    #[test]
    fn test_get_outside_support_is_zero() {
        let cc = twoterm_connection_coefficients(&scaled(&DAUBECHIES_2), 1).unwrap();
        assert_eq!(cc.get(3), 0.0);
        assert_eq!(cc.get(-17), 0.0);
    }

    #[test]
    fn test_short_filter_is_dimension_error() {
        let err = twoterm_connection_coefficients(&scaled(&DAUBECHIES_1), 1).unwrap_err();
        assert!(matches!(err, CcError::Dimension { len: 2, .. }));
    }

    #[test]
    fn test_unscaled_filter_is_normalization_error() {
        let err = twoterm_connection_coefficients(&DAUBECHIES_2, 1).unwrap_err();
        assert!(matches!(err, CcError::Normalization { .. }));
    }

    #[test]
    fn test_excessive_derivative_rejected() {
        let err = twoterm_connection_coefficients(&scaled(&DAUBECHIES_2), 40).unwrap_err();
        assert!(matches!(err, CcError::InvalidDerivative(_)));
    }

    #[test]
    fn test_beyond_regularity_reports_quality() {
        // db2 reproduces only linears; d = 3 must still return a result
        // whose flag agrees with its residual.
        let cc = twoterm_connection_coefficients(&scaled(&DAUBECHIES_2), 3).unwrap();
        assert!(cc.values.iter().all(|v| v.is_finite()));
        assert_eq!(
            cc.quality.within_tolerance,
            cc.quality.residual <= cc.quality.tolerance
        );
    }
}
