// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Wavelet Filter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validated wavelet filter.
//!
//! The solvers assume the dilation equation
//!   phi(x) = sum_k a_k phi(2x - k),   sum_k a_k = 2.
//! Orthonormal catalogs publish taps summing to sqrt(2); rescale those with
//! [`WaveletFilter::from_orthonormal`].

use std::f64::consts::SQRT_2;
use std::ops::RangeInclusive;

use crate::config::SolverConfig;
use crate::constants::{FILTER_SUM, MIN_FILTER_LEN};
use crate::error::{CcError, CcResult};

/// Low-pass filter of a compactly supported scaling function.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveletFilter {
    taps: Vec<f64>,
}

impl WaveletFilter {
    /// Validate `taps` with the default solver configuration.
    pub fn new(taps: Vec<f64>) -> CcResult<Self> {
        Self::with_config(taps, &SolverConfig::default())
    }

    /// Validate `taps`: even length >= 4, finite values and, unless disabled
    /// in `config`, a tap sum of 2 within `config.normalization_tolerance`.
    pub fn with_config(taps: Vec<f64>, config: &SolverConfig) -> CcResult<Self> {
        if taps.len() < MIN_FILTER_LEN {
            return Err(CcError::Dimension {
                len: taps.len(),
                min: MIN_FILTER_LEN,
            });
        }
        if taps.len() % 2 != 0 {
            return Err(CcError::InvalidFilter(format!(
                "filter length must be even, got {}",
                taps.len()
            )));
        }
        if let Some(pos) = taps.iter().position(|v| !v.is_finite()) {
            return Err(CcError::InvalidFilter(format!(
                "tap {pos} is not finite ({})",
                taps[pos]
            )));
        }

        if config.validate_normalization {
            let sum: f64 = taps.iter().sum();
            let deviation = (sum - FILTER_SUM).abs() / FILTER_SUM;
            if deviation > config.normalization_tolerance {
                return Err(CcError::Normalization {
                    sum,
                    expected: FILTER_SUM,
                    deviation,
                });
            }
        }

        Ok(WaveletFilter { taps })
    }

    /// Rescale an orthonormal filter (taps sum to sqrt 2) by sqrt 2.
    pub fn from_orthonormal(taps: &[f64]) -> CcResult<Self> {
        Self::new(taps.iter().map(|t| t * SQRT_2).collect())
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Number of taps N.
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Always false: construction rejects short filters.
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.taps.iter().sum()
    }

    /// Largest shift with a nonzero connection coefficient, N - 2.
    pub fn support_radius(&self) -> i64 {
        self.taps.len() as i64 - 2
    }

    /// Shifts carrying a two-term coefficient: -(N-2) ..= N-2.
    pub fn shifts(&self) -> RangeInclusive<i64> {
        let r = self.support_radius();
        -r..=r
    }

    /// Number of two-term coefficients, 2N - 3.
    pub fn two_term_len(&self) -> usize {
        2 * self.taps.len() - 3
    }

    /// Shift represented by two-term index `i`.
    pub fn shift_of(&self, index: usize) -> i64 {
        index as i64 - self.support_radius()
    }

    /// Two-term index of `shift`, or `None` outside the support.
    pub fn index_of(&self, shift: i64) -> Option<usize> {
        let r = self.support_radius();
        if shift.abs() > r {
            None
        } else {
            Some((shift + r) as usize)
        }
    }
}
