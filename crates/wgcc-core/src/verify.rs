// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Verification Harness
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cross-checks for computed connection coefficients.
//!
//! - [`checksum`]: integrating out the undifferentiated third factor,
//!   `sum_m CC^(d1,d2,0)(l, m) = (-1)^d1 CC^(0,d1+d2)(l)`.
//! - [`compare_with_reference`]: per-key agreement with a published table.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wgcc_types::config::SolverConfig;
use wgcc_types::error::CcResult;
use wgcc_types::filter::WaveletFilter;
use wgcc_types::orders::DerivativeOrders;
use wgcc_types::table::{ShiftPair, ThreeTermTable};

use crate::threeterm::solve_threeterm;
use crate::twoterm::solve_twoterm;

/// Magnitude below which the computed value is not used as denominator.
const DENOMINATOR_FLOOR: f64 = 1e-10;

/// `(reference - computed) / computed`, or the absolute difference when
/// `|computed| <= 1e-10`.
pub fn relative_error(reference: f64, computed: f64) -> f64 {
    let denom = if computed.abs() > DENOMINATOR_FLOOR {
        computed
    } else {
        1.0
    };
    (reference - computed) / denom
}

/// Per-shift outcome of the checksum identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecksumReport {
    pub d1: usize,
    pub d2: usize,
    pub shifts: Vec<i64>,
    /// `sum_m CC^(d1,d2,0)(l, m)` per shift.
    pub marginal_sums: Vec<f64>,
    /// `(-1)^d1 CC^(0,d1+d2)(l)` per shift.
    pub expected: Vec<f64>,
    /// Absolute relative error per shift.
    pub relative_errors: Vec<f64>,
}

impl ChecksumReport {
    pub fn max_relative_error(&self) -> f64 {
        self.relative_errors.iter().copied().fold(0.0, f64::max)
    }
}

/// Checksum identity for filter `a` (taps summing to 2).
pub fn checksum(a: &[f64], d1: usize, d2: usize) -> CcResult<ChecksumReport> {
    checksum_with_config(a, d1, d2, &SolverConfig::default())
}

pub fn checksum_with_config(
    a: &[f64],
    d1: usize,
    d2: usize,
    config: &SolverConfig,
) -> CcResult<ChecksumReport> {
    config.validate()?;
    let filter = WaveletFilter::with_config(a.to_vec(), config)?;

    let two = solve_twoterm(&filter, d1 + d2, config)?;
    let table = solve_threeterm(&filter, DerivativeOrders::new(d1, d2, 0), config)?.to_table();
    let sign = if d1 % 2 == 0 { 1.0 } else { -1.0 };

    let shifts: Vec<i64> = filter.shifts().collect();
    let marginal_sums: Vec<f64> = shifts.iter().map(|&l| table.row_sum(l)).collect();
    let expected: Vec<f64> = shifts.iter().map(|&l| sign * two.get(l)).collect();
    let relative_errors: Vec<f64> = expected
        .iter()
        .zip(&marginal_sums)
        .map(|(&e, &s)| relative_error(e, s).abs())
        .collect();

    let report = ChecksumReport {
        d1,
        d2,
        shifts,
        marginal_sums,
        expected,
        relative_errors,
    };
    debug!(
        "checksum (d1={d1}, d2={d2}): max relative error {:.2e}",
        report.max_relative_error()
    );
    Ok(report)
}

/// Published three-term table for one wavelet and derivative triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Wavelet name, e.g. `"db3"`.
    pub wavelet: String,
    pub orders: DerivativeOrders,
    #[serde(default)]
    pub source: Option<String>,
    pub coefficients: ThreeTermTable,
}

impl ReferenceTable {
    pub fn from_file(path: &str) -> CcResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> CcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Disagreement at one reference key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyError {
    pub key: ShiftPair,
    pub reference: f64,
    /// Computed value, 0 when the key is absent from the computed table.
    pub computed: f64,
    /// Signed [`relative_error`].
    pub relative_error: f64,
}

/// Compare every key of `reference` with `computed`, in key order.
pub fn compare_with_reference(computed: &ThreeTermTable, reference: &ThreeTermTable) -> Vec<KeyError> {
    reference
        .iter()
        .map(|(key, ref_value)| {
            let value = computed.get(key.0, key.1);
            KeyError {
                key,
                reference: ref_value,
                computed: value,
                relative_error: relative_error(ref_value, value),
            }
        })
        .collect()
}

/// Largest absolute relative error of a comparison, 0 when empty.
pub fn max_relative_error(errors: &[KeyError]) -> f64 {
    errors
        .iter()
        .map(|e| e.relative_error.abs())
        .fold(0.0, f64::max)
}
