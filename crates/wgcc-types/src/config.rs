// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    NORMALIZATION_TOLERANCE, RANK_TOLERANCE, RESIDUAL_TOLERANCE, SUM_RULE_TOLERANCE,
};
use crate::error::{CcError, CcResult};

/// Tolerances and switches shared by the two-term and three-term solvers.
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Sum of squared residuals above which a solve is flagged (default: 1e-30).
    #[serde(default = "default_residual_tolerance")]
    pub residual_tolerance: f64,
    /// Relative tolerance on `sum(a) == 2` (default: 1e-8).
    #[serde(default = "default_normalization_tolerance")]
    pub normalization_tolerance: f64,
    /// Reject filters whose taps do not sum to 2 (default: true).
    #[serde(default = "default_validate_normalization")]
    pub validate_normalization: bool,
    /// Relative tolerance used when counting sum rules (default: 1e-9).
    #[serde(default = "default_sum_rule_tolerance")]
    pub sum_rule_tolerance: f64,
    /// Relative cutoff on the diagonal of R for rank detection (default: 1e-12).
    #[serde(default = "default_rank_tolerance")]
    pub rank_tolerance: f64,
    /// Number of polynomial moments used by the three-term normalization.
    /// When absent, the approximation order of the filter is detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_orders: Option<usize>,
}

fn default_residual_tolerance() -> f64 {
    RESIDUAL_TOLERANCE
}
fn default_normalization_tolerance() -> f64 {
    NORMALIZATION_TOLERANCE
}
fn default_validate_normalization() -> bool {
    true
}
fn default_sum_rule_tolerance() -> f64 {
    SUM_RULE_TOLERANCE
}
fn default_rank_tolerance() -> f64 {
    RANK_TOLERANCE
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            residual_tolerance: default_residual_tolerance(),
            normalization_tolerance: default_normalization_tolerance(),
            validate_normalization: default_validate_normalization(),
            sum_rule_tolerance: default_sum_rule_tolerance(),
            rank_tolerance: default_rank_tolerance(),
            moment_orders: None,
        }
    }
}

impl SolverConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> CcResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> CcResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CcResult<()> {
        let tolerances = [
            ("residual_tolerance", self.residual_tolerance),
            ("normalization_tolerance", self.normalization_tolerance),
            ("sum_rule_tolerance", self.sum_rule_tolerance),
            ("rank_tolerance", self.rank_tolerance),
        ];
        for (name, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(CcError::ConfigError(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.moment_orders == Some(0) {
            return Err(CcError::ConfigError(
                "moment_orders must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
