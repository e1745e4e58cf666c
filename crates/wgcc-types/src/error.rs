// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CcError {
    #[error("Filter of length {len} is too short: at least {min} taps are required")]
    Dimension { len: usize, min: usize },

    #[error("Invalid wavelet filter: {0}")]
    InvalidFilter(String),

    #[error("Filter taps sum to {sum:.12}, expected {expected:.12} (relative deviation {deviation:.2e})")]
    Normalization {
        sum: f64,
        expected: f64,
        deviation: f64,
    },

    #[error("Invalid derivative order: {0}")]
    InvalidDerivative(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Linear algebra error: {0}")]
    LinAlg(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CcResult<T> = Result<T, CcError>;
