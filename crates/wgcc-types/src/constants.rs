// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::FRAC_1_SQRT_2;

/// Least-squares residual (sum of squared residuals) above which a solve is
/// flagged as numerically suspect.
pub const RESIDUAL_TOLERANCE: f64 = 1e-30;

/// Required sum of the filter taps: phi(x) = sum_k a_k phi(2x - k).
pub const FILTER_SUM: f64 = 2.0;

/// Relative tolerance on the filter sum check.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-8;

/// Relative tolerance used when counting the sum rules of a filter.
pub const SUM_RULE_TOLERANCE: f64 = 1e-9;

/// Diagonal entries of R below `RANK_TOLERANCE * max|R_kk|` count as zero.
pub const RANK_TOLERANCE: f64 = 1e-12;

/// Shortest filter that yields a non-degenerate system.
pub const MIN_FILTER_LEN: usize = 4;

/// Largest accepted derivative order (total order for three-term
/// coefficients). Keeps d! and 2^(1-d) comfortably inside f64 range.
pub const MAX_DERIVATIVE_ORDER: usize = 32;

// Daubechies low-pass reconstruction filters in the orthonormal convention
// (taps sum to sqrt(2)). Use `WaveletFilter::from_orthonormal` to rescale.

/// Haar / db1. Too short for a connection-coefficient system.
pub const DAUBECHIES_1: [f64; 2] = [FRAC_1_SQRT_2, FRAC_1_SQRT_2];

/// db2, closed form (1 ± sqrt 3)/(4 sqrt 2), (3 ± sqrt 3)/(4 sqrt 2).
pub const DAUBECHIES_2: [f64; 4] = [
    0.48296291314453416,
    0.8365163037378079,
    0.2241438680420134,
    -0.12940952255126037,
];

pub const DAUBECHIES_3: [f64; 6] = [
    0.33267055295008263,
    0.8068915093110925,
    0.45987750211849154,
    -0.13501102001025458,
    -0.08544127388202666,
    0.03522629188570953,
];

pub const DAUBECHIES_4: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.027983769416859854,
    -0.18703481171909309,
    0.030841381835560764,
    0.0328830116668852,
    -0.010597401785069032,
];

pub const DAUBECHIES_5: [f64; 10] = [
    0.16010239797419293,
    0.6038292697971896,
    0.7243085284377729,
    0.13842814590132074,
    -0.24229488706638203,
    -0.032244869584638375,
    0.07757149384004572,
    -0.006241490212798274,
    -0.012580751999081999,
    0.0033357252854737712,
];

/// Look up a reference Daubechies filter by its number of vanishing moments.
pub fn daubechies(order: usize) -> Option<&'static [f64]> {
    match order {
        1 => Some(&DAUBECHIES_1),
        2 => Some(&DAUBECHIES_2),
        3 => Some(&DAUBECHIES_3),
        4 => Some(&DAUBECHIES_4),
        5 => Some(&DAUBECHIES_5),
        _ => None,
    }
}
