// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Correlation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Filter auto- and triple correlations.
//!
//! Both sequences are recomputed per solve; nothing is cached.

use ndarray::Array2;

/// Full autocorrelation `c(s) = sum_n a_n a_{n+s}`, `s = -(N-1) ..= N-1`.
///
/// Index `k` of the result holds shift `k - (N-1)`. Matches
/// `numpy.correlate(a, a, mode="full")`.
pub fn autocorrelate_full(a: &[f64]) -> Vec<f64> {
    let n = a.len();
    if n == 0 {
        return Vec::new();
    }
    let mut out = vec![0.0; 2 * n - 1];
    for (k, slot) in out.iter_mut().enumerate() {
        let s = k as isize - (n as isize - 1);
        let lo = (-s).max(0) as usize;
        let hi = (n as isize).min(n as isize - s) as usize;
        *slot = (lo..hi)
            .map(|i| a[i] * a[(i as isize + s) as usize])
            .sum();
    }
    out
}

/// Triple correlation `c3(p, q) = sum_i a_i a_{i+p} a_{i+q}` for
/// `p, q` in `-(N-1) ..= N-1`.
#[derive(Debug, Clone)]
pub struct TripleCorrelation {
    values: Array2<f64>,
    radius: i64,
}

impl TripleCorrelation {
    pub fn new(a: &[f64]) -> Self {
        let n = a.len() as i64;
        let radius = (n - 1).max(0);
        let width = (2 * radius + 1) as usize;
        let mut values = Array2::zeros((width, width));
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let p = (j - i + radius) as usize;
                    let q = (k - i + radius) as usize;
                    values[[p, q]] += a[i as usize] * a[j as usize] * a[k as usize];
                }
            }
        }
        TripleCorrelation { values, radius }
    }

    /// Largest |p| (or |q|) with a possibly nonzero value, N - 1.
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// `c3(p, q)`, zero outside the filter support.
    pub fn get(&self, p: i64, q: i64) -> f64 {
        if p.abs() > self.radius || q.abs() > self.radius || self.values.is_empty() {
            return 0.0;
        }
        self.values[[(p + self.radius) as usize, (q + self.radius) as usize]]
    }
}
