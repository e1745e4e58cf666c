// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Linear Algebra
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Linear algebra utilities.
//!
//! Dense least squares via Householder QR with rank detection on the
//! diagonal of R. Systems here stay small (tens to a few hundred unknowns),
//! so a straightforward O(m n^2) factorization is sufficient.

use ndarray::{Array1, Array2};
use wgcc_types::error::{CcError, CcResult};

/// Outcome of [`lstsq`].
#[derive(Debug, Clone)]
pub struct LstsqSolution {
    /// Minimizer of `||A x - b||_2` (basic solution if rank deficient).
    pub x: Array1<f64>,
    /// Sum of squared residuals `||A x - b||_2^2`.
    pub residual: f64,
    /// Number of diagonal entries of R above the rank cutoff.
    pub rank: usize,
}

/// Solve the over-determined system `A x ≈ b` in the least-squares sense.
///
/// `rank_tol` is relative to the largest `|R_kk|`; columns whose pivot
/// falls below it get `x_k = 0`.
///
/// Matches `scipy.linalg.lstsq(A, b)` for full-rank `A` with `m >= n`.
pub fn lstsq(a: &Array2<f64>, b: &Array1<f64>, rank_tol: f64) -> CcResult<LstsqSolution> {
    let (m, n) = a.dim();
    if b.len() != m {
        return Err(CcError::LinAlg(format!(
            "lstsq dimension mismatch: A is {m}x{n}, b has {} entries",
            b.len()
        )));
    }
    if n == 0 {
        return Err(CcError::LinAlg("lstsq requires at least one column".to_string()));
    }
    if m < n {
        return Err(CcError::LinAlg(format!(
            "lstsq requires m >= n, got an under-determined {m}x{n} system"
        )));
    }
    if !a.iter().chain(b.iter()).all(|v| v.is_finite()) {
        return Err(CcError::LinAlg(
            "lstsq received non-finite matrix or right-hand side".to_string(),
        ));
    }

    // Work on columns: qr[[j, i]] = A[i, j], so each column is contiguous.
    let mut qr = Array2::from_shape_fn((n, m), |(j, i)| a[[i, j]]);
    let mut qtb = b.clone();
    let mut v = vec![0.0; m];

    for k in 0..n {
        let norm = (k..m).map(|i| qr[[k, i]] * qr[[k, i]]).sum::<f64>().sqrt();
        if norm == 0.0 {
            continue;
        }
        let alpha = if qr[[k, k]] >= 0.0 { -norm } else { norm };

        for i in k..m {
            v[i] = qr[[k, i]];
        }
        v[k] -= alpha;
        let v_norm_sq: f64 = (k..m).map(|i| v[i] * v[i]).sum();
        if v_norm_sq == 0.0 {
            continue;
        }

        // Apply H = I - 2 v v^T / (v^T v) to the remaining columns and b.
        for j in k..n {
            let dot: f64 = (k..m).map(|i| v[i] * qr[[j, i]]).sum();
            let f = 2.0 * dot / v_norm_sq;
            for i in k..m {
                qr[[j, i]] -= f * v[i];
            }
        }
        let dot: f64 = (k..m).map(|i| v[i] * qtb[i]).sum();
        let f = 2.0 * dot / v_norm_sq;
        for i in k..m {
            qtb[i] -= f * v[i];
        }
    }

    // Back substitution on R, skipping negligible pivots.
    let max_pivot = (0..n).map(|k| qr[[k, k]].abs()).fold(0.0, f64::max);
    let cutoff = rank_tol * max_pivot;
    let mut x = Array1::zeros(n);
    let mut rank = 0;
    for i in (0..n).rev() {
        let pivot = qr[[i, i]];
        if pivot.abs() <= cutoff || pivot == 0.0 {
            continue;
        }
        rank += 1;
        let mut s = qtb[i];
        for j in (i + 1)..n {
            s -= qr[[j, i]] * x[j];
        }
        x[i] = s / pivot;
    }

    let residual = (a.dot(&x) - b).mapv(|r| r * r).sum();

    Ok(LstsqSolution { x, residual, rank })
}
