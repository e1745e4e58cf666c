// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Property-Based Tests (proptest) for wgcc-math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for wgcc-math using proptest.
//!
//! Covers: least-squares solver, autocorrelation, triple correlation,
//! scaling-function moments.

use ndarray::{Array1, Array2};
use proptest::prelude::*;
use wgcc_math::correlate::{autocorrelate_full, TripleCorrelation};
use wgcc_math::linalg::lstsq;
use wgcc_math::moments::{centered_moment, scaling_moments, shifted_moment};

// ── Least-Squares Properties ─────────────────────────────────────────

proptest! {
    /// For a diagonally dominant square system, lstsq solves Ax = b exactly.
    #[test]
    fn lstsq_square_ax_eq_b(n in 1usize..20, seed in prop::collection::vec(-1.0f64..1.0, 400)) {
        let a = Array2::from_shape_fn((n, n), |(i, j)| {
            if i == j { 4.0 + seed[i] } else { 0.1 * seed[(i * 20 + j) % 400] }
        });
        let b = Array1::from_shape_fn(n, |i| (i as f64 + 1.0).sin());

        let sol = lstsq(&a, &b, 1e-12).unwrap();
        let ax = a.dot(&sol.x);
        for i in 0..n {
            prop_assert!((ax[i] - b[i]).abs() < 1e-10,
                "Ax[{}] = {}, b[{}] = {}", i, ax[i], i, b[i]);
        }
        prop_assert_eq!(sol.rank, n);
    }

    /// The residual of the least-squares solution satisfies the normal
    /// equations: A^T (A x - b) = 0.
    #[test]
    fn lstsq_normal_equations(m in 3usize..25, extra in 0usize..3, seed in prop::collection::vec(-1.0f64..1.0, 600)) {
        let n = (m - extra).max(1);
        let a = Array2::from_shape_fn((m, n), |(i, j)| {
            seed[(i * 24 + j) % 600] + if i == j { 2.0 + m as f64 } else { 0.0 }
        });
        let b = Array1::from_shape_fn(m, |i| seed[(i * 7 + 3) % 600]);

        let sol = lstsq(&a, &b, 1e-12).unwrap();
        let r = a.dot(&sol.x) - &b;
        let grad = a.t().dot(&r);
        for j in 0..n {
            prop_assert!(grad[j].abs() < 1e-9, "A^T r [{}] = {}", j, grad[j]);
        }
        let res: f64 = r.iter().map(|v| v * v).sum();
        prop_assert!((res - sol.residual).abs() <= 1e-12 * (1.0 + res));
    }
}

// ── Correlation Properties ───────────────────────────────────────────

proptest! {
    /// Autocorrelation is symmetric and peaks at zero shift.
    #[test]
    fn autocorrelation_symmetric(a in prop::collection::vec(-2.0f64..2.0, 1..20)) {
        let c = autocorrelate_full(&a);
        let n = a.len();
        prop_assert_eq!(c.len(), 2 * n - 1);
        for k in 0..c.len() {
            prop_assert!((c[k] - c[c.len() - 1 - k]).abs() < 1e-12);
            prop_assert!(c[k].abs() <= c[n - 1] + 1e-12);
        }
        let energy: f64 = a.iter().map(|v| v * v).sum();
        prop_assert!((c[n - 1] - energy).abs() < 1e-12);
    }

    /// Triple correlation is symmetric under swapping p and q, and its
    /// total equals sum(a)^3.
    #[test]
    fn triple_correlation_symmetry(a in prop::collection::vec(-1.0f64..1.0, 1..10)) {
        let c3 = TripleCorrelation::new(&a);
        let r = c3.radius();
        let mut total = 0.0;
        for p in -r..=r {
            for q in -r..=r {
                prop_assert!((c3.get(p, q) - c3.get(q, p)).abs() < 1e-12);
                total += c3.get(p, q);
            }
        }
        let s: f64 = a.iter().sum();
        prop_assert!((total - s * s * s).abs() < 1e-9);
        prop_assert_eq!(c3.get(r + 1, 0), 0.0);
    }
}

// ── Moment Properties ────────────────────────────────────────────────

proptest! {
    /// Zeroth centered moment is always 1.
    #[test]
    fn centered_moment_order_zero(half in 2usize..16, i in 0usize..60) {
        prop_assert_eq!(centered_moment(2 * half, i, 0), 1.0);
    }

    /// Centered moments are powers of a single integer coordinate.
    #[test]
    fn centered_moment_is_power(half in 2usize..16, i in 0usize..60, j in 1usize..6) {
        let base = centered_moment(2 * half, i, 1);
        let expected = base.powi(j as i32);
        prop_assert!((centered_moment(2 * half, i, j) - expected).abs() < 1e-9);
    }

    /// Shifting by l and back by -l through binomial expansion is consistent:
    /// ∫ x phi(x - l) - l = mu_1 for every shift.
    #[test]
    fn shifted_first_moment(l in -20i64..20, seed in prop::collection::vec(-0.5f64..0.5, 4)) {
        let a: Vec<f64> = {
            let shift = (2.0 - seed.iter().sum::<f64>()) / 4.0;
            seed.iter().map(|v| v + shift).collect()
        };
        let mu = scaling_moments(&a, 2);
        prop_assert!((shifted_moment(&mu, 1, l) - l as f64 - mu[1]).abs() < 1e-9);
    }
}
