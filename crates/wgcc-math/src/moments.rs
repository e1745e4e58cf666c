// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Moments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Polynomial moments used by the normalization constraints.
//!
//! - [`centered_moment`]: the two-term normalization row entry.
//! - [`scaling_moments`]: exact moments `mu_k = ∫ x^k phi(x) dx` from the
//!   dilation equation.
//! - [`sum_rule_order`]: approximation order of a filter.

/// Moment of a centered integer index: `(i - (N/2 - 1))^j`.
///
/// `filter_len` is the filter length N (integer division for N/2).
pub fn centered_moment(filter_len: usize, i: usize, j: usize) -> f64 {
    let center = (filter_len / 2) as i64 - 1;
    let x = i as i64 - center;
    (x as f64).powi(j as i32)
}

/// `n!` as a float.
pub fn factorial(n: usize) -> f64 {
    (1..=n).fold(1.0, |acc, k| acc * k as f64)
}

/// Falling factorial `n! / (n - k)!`; zero when `k > n`.
pub fn falling_factorial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    ((n - k + 1)..=n).fold(1.0, |acc, v| acc * v as f64)
}

/// Binomial coefficient `C(n, k)` as a float.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Power sums `S_p = sum_n a_n n^p` for `p = 0 ..= max_order`.
fn power_sums(a: &[f64], max_order: usize) -> Vec<f64> {
    (0..=max_order)
        .map(|p| {
            a.iter()
                .enumerate()
                .map(|(n, &an)| an * (n as f64).powi(p as i32))
                .sum()
        })
        .collect()
}

/// Moments `mu_0 ..= mu_max_order` of the scaling function of `a`.
///
/// Assumes `sum(a) == 2` and `mu_0 = 1`. Integrating the dilation equation
/// against `x^k` gives
///   mu_k = sum_{j<k} C(k, j) mu_j S_{k-j} / (2 (2^k - 1)).
pub fn scaling_moments(a: &[f64], max_order: usize) -> Vec<f64> {
    let sums = power_sums(a, max_order);
    let mut mu = Vec::with_capacity(max_order + 1);
    mu.push(1.0);
    for k in 1..=max_order {
        let acc: f64 = (0..k).map(|j| binomial(k, j) * mu[j] * sums[k - j]).sum();
        let denom = 2.0 * (2f64.powi(k as i32) - 1.0);
        mu.push(acc / denom);
    }
    mu
}

/// Moment of a shifted scaling function, `∫ x^p phi(x - l) dx`.
///
/// `mu` must hold at least `p + 1` scaling moments.
pub fn shifted_moment(mu: &[f64], p: usize, l: i64) -> f64 {
    let l = l as f64;
    (0..=p)
        .map(|i| binomial(p, i) * l.powi((p - i) as i32) * mu[i])
        .sum()
}

/// Number of sum rules `sum_n (-1)^n n^p a_n = 0` satisfied for
/// `p = 0, 1, ...`, each tested relative to `sum_n |a_n| n^p`.
///
/// For Daubechies dbK this is K, the approximation order.
pub fn sum_rule_order(a: &[f64], rel_tol: f64) -> usize {
    let mut order = 0;
    while order < a.len() {
        let (alternating, scale) =
            a.iter()
                .enumerate()
                .fold((0.0, 0.0), |(alt, scale), (n, &an)| {
                    let w = (n as f64).powi(order as i32);
                    let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                    (alt + sign * w * an, scale + w * an.abs())
                });
        if scale == 0.0 || alternating.abs() > rel_tol * scale {
            break;
        }
        order += 1;
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::SQRT_2;
    use wgcc_types::constants::{DAUBECHIES_2, DAUBECHIES_3, DAUBECHIES_4};

    fn scaled(h: &[f64]) -> Vec<f64> {
        h.iter().map(|v| v * SQRT_2).collect()
    }

    #[test]
    fn test_centered_moment() {
        // N = 4: center 1
        assert_eq!(centered_moment(4, 0, 1), -1.0);
        assert_eq!(centered_moment(4, 1, 3), 0.0);
        assert_eq!(centered_moment(4, 4, 2), 9.0);
        // j = 0 is always 1, including 0^0
        assert_eq!(centered_moment(6, 2, 0), 1.0);
        assert_eq!(centered_moment(6, 0, 3), -8.0);
    }

    #[test]
    fn test_factorials() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(falling_factorial(5, 2), 20.0);
        assert_eq!(falling_factorial(3, 0), 1.0);
        assert_eq!(falling_factorial(2, 3), 0.0);
        assert_eq!(binomial(6, 2), 15.0);
        assert_eq!(binomial(6, 0), 1.0);
        assert_eq!(binomial(2, 5), 0.0);
    }

    #[test]
    fn test_db2_first_moment_closed_form() {
        let mu = scaling_moments(&scaled(&DAUBECHIES_2), 3);
        assert_eq!(mu[0], 1.0);
        assert_relative_eq!(mu[1], (3.0 - 3f64.sqrt()) / 2.0, max_relative = 1e-13);
    }

    #[test]
    fn test_daubechies_second_moment_is_first_squared() {
        for h in [&DAUBECHIES_2[..], &DAUBECHIES_3[..], &DAUBECHIES_4[..]] {
            let mu = scaling_moments(&scaled(h), 2);
            assert_relative_eq!(mu[2], mu[1] * mu[1], max_relative = 1e-12);
        }
    }

    #[test]
    fn test_shifted_moment() {
        let mu = [1.0, 0.5, 0.75];
        assert_eq!(shifted_moment(&mu, 0, 3), 1.0);
        // ∫ x phi(x - l) = l + mu_1
        assert!((shifted_moment(&mu, 1, -2) - (-1.5)).abs() < 1e-15);
        // ∫ x^2 phi(x - l) = l^2 + 2 l mu_1 + mu_2
        assert!((shifted_moment(&mu, 2, 2) - (4.0 + 2.0 + 0.75)).abs() < 1e-15);
    }

    #[test]
    fn test_sum_rule_order_daubechies() {
        assert_eq!(sum_rule_order(&scaled(&DAUBECHIES_2), 1e-9), 2);
        assert_eq!(sum_rule_order(&scaled(&DAUBECHIES_3), 1e-9), 3);
        assert_eq!(sum_rule_order(&scaled(&DAUBECHIES_4), 1e-9), 4);
    }

    #[test]
    fn test_sum_rule_order_box() {
        // [1, 1] (Haar) satisfies exactly one sum rule
        assert_eq!(sum_rule_order(&[1.0, 1.0], 1e-12), 1);
        // no alternating cancellation at all
        assert_eq!(sum_rule_order(&[2.0, 0.0, 0.0, 0.0], 1e-12), 0);
    }
}
