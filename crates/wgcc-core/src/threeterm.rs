// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Three-Term Connection Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Three-term connection coefficients
//!   CC^(d1,d2,d3)_(l,m) = ∫ phi^(d1)(x) phi^(d2)(x - l) phi^(d3)(x - m) dx.
//!
//! The dilation equation gives, with `d = d1 + d2 + d3`,
//!   CC(l, m) = 2^(d-1) sum_{i,j,k} a_i a_j a_k CC(2l + j - i, 2m + k - i),
//! so the coefficient vector is an eigenvector of the triple-correlation
//! matrix `T[(l,m),(p,q)] = c3(p - 2l, q - 2m)` for eigenvalue `2^(1-d)`.
//! That eigenspace has dimension d + 1; it is pinned by the moment equations
//!   sum_{l,m} M^p_l M^q_m CC(l, m) = ∫ phi^(d1)(x) (x^p)^(d2) (x^q)^(d3) dx
//! for every `p, q` below the approximation order of the filter.
//!
//! Unknowns live on the band `|l|, |m|, |l - m| <= N - 2`; pairs outside it
//! are never materialized.

use ndarray::{Array1, Array2};
use tracing::debug;
use wgcc_math::correlate::TripleCorrelation;
use wgcc_math::moments::{falling_factorial, scaling_moments, shifted_moment, sum_rule_order};
use wgcc_types::config::SolverConfig;
use wgcc_types::constants::MAX_DERIVATIVE_ORDER;
use wgcc_types::error::{CcError, CcResult};
use wgcc_types::filter::WaveletFilter;
use wgcc_types::orders::DerivativeOrders;
use wgcc_types::table::{ShiftPair, ThreeTermTable};

use crate::system::{NormalizedSystem, SolveQuality};

/// Band of shift pairs `(l, m)` with `|l|, |m|, |l - m| <= radius`, ordered
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftLattice {
    radius: i64,
    /// Flat index of the first `m` of each row `l`, plus the total length.
    row_start: Vec<usize>,
}

impl ShiftLattice {
    pub fn new(radius: i64) -> Self {
        let radius = radius.max(0);
        let mut row_start = Vec::with_capacity((2 * radius + 2) as usize);
        let mut offset = 0;
        for l in -radius..=radius {
            row_start.push(offset);
            let (lo, hi) = Self::bounds(radius, l);
            offset += (hi - lo + 1) as usize;
        }
        row_start.push(offset);
        ShiftLattice { radius, row_start }
    }

    fn bounds(radius: i64, l: i64) -> (i64, i64) {
        ((l - radius).max(-radius), (l + radius).min(radius))
    }

    pub fn radius(&self) -> i64 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.row_start[self.row_start.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Range of `m` paired with `l`, or `None` if `l` is out of band.
    pub fn m_bounds(&self, l: i64) -> Option<(i64, i64)> {
        if l.abs() > self.radius {
            return None;
        }
        Some(Self::bounds(self.radius, l))
    }

    pub fn index_of(&self, l: i64, m: i64) -> Option<usize> {
        let (lo, hi) = self.m_bounds(l)?;
        if m < lo || m > hi {
            return None;
        }
        Some(self.row_start[(l + self.radius) as usize] + (m - lo) as usize)
    }

    /// All pairs in flat-index order.
    pub fn iter(&self) -> impl Iterator<Item = ShiftPair> + '_ {
        (-self.radius..=self.radius).flat_map(move |l| {
            let (lo, hi) = Self::bounds(self.radius, l);
            (lo..=hi).map(move |m| (l, m))
        })
    }
}

/// Three-term coefficients on the shift band, in lattice order.
#[derive(Debug, Clone)]
pub struct ThreeTermCoefficients {
    pub orders: DerivativeOrders,
    /// `(l, m)` of each value, lexicographic.
    pub keys: Vec<ShiftPair>,
    pub values: Array1<f64>,
    /// Number of polynomial moments used per shift role.
    pub moment_orders: usize,
    pub quality: SolveQuality,
    lattice: ShiftLattice,
}

impl ThreeTermCoefficients {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// CC(l, m), zero outside the band.
    pub fn get(&self, l: i64, m: i64) -> f64 {
        self.lattice
            .index_of(l, m)
            .map(|idx| self.values[idx])
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShiftPair, f64)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }

    /// Keyed table view of the coefficients.
    pub fn to_table(&self) -> ThreeTermTable {
        self.iter().collect()
    }
}

/// CC^(d1,d2,d3) for filter `a` (taps summing to 2), default configuration.
pub fn threeterm_connection_coefficients(
    a: &[f64],
    d1: usize,
    d2: usize,
    d3: usize,
) -> CcResult<ThreeTermCoefficients> {
    threeterm_with_config(a, DerivativeOrders::new(d1, d2, d3), &SolverConfig::default())
}

pub fn threeterm_with_config(
    a: &[f64],
    orders: DerivativeOrders,
    config: &SolverConfig,
) -> CcResult<ThreeTermCoefficients> {
    config.validate()?;
    let filter = WaveletFilter::with_config(a.to_vec(), config)?;
    solve_threeterm(&filter, orders, config)
}

/// CC^(d1,d2,d3) for an already validated filter.
pub fn solve_threeterm(
    filter: &WaveletFilter,
    orders: DerivativeOrders,
    config: &SolverConfig,
) -> CcResult<ThreeTermCoefficients> {
    let d = orders.total();
    if d > MAX_DERIVATIVE_ORDER {
        return Err(CcError::InvalidDerivative(format!(
            "total derivative order {d} of {orders} exceeds the supported maximum {MAX_DERIVATIVE_ORDER}"
        )));
    }

    let moment_orders = match config.moment_orders {
        Some(k) => k,
        None => sum_rule_order(filter.taps(), config.sum_rule_tolerance),
    };
    if moment_orders == 0 {
        return Err(CcError::InvalidFilter(
            "filter satisfies no sum rules; three-term system cannot be normalized".to_string(),
        ));
    }

    let lattice = ShiftLattice::new(filter.support_radius());
    debug!(
        "three-term {orders}: {} unknowns, {} moment orders",
        lattice.len(),
        moment_orders
    );

    let eigenvalue = 2f64.powi(1 - d as i32);
    let mut system = NormalizedSystem::new(threeterm_matrix(filter, &lattice), eigenvalue)?;
    for (row, target) in moment_constraints(filter, &lattice, orders, moment_orders) {
        system.push_constraint(row, target)?;
    }
    if !system.is_pinned() {
        return Err(CcError::InvalidDerivative(format!(
            "orders {orders} cannot be normalized with {moment_orders} polynomial moments \
             (every moment equation is homogeneous)"
        )));
    }

    let (values, quality) = system.solve(config, &format!("three-term {orders}"))?;
    Ok(ThreeTermCoefficients {
        orders,
        keys: lattice.iter().collect(),
        values,
        moment_orders,
        quality,
        lattice,
    })
}

/// Triple-correlation matrix over the shift band.
///
/// Row `(l, m)` couples only to `p` within `N - 1` of `2l` and `q` within
/// `N - 1` of `2m`.
pub fn threeterm_matrix(filter: &WaveletFilter, lattice: &ShiftLattice) -> Array2<f64> {
    let c3 = TripleCorrelation::new(filter.taps());
    let w = c3.radius();
    let r = lattice.radius();
    let n = lattice.len();
    let mut t = Array2::zeros((n, n));

    for (row, (l, m)) in lattice.iter().enumerate() {
        for p in (2 * l - w).max(-r)..=(2 * l + w).min(r) {
            let Some((q_lo, q_hi)) = lattice.m_bounds(p) else {
                continue;
            };
            for q in (2 * m - w).max(q_lo)..=(2 * m + w).min(q_hi) {
                if let Some(col) = lattice.index_of(p, q) {
                    t[[row, col]] = c3.get(p - 2 * l, q - 2 * m);
                }
            }
        }
    }
    t
}

/// Right-hand side of the (p, q) moment equation:
///   ∫ phi^(d1)(x) (x^p)^(d2) (x^q)^(d3) dx
///     = (-1)^d1 p!/(p-d2)! q!/(q-d3)! r!/(r-d1)! mu_(r-d1),  r = p-d2 + q-d3.
fn moment_target(orders: DerivativeOrders, p: usize, q: usize, mu: &[f64]) -> f64 {
    if p < orders.d2 || q < orders.d3 {
        return 0.0;
    }
    let r = p - orders.d2 + q - orders.d3;
    if r < orders.d1 {
        return 0.0;
    }
    let sign = if orders.d1 % 2 == 0 { 1.0 } else { -1.0 };
    sign * falling_factorial(p, orders.d2)
        * falling_factorial(q, orders.d3)
        * falling_factorial(r, orders.d1)
        * mu[r - orders.d1]
}

/// One constraint per `(p, q)` in `[0, moment_orders)^2`.
fn moment_constraints(
    filter: &WaveletFilter,
    lattice: &ShiftLattice,
    orders: DerivativeOrders,
    moment_orders: usize,
) -> Vec<(Array1<f64>, f64)> {
    let mu = scaling_moments(filter.taps(), 2 * moment_orders);
    let r = lattice.radius();

    // shifted[p][l + r] = M^p_l
    let shifted: Vec<Vec<f64>> = (0..moment_orders)
        .map(|p| (-r..=r).map(|l| shifted_moment(&mu, p, l)).collect())
        .collect();

    let mut constraints = Vec::with_capacity(moment_orders * moment_orders);
    for p in 0..moment_orders {
        for q in 0..moment_orders {
            let row = Array1::from_iter(
                lattice
                    .iter()
                    .map(|(l, m)| shifted[p][(l + r) as usize] * shifted[q][(m + r) as usize]),
            );
            constraints.push((row, moment_target(orders, p, q, &mu)));
        }
    }
    constraints
}
