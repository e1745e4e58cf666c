// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Normalized Eigen-System
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared assembly and solve for the connection-coefficient systems.
//!
//! Both solvers produce a square matrix `T` whose nontrivial solution of
//! `T x = lambda x` is the unnormalized coefficient vector. The system
//! `(T - lambda I) x = 0` is stacked with one or more normalization rows and
//! solved by least squares. Numerical quality is returned, never raised.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wgcc_math::linalg::lstsq;
use wgcc_types::config::SolverConfig;
use wgcc_types::error::{CcError, CcResult};

/// Quality indicator attached to every solver result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveQuality {
    /// Sum of squared residuals of the stacked system.
    pub residual: f64,
    /// Tolerance the residual was checked against.
    pub tolerance: f64,
    /// Numerical rank of the stacked matrix.
    pub rank: usize,
    /// Number of unknowns (columns).
    pub unknowns: usize,
    /// `residual <= tolerance`.
    pub within_tolerance: bool,
}

impl SolveQuality {
    pub fn is_full_rank(&self) -> bool {
        self.rank == self.unknowns
    }
}

/// Homogeneous eigen-system `(T - lambda I) x = 0` plus normalization rows.
#[derive(Debug, Clone)]
pub struct NormalizedSystem {
    homogeneous: Array2<f64>,
    constraints: Vec<(Array1<f64>, f64)>,
}

impl NormalizedSystem {
    /// Start from a square `t` and shift its diagonal by `-eigenvalue`.
    pub fn new(mut t: Array2<f64>, eigenvalue: f64) -> CcResult<Self> {
        let (rows, cols) = t.dim();
        if rows != cols || rows == 0 {
            return Err(CcError::LinAlg(format!(
                "eigen-system matrix must be square and non-empty, got {rows}x{cols}"
            )));
        }
        for i in 0..rows {
            t[[i, i]] -= eigenvalue;
        }
        Ok(NormalizedSystem {
            homogeneous: t,
            constraints: Vec::new(),
        })
    }

    /// Append the constraint `row . x = target`.
    pub fn push_constraint(&mut self, row: Array1<f64>, target: f64) -> CcResult<()> {
        if row.len() != self.unknowns() {
            return Err(CcError::LinAlg(format!(
                "constraint has {} entries, system has {} unknowns",
                row.len(),
                self.unknowns()
            )));
        }
        self.constraints.push((row, target));
        Ok(())
    }

    pub fn unknowns(&self) -> usize {
        self.homogeneous.ncols()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// True when at least one constraint has a nonzero target; otherwise
    /// the least-squares solution is the zero vector.
    pub fn is_pinned(&self) -> bool {
        self.constraints.iter().any(|(_, target)| *target != 0.0)
    }

    /// Stack homogeneous rows and constraints into `(A, b)`.
    pub fn assemble(&self) -> (Array2<f64>, Array1<f64>) {
        let n = self.unknowns();
        let rows = n + self.constraints.len();
        let mut a = Array2::zeros((rows, n));
        let mut b = Array1::zeros(rows);
        a.slice_mut(ndarray::s![..n, ..]).assign(&self.homogeneous);
        for (k, (row, target)) in self.constraints.iter().enumerate() {
            a.row_mut(n + k).assign(row);
            b[n + k] = *target;
        }
        (a, b)
    }

    /// Solve by least squares and grade the residual against
    /// `config.residual_tolerance`. `label` names the solve in log output.
    pub fn solve(&self, config: &SolverConfig, label: &str) -> CcResult<(Array1<f64>, SolveQuality)> {
        let (a, b) = self.assemble();
        debug!(
            "{label}: solving {}x{} system ({} normalization rows)",
            a.nrows(),
            a.ncols(),
            self.constraints.len()
        );

        let sol = lstsq(&a, &b, config.rank_tolerance)?;
        let within_tolerance = sol.residual <= config.residual_tolerance;
        if !within_tolerance {
            warn!("{label}: residue of lstsq algorithm is {:.2e}", sol.residual);
        }
        if sol.rank < a.ncols() {
            warn!(
                "{label}: system is rank deficient (rank {} of {})",
                sol.rank,
                a.ncols()
            );
        }

        let quality = SolveQuality {
            residual: sol.residual,
            tolerance: config.residual_tolerance,
            rank: sol.rank,
            unknowns: a.ncols(),
            within_tolerance,
        };
        Ok((sol.x, quality))
    }
}
