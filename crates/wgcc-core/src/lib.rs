// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Connection Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Connection coefficients of compactly supported wavelet scaling functions.
//!
//! - [`twoterm`]: CC^(0,d)_l = ∫ phi(x) phi^(d)(x - l) dx
//! - [`threeterm`]: CC^(d1,d2,d3)_(l,m) = ∫ phi^(d1)(x) phi^(d2)(x - l) phi^(d3)(x - m) dx
//! - [`verify`]: checksum identity and reference-table comparison
//!
//! Both solvers build the homogeneous eigen-system implied by the dilation
//! equation, pin its scale with moment constraints ([`system`]) and solve
//! the stacked system by least squares.

pub mod system;
pub mod threeterm;
pub mod twoterm;
pub mod verify;

pub use system::SolveQuality;
pub use threeterm::{threeterm_connection_coefficients, ThreeTermCoefficients};
pub use twoterm::{twoterm_connection_coefficients, TwoTermCoefficients};
