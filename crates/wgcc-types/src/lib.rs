// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Connection-Coefficient Types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared types for the connection-coefficient workspace.
//!
//! Errors, solver configuration, validated wavelet filters, reference
//! filter constants and the keyed three-term table.

pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod orders;
pub mod table;
