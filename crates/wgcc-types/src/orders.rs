// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Derivative Orders
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// Derivative orders (d1, d2, d3) of a three-term coefficient
///   CC(l, m) = ∫ phi^(d1)(x) phi^(d2)(x - l) phi^(d3)(x - m) dx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivativeOrders {
    pub d1: usize,
    pub d2: usize,
    pub d3: usize,
}

impl DerivativeOrders {
    pub fn new(d1: usize, d2: usize, d3: usize) -> Self {
        DerivativeOrders { d1, d2, d3 }
    }

    pub fn total(&self) -> usize {
        self.d1 + self.d2 + self.d3
    }
}

impl From<[usize; 3]> for DerivativeOrders {
    fn from(d: [usize; 3]) -> Self {
        DerivativeOrders::new(d[0], d[1], d[2])
    }
}

impl std::fmt::Display for DerivativeOrders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.d1, self.d2, self.d3)
    }
}
