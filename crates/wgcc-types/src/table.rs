// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Three-Term Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sparse table of three-term connection coefficients keyed by (l, m).
//!
//! Keys outside the support band are never stored; lookups of absent keys
//! return 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Integer shift pair (l, m).
pub type ShiftPair = (i64, i64);

/// Single table entry as stored in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub l: i64,
    pub m: i64,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TableEntry>", into = "Vec<TableEntry>")]
pub struct ThreeTermTable {
    entries: BTreeMap<ShiftPair, f64>,
}

impl ThreeTermTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ShiftPair, value: f64) -> Option<f64> {
        self.entries.insert(key, value)
    }

    /// Coefficient at `(l, m)`; absent keys are 0.
    pub fn get(&self, l: i64, m: i64) -> f64 {
        self.entries.get(&(l, m)).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, l: i64, m: i64) -> bool {
        self.entries.contains_key(&(l, m))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending (l, m) order.
    pub fn iter(&self) -> impl Iterator<Item = (ShiftPair, f64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = ShiftPair> + '_ {
        self.entries.keys().copied()
    }

    /// Marginal sum over m for fixed l.
    pub fn row_sum(&self, l: i64) -> f64 {
        self.entries
            .range((l, i64::MIN)..=(l, i64::MAX))
            .map(|(_, v)| v)
            .sum()
    }
}

impl FromIterator<(ShiftPair, f64)> for ThreeTermTable {
    fn from_iter<I: IntoIterator<Item = (ShiftPair, f64)>>(iter: I) -> Self {
        ThreeTermTable {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<TableEntry>> for ThreeTermTable {
    fn from(entries: Vec<TableEntry>) -> Self {
        entries.into_iter().map(|e| ((e.l, e.m), e.value)).collect()
    }
}

impl From<ThreeTermTable> for Vec<TableEntry> {
    fn from(table: ThreeTermTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|((l, m), value)| TableEntry { l, m, value })
            .collect()
    }
}
