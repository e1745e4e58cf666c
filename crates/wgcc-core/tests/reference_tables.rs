// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Reference-Table Tests for wgcc-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Three-term coefficients against stored reference tables.

use std::f64::consts::SQRT_2;
use wgcc_core::threeterm::threeterm_with_config;
use wgcc_core::verify::{compare_with_reference, max_relative_error, ReferenceTable};
use wgcc_types::config::SolverConfig;
use wgcc_types::constants::daubechies;

fn fixture(name: &str) -> ReferenceTable {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    ReferenceTable::from_file(&path).unwrap()
}

fn filter_for(wavelet: &str) -> Vec<f64> {
    let order: usize = wavelet.trim_start_matches("db").parse().unwrap();
    daubechies(order)
        .unwrap()
        .iter()
        .map(|v| v * SQRT_2)
        .collect()
}

#[test]
fn db3_first_derivative_matches_reference() {
    let reference = fixture("db3_100.json");
    assert_eq!(reference.wavelet, "db3");
    assert_eq!(reference.coefficients.len(), 61);

    let computed = threeterm_with_config(
        &filter_for(&reference.wavelet),
        reference.orders,
        &SolverConfig::default(),
    )
    .unwrap();
    let errors = compare_with_reference(&computed.to_table(), &reference.coefficients);

    assert_eq!(errors.len(), reference.coefficients.len());
    for e in &errors {
        assert!(
            e.relative_error.abs() < 1e-6,
            "{:?}: reference {} computed {} (relative error {:.2e})",
            e.key,
            e.reference,
            e.computed,
            e.relative_error
        );
    }
    assert!(max_relative_error(&errors) < 1e-6);
}

#[test]
fn reference_keys_outside_band_compare_against_zero() {
    let mut reference = fixture("db3_100.json");
    reference.coefficients.insert((5, 0), 0.0);
    reference.coefficients.insert((-4, 1), 0.0);

    let computed = threeterm_with_config(
        &filter_for(&reference.wavelet),
        reference.orders,
        &SolverConfig::default(),
    )
    .unwrap()
    .to_table();
    assert!(!computed.contains(5, 0));

    let errors = compare_with_reference(&computed, &reference.coefficients);
    let outside: Vec<_> = errors
        .iter()
        .filter(|e| e.key == (5, 0) || e.key == (-4, 1))
        .collect();
    assert_eq!(outside.len(), 2);
    for e in outside {
        assert_eq!(e.computed, 0.0);
        assert_eq!(e.relative_error, 0.0);
    }
}

#[test]
fn reference_table_survives_json_roundtrip() {
    let reference = fixture("db3_100.json");
    let json = serde_json::to_string(&reference).unwrap();
    let back = ReferenceTable::from_json(&json).unwrap();
    assert_eq!(back, reference);
}
