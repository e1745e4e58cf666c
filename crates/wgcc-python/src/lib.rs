// ─────────────────────────────────────────────────────────────────────
// SCPN Wavelet-Galerkin — Python Bindings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PyO3 Python bindings for the connection-coefficient solvers.
//!
//! Filters are taken as 1-D numpy arrays that already sum to 2 (multiply a
//! pywt `dec_lo` filter by sqrt(2)).

use std::collections::HashMap;

use ndarray::Array1;
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use wgcc_core::threeterm::{threeterm_with_config, ThreeTermCoefficients};
use wgcc_core::twoterm::twoterm_with_config;
use wgcc_core::verify::checksum_with_config;
use wgcc_types::config::SolverConfig;
use wgcc_types::error::CcError;
use wgcc_types::orders::DerivativeOrders;

fn to_py_err(e: CcError) -> PyErr {
    match e {
        CcError::Io(_) => PyIOError::new_err(e.to_string()),
        CcError::LinAlg(_) => PyRuntimeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn load_config(config_path: Option<&str>) -> PyResult<SolverConfig> {
    match config_path {
        Some(path) => SolverConfig::from_file(path).map_err(to_py_err),
        None => Ok(SolverConfig::default()),
    }
}

fn solve_threeterm(
    a: &PyReadonlyArray1<'_, f64>,
    d1: usize,
    d2: usize,
    d3: usize,
    config_path: Option<&str>,
) -> PyResult<ThreeTermCoefficients> {
    let config = load_config(config_path)?;
    threeterm_with_config(
        &a.as_array().to_vec(),
        DerivativeOrders::new(d1, d2, d3),
        &config,
    )
    .map_err(to_py_err)
}

// ─── Solvers ───

/// Two-term coefficients CC^(0,d) for shifts -(N-2) ..= N-2.
#[pyfunction]
#[pyo3(signature = (a, d, config_path=None))]
fn twoterm_connection_coefficients<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    d: usize,
    config_path: Option<&str>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let config = load_config(config_path)?;
    let cc = twoterm_with_config(&a.as_array().to_vec(), d, &config).map_err(to_py_err)?;
    Ok(cc.values.into_pyarray(py))
}

/// Three-term coefficients as `(keys, values)`, keys `(l, m)` in
/// lexicographic order.
#[pyfunction]
#[pyo3(signature = (a, d1, d2, d3, config_path=None))]
fn threeterm_connection_coefficients<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    d1: usize,
    d2: usize,
    d3: usize,
    config_path: Option<&str>,
) -> PyResult<(Vec<(i64, i64)>, Bound<'py, PyArray1<f64>>)> {
    let cc = solve_threeterm(&a, d1, d2, d3, config_path)?;
    Ok((cc.keys, cc.values.into_pyarray(py)))
}

/// Three-term coefficients as `{(l, m): value}`.
#[pyfunction]
#[pyo3(signature = (a, d1, d2, d3, config_path=None))]
fn threeterm_dict(
    a: PyReadonlyArray1<'_, f64>,
    d1: usize,
    d2: usize,
    d3: usize,
    config_path: Option<&str>,
) -> PyResult<HashMap<(i64, i64), f64>> {
    let cc = solve_threeterm(&a, d1, d2, d3, config_path)?;
    Ok(cc.iter().collect())
}

// ─── Verification ───

/// Relative error per shift of `sum_m CC^(d1,d2,0)(l, m)` against
/// `(-1)^d1 CC^(0,d1+d2)(l)`.
#[pyfunction]
#[pyo3(signature = (a, d1, d2, config_path=None))]
fn checksum<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<'py, f64>,
    d1: usize,
    d2: usize,
    config_path: Option<&str>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let config = load_config(config_path)?;
    let report =
        checksum_with_config(&a.as_array().to_vec(), d1, d2, &config).map_err(to_py_err)?;
    Ok(Array1::from_vec(report.relative_errors).into_pyarray(py))
}

// ─── Module registration ───

/// SCPN Wavelet-Galerkin connection coefficients, Rust-accelerated.
#[pymodule]
fn wgcc_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(twoterm_connection_coefficients, m)?)?;
    m.add_function(wrap_pyfunction!(threeterm_connection_coefficients, m)?)?;
    m.add_function(wrap_pyfunction!(threeterm_dict, m)?)?;
    m.add_function(wrap_pyfunction!(checksum, m)?)?;
    Ok(())
}
