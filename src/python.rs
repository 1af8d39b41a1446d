use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::eclat::{Eclat, EclatConfig, FrequentItemsetTable, IterationBudget, ObservationTable};
use crate::error::EclatError;
use crate::rules::derive_all_rules;

fn to_py_err(err: EclatError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn mine_matrix(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
    max_iterations: Option<usize>,
) -> PyResult<FrequentItemsetTable<usize>> {
    let observations = ObservationTable::from_matrix(transactions.as_array());
    let config = EclatConfig::new(min_support).with_budget(IterationBudget::from(max_iterations));
    Eclat::new(config).mine(&observations, "item").map_err(to_py_err)
}

/// Frequent itemsets of a one-hot matrix, one `(n, k)` array per itemset size.
#[pyfunction]
#[pyo3(name = "eclat", signature = (transactions, min_support, max_iterations = None))]
fn eclat_levels<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    max_iterations: Option<usize>,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let table = mine_matrix(transactions, min_support, max_iterations)?;

    let mut result = Vec::new();
    for itemset_size in 1..=table.max_itemset_size() {
        let mut data = Vec::new();
        let mut num_itemsets = 0;
        for record in table.of_size(itemset_size) {
            data.extend_from_slice(record.itemset);
            num_itemsets += 1;
        }
        if num_itemsets == 0 {
            continue;
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;
        result.push(array.into_pyarray(py));
    }

    Ok(result)
}

/// Frequent itemsets with their frequencies, in discovery order.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, max_iterations = None))]
fn eclat_with_counts(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
    max_iterations: Option<usize>,
) -> PyResult<Vec<(Vec<usize>, usize)>> {
    let table = mine_matrix(transactions, min_support, max_iterations)?;
    Ok(table
        .iter()
        .map(|record| (record.itemset.to_vec(), record.frequency))
        .collect())
}

/// `(antecedent, consequent, support, confidence, lift)` for every rule.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence = 0.0, max_iterations = None))]
fn association_rules(
    transactions: PyReadonlyArray2<'_, i32>,
    min_support: f64,
    min_confidence: f64,
    max_iterations: Option<usize>,
) -> PyResult<Vec<(Vec<usize>, Vec<usize>, f64, f64, f64)>> {
    let table = mine_matrix(transactions, min_support, max_iterations)?;
    let rules = derive_all_rules(&table).map_err(to_py_err)?;

    Ok(rules
        .with_min_confidence(min_confidence)
        .into_rules()
        .into_iter()
        .map(|rule| (rule.antecedent, rule.consequent, rule.support, rule.confidence, rule.lift))
        .collect())
}

#[pymodule]
#[pyo3(name = "eclat")]
fn eclat_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(eclat_levels, m)?)?;
    m.add_function(wrap_pyfunction!(eclat_with_counts, m)?)?;
    m.add_function(wrap_pyfunction!(association_rules, m)?)?;
    Ok(())
}
