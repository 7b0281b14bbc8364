use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};
use pyo3::wrap_pyfunction;

use crate::{
    config::AprioriConfig,
    itemsets::FrequentItemsets,
    rules,
    types::{ItemId, SupportCount},
};

#[pymodule]
fn apriori_hashtree(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    m.add_class::<Rule>()?;
    Ok(())
}

/// Association rule as seen from Python.
#[pyclass(name = "Rule")]
#[derive(Clone)]
pub struct Rule {
    #[pyo3(get)]
    pub antecedent: Vec<ItemId>,
    #[pyo3(get)]
    pub antecedent_support: SupportCount,
    #[pyo3(get)]
    pub consequent: Vec<ItemId>,
    #[pyo3(get)]
    pub consequent_support: SupportCount,
    #[pyo3(get)]
    pub confidence: f64,
    #[pyo3(get)]
    pub lift: f64,
}

#[pymethods]
impl Rule {
    fn __repr__(&self) -> String {
        format!(
            "Rule({:?} => {:?}, confidence={}, lift={})",
            self.antecedent, self.consequent, self.confidence, self.lift
        )
    }
}

/// Apriori algorithm for frequent itemsets and association rules.
#[pyfunction]
#[pyo3(text_signature = "(transactions, n_items, min_support, min_confidence, /)")]
pub fn apriori(
    py: Python,
    transactions: Vec<Vec<ItemId>>,
    n_items: usize,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<(Py<PyDict>, Vec<Rule>)> {
    let config = AprioriConfig::new(min_support, min_confidence);
    let (frequent_itemsets, rules) = crate::apriori(&transactions, n_items, &config)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;

    Ok((
        convert_itemset_counts(py, &frequent_itemsets)?,
        convert_rules(rules),
    ))
}

pub fn convert_itemset_counts(
    py: Python,
    frequent_itemsets: &FrequentItemsets,
) -> PyResult<Py<PyDict>> {
    let levels = PyDict::new(py);
    for (size, itemset_counts) in frequent_itemsets.levels() {
        let level = PyDict::new(py);
        for (itemset, count) in itemset_counts {
            level.set_item(PyFrozenSet::new(py, itemset.as_slice())?, count)?;
        }
        levels.set_item(size, level)?;
    }
    Ok(levels.into())
}

pub fn convert_rules(rules: Vec<rules::Rule>) -> Vec<Rule> {
    rules
        .into_iter()
        .map(|rule| Rule {
            antecedent_support: rule.antecedent.count(),
            consequent_support: rule.consequent.count(),
            antecedent: rule.antecedent.into_items(),
            consequent: rule.consequent.into_items(),
            confidence: rule.confidence,
            lift: rule.lift,
        })
        .collect()
}
