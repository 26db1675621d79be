//! Frequent itemset mining with FP-trees.
//!
//! Transactions are inserted into a prefix tree, then for every frequent item
//! a conditional tree is cut out of it and mined recursively.

pub mod fp;

pub use fp::{
    FPNode, FPTree, FpError, FpResult, FrequentLevel, ItemEncoder, MinSupport, MiningConfig,
    MiningResult, Ranking, build_fp_tree, fp_growth, fp_growth_labels, mine,
};

#[cfg(feature = "python")]
mod python {
    use crate::fp::{ItemEncoder, MinSupport, MiningConfig, fp_growth, matrix_to_transactions};
    use numpy::ndarray::{Array1, Array2};
    use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    type Level<'py> = (Bound<'py, PyArray2<usize>>, Bound<'py, PyArray1<usize>>);

    /// Mine a binary transaction matrix. Returns one `(itemsets, supports)`
    /// pair per itemset size; itemsets are given as column indices.
    #[pyfunction]
    #[pyo3(name = "fp_growth")]
    fn fp_growth_py<'py>(
        py: Python<'py>,
        transactions: PyReadonlyArray2<'py, i32>,
        min_support: f64,
    ) -> PyResult<Vec<Level<'py>>> {
        let rows = matrix_to_transactions(transactions.as_array());

        let levels = py
            .allow_threads(|| {
                let encoder = ItemEncoder::fit(&rows);
                let encoded = encoder.encode_all(&rows);
                let config = MiningConfig::new(MinSupport::Fraction(min_support));
                fp_growth(&encoded, &config).map(|result| {
                    result
                        .levels
                        .iter()
                        .filter(|level| !level.is_empty())
                        .map(|level| {
                            let mut itemsets = Vec::with_capacity(level.len() * level.itemset_size);
                            let mut supports = Vec::with_capacity(level.len());
                            for (itemset, support) in level.iter_with_support() {
                                let mut columns: Vec<usize> = itemset
                                    .iter()
                                    .filter_map(|&id| encoder.decode(id).copied())
                                    .collect();
                                columns.sort_unstable();
                                itemsets.extend(columns);
                                supports.push(support);
                            }
                            (level.itemset_size, itemsets, supports)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let mut result = Vec::with_capacity(levels.len());
        for (itemset_size, itemsets, supports) in levels {
            let num_itemsets = supports.len();
            let array = Array2::from_shape_vec((num_itemsets, itemset_size), itemsets)
                .map_err(|_| PyValueError::new_err("Failed to create array"))?;
            result.push((
                array.into_pyarray(py),
                Array1::from_vec(supports).into_pyarray(py),
            ));
        }

        Ok(result)
    }

    #[pymodule]
    fn fpmine(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
        Ok(())
    }
}
