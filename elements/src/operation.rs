//! Operations that derive new elements from raw data.

use crate::element::{Element, column_f64};
use crate::error::{ElementError, Result};
use polars::prelude::*;
use tracing::debug;

/// Bin the values of one column into an equal-width histogram
///
/// The resulting element has the bin centers as key dimension (named after
/// the source column) and the counts as value dimension `<column>_count`.
/// Non-finite values and nulls are ignored. A column whose finite values are
/// all equal is binned over a unit-wide range centered on that value.
///
/// # Errors
/// Will return `Err` if `bins` is zero or the column is missing or not numeric
pub fn histogram(data: &DataFrame, dimension: &str, bins: usize) -> Result<Element> {
    if bins == 0 {
        return Err(ElementError::invalid_data("histogram needs at least one bin"));
    }

    let values: Vec<f64> = column_f64(data, dimension)?
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();

    let (min, max) = bin_range(&values);
    let width = (max - min) / bins as f64;

    let mut counts = vec![0u32; bins];
    for v in &values {
        let idx = (((v - min) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let centers: Vec<f64> = (0..bins)
        .map(|i| min + width * (i as f64 + 0.5))
        .collect();

    debug!(
        dimension,
        bins,
        n_values = values.len(),
        "computed histogram over [{min}, {max}]"
    );

    let count_dim = format!("{dimension}_count");
    let binned = DataFrame::new(vec![
        Column::new(dimension.into(), centers),
        Column::new(count_dim.as_str().into(), counts),
    ])?;
    Element::histogram(binned, [dimension], [count_dim])
}

fn bin_range(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return (min - 0.5, max + 0.5); // Handle single-point case
    }
    (min, max)
}
