//! Barcode and cohomology representative extraction.

use super::{Bar, Barcode};
use crate::error::{Error, Result};
use crate::filtration::FiltrationByDim;
use crate::reduction::{DimensionReduction, SparseColumn};
use std::cmp::Reverse;

/// Ordinary barcode with one cocycle representative per bar
#[derive(Debug, Clone)]
pub struct ExtractedBarcode {
    pub barcode: Barcode,
    /// `representatives[d][i]` represents `barcode.dim(d)[i]`, as in-dimension
    /// indices of d-simplices
    pub representatives: Vec<Vec<SparseColumn>>,
}

/// Reject a value slice that does not cover every filtration index of `by_dim`
pub(crate) fn check_values(by_dim: &FiltrationByDim, values: Option<&[f64]>) -> Result<()> {
    let Some(values) = values else {
        return Ok(());
    };
    let needed = by_dim
        .tables()
        .iter()
        .filter_map(|table| table.indices.last())
        .max()
        .map_or(0, |&last| last + 1);
    if values.len() < needed {
        return Err(Error::InvalidParameter(format!(
            "{} filtration values for filtration indices up to {}",
            values.len(),
            needed - 1
        )));
    }
    Ok(())
}

/// Read bars and representatives off the per-dimension reductions
///
/// A dimension-d class born at b dies at the (d-1)-simplex whose reduced
/// column has pivot b; that column is its representative. Unpaired
/// d-simplices with an empty reduced column are essential and are
/// represented by their triangular column. With `values`, bars whose
/// endpoints share a value are dropped.
pub fn extract(
    by_dim: &FiltrationByDim,
    reductions: &[DimensionReduction],
    values: Option<&[f64]>,
) -> Result<ExtractedBarcode> {
    check_values(by_dim, values)?;
    let mut bars = Vec::with_capacity(reductions.len());
    let mut representatives = Vec::with_capacity(reductions.len());

    for (dim, reduction) in reductions.iter().enumerate() {
        let indices = &by_dim.dim(dim).indices;
        let mut is_birth = vec![false; reduction.len()];
        let mut entries: Vec<(Bar, SparseColumn)> = Vec::new();

        if let Some(previous) = dim.checked_sub(1).map(|d| &reductions[d]) {
            let previous_indices = &by_dim.dim(dim - 1).indices;
            for (column, reduced) in previous.reduced.iter().enumerate() {
                if let Some(birth) = reduced.pivot() {
                    is_birth[birth] = true;
                    let bar = Bar::finite(previous_indices[column], indices[birth]);
                    entries.push((bar, reduced.clone()));
                }
            }
        }

        for (i, reduced) in reduction.reduced.iter().enumerate() {
            if !is_birth[i] && reduced.is_zero() {
                entries.push((Bar::essential(indices[i]), reduction.triangular[i].clone()));
            }
        }

        if let Some(values) = values {
            entries.retain(|(bar, _)| match bar.death {
                Some(death) => values[death] != values[bar.birth],
                None => true,
            });
        }

        entries.sort_by_key(|(bar, _)| Reverse(bar.birth));
        let (dim_bars, dim_reps): (Vec<Bar>, Vec<SparseColumn>) = entries.into_iter().unzip();
        bars.push(dim_bars);
        representatives.push(dim_reps);
    }

    Ok(ExtractedBarcode {
        barcode: Barcode::relative(bars),
        representatives,
    })
}
