//! Steenrod matrix: Sq^k applied to every cohomology representative.

use super::square::square_contribution;
use crate::barcode::ExtractedBarcode;
use crate::error::Result;
use crate::filtration::{DimensionTable, FiltrationByDim, Simplex};
use crate::reduction::{DimensionReduction, SparseColumn};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Images of the representatives under Sq^k
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteenrodMatrix {
    pub k: usize,
    /// `columns[d][i]` is Sq^k of `representatives[d][i]`, as in-dimension
    /// indices of (d+k)-simplices. Empty when d + k exceeds the top dimension.
    pub columns: Vec<Vec<SparseColumn>>,
}

impl SteenrodMatrix {
    /// Images of the dimension-`d` representatives
    pub fn dim(&self, d: usize) -> &[SparseColumn] {
        self.columns.get(d).map_or(&[], Vec::as_slice)
    }
}

/// Sq^k of one cocycle supported on d-simplices of `source`
///
/// Pairs of support simplices whose union is a (d+k)-simplex of the
/// filtration contribute that simplex when the label rule holds;
/// contributions add in GF(2).
pub fn square_cocycle(
    k: usize,
    cocycle: &SparseColumn,
    source: &DimensionTable,
    target: &HashMap<Simplex, usize>,
) -> SparseColumn {
    let support: Vec<&[usize]> = cocycle
        .iter()
        .map(|i| source.simplices[i].vertices())
        .collect();
    let Some(first) = support.first() else {
        return SparseColumn::new();
    };
    let target_len = first.len() + k;

    let mut union = Vec::with_capacity(target_len + first.len());
    let mut toggles = Vec::new();
    for (pos, a) in support.iter().enumerate() {
        for b in &support[pos + 1..] {
            if square_contribution(a, b, &mut union) && union.len() == target_len {
                if let Some(&idx) = target.get(union.as_slice()) {
                    toggles.push(idx);
                }
            }
        }
    }
    SparseColumn::from_toggles(toggles)
}

/// Apply Sq^k to every representative, one dimension at a time
///
/// Representatives of a dimension are squared in parallel on a pool of
/// `n_jobs` threads. The collect keeps representative order, so the
/// result does not depend on `n_jobs`.
pub fn steenrod_matrix(
    k: usize,
    by_dim: &FiltrationByDim,
    reductions: &[DimensionReduction],
    extracted: &ExtractedBarcode,
    n_jobs: usize,
) -> Result<SteenrodMatrix> {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(n_jobs).build()?;
    let n_dims = reductions.len();

    let columns = extracted
        .representatives
        .iter()
        .enumerate()
        .map(|(dim, representatives)| {
            if dim + k >= n_dims {
                return Vec::new();
            }
            if k > dim {
                // Sq^k vanishes below degree k
                return vec![SparseColumn::new(); representatives.len()];
            }

            let source = by_dim.dim(dim);
            let target = &reductions[dim + k].index;
            let images: Vec<SparseColumn> = pool.install(|| {
                representatives
                    .par_iter()
                    .map(|cocycle| square_cocycle(k, cocycle, source, target))
                    .collect()
            });

            debug!(
                dim,
                target_dim = dim + k,
                representatives = representatives.len(),
                nonzero = images.iter().filter(|c| !c.is_zero()).count(),
                "steenrod images"
            );
            images
        })
        .collect();

    Ok(SteenrodMatrix { k, columns })
}
