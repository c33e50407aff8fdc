//! Per-dimension coboundary reduction with clearing.

use super::column::{add_column, SparseColumn};
use crate::error::{Error, Result};
use crate::filtration::{FiltrationByDim, Simplex};
use std::collections::HashMap;
use tracing::debug;

/// Reduction output for one dimension d
///
/// Columns are indexed by d-simplices (in-dimension index), rows by
/// (d+1)-simplices (in-dimension index of the next table).
#[derive(Debug, Clone)]
pub struct DimensionReduction {
    pub dim: usize,
    /// Simplex to in-dimension index
    pub index: HashMap<Simplex, usize>,
    /// Reduced coboundary matrix R
    pub reduced: Vec<SparseColumn>,
    /// Triangular matrix V with R = D·V
    pub triangular: Vec<SparseColumn>,
    /// Next-dimension row to the column whose pivot sits in it
    pub pivots: Vec<Option<usize>>,
    /// Columns zeroed up front because the previous dimension paired them
    pub cleared: Vec<usize>,
}

impl DimensionReduction {
    pub fn len(&self) -> usize {
        self.reduced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reduced.is_empty()
    }

    /// Column owning pivot `row`, if any
    pub fn pivot_owner(&self, row: usize) -> Option<usize> {
        self.pivots.get(row).copied().flatten()
    }
}

/// Unreduced coboundary block of dimension `dim`
///
/// Column i lists the (d+1)-simplices having d-simplex i as a face.
pub fn coboundary_columns(
    by_dim: &FiltrationByDim,
    dim: usize,
    index: &HashMap<Simplex, usize>,
) -> Result<Vec<SparseColumn>> {
    let mut columns = vec![SparseColumn::new(); by_dim.dim(dim).len()];
    let Some(next) = by_dim.tables().get(dim + 1) else {
        return Ok(columns);
    };

    let mut face = Vec::with_capacity(dim + 1);
    for (j, simplex) in next.simplices.iter().enumerate() {
        for omit in 0..simplex.vertices().len() {
            simplex.face_into(omit, &mut face);
            let &i = index.get(face.as_slice()).ok_or_else(|| Error::MissingFace {
                simplex: next.indices[j],
                face: face.clone(),
            })?;
            // Cofaces are visited in increasing j, so each column stays ascending
            columns[i].push(j);
        }
    }
    Ok(columns)
}

/// Reduce dimension `dim`, zeroing the columns in `to_clear` first
///
/// Returns the reduction and the rows paired here, which are the columns
/// to clear in dimension `dim + 1`.
fn reduce_dimension(
    by_dim: &FiltrationByDim,
    dim: usize,
    to_clear: Vec<usize>,
) -> Result<(DimensionReduction, Vec<usize>)> {
    let table = by_dim.dim(dim);
    let n_rows = by_dim.tables().get(dim + 1).map_or(0, |t| t.len());
    let index = table.index_map();

    let mut reduced = coboundary_columns(by_dim, dim, &index)?;
    let mut triangular: Vec<SparseColumn> = (0..table.len()).map(SparseColumn::unit).collect();

    for &i in &to_clear {
        reduced[i].clear();
    }

    let mut pivots: Vec<Option<usize>> = vec![None; n_rows];
    let mut next_clear = Vec::new();

    // Right to left: the pivot owner of a row is always a later column
    for j in (0..table.len()).rev() {
        while let Some(row) = reduced[j].pivot() {
            match pivots[row] {
                Some(owner) => {
                    add_column(&mut reduced, j, owner);
                    add_column(&mut triangular, j, owner);
                }
                None => {
                    pivots[row] = Some(j);
                    next_clear.push(row);
                    break;
                }
            }
        }
    }

    debug!(
        dim,
        columns = table.len(),
        cleared = to_clear.len(),
        pairs = next_clear.len(),
        "reduced dimension"
    );

    let reduction = DimensionReduction {
        dim,
        index,
        reduced,
        triangular,
        pivots,
        cleared: to_clear,
    };
    Ok((reduction, next_clear))
}

/// Restore R = D·V on the columns clearing zeroed without reducing
///
/// A cleared column b was the pivot row of some column c one dimension
/// down. R_{d-1}[c] is a cocycle whose first entry is b, so it is a valid
/// triangular column for b.
fn fix_cleared_triangular(reduction: &mut DimensionReduction, previous: &DimensionReduction) {
    for &b in &reduction.cleared {
        if let Some(owner) = previous.pivot_owner(b) {
            reduction.triangular[b] = previous.reduced[owner].clone();
        }
    }
}

/// Reduce every dimension of a filtration, threading the clear set upward
pub fn reduce(by_dim: &FiltrationByDim) -> Result<Vec<DimensionReduction>> {
    let n_dims = by_dim.n_dimensions();
    let (reductions, _) = (0..n_dims).try_fold(
        (Vec::with_capacity(n_dims), Vec::new()),
        |(mut reductions, to_clear): (Vec<DimensionReduction>, Vec<usize>), dim| {
            let (mut reduction, next_clear) = reduce_dimension(by_dim, dim, to_clear)?;
            if let Some(previous) = reductions.last() {
                fix_cleared_triangular(&mut reduction, previous);
            }
            reductions.push(reduction);
            Ok::<_, Error>((reductions, next_clear))
        },
    )?;
    Ok(reductions)
}
