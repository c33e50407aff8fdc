//! Steenrod barcode: persistence of the image of Sq^k.

use super::matrix::SteenrodMatrix;
use crate::barcode::{check_values, Bar, Barcode};
use crate::error::Result;
use crate::filtration::FiltrationByDim;
use crate::reduction::{add_column, DimensionReduction, SparseColumn};
use std::cmp::Reverse;
use tracing::debug;

/// Secondary barcode of dimension `dim` (the target of Sq^k)
///
/// Walks filtration indices downward over the (d-1)-simplices and the
/// births of dimension-(d-k) classes. Each (d-1)-simplex exposes its
/// reduced column R_{d-1}, each birth exposes the Steenrod image of that
/// class. A Steenrod column dies when it reduces to zero against the
/// exposed ordinary columns and the Steenrod columns of older classes.
fn steenrod_barcode_dim(
    dim: usize,
    k: usize,
    by_dim: &FiltrationByDim,
    reductions: &[DimensionReduction],
    ordinary: &Barcode,
    matrix: &SteenrodMatrix,
    values: Option<&[f64]>,
) -> Vec<Bar> {
    let source_bars = ordinary.dim(dim - k);
    let mut steenrod: Vec<SparseColumn> = matrix.dim(dim - k).to_vec();
    let reduced = &reductions[dim - 1].reduced;
    let ordinary_indices = &by_dim.dim(dim - 1).indices;
    let n_rows = by_dim.dim(dim).len();

    let mut ordinary_pivots: Vec<Option<usize>> = vec![None; n_rows];
    let mut steenrod_pivots: Vec<Option<usize>> = vec![None; n_rows];
    let mut touched: Vec<usize> = Vec::new();

    // Exposed Steenrod columns still nonzero, oldest class first
    let mut alive: Vec<usize> = Vec::new();
    let mut bars = Vec::new();

    let mut next_ordinary = ordinary_indices.len();
    let mut next_birth = 0;

    loop {
        let ordinary_event = next_ordinary.checked_sub(1).map(|j| ordinary_indices[j]);
        let birth_event = source_bars.get(next_birth).map(|bar| bar.birth);
        let Some(t) = ordinary_event.max(birth_event) else {
            break;
        };

        // Rescan only when a column is born or an alive column sits on the
        // newly exposed row; otherwise every alive column is already reduced
        let mut rescan = false;
        if ordinary_event == Some(t) {
            next_ordinary -= 1;
            if let Some(row) = reduced[next_ordinary].pivot() {
                ordinary_pivots[row] = Some(next_ordinary);
                rescan |= steenrod_pivots[row].is_some();
            }
        }
        if birth_event == Some(t) {
            alive.push(next_birth);
            next_birth += 1;
            rescan = true;
        }
        if !rescan {
            continue;
        }

        // Steenrod pivots are rebuilt by the pass below, oldest class first
        for row in touched.drain(..) {
            steenrod_pivots[row] = None;
        }

        let mut survivors = Vec::with_capacity(alive.len());
        for &i in &alive {
            while let Some(row) = steenrod[i].pivot() {
                if let Some(column) = ordinary_pivots[row] {
                    steenrod[i].add_assign(&reduced[column]);
                } else if let Some(older) = steenrod_pivots[row] {
                    add_column(&mut steenrod, i, older);
                } else {
                    break;
                }
            }

            match steenrod[i].pivot() {
                Some(row) => {
                    steenrod_pivots[row] = Some(i);
                    touched.push(row);
                    survivors.push(i);
                }
                None => {
                    let birth = source_bars[i].birth;
                    let collapsed = values.map_or(false, |v| v[t] == v[birth]);
                    // Trivial already at its own birth: no bar
                    if t != birth && !collapsed {
                        bars.push(Bar::finite(t, birth));
                    }
                }
            }
        }
        alive = survivors;
    }

    bars.extend(alive.iter().map(|&i| Bar::essential(source_bars[i].birth)));
    bars.sort_by_key(|bar| Reverse(bar.birth));
    bars
}

/// Steenrod barcode of every dimension; dimensions below k are empty
pub fn steenrod_barcode(
    by_dim: &FiltrationByDim,
    reductions: &[DimensionReduction],
    ordinary: &Barcode,
    matrix: &SteenrodMatrix,
    values: Option<&[f64]>,
) -> Result<Barcode> {
    check_values(by_dim, values)?;
    let k = matrix.k;
    let bars = (0..reductions.len())
        .map(|dim| {
            if dim < k || dim == 0 {
                return Vec::new();
            }
            let bars =
                steenrod_barcode_dim(dim, k, by_dim, reductions, ordinary, matrix, values);
            debug!(dim, k, bars = bars.len(), "steenrod barcode");
            bars
        })
        .collect();
    Ok(Barcode::relative(bars))
}
