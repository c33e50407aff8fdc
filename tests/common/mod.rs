#![allow(dead_code)]

use ndarray::Array2;
use tda_steenrod::{Filtration, FiltrationByDim, SparseColumn, VietorisRips};

/// Sort vertex lists by (dimension, lexicographic) and drop repeats
fn sorted_closure(mut simplices: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    for simplex in simplices.iter_mut() {
        simplex.sort_unstable();
    }
    simplices.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    simplices.dedup();
    simplices
}

/// Every nonempty face of every given simplex
fn closure(tops: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut faces = Vec::new();
    for top in tops {
        let n = top.len();
        for mask in 1u32..(1 << n) {
            faces.push(
                (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| top[i])
                    .collect(),
            );
        }
    }
    sorted_closure(faces)
}

pub fn hollow_triangle() -> Filtration {
    Filtration::new(vec![
        vec![0],
        vec![1],
        vec![2],
        vec![0, 1],
        vec![1, 2],
        vec![0, 2],
    ])
    .unwrap()
}

pub fn filled_triangle() -> Filtration {
    Filtration::new(vec![
        vec![0],
        vec![1],
        vec![2],
        vec![0, 1],
        vec![1, 2],
        vec![0, 2],
        vec![0, 1, 2],
    ])
    .unwrap()
}

/// Boundary of the 3-simplex: a 2-sphere
pub fn tetrahedron_boundary() -> Filtration {
    let tops = vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]];
    Filtration::new(closure(&tops)).unwrap()
}

pub const RP2_TRIANGLES: [[usize; 3]; 10] = [
    [0, 1, 3],
    [0, 1, 5],
    [0, 2, 4],
    [0, 2, 5],
    [0, 3, 4],
    [1, 2, 3],
    [1, 2, 4],
    [1, 4, 5],
    [2, 3, 5],
    [3, 4, 5],
];

fn rp2_simplices() -> Vec<Vec<usize>> {
    let tops: Vec<Vec<usize>> = RP2_TRIANGLES.iter().map(|t| t.to_vec()).collect();
    closure(&tops)
}

/// Minimal 6-vertex triangulation of RP², 31 simplices
pub fn rp2() -> Filtration {
    Filtration::new(rp2_simplices()).unwrap()
}

/// RP² followed by the cone over it with apex 6, 63 simplices
///
/// The cone kills every class of RP², so the H¹ generator and its square
/// both die once the cone is complete.
pub fn rp2_cone() -> Filtration {
    let base = rp2_simplices();
    let mut cone: Vec<Vec<usize>> = vec![vec![6]];
    cone.extend(base.iter().map(|s| {
        let mut coned = s.clone();
        coned.push(6);
        coned
    }));
    let mut simplices = base;
    simplices.extend(sorted_closure(cone));
    Filtration::new(simplices).unwrap()
}

/// Vietoris-Rips filtration of planar points up to triangles
pub fn vietoris_rips(points: &[(f64, f64)], max_dim: usize, max_epsilon: f64) -> Filtration {
    let mut array = Array2::<f64>::zeros((points.len(), 2));
    for (i, &(x, y)) in points.iter().enumerate() {
        array[[i, 0]] = x;
        array[[i, 1]] = y;
    }
    VietorisRips::from_points(&array).filtration(max_dim, max_epsilon)
}

/// Unreduced coboundary block of dimension `dim` as a dense GF(2) matrix
///
/// Rows index (dim+1)-simplices, columns index dim-simplices, both in
/// filtration order.
pub fn dense_coboundary(by_dim: &FiltrationByDim, dim: usize) -> Array2<u8> {
    let columns = by_dim.dim(dim);
    let rows = if dim + 1 < by_dim.n_dimensions() {
        by_dim.dim(dim + 1).simplices.as_slice()
    } else {
        &[]
    };
    let mut matrix = Array2::<u8>::zeros((rows.len(), columns.len()));
    for (r, coface) in rows.iter().enumerate() {
        for face in coface.faces() {
            if let Some(c) = columns.simplices.iter().position(|s| *s == face) {
                matrix[[r, c]] = 1;
            }
        }
    }
    matrix
}

/// Dense column reduction, right to left, pivot = first nonzero row
///
/// Returns the pivot row of every reduced column.
pub fn dense_pivots(matrix: &Array2<u8>) -> Vec<Option<usize>> {
    let (n_rows, n_cols) = matrix.dim();
    let mut reduced = matrix.clone();
    let mut owner: Vec<Option<usize>> = vec![None; n_rows];
    let mut pivots = vec![None; n_cols];

    for j in (0..n_cols).rev() {
        loop {
            let pivot = (0..n_rows).find(|&r| reduced[[r, j]] == 1);
            match pivot {
                Some(row) => match owner[row] {
                    Some(other) => {
                        for r in 0..n_rows {
                            reduced[[r, j]] ^= reduced[[r, other]];
                        }
                    }
                    None => {
                        owner[row] = Some(j);
                        pivots[j] = Some(row);
                        break;
                    }
                },
                None => break,
            }
        }
    }
    pivots
}

/// Dense product D·V over GF(2), one sparse column per column of V
pub fn dense_times_sparse(matrix: &Array2<u8>, columns: &[SparseColumn]) -> Vec<Vec<usize>> {
    let n_rows = matrix.nrows();
    columns
        .iter()
        .map(|column| {
            (0..n_rows)
                .filter(|&r| column.iter().fold(0u8, |acc, c| acc ^ matrix[[r, c]]) == 1)
                .collect()
        })
        .collect()
}

/// Rank over GF(2) of the square matrix whose columns are `columns`
pub fn gf2_rank(columns: &[SparseColumn], n_rows: usize) -> usize {
    let mut dense = Array2::<u8>::zeros((n_rows, columns.len()));
    for (c, column) in columns.iter().enumerate() {
        for r in column.iter() {
            dense[[r, c]] = 1;
        }
    }
    let pivots = dense_pivots(&dense);
    pivots.iter().filter(|p| p.is_some()).count()
}
