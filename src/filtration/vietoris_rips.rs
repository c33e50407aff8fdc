//! Vietoris-Rips Filtration Construction
//!
//! The Vietoris-Rips complex VR_ε(X) is a simplicial complex where:
//! - 0-simplices are the points in X
//! - A k-simplex [v₀, ..., vₖ] exists iff d(vᵢ, vⱼ) ≤ ε for all i,j
//!
//! Each simplex enters the filtration at its diameter, so sorting by
//! (diameter, dimension, vertices) yields a valid simplex-wise filtration.

use super::{Filtration, Simplex};
use ndarray::Array2;

/// Vietoris-Rips filtration builder
pub struct VietorisRips {
    /// Distance matrix (precomputed)
    distances: Array2<f64>,
}

impl VietorisRips {
    /// Create from a precomputed distance matrix
    pub fn from_distance_matrix(distances: &Array2<f64>) -> Self {
        Self {
            distances: distances.clone(),
        }
    }

    /// Create from point cloud (computes distance matrix)
    pub fn from_points(points: &Array2<f64>) -> Self {
        Self {
            distances: Self::compute_distance_matrix(points),
        }
    }

    /// Compute Euclidean distance matrix
    fn compute_distance_matrix(points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let dim = points.ncols();

        let mut dm = Array2::<f64>::zeros((n, n));

        for i in 0..n {
            for j in i + 1..n {
                let mut dist_sq = 0.0;
                for d in 0..dim {
                    let diff = points[[i, d]] - points[[j, d]];
                    dist_sq += diff * diff;
                }
                let dist = dist_sq.sqrt();
                dm[[i, j]] = dist;
                dm[[j, i]] = dist;
            }
        }

        dm
    }

    /// Number of points
    pub fn n_points(&self) -> usize {
        self.distances.nrows()
    }

    pub fn distances(&self) -> &Array2<f64> {
        &self.distances
    }

    /// All cliques of dimension ≤ `max_dim` with diameter ≤ `max_epsilon`,
    /// valued by diameter and sorted into filtration order
    pub fn filtration(&self, max_dim: usize, max_epsilon: f64) -> Filtration {
        let n = self.n_points();
        let mut simplices: Vec<(f64, Vec<usize>)> = Vec::new();

        // Depth-first clique expansion over increasing vertex ids
        let mut stack: Vec<(Vec<usize>, f64)> = (0..n).rev().map(|v| (vec![v], 0.0)).collect();
        while let Some((clique, diameter)) = stack.pop() {
            if clique.len() <= max_dim {
                let last = clique[clique.len() - 1];
                for v in (last + 1..n).rev() {
                    let grown = clique
                        .iter()
                        .map(|&u| self.distances[[u, v]])
                        .fold(diameter, f64::max);
                    if grown <= max_epsilon {
                        let mut next = clique.clone();
                        next.push(v);
                        stack.push((next, grown));
                    }
                }
            }
            simplices.push((diameter, clique));
        }

        // Sort by (birth, dimension, lexicographic vertices)
        simplices.sort_by(|a, b| {
            a.0.total_cmp(&b.0)
                .then(a.1.len().cmp(&b.1.len()))
                .then(a.1.cmp(&b.1))
        });

        let (values, simplices): (Vec<f64>, Vec<Simplex>) = simplices
            .into_iter()
            .map(|(value, vertices)| (value, Simplex(vertices)))
            .unzip();

        Filtration {
            simplices,
            values: Some(values),
        }
    }
}
