//! Filtration indexer: per-dimension (global index, simplex) tables.

use super::{Filtration, Simplex};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// The d-dimensional simplices of a filtration, in filtration order
#[derive(Debug, Clone, Default)]
pub struct DimensionTable {
    /// Global filtration index of each simplex
    pub indices: Vec<usize>,
    /// The simplices themselves, aligned with `indices`
    pub simplices: Vec<Simplex>,
}

impl DimensionTable {
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Map each simplex to its in-dimension index
    pub fn index_map(&self) -> HashMap<Simplex, usize> {
        self.simplices
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), i))
            .collect()
    }
}

/// Filtration grouped by dimension, immutable once built
#[derive(Debug, Clone, Default)]
pub struct FiltrationByDim {
    tables: Vec<DimensionTable>,
    n_simplices: usize,
}

impl FiltrationByDim {
    pub(super) fn build(filtration: &Filtration, maxdim: Option<usize>) -> Result<Self> {
        let top = match maxdim.or_else(|| filtration.max_dimension()) {
            Some(top) => top,
            None => return Ok(Self::default()),
        };

        let mut tables = vec![DimensionTable::default(); top + 1];
        let mut seen: HashMap<&Simplex, usize> = HashMap::with_capacity(filtration.len());
        let mut n_simplices = 0;

        for (idx, simplex) in filtration.simplices().iter().enumerate() {
            let dim = simplex.dimension();
            if dim > top {
                continue;
            }
            if let Some(first) = seen.insert(simplex, idx) {
                return Err(Error::DuplicateSimplex {
                    simplex: simplex.vertices().to_vec(),
                    first,
                    second: idx,
                });
            }
            tables[dim].indices.push(idx);
            tables[dim].simplices.push(simplex.clone());
            n_simplices += 1;
        }

        Ok(Self {
            tables,
            n_simplices,
        })
    }

    /// Table of dimension `dim`
    pub fn dim(&self, dim: usize) -> &DimensionTable {
        &self.tables[dim]
    }

    pub fn tables(&self) -> &[DimensionTable] {
        &self.tables
    }

    /// Highest dimension indexed, `None` for an empty filtration
    pub fn max_dimension(&self) -> Option<usize> {
        self.tables.len().checked_sub(1)
    }

    /// Number of dimension tables (maxdim + 1)
    pub fn n_dimensions(&self) -> usize {
        self.tables.len()
    }

    /// Number of simplices kept after the dimension cap
    pub fn n_simplices(&self) -> usize {
        self.n_simplices
    }
}
