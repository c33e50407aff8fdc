//! Filtration Module: Simplices, Filtrations and Their Construction
//!
//! A filtration is an ordered sequence of simplices in which every face of
//! a simplex appears at an earlier or equal position. The position of a
//! simplex is its *filtration index* and totally orders the complex by time
//! of appearance.
//!
//! - `indexer.rs`: groups a filtration by dimension into aligned
//!   (global index, simplex) tables, the input of the reduction engine.
//! - `vietoris_rips.rs`: builds valued Vietoris-Rips filtrations from point
//!   clouds or distance matrices.

mod indexer;
mod vietoris_rips;

pub use indexer::{DimensionTable, FiltrationByDim};
pub use vietoris_rips::VietorisRips;

use crate::error::{Error, Result};
use std::borrow::Borrow;

/// A simplex as a sorted, duplicate-free list of vertex ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Simplex(Vec<usize>);

impl Simplex {
    /// Canonicalize a vertex set (sort, drop repeated vertices)
    pub fn new(vertices: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut vertices: Vec<usize> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(Error::InvalidParameter(
                "a simplex needs at least one vertex".into(),
            ));
        }
        vertices.sort_unstable();
        vertices.dedup();
        Ok(Self(vertices))
    }

    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    pub fn dimension(&self) -> usize {
        self.0.len() - 1
    }

    /// Write the face obtained by deleting vertex `omit` into `buf`
    pub fn face_into(&self, omit: usize, buf: &mut Vec<usize>) {
        buf.clear();
        buf.extend_from_slice(&self.0[..omit]);
        buf.extend_from_slice(&self.0[omit + 1..]);
    }

    /// Codimension-one faces, in vertex-deletion order. Vertices have none.
    pub fn faces(&self) -> impl Iterator<Item = Simplex> + '_ {
        let n_faces = if self.0.len() > 1 { self.0.len() } else { 0 };
        (0..n_faces).map(move |omit| {
            let mut face = Vec::with_capacity(self.0.len() - 1);
            self.face_into(omit, &mut face);
            Simplex(face)
        })
    }
}

impl Borrow<[usize]> for Simplex {
    fn borrow(&self) -> &[usize] {
        &self.0
    }
}

impl AsRef<[usize]> for Simplex {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// An ordered sequence of simplices with optional filtration values
#[derive(Debug, Clone, Default)]
pub struct Filtration {
    simplices: Vec<Simplex>,
    values: Option<Vec<f64>>,
}

impl Filtration {
    /// Build a filtration from any sequence of vertex collections
    pub fn new<I, S>(simplices: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = usize>,
    {
        let simplices = simplices
            .into_iter()
            .map(Simplex::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_simplices(simplices))
    }

    pub fn from_simplices(simplices: Vec<Simplex>) -> Self {
        Self {
            simplices,
            values: None,
        }
    }

    /// Attach one filtration value per simplex
    ///
    /// Values need not be monotone, but ties matter: bars whose endpoints
    /// share a value are suppressed from every barcode.
    pub fn with_values(mut self, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.simplices.len() {
            return Err(Error::InvalidParameter(format!(
                "{} filtration values for {} simplices",
                values.len(),
                self.simplices.len()
            )));
        }
        if let Some(idx) = values.iter().position(|v| v.is_nan()) {
            return Err(Error::InvalidParameter(format!(
                "filtration value at index {} is NaN",
                idx
            )));
        }
        self.values = Some(values);
        Ok(self)
    }

    pub fn simplices(&self) -> &[Simplex] {
        &self.simplices
    }

    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_deref()
    }

    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// Highest simplex dimension present, `None` when empty
    pub fn max_dimension(&self) -> Option<usize> {
        self.simplices.iter().map(Simplex::dimension).max()
    }

    /// Group simplices by dimension, dropping those above `maxdim`
    pub fn by_dimension(&self, maxdim: Option<usize>) -> Result<FiltrationByDim> {
        FiltrationByDim::build(self, maxdim)
    }
}
