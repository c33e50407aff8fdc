//! Barcode Module: Persistence Pairs and Their Representatives
//!
//! A bar pairs the filtration index at which a cohomology class is born
//! with the index at which it dies. Reductions run in relative cohomology,
//! where time flows from the end of the filtration to its start: a
//! dimension-d class is born at a d-simplex and dies at an earlier
//! (d-1)-simplex. Classes that never die are *essential*.
//!
//! - `extract.rs`: reads bars and cocycle representatives off a reduction
//! - `convert.rs`: relabelling into the absolute convention or into
//!   filtration values

mod convert;
mod extract;

pub(crate) use extract::check_values;
pub use extract::{extract, ExtractedBarcode};

/// A persistence pair in global filtration indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bar {
    pub birth: usize,
    /// `None` for an essential class
    pub death: Option<usize>,
}

impl Bar {
    pub fn finite(death: usize, birth: usize) -> Self {
        Self {
            birth,
            death: Some(death),
        }
    }

    pub fn essential(birth: usize) -> Self {
        Self { birth, death: None }
    }

    pub fn is_essential(&self) -> bool {
        self.death.is_none()
    }
}

/// Which (co)homology theory a barcode is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Persistent relative cohomology, the native output of the reduction
    Relative,
    /// Persistent absolute homology
    Absolute,
}

/// Bars grouped by dimension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    bars: Vec<Vec<Bar>>,
    convention: Convention,
}

impl Barcode {
    pub fn new(bars: Vec<Vec<Bar>>, convention: Convention) -> Self {
        Self { bars, convention }
    }

    pub fn relative(bars: Vec<Vec<Bar>>) -> Self {
        Self::new(bars, Convention::Relative)
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Bars of dimension `d` (empty past the top dimension)
    pub fn dim(&self, d: usize) -> &[Bar] {
        self.bars.get(d).map_or(&[], Vec::as_slice)
    }

    /// Number of dimensions, i.e. maxdim + 1
    pub fn n_dimensions(&self) -> usize {
        self.bars.len()
    }

    /// Total number of bars over all dimensions
    pub fn len(&self) -> usize {
        self.bars.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.iter().all(Vec::is_empty)
    }

    /// Every bar with its dimension
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Bar)> {
        self.bars
            .iter()
            .enumerate()
            .flat_map(|(d, bars)| bars.iter().map(move |bar| (d, bar)))
    }

    /// Essential bars of dimension `d`
    pub fn essential(&self, d: usize) -> impl Iterator<Item = &Bar> {
        self.dim(d).iter().filter(|bar| bar.is_essential())
    }

    pub fn into_inner(self) -> Vec<Vec<Bar>> {
        self.bars
    }
}

/// A bar expressed in filtration values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub birth: f64,
    /// `f64::INFINITY` for essential bars
    pub death: f64,
}

impl Interval {
    pub fn persistence(&self) -> f64 {
        if self.death.is_infinite() {
            f64::INFINITY
        } else {
            (self.death - self.birth).abs()
        }
    }

    pub fn is_essential(&self) -> bool {
        self.death.is_infinite()
    }
}
