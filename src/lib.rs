//! # TDA-Steenrod
//!
//! Persistent relative cohomology and Steenrod barcodes over GF(2)
//!
//! ## Theoretical Framework
//!
//! A filtered simplicial complex carries, besides its ordinary barcode,
//! the action of the Steenrod squares Sq^k : H^d → H^{d+k}. Because the
//! squares are natural, their image across the filtration is again a
//! persistence module. Its barcode (the *Steenrod barcode*) separates
//! spaces with identical ordinary barcodes, e.g. a real projective plane
//! from a wedge of a circle and a sphere.
//!
//! ### Methodology
//!
//! 1. **Indexing**: split a simplex-wise filtration by dimension and
//!    record each simplex's position in the filtration
//!
//! 2. **Reduction**: R = D·V on each antitransposed coboundary matrix,
//!    with clearing between consecutive dimensions
//!
//! 3. **Extraction**: bars and cocycle representatives of the relative
//!    cohomology barcode
//!
//! 4. **Steenrod squares**: Sq^k of every representative, then an
//!    augmented reduction yielding the Steenrod barcode
//!
//! ## Example
//!
//! ```
//! use tda_steenrod::{barcodes, BarcodeConfig, Filtration};
//!
//! let filtration = Filtration::new(vec![
//!     vec![0], vec![1], vec![2],
//!     vec![0, 1], vec![1, 2], vec![0, 2],
//! ]).unwrap();
//! let result = barcodes(&filtration, &BarcodeConfig::new(1)).unwrap();
//! assert!(result.steenrod.is_empty());
//! ```
//!
//! ## References
//!
//! - Edelsbrunner & Harer, "Computational Topology" (2010)
//! - de Silva, Morozov, Vejdemo-Johansson, "Dualities in persistent
//!   (co)homology" (2011)
//! - Medina-Mardones, "New formulas for cup-i products and fast
//!   computation of Steenrod squares" (2023)
//! - Lupo, Medina-Mardones, Tauzin, "Persistence Steenrod modules" (2022)

pub mod barcode;
pub mod config;
pub mod error;
pub mod filtration;
pub mod pipeline;
pub mod reduction;
pub mod steenrod;

pub use barcode::{extract, Bar, Barcode, Convention, ExtractedBarcode, Interval};
pub use config::BarcodeConfig;
pub use error::{Error, Result};
pub use filtration::{DimensionTable, Filtration, FiltrationByDim, Simplex, VietorisRips};
pub use pipeline::{barcodes, compute, Barcodes, SteenrodPersistence};
pub use reduction::{coboundary_columns, reduce, DimensionReduction, SparseColumn};
pub use steenrod::{
    square_cocycle, square_contribution, steenrod_barcode, steenrod_matrix, SteenrodMatrix,
};
