//! Steenrod Module: Sq^k on Persistent Cohomology
//!
//! Steenrod squares Sq^k : H^d → H^{d+k} are natural, so applying them to
//! a persistent cohomology barcode yields a persistence module of its own:
//! the image of Sq^k. Its barcode, the *Steenrod barcode*, records when the
//! square of each class appears and when it becomes a linear combination of
//! coboundaries and squares of older classes.
//!
//! ## Pipeline
//!
//! 1. `square.rs`: the cochain-level formula on one pair of simplices
//! 2. `matrix.rs`: Sq^k of every representative, in parallel per dimension
//! 3. `barcode.rs`: augmented reduction of R_{d-1} with the images landing
//!    in dimension d
//!
//! ## Reference
//!
//! Lupo, Medina-Mardones, Tauzin (2022). "Persistence Steenrod modules".
//! Journal of Applied and Computational Topology.

mod barcode;
mod matrix;
mod square;

pub use barcode::steenrod_barcode;
pub use matrix::{square_cocycle, steenrod_matrix, SteenrodMatrix};
pub use square::square_contribution;
