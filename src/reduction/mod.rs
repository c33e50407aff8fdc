//! Reduction Module: Persistent Relative Cohomology over GF(2)
//!
//! For each dimension d the coboundary block D_d (columns: d-simplices,
//! rows: (d+1)-simplices) is column-reduced into R_d = D_d · V_d with V_d
//! invertible and unit-diagonal.
//!
//! ## Conventions
//!
//! Indices are positions within a dimension table, in filtration order.
//! The pivot of a column is its *first* nonzero row, i.e. the earliest
//! coface, and columns are reduced from last to first. This is the
//! antitransposed lowest-one rule of the standard algorithm written without
//! reversing the index order.
//!
//! ## Clearing
//!
//! A row paired in dimension d is a d+1 column whose reduced form is known
//! to be zero. Those columns are emptied before reducing dimension d+1 and
//! their V columns are patched afterwards from R_d, keeping R = D·V.

mod column;
mod engine;

pub use column::SparseColumn;
pub(crate) use column::add_column;
pub use engine::{coboundary_columns, reduce, DimensionReduction};
