//! Error types shared by every stage of the pipeline.
//!
//! All failures are fatal: the computation is deterministic, so there is
//! nothing to retry and no partial result is ever returned.

/// Errors raised while indexing, reducing or squaring a filtration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Duplicate simplex {simplex:?} at filtration indices {first} and {second}")]
    DuplicateSimplex {
        simplex: Vec<usize>,
        first: usize,
        second: usize,
    },

    #[error("Simplex at filtration index {simplex} has face {face:?} missing from the filtration")]
    MissingFace { simplex: usize, face: Vec<usize> },

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
