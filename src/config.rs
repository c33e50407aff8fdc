//! Run configuration for barcode computation.

use crate::error::{Error, Result};

/// Parameters of a Steenrod barcode computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarcodeConfig {
    /// Steenrod square exponent (Sq^k), must be positive
    pub k: usize,
    /// Re-express both barcodes in the absolute homology convention
    pub absolute: bool,
    /// Cap on simplex dimension; `None` uses the top dimension present
    pub maxdim: Option<usize>,
    /// Worker threads for the Steenrod matrix builder
    pub n_jobs: usize,
}

impl Default for BarcodeConfig {
    fn default() -> Self {
        Self {
            k: 1,
            absolute: false,
            maxdim: None,
            n_jobs: 1,
        }
    }
}

impl BarcodeConfig {
    /// Configuration for Sq^k with every other setting at its default
    pub fn new(k: usize) -> Self {
        Self { k, ..Self::default() }
    }

    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn with_maxdim(mut self, maxdim: usize) -> Self {
        self.maxdim = Some(maxdim);
        self
    }

    pub fn with_n_jobs(mut self, n_jobs: usize) -> Self {
        self.n_jobs = n_jobs;
        self
    }

    /// Use one worker per physical core
    pub fn with_all_cores(mut self) -> Self {
        self.n_jobs = num_cpus::get_physical().max(1);
        self
    }

    /// Up-front parameter checks, run before any reduction work
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter(
                "Steenrod exponent k must be positive".into(),
            ));
        }
        if let Some(maxdim) = self.maxdim {
            if maxdim < self.k {
                return Err(Error::InvalidParameter(format!(
                    "maxdim {} is smaller than k = {}, no Steenrod square can land",
                    maxdim, self.k
                )));
            }
        }
        if self.n_jobs == 0 {
            return Err(Error::InvalidParameter("n_jobs must be at least 1".into()));
        }
        Ok(())
    }
}
