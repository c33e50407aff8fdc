//! End-to-end barcode computation.

use crate::barcode::{extract, Barcode, ExtractedBarcode, Interval};
use crate::config::BarcodeConfig;
use crate::error::{Error, Result};
use crate::filtration::{Filtration, FiltrationByDim};
use crate::reduction::{reduce, DimensionReduction};
use crate::steenrod::{steenrod_barcode, steenrod_matrix, SteenrodMatrix};
use tracing::info;

/// Every intermediate of a Steenrod barcode computation
#[derive(Debug, Clone)]
pub struct SteenrodPersistence {
    pub by_dim: FiltrationByDim,
    pub reductions: Vec<DimensionReduction>,
    /// Ordinary relative barcode with representatives
    pub ordinary: ExtractedBarcode,
    pub matrix: SteenrodMatrix,
    /// Steenrod barcode in the relative convention
    pub steenrod: Barcode,
}

/// Ordinary and Steenrod barcodes of a filtration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcodes {
    pub barcode: Barcode,
    pub steenrod: Barcode,
}

impl Barcodes {
    /// Both barcodes in the filtration values attached to `filtration`
    pub fn filtration_values(
        &self,
        filtration: &Filtration,
    ) -> Result<(Vec<Vec<Interval>>, Vec<Vec<Interval>>)> {
        let values = filtration.values().ok_or_else(|| {
            Error::InvalidParameter("filtration carries no filtration values".into())
        })?;
        Ok((
            self.barcode.to_intervals(values)?,
            self.steenrod.to_intervals(values)?,
        ))
    }
}

/// Run every stage and keep the intermediates
///
/// indexer → reduction → extraction → Steenrod matrix → Steenrod barcode
pub fn compute(filtration: &Filtration, config: &BarcodeConfig) -> Result<SteenrodPersistence> {
    config.validate()?;
    info!(
        simplices = filtration.len(),
        maxdim = ?config.maxdim,
        k = config.k,
        n_jobs = config.n_jobs,
        "computing steenrod barcodes"
    );

    let values = filtration.values();
    let by_dim = filtration.by_dimension(config.maxdim)?;
    let reductions = reduce(&by_dim)?;
    let ordinary = extract(&by_dim, &reductions, values)?;
    let matrix = steenrod_matrix(config.k, &by_dim, &reductions, &ordinary, config.n_jobs)?;
    let steenrod = steenrod_barcode(&by_dim, &reductions, &ordinary.barcode, &matrix, values)?;

    info!(
        bars = ordinary.barcode.len(),
        steenrod_bars = steenrod.len(),
        "barcodes computed"
    );

    Ok(SteenrodPersistence {
        by_dim,
        reductions,
        ordinary,
        matrix,
        steenrod,
    })
}

/// Ordinary and Steenrod barcodes of `filtration`
///
/// Bars are in filtration indices, in the relative cohomology convention
/// unless `config.absolute` is set.
pub fn barcodes(filtration: &Filtration, config: &BarcodeConfig) -> Result<Barcodes> {
    let persistence = compute(filtration, config)?;
    let barcode = persistence.ordinary.barcode;
    let steenrod = persistence.steenrod;

    if config.absolute {
        Ok(Barcodes {
            barcode: barcode.to_absolute(),
            steenrod: steenrod.to_absolute(),
        })
    } else {
        Ok(Barcodes { barcode, steenrod })
    }
}
