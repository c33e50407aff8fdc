//! Relabelling of index barcodes.

use super::{Bar, Barcode, Convention, Interval};
use crate::error::{Error, Result};

impl Barcode {
    /// Re-express a relative cohomology barcode as absolute homology
    ///
    /// A finite relative bar (t, b) in dimension d is the absolute bar
    /// [t, b) in dimension d-1; essential bars keep their dimension.
    pub fn to_absolute(&self) -> Barcode {
        if self.convention == Convention::Absolute {
            return self.clone();
        }

        let mut bars: Vec<Vec<Bar>> = vec![Vec::new(); self.n_dimensions()];
        for (dim, bar) in self.iter() {
            match bar.death {
                Some(death) if dim > 0 => bars[dim - 1].push(Bar {
                    birth: death,
                    death: Some(bar.birth),
                }),
                Some(_) => {}
                None => bars[dim].push(*bar),
            }
        }
        for dim_bars in &mut bars {
            dim_bars.sort_by_key(|bar| bar.birth);
        }
        Barcode::new(bars, Convention::Absolute)
    }

    /// Replace filtration indices by filtration values
    ///
    /// Essential bars die at `f64::INFINITY`.
    pub fn to_intervals(&self, values: &[f64]) -> Result<Vec<Vec<Interval>>> {
        let lookup = |idx: usize| {
            values.get(idx).copied().ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "no filtration value for index {} ({} values)",
                    idx,
                    values.len()
                ))
            })
        };

        self.bars
            .iter()
            .map(|dim_bars| {
                dim_bars
                    .iter()
                    .map(|bar| -> Result<Interval> {
                        Ok(Interval {
                            birth: lookup(bar.birth)?,
                            death: match bar.death {
                                Some(death) => lookup(death)?,
                                None => f64::INFINITY,
                            },
                        })
                    })
                    .collect()
            })
            .collect()
    }
}
