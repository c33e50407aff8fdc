//! Sparse GF(2) columns.

use std::collections::BTreeSet;

/// Sparse column over GF(2): ascending, duplicate-free nonzero indices
///
/// The ascending invariant is maintained by construction: columns are built
/// either by ascending pushes or by the symmetric-difference merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SparseColumn {
    rows: Vec<usize>,
}

impl SparseColumn {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// The column with a single nonzero entry
    pub fn unit(row: usize) -> Self {
        Self { rows: vec![row] }
    }

    /// Collect the odd-multiplicity indices of `toggles`
    ///
    /// An index appearing twice cancels, as in GF(2) addition.
    pub fn from_toggles(toggles: impl IntoIterator<Item = usize>) -> Self {
        let mut set = BTreeSet::new();
        for row in toggles {
            if !set.remove(&row) {
                set.insert(row);
            }
        }
        Self {
            rows: set.into_iter().collect(),
        }
    }

    /// Append an entry strictly greater than every current entry
    pub fn push(&mut self, row: usize) {
        debug_assert!(self.rows.last().map_or(true, |&last| last < row));
        self.rows.push(row);
    }

    pub fn is_zero(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// First (smallest) nonzero index
    ///
    /// In the antitransposed coboundary convention this is the column's pivot.
    pub fn pivot(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn contains(&self, row: usize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.rows
    }

    /// XOR (symmetric difference) with another column - addition in Z/2Z
    ///
    /// Linear merge of the two sorted lists.
    pub fn add_assign(&mut self, other: &SparseColumn) {
        if other.rows.is_empty() {
            return;
        }
        let (a, b) = (&self.rows, &other.rows);
        let mut merged = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(a[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(b[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&a[i..]);
        merged.extend_from_slice(&b[j..]);
        self.rows = merged;
    }
}

impl FromIterator<usize> for SparseColumn {
    /// Build from indices in any order; repeated indices cancel in pairs
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_toggles(iter)
    }
}

/// Add column `source` into column `target` of the same matrix
pub(crate) fn add_column(columns: &mut [SparseColumn], target: usize, source: usize) {
    debug_assert_ne!(target, source);
    if target < source {
        let (head, tail) = columns.split_at_mut(source);
        head[target].add_assign(&tail[0]);
    } else {
        let (head, tail) = columns.split_at_mut(target);
        tail[0].add_assign(&head[source]);
    }
}
