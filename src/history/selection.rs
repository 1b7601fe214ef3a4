//! Multi-select state over history positions.

use std::collections::BTreeSet;

/// Set of selected entry positions.
///
/// Independent of the entries themselves; the ledger clears it whenever the
/// number of entries changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Selection {
    indices: BTreeSet<usize>,
}

impl Selection {
    pub(crate) fn toggle(&mut self, index: usize) -> bool {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
            true
        } else {
            false
        }
    }

    pub(crate) fn select_all(&mut self, len: usize) {
        self.indices = (0..len).collect();
    }

    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    /// Selected positions, highest first, ready for a batch delete.
    pub(crate) fn descending(&self) -> Vec<usize> {
        self.indices.iter().rev().copied().collect()
    }

    pub(crate) fn ascending(&self) -> Vec<usize> {
        self.indices.iter().copied().collect()
    }
}
