//! Search history.
//!
//! An ordered, deduplicated list of previously queried addresses (most recent
//! first) with a multi-select used for batch deletion. The ledger exclusively
//! owns its entries; the lookup engine only tells it about successful queries.
//!
//! Entries are not persisted. A restarted process starts empty unless the
//! caller explicitly loads a list with `HistoryLedger::from_entries`.

mod selection;

use log::debug;

use crate::error_handling::IndexError;
use crate::fingerprint::ValidIp;
use selection::Selection;

/// Deduplicated, most-recent-first list of queried addresses.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: Vec<String>,
    selection: Selection,
}

impl HistoryLedger {
    /// Empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads entries given most-recent-first.
    ///
    /// Later duplicates are dropped, so the first (most recent) occurrence of
    /// each address keeps its position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::new();
        for entry in entries {
            let entry = entry.into();
            if !ledger.contains(&entry) {
                ledger.entries.push(entry);
            }
        }
        ledger
    }

    /// Prepends `ip` unless an identical string is already present.
    ///
    /// Comparison is exact and case-sensitive. Returns `true` if the entry was
    /// added. Adding clears the selection.
    pub fn record(&mut self, ip: &ValidIp) -> bool {
        if self.contains(ip.as_str()) {
            return false;
        }
        self.entries.insert(0, ip.as_str().to_string());
        self.selection.clear();
        debug!("History: recorded {} ({} entries)", ip, self.entries.len());
        true
    }

    /// Removes and returns the entry at `index`. Clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `index` is out of bounds; nothing changes.
    pub fn delete(&mut self, index: usize) -> Result<String, IndexError> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        self.selection.clear();
        debug!("History: deleted {} at {}", removed, index);
        Ok(removed)
    }

    /// Removes several entries in one batch, applying `indices` in the order
    /// given.
    ///
    /// # Caller contract
    ///
    /// `indices` must be sorted in DESCENDING order. Each removal shifts every
    /// later entry down by one, so removing low positions first would make
    /// the remaining indices point at the wrong entries. This method does not
    /// reorder its input: ascending indices are applied as given and remove
    /// different entries than intended.
    ///
    /// The whole batch is checked before anything is removed: if any index
    /// would be out of bounds at the moment it is applied, an `IndexError`
    /// is returned and the ledger is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first `IndexError` the batch would hit.
    pub fn delete_batch(&mut self, indices: &[usize]) -> Result<Vec<String>, IndexError> {
        let len = self.entries.len();
        for (applied, &index) in indices.iter().enumerate() {
            let remaining = len.saturating_sub(applied);
            if index >= remaining {
                return Err(IndexError {
                    index,
                    len: remaining,
                });
            }
        }

        let removed: Vec<String> = indices
            .iter()
            .map(|&index| self.entries.remove(index))
            .collect();
        if !removed.is_empty() {
            self.selection.clear();
        }
        debug!(
            "History: batch removed {} entries ({} left)",
            removed.len(),
            self.entries.len()
        );
        Ok(removed)
    }

    /// Deletes every selected entry and clears the selection.
    ///
    /// Honors the `delete_batch` contract by ordering the selection
    /// descending first.
    pub fn delete_selected(&mut self) -> Vec<String> {
        let indices = self.selection.descending();
        // The selection is cleared on every length change, so it only ever
        // holds in-range positions.
        let removed = self.delete_batch(&indices).unwrap_or_default();
        self.selection.clear();
        removed
    }

    /// Flips the selection state of `index`. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `index` is out of bounds.
    pub fn toggle(&mut self, index: usize) -> Result<bool, IndexError> {
        self.check_index(index)?;
        Ok(self.selection.toggle(index))
    }

    /// Selects every entry.
    pub fn select_all(&mut self) {
        self.selection.select_all(self.entries.len());
    }

    /// Deselects every entry.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Clears the selection if everything is selected, otherwise selects all.
    pub fn toggle_select_all(&mut self) {
        if self.is_all_selected() {
            self.clear_selection();
        } else {
            self.select_all();
        }
    }

    /// True when the ledger is non-empty and every entry is selected.
    pub fn is_all_selected(&self) -> bool {
        !self.entries.is_empty() && self.selection.len() == self.entries.len()
    }

    /// Whether `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Selected positions in ascending order.
    pub fn selected(&self) -> Vec<usize> {
        self.selection.ascending()
    }

    /// Snapshot of the entries, most recent first.
    pub fn list(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Whether an identical entry exists.
    pub fn contains(&self, ip: &str) -> bool {
        self.entries.iter().any(|entry| entry == ip)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.entries.len() {
            return Err(IndexError {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
