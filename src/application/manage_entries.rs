//! Record, list and remove ledger entries

use crate::domain::Entry;
use crate::error::{Result, TallyError};
use crate::infrastructure::{EntryStore, Storage};
use chrono::NaiveDate;

/// Service for changing the ledger
pub struct EntryService<S: Storage> {
    store: EntryStore<S>,
}

impl<S: Storage> EntryService<S> {
    pub fn new(store: EntryStore<S>) -> Self {
        EntryService { store }
    }

    /// Validate raw input and append it to the ledger.
    /// Invalid input is rejected before the store is touched.
    pub fn add(
        &mut self,
        date_ref: &str,
        count: &str,
        note: &str,
        today: NaiveDate,
    ) -> Result<Entry> {
        let entry = Entry::parse(date_ref, count, note, today)?;
        self.store.add(entry.clone())?;
        Ok(entry)
    }

    /// Entries in stored order; positions match `delete` indices
    pub fn list(&self) -> Vec<(usize, Entry)> {
        self.store.load().into_iter().enumerate().collect()
    }

    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        self.store.delete_at(index)
    }

    /// Wipe the ledger. Refuses unless `confirmed`.
    pub fn clear(&mut self, confirmed: bool) -> Result<usize> {
        if !confirmed {
            return Err(TallyError::Aborted(
                "refusing to delete all entries without --yes".to_string(),
            ));
        }
        let removed = self.store.load().len();
        self.store.clear()?;
        Ok(removed)
    }
}
