//! Entry store - the single durable copy of the ledger

use crate::domain::Entry;
use crate::error::{Result, TallyError};
use crate::infrastructure::Storage;
use std::cmp::Reverse;

/// Storage key for the ledger. The suffix is the record schema version.
pub const LEDGER_KEY: &str = "eggtally.entries.v1";

/// Owns the persisted entry list.
///
/// Mutating operations take `&mut self`, so read-modify-write cycles against
/// one store cannot interleave.
#[derive(Debug)]
pub struct EntryStore<S: Storage> {
    storage: S,
}

impl<S: Storage> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        EntryStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Snapshot of all entries, newest first as of the last `add`.
    ///
    /// Never fails: unreadable or malformed storage yields an empty ledger.
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.storage.get(LEDGER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read ledger, treating as empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match decode(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "ledger is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the stored ledger with `entries` in a single write
    pub fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set(LEDGER_KEY, &raw)
    }

    /// Append `entry` and re-sort newest first
    pub fn add(&mut self, entry: Entry) -> Result<()> {
        let mut entries = self.load();
        tracing::debug!(date = %entry.date, count = entry.eggs(), "adding entry");
        entries.push(entry);
        entries.sort_by_key(|e| Reverse(e.date));
        self.save(&entries)
    }

    /// Remove the entry at `index` in `load()` order and return it.
    ///
    /// An out-of-range index is an error and nothing is written.
    pub fn delete_at(&mut self, index: usize) -> Result<Entry> {
        let mut entries = self.load();
        if index >= entries.len() {
            return Err(TallyError::IndexOutOfRange {
                index,
                len: entries.len(),
            });
        }

        let removed = entries.remove(index);
        self.save(&entries)?;
        tracing::debug!(index, date = %removed.date, "deleted entry");
        Ok(removed)
    }

    /// Drop the stored ledger entirely
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(LEDGER_KEY)
    }
}

fn decode(raw: &str) -> serde_json::Result<Vec<Entry>> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tally;
    use crate::infrastructure::MemoryStorage;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(raw: &str) -> EntryStore<MemoryStorage> {
        let mut storage = MemoryStorage::new();
        storage.set(LEDGER_KEY, raw).unwrap();
        EntryStore::new(storage)
    }

    fn is_newest_first(entries: &[Entry]) -> bool {
        entries.windows(2).all(|w| w[0].date >= w[1].date)
    }

    #[test]
    fn test_load_empty_storage() {
        let store = EntryStore::new(MemoryStorage::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in [
            "",
            "   ",
            "not json",
            "{\"not\":\"a list\"}",
            "42",
            "[{\"date\":\"someday\",\"count\":1}]",
            "[{\"count\":1}]",
            "[1,2,3]",
        ] {
            assert!(store_with(raw).load().is_empty(), "{:?}", raw);
        }
    }

    #[test]
    fn test_load_tolerates_loose_counts() {
        let store = store_with(
            r#"[{"date":"2024-01-05","count":"abc","note":"x"},{"date":"2024-01-05","count":"3"},{"date":"2024-01-05","count":2}]"#,
        );
        let entries = store.load();
        assert_eq!(entries.len(), 3);
        assert_eq!(Tally::new(&entries).sum_on_date(date(2024, 1, 5)), 5);
    }

    #[test]
    fn test_null_note_keeps_ledger_readable() {
        let mut store = store_with(
            r#"[{"date":"2024-01-05","count":3,"note":"a"},{"date":"2024-01-06","count":4,"note":null}]"#,
        );
        let entries = store.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].note, "");

        store.add(Entry::new(date(2024, 1, 7), 1, "")).unwrap();
        let entries = store.load();
        assert_eq!(entries.len(), 3);
        assert_eq!(Tally::new(&entries).sum_in_range(date(2024, 1, 5), date(2024, 1, 7)), 8);
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();
        store.add(Entry::new(date(2024, 1, 8), 4, "")).unwrap();
        store.add(Entry::new(date(2023, 12, 31), 1, "")).unwrap();
        store.add(Entry::new(date(2024, 1, 6), 2, "")).unwrap();

        let entries = store.load();
        assert_eq!(entries.len(), 4);
        assert!(is_newest_first(&entries));
        assert_eq!(entries[0].date, date(2024, 1, 8));
        assert_eq!(entries[3].date, date(2023, 12, 31));
    }

    #[test]
    fn test_add_contains_entry_exactly_once() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "a")).unwrap();
        let entry = Entry::new(date(2024, 1, 7), 9, "unique");
        store.add(entry.clone()).unwrap();

        let entries = store.load();
        assert_eq!(entries.iter().filter(|e| **e == entry).count(), 1);
    }

    #[test]
    fn test_add_same_date_keeps_insertion_order() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "morning")).unwrap();
        store.add(Entry::new(date(2024, 1, 5), 2, "evening")).unwrap();

        let notes: Vec<_> = store.load().into_iter().map(|e| e.note).collect();
        assert_eq!(notes, vec!["morning", "evening"]);
    }

    #[test]
    fn test_add_over_malformed_storage_starts_fresh() {
        let mut store = store_with("garbage");
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();
        store.save(&[Entry::new(date(2020, 2, 2), 1, "only")]).unwrap();

        let entries = store.load();
        assert_eq!(entries, vec![Entry::new(date(2020, 2, 2), 1, "only")]);
    }

    #[test]
    fn test_persisted_shape() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();

        let raw = store.storage().get(LEDGER_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"date":"2024-01-05","count":3,"note":""}]"#);
    }

    #[test]
    fn test_delete_at_targets_load_order() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "old")).unwrap();
        store.add(Entry::new(date(2024, 1, 8), 4, "new")).unwrap();
        store.add(Entry::new(date(2024, 1, 6), 2, "mid")).unwrap();

        let snapshot = store.load();
        let target = snapshot[1].clone();
        assert_eq!(target.note, "mid");

        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed, target);

        let notes: Vec<_> = store.load().into_iter().map(|e| e.note).collect();
        assert_eq!(notes, vec!["new", "old"]);
    }

    #[test]
    fn test_stale_index_refers_to_current_order() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "jan5")).unwrap();
        let stale = store.load();
        assert_eq!(stale[0].note, "jan5");

        // A newer entry shifts everything down by one.
        store.add(Entry::new(date(2024, 1, 9), 1, "jan9")).unwrap();

        let fresh = store.load();
        let removed = store.delete_at(0).unwrap();
        assert_eq!(removed, fresh[0]);
        assert_ne!(removed, stale[0]);
        assert_eq!(store.load(), vec![stale[0].clone()]);
    }

    #[test]
    fn test_delete_out_of_range_leaves_ledger_untouched() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();
        let before = store.load();

        let err = store.delete_at(1).unwrap_err();
        assert!(matches!(err, TallyError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_delete_on_empty_ledger() {
        let mut store = EntryStore::new(MemoryStorage::new());
        let err = store.delete_at(0).unwrap_err();
        assert!(matches!(err, TallyError::IndexOutOfRange { index: 0, len: 0 }));
        assert_eq!(store.storage().get(LEDGER_KEY).unwrap(), None);
    }

    #[test]
    fn test_repeated_delete_first_empties_ledger() {
        let mut store = EntryStore::new(MemoryStorage::new());
        for day in 1..=5 {
            store.add(Entry::new(date(2024, 1, day), day as u64, "")).unwrap();
        }

        while !store.load().is_empty() {
            store.delete_at(0).unwrap();
        }
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();
        store.add(Entry::new(date(2024, 1, 6), 3, "")).unwrap();

        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert_eq!(store.storage().get(LEDGER_KEY).unwrap(), None);

        store.clear().unwrap();
    }

    #[test]
    fn test_snapshot_mutation_does_not_persist() {
        let mut store = EntryStore::new(MemoryStorage::new());
        store.add(Entry::new(date(2024, 1, 5), 3, "")).unwrap();

        let mut snapshot = store.load();
        snapshot.clear();
        assert_eq!(store.load().len(), 1);
    }
}
