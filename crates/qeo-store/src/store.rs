//! The card store: persistence of the single card record.

use qeo_core::constants::STORAGE_KEY;
use qeo_core::model::CardRecord;

use crate::adapter::{self, LoadSource};
use crate::error::StoreResult;
use crate::kv::KeyValueStore;

/// Save/load for the one card record a session owns, under the fixed
/// storage key.
#[derive(Debug)]
pub struct CardStore<S> {
    store: S,
}

impl<S: KeyValueStore> CardStore<S> {
    /// Wraps a key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists the record as compact JSON. Raw values, no defaulting.
    ///
    /// ## Errors
    /// Returns an error if serialization or the backing store fails.
    pub fn save(&mut self, record: &CardRecord) -> StoreResult<()> {
        let json = adapter::serialize(record)?;
        self.store.set(STORAGE_KEY, &json)?;
        tracing::debug!("card record saved");
        Ok(())
    }

    /// Loads the stored record, if any.
    ///
    /// This is the lax local-storage path: no required-key validation is
    /// applied, unlike file import.
    ///
    /// ## Errors
    /// Returns an error if the backing store fails or the stored text does
    /// not parse.
    pub fn load(&self) -> StoreResult<Option<CardRecord>> {
        let Some(json) = self.store.get(STORAGE_KEY)? else {
            return Ok(None);
        };
        let record = adapter::deserialize(&json, LoadSource::LocalStorage)?;
        Ok(Some(record))
    }

    /// Whether a record has been saved.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be read.
    pub fn has_saved(&self) -> StoreResult<bool> {
        Ok(self.store.get(STORAGE_KEY)?.is_some())
    }

    /// Removes the stored record. Clearing an empty store succeeds.
    ///
    /// ## Errors
    /// Returns an error if the backing store cannot be written.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.store.remove(STORAGE_KEY)?;
        tracing::debug!("card record cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use qeo_core::model::CardFields;

    use super::*;
    use crate::kv::MemoryStore;

    fn record_named(name: &str) -> CardRecord {
        CardRecord {
            fields: CardFields {
                name: name.to_string(),
                ..CardFields::default()
            },
            ..CardRecord::default()
        }
    }

    #[test_log::test]
    fn save_then_load_round_trips() {
        let mut store = CardStore::new(MemoryStore::new());
        assert_eq!(store.load().expect("load"), None);
        assert!(!store.has_saved().expect("has_saved"));

        let record = record_named("Budi");
        store.save(&record).expect("save");
        assert!(store.has_saved().expect("has_saved"));
        assert_eq!(store.load().expect("load"), Some(record));
    }

    #[test_log::test]
    fn save_replaces_the_previous_record() {
        let mut store = CardStore::new(MemoryStore::new());
        store.save(&record_named("Budi")).expect("save");
        store.save(&record_named("Siti")).expect("save");

        let loaded = store.load().expect("load").expect("present");
        assert_eq!(loaded.fields.name, "Siti");
    }

    #[test_log::test]
    fn clear_removes_the_record() {
        let mut store = CardStore::new(MemoryStore::new());
        store.save(&record_named("Budi")).expect("save");
        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);

        // Clearing again is fine.
        store.clear().expect("clear empty");
    }

    #[test_log::test]
    fn load_accepts_partial_stored_records() {
        // Local-storage loads skip the import validation gate.
        let mut kv = MemoryStore::new();
        kv.set(STORAGE_KEY, r#"{"phone":"08123"}"#).expect("set");

        let store = CardStore::new(kv);
        let loaded = store.load().expect("load").expect("present");
        assert_eq!(loaded.fields.phone, "08123");
        assert_eq!(loaded.fields.name, "");
    }

    #[test_log::test]
    fn load_surfaces_corrupt_payloads() {
        let mut kv = MemoryStore::new();
        kv.set(STORAGE_KEY, "not json").expect("set");

        let store = CardStore::new(kv);
        assert!(store.load().is_err());
    }
}
