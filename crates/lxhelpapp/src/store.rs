//! Immutable record stores.
//!
//! A [`RecordStore`] is built once from an ordered list of entries and never
//! changes afterwards: there is no insert, remove or reorder. Each entry gets
//! a [`RecordId`] equal to its position, which is what pages, filters and
//! disclosure state refer to.

use crate::error::{LxError, Result};
use crate::model::{Entry, Record, RecordId};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<T> {
    records: Vec<Record<T>>,
}

impl<T: Entry> RecordStore<T> {
    /// Builds a store, assigning ids in order.
    ///
    /// Fails if any entry has a blank title.
    pub fn new(entries: Vec<T>) -> Result<Self> {
        let mut records = Vec::with_capacity(entries.len());
        for (ordinal, entry) in entries.into_iter().enumerate() {
            if entry.title().trim().is_empty() {
                return Err(LxError::InvalidRecord {
                    kind: T::NOUN,
                    ordinal,
                    reason: "title is empty",
                });
            }
            records.push(Record {
                id: RecordId::new(ordinal),
                entry,
            });
        }
        Ok(Self { records })
    }

    /// Builds a store from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let entries: Vec<T> = serde_json::from_str(json)?;
        Self::new(entries)
    }
}

impl<T> RecordStore<T> {
    pub fn records(&self) -> &[Record<T>] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&Record<T>> {
        self.records.get(id.ordinal())
    }

    pub fn first_id(&self) -> Option<RecordId> {
        self.records.first().map(|r| r.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record<T>> {
        self.records.iter()
    }
}

impl<'a, T> IntoIterator for &'a RecordStore<T> {
    type Item = &'a Record<T>;
    type IntoIter = std::slice::Iter<'a, Record<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AccordionItem, ErrorEntry};
    use crate::test_utils::error_entry;

    #[test]
    fn test_ids_follow_insertion_order() {
        let store = RecordStore::new(vec![
            error_entry("command not found"),
            error_entry("Permission denied"),
            error_entry("disk quota exceeded"),
        ])
        .unwrap();

        let ids: Vec<_> = store.iter().map(|r| r.id.ordinal()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(
            store.get(RecordId::new(1)).unwrap().title(),
            "Permission denied"
        );
        assert!(store.get(RecordId::new(3)).is_none());
        assert_eq!(store.first_id(), Some(RecordId::new(0)));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let err = RecordStore::new(vec![error_entry("ok"), error_entry("   ")]).unwrap_err();
        match err {
            LxError::InvalidRecord { kind, ordinal, .. } => {
                assert_eq!(kind, "error");
                assert_eq!(ordinal, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_store_is_allowed() {
        let store: RecordStore<ErrorEntry> = RecordStore::new(vec![]).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.first_id(), None);
    }

    #[test]
    fn test_loads_from_json() {
        let json = r#"[
            {"title": "Shells Overview", "summary": "bash and zsh"},
            {"title": "Shell Safety", "summary": "rm -rf", "code": "set -euo pipefail"}
        ]"#;
        let store: RecordStore<AccordionItem> = RecordStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get(RecordId::new(1)).unwrap().entry.code.as_deref(),
            Some("set -euo pipefail")
        );
    }

    #[test]
    fn test_malformed_json_is_a_serialization_error() {
        let err = RecordStore::<AccordionItem>::from_json("{not json").unwrap_err();
        assert!(matches!(err, LxError::Serialization(_)));
    }
}
