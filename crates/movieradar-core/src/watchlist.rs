//! The personal watchlist: an ordered JSON array kept under one storage key.
//!
//! Nothing is cached between calls. Every read decodes the stored array and
//! every mutation rewrites it, so two stores over the same key always agree.
//! Array elements that do not decode as an entry are skipped when listing
//! but written back untouched, so one odd element never costs the rest.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::models::{MediaItem, WatchlistEntry};
use crate::storage::Storage;

pub struct WatchlistStore {
    storage: Storage,
    key: String,
}

impl WatchlistStore {
    pub fn new(storage: Storage, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// All decodable entries in insertion order.
    ///
    /// A missing key, an unreadable row or a value that is not a JSON array
    /// all read as an empty watchlist.
    pub fn list(&self) -> Vec<WatchlistEntry> {
        self.load()
            .iter()
            .enumerate()
            .filter_map(|(index, value)| match WatchlistEntry::deserialize(value) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(key = %self.key, index, "skipping undecodable watchlist entry: {e}");
                    None
                }
            })
            .collect()
    }

    pub fn contains(&self, item: &MediaItem) -> bool {
        self.list().iter().any(|e| e.item.same_identity(item))
    }

    /// Append `item` unwatched. Returns `false` if it was already present.
    pub fn add(&self, item: &MediaItem) -> Result<bool, CoreError> {
        let mut raw = self.load();
        if raw.iter().any(|v| matches(v, item)) {
            return Ok(false);
        }
        raw.push(serde_json::to_value(WatchlistEntry::new(item.clone()))?);
        self.save(&raw)?;
        tracing::debug!(id = item.id, media_type = item.resolved_media_type(), "added to watchlist");
        Ok(true)
    }

    /// Drop every entry with the same identity as `item`.
    pub fn remove(&self, item: &MediaItem) -> Result<(), CoreError> {
        let mut raw = self.load();
        raw.retain(|v| !matches(v, item));
        self.save(&raw)?;
        tracing::debug!(id = item.id, media_type = item.resolved_media_type(), "removed from watchlist");
        Ok(())
    }

    /// Flip the watched flag of the matching entry.
    ///
    /// Returns `false` without writing when nothing matches.
    pub fn toggle_watched(&self, item: &MediaItem) -> Result<bool, CoreError> {
        let mut raw = self.load();
        let Some((slot, mut entry)) = raw.iter_mut().find_map(|v| {
            let entry = WatchlistEntry::deserialize(&*v).ok()?;
            entry.item.same_identity(item).then_some((v, entry))
        }) else {
            return Ok(false);
        };
        entry.watched = !entry.watched;
        *slot = serde_json::to_value(entry)?;
        self.save(&raw)?;
        Ok(true)
    }

    /// Add `item` if absent, remove it otherwise. Returns the new membership.
    pub fn toggle(&self, item: &MediaItem) -> Result<bool, CoreError> {
        if self.contains(item) {
            self.remove(item)?;
            Ok(false)
        } else {
            self.add(item)?;
            Ok(true)
        }
    }

    /// The stored array as raw JSON values.
    fn load(&self) -> Vec<Value> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, "watchlist read failed: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(values)) => values,
            Ok(Value::Null) => Vec::new(),
            Ok(other) => {
                tracing::warn!(key = %self.key, "watchlist is not an array, ignoring {other}");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, "discarding undecodable watchlist: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, values: &[Value]) -> Result<(), CoreError> {
        let json = serde_json::to_string(values)?;
        self.storage.set(&self.key, &json)
    }
}

/// Whether a stored element is an entry for `item`. Undecodable elements
/// match nothing.
fn matches(value: &Value, item: &MediaItem) -> bool {
    WatchlistEntry::deserialize(value).is_ok_and(|e| e.item.same_identity(item))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const KEY: &str = "test_watchlist";

    fn store() -> WatchlistStore {
        WatchlistStore::new(Storage::open_memory().unwrap(), KEY)
    }

    fn item(value: serde_json::Value) -> MediaItem {
        serde_json::from_value(value).unwrap()
    }

    fn stored(store: &WatchlistStore) -> serde_json::Value {
        let raw = store.storage.get(KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(store().list().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = store();
        let x = item(json!({"id": 1, "title": "X"}));
        assert!(store.add(&x).unwrap());
        assert!(!store.add(&x).unwrap());

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].item, x);
        assert!(!list[0].watched);
    }

    #[test]
    fn test_add_then_remove() {
        let store = store();
        let x = item(json!({"id": 1, "title": "X"}));
        store.add(&x).unwrap();
        assert!(store.contains(&x));
        assert!(store.list().iter().any(|e| e.item.identity() == x.identity()));

        store.remove(&x).unwrap();
        assert!(!store.contains(&x));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_same_id_different_media_type_coexist() {
        let store = store();
        let movie = item(json!({"id": 42, "title": "Movie"}));
        let show = item(json!({"id": 42, "name": "Show"}));
        store.add(&movie).unwrap();
        store.add(&show).unwrap();
        assert_eq!(store.list().len(), 2);

        store.remove(&show).unwrap();
        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].item, movie);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = store();
        for id in [3, 1, 2] {
            store.add(&item(json!({"id": id, "title": "T"}))).unwrap();
        }
        let ids: Vec<i64> = store.list().iter().map(|e| e.item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_watched_flips_only_the_match() {
        let store = store();
        let a = item(json!({"id": 1, "title": "A", "overview": "first"}));
        let b = item(json!({"id": 2, "name": "B"}));
        store.add(&a).unwrap();
        store.add(&b).unwrap();

        assert!(store.toggle_watched(&a).unwrap());
        let list = store.list();
        assert!(list[0].watched);
        assert_eq!(list[0].item, a);
        assert!(!list[1].watched);
        assert_eq!(list[1].item, b);

        store.toggle_watched(&a).unwrap();
        assert!(!store.list()[0].watched);
    }

    #[test]
    fn test_toggle_watched_without_match_is_noop() {
        let store = store();
        store.add(&item(json!({"id": 1, "title": "A"}))).unwrap();
        let before = stored(&store);
        assert!(!store.toggle_watched(&item(json!({"id": 1, "name": "A"}))).unwrap());
        assert_eq!(stored(&store), before);
    }

    #[test]
    fn test_toggle_watched_matches_inferred_media_type() {
        let store = store();
        store
            .storage
            .set(KEY, r#"[{"id":5,"media_type":"movie","title":"A","watched":false}]"#)
            .unwrap();

        store.toggle_watched(&item(json!({"id": 5, "title": "A"}))).unwrap();

        assert_eq!(
            stored(&store),
            json!([{"id": 5, "media_type": "movie", "title": "A", "watched": true}])
        );
    }

    #[test]
    fn test_corrupt_storage_reads_as_empty() {
        let store = store();
        store.storage.set(KEY, "{not json").unwrap();
        assert!(store.list().is_empty());
        assert!(!store.contains(&item(json!({"id": 1, "title": "X"}))));

        // The next mutation replaces the corrupt value.
        store.add(&item(json!({"id": 1, "title": "X"}))).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_odd_element_does_not_hide_or_erase_others() {
        let store = store();
        store
            .storage
            .set(KEY, r#"[{"id":1,"title":"Keep"},{"id":"2","name":"Odd"}]"#)
            .unwrap();

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].item.display_title(), "Keep");

        store.add(&item(json!({"id": 3, "title": "New"}))).unwrap();
        assert_eq!(
            stored(&store),
            json!([
                {"id": 1, "title": "Keep"},
                {"id": "2", "name": "Odd"},
                {"id": 3, "title": "New", "watched": false}
            ])
        );

        store.toggle_watched(&item(json!({"id": 1, "title": "Keep"}))).unwrap();
        store.remove(&item(json!({"id": 3, "title": "New"}))).unwrap();
        assert_eq!(
            stored(&store),
            json!([
                {"id": 1, "title": "Keep", "watched": true},
                {"id": "2", "name": "Odd"}
            ])
        );
    }

    #[test]
    fn test_null_storage_reads_as_empty() {
        let store = store();
        store.storage.set(KEY, "null").unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let store = store();
        let x = item(json!({"id": 8, "name": "Show"}));
        assert!(store.toggle(&x).unwrap());
        assert!(store.contains(&x));
        assert!(!store.toggle(&x).unwrap());
        assert!(!store.contains(&x));
    }

    #[test]
    fn test_entries_keep_extra_fields() {
        let store = store();
        store
            .add(&item(json!({"id": 1, "title": "X", "vote_average": 8.2})))
            .unwrap();
        assert_eq!(
            stored(&store),
            json!([{"id": 1, "title": "X", "vote_average": 8.2, "watched": false}])
        );
    }
}
