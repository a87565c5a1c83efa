use std::cell::RefCell;
use std::collections::HashMap;

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How long a cache entry counts as fresh unless configured otherwise.
pub const DEFAULT_TTL: SignedDuration = SignedDuration::from_secs(5 * 60);

/// Prefix for all persisted cache keys, so unrelated localStorage entries
/// (theme, consent flags) can never collide with content payloads.
const CACHE_NAMESPACE: &str = "cms-cache:v1:";

/// A last-known-good payload with its write timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub payload: Value,
    pub written_at: Timestamp,
}

impl CacheEntry {
    pub fn is_fresh(&self, ttl: SignedDuration, now: Timestamp) -> bool {
        now.duration_since(self.written_at) <= ttl
    }
}

/// Shared key/value store for last-known-good fetch results.
///
/// One store instance backs every hook in the process; hooks with equal
/// Query Keys converge on one entry, last write wins. All access is
/// single-threaded and synchronous.
pub trait CacheStore {
    /// Fresh-only read. Expired entries are evicted here, lazily; there is
    /// no background sweep.
    fn read(&self, key: &str, now: Timestamp) -> Option<CacheEntry>;

    /// Any-age read, without eviction. Backs the provisional-display path
    /// on mount and the fallback path when a fetch fails.
    fn peek(&self, key: &str) -> Option<CacheEntry>;

    /// Unconditional overwrite, stamped with `now`.
    fn write(&self, key: &str, payload: Value, now: Timestamp);

    /// Explicit removal, used when a fetch establishes that the cached
    /// payload is wrong (e.g. the entity no longer exists).
    fn evict(&self, key: &str);
}

/// In-memory store; the default for tests and for browsers where
/// localStorage is unavailable.
pub struct MemoryStore {
    ttl: SignedDuration,
    entries: RefCell<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new(ttl: SignedDuration) -> Self {
        Self {
            ttl,
            entries: RefCell::new(HashMap::new()),
        }
    }
}

impl CacheStore for MemoryStore {
    fn read(&self, key: &str, now: Timestamp) -> Option<CacheEntry> {
        let mut entries = self.entries.borrow_mut();
        match entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl, now) => {
                Some(entry.clone())
            }
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn peek(&self, key: &str) -> Option<CacheEntry> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, payload: Value, now: Timestamp) {
        self.entries.borrow_mut().insert(
            key.to_string(),
            CacheEntry {
                payload,
                written_at: now,
            },
        );
    }

    fn evict(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// On-disk JSON shape of one persisted entry.
#[derive(Serialize, Deserialize)]
struct PersistedEntry {
    data: Value,
    written_at: Timestamp,
}

/// Parse a persisted entry. A parse failure means the entry is corrupt and
/// must be treated as a miss, never surfaced to the user.
fn parse_persisted(raw: &str) -> Result<CacheEntry, serde_json::Error> {
    let entry: PersistedEntry = serde_json::from_str(raw)?;
    Ok(CacheEntry {
        payload: entry.data,
        written_at: entry.written_at,
    })
}

/// Durable per-origin store over browser localStorage, enabling the
/// offline fallback path across page loads.
///
/// All storage access is best-effort: quota errors and disabled storage
/// degrade to cache misses, never to user-visible failures.
pub struct LocalStore {
    ttl: SignedDuration,
}

impl LocalStore {
    pub fn new(ttl: SignedDuration) -> Self {
        Self { ttl }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn storage_key(key: &str) -> String {
        format!("{CACHE_NAMESPACE}{key}")
    }

    fn load(&self, key: &str) -> Option<CacheEntry> {
        let storage = Self::storage()?;
        let raw = storage.get_item(&Self::storage_key(key)).ok().flatten()?;
        match parse_persisted(&raw) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(key, %err, "pruning unreadable cache entry");
                let _ = storage.remove_item(&Self::storage_key(key));
                None
            }
        }
    }
}

impl CacheStore for LocalStore {
    fn read(&self, key: &str, now: Timestamp) -> Option<CacheEntry> {
        let entry = self.load(key)?;
        if entry.is_fresh(self.ttl, now) {
            Some(entry)
        } else {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&Self::storage_key(key));
            }
            None
        }
    }

    fn peek(&self, key: &str) -> Option<CacheEntry> {
        self.load(key)
    }

    fn write(&self, key: &str, payload: Value, now: Timestamp) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let record = PersistedEntry {
            data: payload,
            written_at: now,
        };
        if let Ok(raw) = serde_json::to_string(&record) {
            let _ = storage.set_item(&Self::storage_key(key), &raw);
        }
    }

    fn evict(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&Self::storage_key(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::time::TimeSource;
    use serde_json::json;

    const TTL: SignedDuration = SignedDuration::from_secs(5 * 60);

    #[test]
    fn write_then_read_round_trips() {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let store = MemoryStore::new(TTL);

        store.write("blog-posts?page=1", json!({"total": 3}), time.now());
        let entry = store.read("blog-posts?page=1", time.now()).unwrap();
        assert_eq!(entry.payload, json!({"total": 3}));
        assert_eq!(entry.written_at, time.now());
    }

    #[test]
    fn expired_entries_are_evicted_on_read() {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let store = MemoryStore::new(TTL);

        store.write("homepage", json!({"hero": "x"}), time.now());
        time.advance(SignedDuration::from_secs(10 * 60));

        assert!(store.read("homepage", time.now()).is_none());
        // the lazy eviction removed it entirely
        assert!(store.peek("homepage").is_none());
    }

    #[test]
    fn peek_returns_expired_entries_without_evicting() {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let store = MemoryStore::new(TTL);

        store.write("about", json!({"heading": "x"}), time.now());
        time.advance(SignedDuration::from_secs(10 * 60));

        assert!(store.peek("about").is_some());
        assert!(store.peek("about").is_some());
    }

    #[test]
    fn entries_at_exactly_ttl_are_still_fresh() {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let store = MemoryStore::new(TTL);

        store.write("homepage", json!(1), time.now());
        time.advance(TTL);
        assert!(store.read("homepage", time.now()).is_some());
    }

    #[test]
    fn writes_overwrite_unconditionally() {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let store = MemoryStore::new(TTL);

        store.write("homepage", json!(1), time.now());
        time.advance(SignedDuration::from_secs(60));
        store.write("homepage", json!(2), time.now());

        let entry = store.read("homepage", time.now()).unwrap();
        assert_eq!(entry.payload, json!(2));
        assert_eq!(entry.written_at, time.now());
    }

    #[test]
    fn evict_removes_the_entry() {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let store = MemoryStore::new(TTL);

        store.write("blog-post?slug=a", json!({"title": "a"}), time.now());
        store.evict("blog-post?slug=a");
        assert!(store.peek("blog-post?slug=a").is_none());
    }

    #[test]
    fn corrupt_persisted_entries_fail_to_parse() {
        assert!(parse_persisted("not json at all").is_err());
        assert!(parse_persisted(r#"{"data": 1}"#).is_err());

        let entry = parse_persisted(
            r#"{"data": {"title": "a"}, "written_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.payload, json!({"title": "a"}));
    }
}
