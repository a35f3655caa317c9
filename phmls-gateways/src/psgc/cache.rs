use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

struct Entry {
    body: String,
    fetched_at: Instant,
}

/// Response bodies by URL.
///
/// Entries are never evicted. Expired entries are only
/// served if the reference service cannot be reached.
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn fresh(&self, url: &str) -> Option<String> {
        self.entries
            .lock()
            .get(url)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.body.clone())
    }

    pub fn any(&self, url: &str) -> Option<String> {
        self.entries.lock().get(url).map(|entry| entry.body.clone())
    }

    pub fn insert(&self, url: String, body: String) {
        let entry = Entry {
            body,
            fetched_at: Instant::now(),
        };
        self.entries.lock().insert(url, entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_entries_are_not_fresh() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert("a".into(), "body".into());
        assert_eq!(None, cache.fresh("a"));
        assert_eq!(Some("body".to_string()), cache.any("a"));
        assert_eq!(None, cache.any("b"));
    }

    #[test]
    fn fresh_entries() {
        let cache = ResponseCache::new(Duration::from_secs(3600));
        cache.insert("a".into(), "body".into());
        assert_eq!(Some("body".to_string()), cache.fresh("a"));
    }
}
