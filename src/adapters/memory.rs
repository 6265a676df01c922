//! In-memory adapter: Implementation of SessionStore.
//!
//! Sessions live in a `HashMap` behind a `Mutex`. When the store reaches its capacity the
//! least recently used session is evicted, which also drops (and so cancels) any task it
//! was running.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use uuid::Uuid;

use crate::ports::{SessionStore, SharedSession};

/// Error type for session store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session store lock poisoned")]
    LockPoisoned,
}

struct Entry<S> {
    session: SharedSession<S>,
    last_used: Instant,
}

/// Session store kept in process memory.
pub struct MemorySessionStore<S> {
    entries: Mutex<HashMap<Uuid, Entry<S>>>,
    capacity: usize,
}

impl<S> MemorySessionStore<S> {
    /// Create a store that holds at most `capacity` sessions (minimum 1).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    fn evict_oldest(entries: &mut HashMap<Uuid, Entry<S>>) {
        let oldest = entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            entries.remove(&id);
            tracing::debug!(session = %id, "Evicted idle session");
        }
    }
}

impl<S> SessionStore for MemorySessionStore<S>
where
    S: Default + Send,
{
    type Session = S;
    type Error = StoreError;

    fn get_or_create(&self, id: Option<Uuid>) -> Result<(Uuid, SharedSession<S>), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        let now = Instant::now();

        if let Some(id) = id {
            if let Some(entry) = entries.get_mut(&id) {
                entry.last_used = now;
                return Ok((id, Arc::clone(&entry.session)));
            }
        }

        while entries.len() >= self.capacity {
            Self::evict_oldest(&mut entries);
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(S::default()));
        entries.insert(
            id,
            Entry {
                session: Arc::clone(&session),
                last_used: now,
            },
        );
        tracing::debug!(session = %id, "Created session");
        Ok((id, session))
    }

    fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let store: MemorySessionStore<u32> = MemorySessionStore::new(2);
        assert!(store.is_empty());
        store.get_or_create(None).expect("create");
        assert!(!store.is_empty());
    }

    #[test]
    fn test_creates_session_for_unknown_id() {
        let store: MemorySessionStore<u32> = MemorySessionStore::new(4);
        let (id, _) = store.get_or_create(None).expect("Should create");
        let (other, _) = store
            .get_or_create(Some(Uuid::new_v4()))
            .expect("Should create");
        assert_ne!(id, other);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_returns_same_session_for_known_id() {
        let store: MemorySessionStore<u32> = MemorySessionStore::new(4);
        let (id, session) = store.get_or_create(None).expect("Should create");
        *session.lock().expect("lock") = 9;

        let (again, session) = store.get_or_create(Some(id)).expect("Should find");
        assert_eq!(again, id);
        assert_eq!(*session.lock().expect("lock"), 9);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let store: MemorySessionStore<u32> = MemorySessionStore::new(2);
        let (first, _) = store.get_or_create(None).expect("create");
        let (second, _) = store.get_or_create(None).expect("create");

        // Touch the first so the second becomes the oldest.
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.get_or_create(Some(first)).expect("touch");

        store.get_or_create(None).expect("create");
        assert_eq!(store.len(), 2);

        let (id, _) = store.get_or_create(Some(first)).expect("lookup");
        assert_eq!(id, first);
        let (id, _) = store.get_or_create(Some(second)).expect("lookup");
        assert_ne!(id, second);
    }
}
