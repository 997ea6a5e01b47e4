use std::sync::Arc;

use dashmap::DashMap;

use crate::Identifier;

/// Identifier to long URL mapping used by [`crate::Shortener`].
///
/// A `get` for an identifier must observe any `put` for the same identifier
/// that has already returned.
pub trait UrlStore: Send + Sync {
    fn put(&self, id: Identifier, url: String);

    /// Returns `None` when nothing is stored under `id`.
    fn get(&self, id: Identifier) -> Option<String>;

    fn contains(&self, id: Identifier) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store backed by a sharded concurrent map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    urls: DashMap<Identifier, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: DashMap::with_capacity(capacity),
        }
    }
}

impl UrlStore for MemoryStore {
    fn put(&self, id: Identifier, url: String) {
        tracing::trace!(id, url = %url, "storing URL mapping");
        self.urls.insert(id, url);
    }

    fn get(&self, id: Identifier) -> Option<String> {
        self.urls.get(&id).map(|entry| entry.value().clone())
    }

    fn contains(&self, id: Identifier) -> bool {
        self.urls.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.urls.len()
    }
}

impl<S: UrlStore + ?Sized> UrlStore for Arc<S> {
    fn put(&self, id: Identifier, url: String) {
        (**self).put(id, url);
    }

    fn get(&self, id: Identifier) -> Option<String> {
        (**self).get(id)
    }

    fn contains(&self, id: Identifier) -> bool {
        (**self).contains(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
