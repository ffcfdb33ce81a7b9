//! Favorites domain — ordered favorite set with pluggable persistence.
//!
//! The store is an explicitly constructed service shared via `Arc`, not a
//! process-wide singleton. The full sequence is loaded from the backend once
//! at construction and cached; every effective mutation writes the whole
//! sequence back to the backend before returning, then notifies subscribers
//! synchronously with the new sequence.

use crate::error::StoreError;
use crate::shared::CoinId;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage key the favorite sequence is persisted under.
pub const FAVORITES_KEY: &str = "favoritedCoins";

/// A key-value persistence backend for the favorite sequence.
///
/// Implementations store one ordered string sequence under a single named
/// key. `load` on a never-written store yields an empty sequence.
pub trait FavoritesBackend: Send + Sync {
    fn load(&self) -> Result<Vec<String>, StoreError>;
    fn save(&self, ids: &[String]) -> Result<(), StoreError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Vec<String>>,
}

impl FavoritesBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(lock_ignoring_poison(&self.slot).clone())
    }

    fn save(&self, ids: &[String]) -> Result<(), StoreError> {
        *lock_ignoring_poison(&self.slot) = ids.to_vec();
        Ok(())
    }
}

/// JSON-file backend: a flat object of named keys, favorites under
/// [`FAVORITES_KEY`]. Other keys in the file are preserved across saves.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Load(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| StoreError::Load(e.to_string()))
    }
}

impl FavoritesBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<String>, StoreError> {
        let map = self.read_map()?;
        let Some(value) = map.get(FAVORITES_KEY) else {
            return Ok(Vec::new());
        };
        serde_json::from_value(value.clone()).map_err(|e| StoreError::Load(e.to_string()))
    }

    fn save(&self, ids: &[String]) -> Result<(), StoreError> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(
            FAVORITES_KEY.to_string(),
            serde_json::to_value(ids).map_err(|e| StoreError::Save(e.to_string()))?,
        );
        let raw = serde_json::to_string_pretty(&map)
            .map_err(|e| StoreError::Save(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Save(e.to_string()))
    }
}

/// Handle returned by [`FavoritesStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&[CoinId]) + Send + Sync>;

/// Ordered favorite set with set semantics.
///
/// `add`/`remove` are idempotent: a no-op mutation performs no backend write
/// and emits no notification. Reads are served from the in-memory cache; the
/// backend write happens inside the mutation, before observers see the new
/// state, so cache and storage never diverge.
pub struct FavoritesStore {
    backend: Box<dyn FavoritesBackend>,
    ids: Mutex<Vec<CoinId>>,
    subscribers: Mutex<Vec<(u64, Subscriber)>>,
    next_subscriber: AtomicU64,
}

impl FavoritesStore {
    /// Build a store over `backend`, loading the persisted sequence.
    pub fn new(backend: impl FavoritesBackend + 'static) -> Result<Self, StoreError> {
        let ids = backend.load()?.into_iter().map(CoinId::from).collect();
        Ok(Self {
            backend: Box::new(backend),
            ids: Mutex::new(ids),
            subscribers: Mutex::new(Vec::new()),
            next_subscriber: AtomicU64::new(0),
        })
    }

    /// An empty store over a [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::default()),
            ids: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
            next_subscriber: AtomicU64::new(0),
        }
    }

    /// Current favorites, insertion order.
    pub fn list(&self) -> Vec<CoinId> {
        lock_ignoring_poison(&self.ids).clone()
    }

    pub fn is_favorite(&self, id: &CoinId) -> bool {
        lock_ignoring_poison(&self.ids).contains(id)
    }

    /// Append `id` iff not already present. Returns whether membership
    /// changed.
    pub fn add(&self, id: &CoinId) -> Result<bool, StoreError> {
        let snapshot = {
            let mut ids = lock_ignoring_poison(&self.ids);
            if ids.contains(id) {
                return Ok(false);
            }
            ids.push(id.clone());
            if let Err(e) = self.persist(&ids) {
                ids.pop();
                return Err(e);
            }
            ids.clone()
        };
        self.notify(&snapshot);
        Ok(true)
    }

    /// Remove `id` iff present. Returns whether membership changed.
    pub fn remove(&self, id: &CoinId) -> Result<bool, StoreError> {
        let snapshot = {
            let mut ids = lock_ignoring_poison(&self.ids);
            let Some(index) = ids.iter().position(|existing| existing == id) else {
                return Ok(false);
            };
            let removed = ids.remove(index);
            if let Err(e) = self.persist(&ids) {
                ids.insert(index, removed);
                return Err(e);
            }
            ids.clone()
        };
        self.notify(&snapshot);
        Ok(true)
    }

    /// Remove if present, add otherwise. Returns whether `id` is a favorite
    /// after the call.
    pub fn toggle(&self, id: &CoinId) -> Result<bool, StoreError> {
        if self.is_favorite(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Register `observer`, called synchronously with the full new sequence
    /// after every effective mutation.
    pub fn subscribe(&self, observer: impl Fn(&[CoinId]) + Send + Sync + 'static) -> SubscriptionId {
        let id = self.next_subscriber.fetch_add(1, Ordering::Relaxed);
        lock_ignoring_poison(&self.subscribers).push((id, Arc::new(observer)));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&self, subscription: SubscriptionId) {
        lock_ignoring_poison(&self.subscribers).retain(|(id, _)| *id != subscription.0);
    }

    fn persist(&self, ids: &[CoinId]) -> Result<(), StoreError> {
        let raw: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        self.backend.save(&raw)
    }

    // Called after the ids lock is released, so observers may re-enter the
    // store. The subscriber list is snapshotted before delivery for the same
    // reason: an observer may subscribe or unsubscribe mid-notification.
    fn notify(&self, ids: &[CoinId]) {
        tracing::debug!(count = ids.len(), "favorites changed");
        let observers: Vec<Subscriber> = lock_ignoring_poison(&self.subscribers)
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(ids);
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("ids", &self.list())
            .finish_non_exhaustive()
    }
}

fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
