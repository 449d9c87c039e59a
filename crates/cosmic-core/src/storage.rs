//! Best-effort persistence of panel positions.
//!
//! Positions for one HUD set live under a single key,
//! `{namespace}_{mode lowercased}_positions`, whose value is a JSON object
//! mapping panel id to `{"x": .., "y": ..}`. Every failure at this boundary
//! is logged and turned into "nothing persisted"; callers never see an error.

use crate::constants::POSITIONS_KEY_SUFFIX;
use fnv::FnvHashMap;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },

    #[error("malformed persisted JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// String key-value storage, shaped after the browser's `Storage` API.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process store used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<FnvHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store that always fails, standing in for disabled storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl KvStore for NullStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct StoredPosition {
    x: f32,
    y: f32,
}

type StoredMap = BTreeMap<String, StoredPosition>;

pub fn positions_key(namespace: &str, mode: &str) -> String {
    format!(
        "{}_{}_{}",
        namespace,
        mode.to_lowercase(),
        POSITIONS_KEY_SUFFIX
    )
}

/// Positions of one HUD set, addressed by `(namespace, mode)`.
#[derive(Clone)]
pub struct PositionStore {
    store: Rc<dyn KvStore>,
    namespace: String,
    mode: String,
}

impl PositionStore {
    pub fn new(store: Rc<dyn KvStore>, namespace: &str, mode: &str) -> Self {
        Self {
            store,
            namespace: namespace.to_string(),
            mode: mode.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn key(&self) -> String {
        positions_key(&self.namespace, &self.mode)
    }

    /// Read every persisted position. Failures yield an empty map.
    pub fn load(&self) -> FnvHashMap<String, Vec2> {
        match self.read_map() {
            Ok(map) => map
                .into_iter()
                .filter(|(_, p)| p.x.is_finite() && p.y.is_finite())
                .map(|(id, p)| (id, Vec2::new(p.x, p.y)))
                .collect(),
            Err(e) => {
                log::warn!("[storage] load {} failed: {}", self.key(), e);
                FnvHashMap::default()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Vec2> {
        self.load().get(id).copied()
    }

    /// Record `position` for panel `id`, keeping the other entries.
    /// Returns whether the write reached storage.
    pub fn persist_position(&self, id: &str, position: Vec2) -> bool {
        if !position.is_finite() {
            log::warn!("[storage] refusing non-finite position for {}", id);
            return false;
        }
        match self.write_entry(id, position) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[storage] persist {}:{} failed: {}", self.namespace, id, e);
                false
            }
        }
    }

    /// Drop every persisted position for this namespace and mode.
    pub fn clear(&self) -> bool {
        match self.store.remove(&self.key()) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("[storage] clear {} failed: {}", self.key(), e);
                false
            }
        }
    }

    fn read_map(&self) -> Result<StoredMap, StorageError> {
        match self.store.get(&self.key())? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(StoredMap::new()),
        }
    }

    fn write_entry(&self, id: &str, position: Vec2) -> Result<(), StorageError> {
        // A malformed value is overwritten rather than blocking new writes.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Malformed(e)) => {
                log::warn!("[storage] discarding malformed {}: {}", self.key(), e);
                StoredMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(
            id.to_string(),
            StoredPosition {
                x: position.x,
                y: position.y,
            },
        );
        let raw = serde_json::to_string(&map)?;
        self.store.set(&self.key(), &raw)
    }
}
