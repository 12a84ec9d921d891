// Copyright 2024-2026 Radler Contributors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::StoreError;


/// A byte oriented key value storage capability. Implementations hold opaque payloads
/// against string keys; interpreting the payloads is the caller's concern.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// An in process [`KeyValueStore`]. Clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.inner.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.inner.lock().insert(key.to_owned(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.lock().remove(key);
        Ok(())
    }
}

/// A typed accessor for a single keyed entry of a [`KeyValueStore`]. Values are encoded as
/// JSON. Reading falls back to a default when the key is missing or the stored payload
/// does not decode as `T`.
pub struct StoredValue<T, S> {
    key: String,
    default: T,
    store: S,
}

impl<T, S> StoredValue<T, S>
where
    T: Serialize + DeserializeOwned + Clone,
    S: KeyValueStore,
{
    pub fn new(key: impl Into<String>, default: T, store: S) -> Self {
        StoredValue {
            key: key.into(),
            default,
            store,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current value, or the default when the entry is missing or unreadable.
    pub fn get(&self) -> T {
        match self.store.get(&self.key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(error) => {
                    warn!(key = %self.key, %error, "Stored payload failed to decode, falling back to the default.");
                    self.default.clone()
                }
            },
            Ok(None) => self.default.clone(),
            Err(error) => {
                warn!(key = %self.key, %error, "Reading from the store failed, falling back to the default.");
                self.default.clone()
            }
        }
    }

    /// Encode and write a new value. A value that cannot be encoded removes the entry
    /// instead of leaving the previous payload behind.
    pub fn set(&self, value: &T) -> Result<(), StoreError> {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.store.put(&self.key, &bytes),
            Err(error) => {
                warn!(key = %self.key, %error, "Encoding failed, removing the stored entry.");
                self.store.remove(&self.key)
            }
        }
    }
}
