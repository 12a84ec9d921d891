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

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::StoreError;


/// A typed accessor for a JSON document at a fixed filesystem path. Loading falls back to
/// a default when the file is missing or unreadable; a failed write removes the file
/// rather than leaving a stale document behind.
pub struct JsonFile<T> {
    path: PathBuf,
    default: T,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn new(path: impl Into<PathBuf>, default: T) -> Self {
        JsonFile {
            path: path.into(),
            default,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored value, or the default when the file is missing or does not decode.
    pub fn load(&self) -> T {
        match self.try_load() {
            Ok(value) => value,
            Err(error) => {
                debug!(path = %self.path.display(), %error, "Loading failed, falling back to the default.");
                self.default.clone()
            }
        }
    }

    fn try_load(&self) -> Result<T, StoreError> {
        let contents = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&contents)?)
    }

    /// Encode and write a new value, creating missing parent directories. The document is
    /// written to a sibling temporary file and moved into place. On failure the file is
    /// removed before the error is returned.
    pub fn store(&self, value: &T) -> Result<(), StoreError> {
        if let Err(error) = self.try_store(value) {
            warn!(path = %self.path.display(), %error, "Writing failed, removing the stored file.");
            if let Err(remove_error) = fs::remove_file(&self.path) {
                if remove_error.kind() != io::ErrorKind::NotFound {
                    return Err(StoreError::Io(remove_error));
                }
            }
            Err(error)
        } else {
            Ok(())
        }
    }

    fn try_store(&self, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(value)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, &bytes)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}
