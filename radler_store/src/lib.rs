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

//! # Radler typed persistence accessors
//!
//! Read-through/write-through accessors for a single typed value held in an injected
//! storage capability. A read that finds nothing, or a payload that no longer decodes,
//! yields a caller supplied default rather than an error.
//!
//! This crate contains:
//!
//! - The byte oriented [key value capability](`KeyValueStore`) and an in process
//!   [implementation](`MemoryStore`) of it.
//! - A [typed accessor](`StoredValue`) for one keyed entry of a key value store.
//! - A [typed accessor](`JsonFile`) for a JSON document at a filesystem path.

mod error;
mod file;
mod keyvalue;

pub use error::StoreError;
pub use file::JsonFile;
pub use keyvalue::{KeyValueStore, MemoryStore, StoredValue};
