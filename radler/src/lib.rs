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

//! # Radler
//!
//! A grab-bag of small utilities for application development. The version and collection
//! types are always available; the remaining members are enabled by feature.

pub use radler_collections as collections;
pub use radler_version as version;

#[cfg(feature = "store")]
pub use radler_store as store;

#[cfg(feature = "encoding")]
pub use radler_encoding as encoding;

#[cfg(feature = "time")]
pub use radler_time as time;

#[cfg(feature = "legal")]
pub use radler_legal as legal;
