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

use thiserror::Error;

/// Possible failure modes for the persistence accessors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("An error occurred accessing the underlying store.")]
    Io(#[from] std::io::Error),
    #[error("A stored value could not be encoded or decoded.")]
    Codec(#[from] serde_json::Error),
}
