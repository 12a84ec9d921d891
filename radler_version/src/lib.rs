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

//! # Radler release versions
//!
//! A release version is a dotted `major.minor` or `major.minor.patch` identifier used to
//! order the builds of an application. The two forms are distinct values; a version keeps
//! track of which form it was built from.
//!
//! This crate contains:
//!
//! - The [version number](`VersionNumber`) value type with parsing, formatting and
//!   comparison.
//! - The [error](`InvalidVersionNumber`) produced when a string does not describe a version.

mod version;

pub use version::{InvalidVersionNumber, VersionFormat, VersionNumber};
