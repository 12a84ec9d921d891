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

//! # Radler attribution data
//!
//! Value types describing the third party libraries an application ships, for credit and
//! license screens. Rendering is the caller's concern; this crate only carries the data.

use std::fmt::{Display, Formatter};

use uuid::Uuid;

/// License identifiers for attribution entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseKind {
    Mit,
    Bsd3,
    Apache2,
}

impl LicenseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseKind::Mit => "MIT",
            LicenseKind::Bsd3 => "BSD-3",
            LicenseKind::Apache2 => "Apache-2.0",
        }
    }
}

impl Display for LicenseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const PLACEHOLDER_TEXT: &str = "No license text found!";

/// License texts shipped with the library, keyed by library name.
const BUNDLED_TEXTS: &[(&str, &str)] = &[("radler", include_str!("../licenses/apache-2.0.txt"))];

/// The bundled license text for a library, or a fixed placeholder when none is bundled
/// under that name.
pub fn bundled_license_text(name: &str) -> &'static str {
    BUNDLED_TEXTS
        .iter()
        .find(|(library, _)| *library == name)
        .map(|(_, text)| *text)
        .unwrap_or(PLACEHOLDER_TEXT)
}

/// Attribution details for a single third party library. Every instance gets a fresh id so
/// entries with identical contents stay distinguishable in a rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryAttribution {
    id: Uuid,
    pub name: String,
    pub short_name: Option<String>,
    pub version: String,
    pub license: LicenseKind,
    pub license_text: String,
    pub copyright: String,
    pub url: String,
}

impl LibraryAttribution {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        license: LicenseKind,
        license_text: impl Into<String>,
        copyright: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        LibraryAttribution {
            id: Uuid::new_v4(),
            name: name.into(),
            short_name: None,
            version: version.into(),
            license,
            license_text: license_text.into(),
            copyright: copyright.into(),
            url: url.into(),
        }
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}
