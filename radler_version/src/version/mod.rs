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
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{
    de::{Error as DeserializeError, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

#[cfg(test)]
mod tests;

/// The number of dotted components a [`VersionNumber`] was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionFormat {
    TwoComponent,
    ThreeComponent,
}

/// A release version, either `major.minor` or `major.minor.patch`. Versions are immutable
/// once constructed and equality is structural, including whether a patch component is
/// present. The canonical textual form produced by [`Display`] is the exact inverse of
/// parsing with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionNumber {
    major: u64,
    minor: u64,
    patch: Option<u64>,
}

impl VersionNumber {
    /// A two component version.
    pub fn new(major: u64, minor: u64) -> Self {
        VersionNumber {
            major,
            minor,
            patch: None,
        }
    }

    /// A three component version.
    pub fn with_patch(major: u64, minor: u64, patch: u64) -> Self {
        VersionNumber {
            major,
            minor,
            patch: Some(patch),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component, if the version has one.
    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn format(&self) -> VersionFormat {
        if self.patch.is_some() {
            VersionFormat::ThreeComponent
        } else {
            VersionFormat::TwoComponent
        }
    }

    /// Whether this version is ordered strictly before `other`. The major components decide
    /// when they differ, then the minors, then the patches when both versions have one. A
    /// two component version is never strictly before a three component version with the
    /// same major and minor, whatever the patch.
    pub fn precedes(&self, other: &VersionNumber) -> bool {
        if self.major != other.major {
            self.major < other.major
        } else if self.minor != other.minor {
            self.minor < other.minor
        } else if let (Some(lhs), Some(rhs)) = (self.patch, other.patch) {
            lhs < rhs
        } else {
            false
        }
    }

    /// Whether this version is ordered after `other`, defined as `self != other &&
    /// !self.precedes(other)`. For a two and a three component version sharing major and
    /// minor this holds in both directions, so `precedes` and `succeeds` do not form a
    /// total order across the two forms. [`PartialOrd`] is not implemented for this reason.
    pub fn succeeds(&self, other: &VersionNumber) -> bool {
        self != other && !self.precedes(other)
    }
}

impl Display for VersionNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let VersionNumber {
            major,
            minor,
            patch,
        } = self;
        if let Some(patch) = patch {
            write!(f, "{}.{}.{}", major, minor, patch)
        } else {
            write!(f, "{}.{}", major, minor)
        }
    }
}

/// Error produced when a string does not describe a release version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidVersionNumber(String);

impl InvalidVersionNumber {
    pub fn new(bad_version: String) -> Self {
        InvalidVersionNumber(bad_version)
    }
}

impl Display for InvalidVersionNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a valid version number.", &self.0)
    }
}

impl std::error::Error for InvalidVersionNumber {}

impl FromStr for VersionNumber {
    type Err = InvalidVersionNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.contains("..") || s.starts_with('.') || s.ends_with('.') {
            return Err(InvalidVersionNumber(s.to_owned()));
        }
        let parts = s.split('.').collect::<Vec<_>>();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(InvalidVersionNumber(s.to_owned()));
        }
        let components = parts
            .iter()
            .map(|part| part.parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| InvalidVersionNumber(s.to_owned()))?;
        Ok(VersionNumber {
            major: components[0],
            minor: components[1],
            patch: components.get(2).copied(),
        })
    }
}

impl TryFrom<&str> for VersionNumber {
    type Error = InvalidVersionNumber;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = InvalidVersionNumber;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match Self::from_str(value.as_str()) {
            Ok(version) => Ok(version),
            Err(_) => Err(InvalidVersionNumber(value)),
        }
    }
}

impl Serialize for VersionNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VersionNumberVisitor;

        impl<'de> Visitor<'de> for VersionNumberVisitor {
            type Value = VersionNumber;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                formatter.write_str("a dotted version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: DeserializeError,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionNumberVisitor)
    }
}
