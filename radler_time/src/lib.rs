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

//! # Radler time utilities
//!
//! ISO-8601 timestamp forms used when exchanging times with external services. Three
//! forms are supported:
//!
//! - the full form with millisecond precision and a zone offset,
//! - the seconds form with a zone offset,
//! - the minimal form with neither fractional seconds nor a zone.

use chrono::{DateTime, FixedOffset, NaiveDateTime, ParseError, Utc};


/// Format of a full ISO-8601 timestamp, `2024-03-01T09:30:00.000+01:00`.
pub const ISO8601_FULL: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Format of an ISO-8601 timestamp with second precision, `2024-03-01T09:30:00+01:00`.
pub const ISO8601_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format of a zone-less ISO-8601 timestamp, `2024-03-01T09:30:00`.
pub const ISO8601_MINIMAL: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_full(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(ISO8601_FULL).to_string()
}

pub fn parse_full(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(text, ISO8601_FULL)
}

pub fn format_seconds(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp.format(ISO8601_SECONDS).to_string()
}

/// The seconds form of a UTC timestamp, rendered with a `+00:00` offset.
pub fn format_seconds_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.fixed_offset().format(ISO8601_SECONDS).to_string()
}

pub fn parse_seconds(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(text, ISO8601_SECONDS)
}

pub fn format_minimal(timestamp: &NaiveDateTime) -> String {
    timestamp.format(ISO8601_MINIMAL).to_string()
}

pub fn parse_minimal(text: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(text, ISO8601_MINIMAL)
}
