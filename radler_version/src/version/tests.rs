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

use super::{VersionFormat, VersionNumber};

fn assert_parses(input: &str, major: u64, minor: u64, patch: Option<u64>) {
    let version = input
        .parse::<VersionNumber>()
        .unwrap_or_else(|_| panic!("'{}' failed to parse", input));
    assert_eq!(version.major(), major, "for input: {}", input);
    assert_eq!(version.minor(), minor, "for input: {}", input);
    assert_eq!(version.patch(), patch, "for input: {}", input);
}

#[test]
fn construct_three_component() {
    let version = VersionNumber::with_patch(1, 2, 3);
    assert_eq!(version.major(), 1);
    assert_eq!(version.minor(), 2);
    assert_eq!(version.patch(), Some(3));
    assert_eq!(version.format(), VersionFormat::ThreeComponent);
}

#[test]
fn construct_two_component() {
    let version = VersionNumber::new(1, 2);
    assert_eq!(version.major(), 1);
    assert_eq!(version.minor(), 2);
    assert_eq!(version.patch(), None);
    assert_eq!(version.format(), VersionFormat::TwoComponent);
}

#[test]
fn parse_valid_strings() {
    let three_component = [
        ("1.2.3", 1, 2, 3),
        ("0.0.0", 0, 0, 0),
        ("10.20.30", 10, 20, 30),
        ("135.1453.1345", 135, 1453, 1345),
    ];
    for (input, major, minor, patch) in three_component {
        assert_parses(input, major, minor, Some(patch));
    }
    let two_component = [("1.2", 1, 2), ("0.0", 0, 0), ("10.20", 10, 20)];
    for (input, major, minor) in two_component {
        assert_parses(input, major, minor, None);
    }
}

#[test]
fn parse_invalid_strings() {
    let invalid = [
        "", "a.3.4", "2,3,4", "3.3.fa", "3.a3.3", "blub", "1", "1.2.3.4", ".1.2", "1..2",
        "1.2.", "-1.2.3", "1. 2",
    ];
    for input in invalid {
        assert!(
            input.parse::<VersionNumber>().is_err(),
            "expected '{}' to be rejected",
            input
        );
    }
}

#[test]
fn invalid_error_names_input() {
    let error = "blub".parse::<VersionNumber>().unwrap_err();
    assert_eq!(error.to_string(), "'blub' is not a valid version number.");
}

#[test]
fn canonical_form() {
    assert_eq!(VersionNumber::with_patch(1, 2, 3).to_string(), "1.2.3");
    assert_eq!(VersionNumber::new(1, 2).to_string(), "1.2");
}

#[test]
fn round_trip() {
    let versions = [
        VersionNumber::new(0, 0),
        VersionNumber::new(3, 17),
        VersionNumber::with_patch(1, 2, 3),
        VersionNumber::with_patch(135, 1453, 1345),
    ];
    for version in versions {
        assert_eq!(version.to_string().parse::<VersionNumber>(), Ok(version));
    }
}

#[test]
fn equality_is_structural() {
    assert_eq!(
        VersionNumber::with_patch(1, 2, 3),
        VersionNumber::with_patch(1, 2, 3)
    );
    assert_eq!(VersionNumber::new(1, 2), VersionNumber::new(1, 2));
    assert_ne!(
        VersionNumber::with_patch(2, 2, 3),
        VersionNumber::with_patch(1, 2, 3)
    );
    assert_ne!(
        VersionNumber::with_patch(1, 3, 3),
        VersionNumber::with_patch(1, 2, 3)
    );
    assert_ne!(
        VersionNumber::with_patch(1, 2, 4),
        VersionNumber::with_patch(1, 2, 3)
    );
    // The two forms are never equal, even with matching major and minor.
    assert_ne!(VersionNumber::new(1, 2), VersionNumber::with_patch(1, 2, 0));
}

#[test]
fn ordering_of_three_component_versions() {
    let a = VersionNumber::with_patch(1, 0, 0);
    let b = VersionNumber::with_patch(1, 1, 0);
    let c = VersionNumber::with_patch(1, 1, 1);
    let d = VersionNumber::with_patch(2, 0, 0);
    assert!(a.precedes(&b));
    assert!(b.precedes(&c));
    assert!(c.precedes(&d));
    assert!(d.succeeds(&c));
    assert!(c.succeeds(&b));
    assert!(b.succeeds(&a));
    assert!(!a.precedes(&a));
    assert!(!a.succeeds(&a));
}

#[test]
fn ordering_of_mixed_form_versions() {
    let two = VersionNumber::new(3, 3);
    assert!(two.precedes(&VersionNumber::with_patch(4, 2, 3)));
    assert!(two.precedes(&VersionNumber::with_patch(3, 4, 3)));
    // A two component version is never strictly before the same prefix with a patch.
    assert!(!two.precedes(&VersionNumber::with_patch(3, 3, 3)));
    assert!(two.succeeds(&VersionNumber::with_patch(2, 3, 3)));
    assert!(two.succeeds(&VersionNumber::with_patch(3, 2, 3)));

    let three = VersionNumber::with_patch(3, 3, 3);
    assert!(three.precedes(&VersionNumber::new(4, 2)));
    assert!(three.precedes(&VersionNumber::new(3, 4)));
    assert!(!three.precedes(&VersionNumber::new(3, 3)));
    assert!(three.succeeds(&VersionNumber::new(2, 3)));
    assert!(three.succeeds(&VersionNumber::new(3, 2)));

    // Unequal versions that neither form places first satisfy succeeds both ways.
    assert!(two.succeeds(&three));
    assert!(three.succeeds(&two));
}

#[test]
fn try_from_strings() {
    assert_eq!(
        VersionNumber::try_from("1.2.3"),
        Ok(VersionNumber::with_patch(1, 2, 3))
    );
    assert_eq!(
        VersionNumber::try_from("4.5".to_string()),
        Ok(VersionNumber::new(4, 5))
    );
    assert!(VersionNumber::try_from("nope").is_err());
    assert!(VersionNumber::try_from("nope".to_string()).is_err());
}

#[test]
fn serde_round_trip() {
    let version = VersionNumber::with_patch(1, 2, 3);
    let encoded = serde_json::to_string(&version).unwrap();
    assert_eq!(encoded, "\"1.2.3\"");
    let decoded: VersionNumber = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, version);

    let two = VersionNumber::new(7, 9);
    let encoded = serde_json::to_string(&two).unwrap();
    assert_eq!(encoded, "\"7.9\"");
    let decoded: VersionNumber = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, two);
}

#[test]
fn serde_rejects_malformed_strings() {
    assert!(serde_json::from_str::<VersionNumber>("\"1..2\"").is_err());
    assert!(serde_json::from_str::<VersionNumber>("\"blub\"").is_err());
    assert!(serde_json::from_str::<VersionNumber>("3").is_err());
}
