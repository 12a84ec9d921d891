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

//! # Radler encoding utilities
//!
//! Helpers for the standard base64 alphabet with padding.

use base64::{engine::general_purpose::STANDARD, Engine};

/// Decode a base64 string, yielding [`None`] when the input is not valid base64.
pub fn decode_base64(input: &str) -> Option<Vec<u8>> {
    STANDARD.decode(input).ok()
}

/// Encode bytes as a base64 string.
pub fn encode_base64(input: &[u8]) -> String {
    STANDARD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_valid_input() {
        assert_eq!(decode_base64("aGVsbG8="), Some(b"hello".to_vec()));
        assert_eq!(decode_base64(""), Some(Vec::new()));
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert_eq!(decode_base64("not base64!"), None);
        assert_eq!(decode_base64("aGVsbG8"), None);
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let payload = b"arbitrary \x00 bytes \xff";
        assert_eq!(decode_base64(&encode_base64(payload)), Some(payload.to_vec()));
    }
}
