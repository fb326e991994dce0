// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Syntax and range checks guarding the FHE API, plus a per-address
//! rate limiter.
//!
//! These checks define the wire-level validity rules: Ethereum-style
//! addresses (`0x` + 40 hex chars), ciphertext handles (`0x` + hex), and
//! plaintext ranges for the encrypted integer types.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::fhevm::FheType;

/// Check Ethereum address format: `0x` followed by exactly 40 hex characters.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check ciphertext handle format: `0x` followed by one or more hex characters.
pub fn is_valid_handle(handle: &str) -> bool {
    let Some(hex) = handle.strip_prefix("0x") else {
        return false;
    };
    !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip characters usable for markup/quote injection from user input.
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '\'' | '"'))
        .collect()
}

/// Check that a plaintext value fits the given encrypted integer type.
///
/// Only euint8/16/32/64 have a range here; every other type (including
/// euint128/256, ebool, and eaddress) returns false.
pub fn validate_numeric_input(value: u128, fhe_type: FheType) -> bool {
    match fhe_type {
        FheType::Euint8 => value <= u8::MAX as u128,
        FheType::Euint16 => value <= u16::MAX as u128,
        FheType::Euint32 => value <= u32::MAX as u128,
        FheType::Euint64 => value <= u64::MAX as u128,
        _ => false,
    }
}

/// Sliding-window request limiter keyed by an opaque identifier
/// (user or contract address).
///
/// Timestamps older than the window are discarded on each check; an
/// identifier is allowed `max_requests` requests per window.
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
            max_requests,
            window,
        }
    }

    /// Record a request for `identifier` and return whether it is allowed.
    pub fn is_allowed(&self, identifier: &str) -> bool {
        let now = Instant::now();
        let Ok(mut requests) = self.requests.lock() else {
            return true;
        };

        let timestamps = requests.entry(identifier.to_string()).or_default();
        timestamps.retain(|t| now.duration_since(*t) < self.window);

        if timestamps.len() >= self.max_requests {
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Forget all recorded requests for `identifier`.
    pub fn reset(&self, identifier: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.remove(identifier);
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_RATE_LIMIT_MAX,
            Duration::from_secs(crate::config::DEFAULT_RATE_LIMIT_WINDOW_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_requires_40_hex_chars() {
        let valid = format!("0x{}", "a".repeat(40));
        assert!(is_valid_address(&valid));

        let mixed_case = format!("0x{}{}", "Ab3".repeat(13), "f");
        assert!(is_valid_address(&mixed_case));

        assert!(!is_valid_address(&format!("0x{}", "a".repeat(39))));
        assert!(!is_valid_address(&format!("0x{}", "a".repeat(41))));
        assert!(!is_valid_address(&format!("0x{}", "g".repeat(40))));
        assert!(!is_valid_address(&"a".repeat(42)));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn valid_handle_requires_hex_payload() {
        assert!(is_valid_handle("0x1"));
        assert!(is_valid_handle(&format!("0x{}", "ab12".repeat(16))));

        assert!(!is_valid_handle("0x"));
        assert!(!is_valid_handle("0xzz"));
        assert!(!is_valid_handle("1234"));
    }

    #[test]
    fn sanitize_strips_markup_characters() {
        assert_eq!(sanitize_input("<script>'x'\"y\"</script>"), "scriptxy/script");
        assert_eq!(sanitize_input("plain text"), "plain text");
    }

    #[test]
    fn numeric_ranges_per_type() {
        assert!(validate_numeric_input(255, FheType::Euint8));
        assert!(!validate_numeric_input(256, FheType::Euint8));

        assert!(validate_numeric_input(65_535, FheType::Euint16));
        assert!(!validate_numeric_input(65_536, FheType::Euint16));

        assert!(validate_numeric_input(4_294_967_295, FheType::Euint32));
        assert!(!validate_numeric_input(4_294_967_296, FheType::Euint32));

        assert!(validate_numeric_input(u64::MAX as u128, FheType::Euint64));
        assert!(!validate_numeric_input(u64::MAX as u128 + 1, FheType::Euint64));

        // Non-integer and oversized types have no plaintext range here.
        assert!(!validate_numeric_input(0, FheType::Ebool));
        assert!(!validate_numeric_input(0, FheType::Eaddress));
        assert!(!validate_numeric_input(0, FheType::Euint128));
        assert!(!validate_numeric_input(0, FheType::Euint256));
    }

    #[test]
    fn rate_limiter_allows_up_to_max() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));

        assert!(limiter.is_allowed("0xabc"));
        assert!(limiter.is_allowed("0xabc"));
        assert!(limiter.is_allowed("0xabc"));
        assert!(!limiter.is_allowed("0xabc"));

        // Separate identifiers have separate windows.
        assert!(limiter.is_allowed("0xdef"));
    }

    #[test]
    fn rate_limiter_reset_clears_identifier() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.is_allowed("0xabc"));
        assert!(!limiter.is_allowed("0xabc"));

        limiter.reset("0xabc");
        assert!(limiter.is_allowed("0xabc"));
    }

    #[test]
    fn rate_limiter_window_expiry() {
        let limiter = RateLimiter::new(1, Duration::from_millis(1));
        assert!(limiter.is_allowed("0xabc"));

        std::thread::sleep(Duration::from_millis(5));

        assert!(limiter.is_allowed("0xabc"));
    }
}
