// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Display formatting helpers for addresses, handles, and hex values.

use crate::fhevm::FheType;

/// Truncate an address for display: `0x1234...ab12`.
///
/// `chars` is the number of hex characters kept on each side (the leading
/// side also keeps the `0x` prefix). Strings too short to truncate pass
/// through unchanged.
pub fn format_address(address: &str, chars: usize) -> String {
    if address.len() < 10 {
        return address.to_string();
    }
    let head = chars + 2;
    if address.len() <= head + chars {
        return address.to_string();
    }
    format!("{}...{}", &address[..head], &address[address.len() - chars..])
}

/// Truncate a ciphertext handle for display.
pub fn format_handle(handle: &str, chars: usize) -> String {
    if handle.len() < 16 {
        return handle.to_string();
    }
    let head = chars + 2;
    if handle.len() <= head + chars {
        return handle.to_string();
    }
    format!("{}...{}", &handle[..head], &handle[handle.len() - chars..])
}

/// Render an integer as a `0x`-prefixed hex string.
pub fn bigint_to_hex(value: u128) -> String {
    format!("0x{value:x}")
}

/// Parse a hex string into an integer.
///
/// `0x`-prefixed strings parse as hex; unprefixed strings parse as decimal.
pub fn hex_to_bigint(hex: &str) -> Result<u128, std::num::ParseIntError> {
    match hex.strip_prefix("0x").or_else(|| hex.strip_prefix("0X")) {
        Some(digits) => u128::from_str_radix(digits, 16),
        None => hex.parse::<u128>(),
    }
}

/// Human-readable name of an FHE type.
pub fn format_fhe_type(fhe_type: FheType) -> &'static str {
    match fhe_type {
        FheType::Euint8 => "Encrypted 8-bit Integer",
        FheType::Euint16 => "Encrypted 16-bit Integer",
        FheType::Euint32 => "Encrypted 32-bit Integer",
        FheType::Euint64 => "Encrypted 64-bit Integer",
        FheType::Euint128 => "Encrypted 128-bit Integer",
        FheType::Euint256 => "Encrypted 256-bit Integer",
        FheType::Ebool => "Encrypted Boolean",
        FheType::Eaddress => "Encrypted Address",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_truncation() {
        let addr = format!("0x{}", "ab12".repeat(10));
        assert_eq!(format_address(&addr, 4), "0xab12...ab12");
        assert_eq!(format_address(&addr, 6), "0xab12ab...12ab12");

        // Too short to truncate.
        assert_eq!(format_address("0x1234", 4), "0x1234");
        assert_eq!(format_address("", 4), "");
    }

    #[test]
    fn handle_truncation() {
        let handle = format!("0x{}", "0".repeat(64));
        assert_eq!(format_handle(&handle, 8), "0x00000000...00000000");

        assert_eq!(format_handle("0x12345", 8), "0x12345");
    }

    #[test]
    fn hex_round_trip() {
        assert_eq!(bigint_to_hex(255), "0xff");
        assert_eq!(bigint_to_hex(0), "0x0");

        assert_eq!(hex_to_bigint("0xff").unwrap(), 255);
        assert_eq!(hex_to_bigint("0XFF").unwrap(), 255);
        assert_eq!(hex_to_bigint("255").unwrap(), 255);
        assert!(hex_to_bigint("0xzz").is_err());
        assert!(hex_to_bigint("abc").is_err());
    }

    #[test]
    fn type_names() {
        assert_eq!(format_fhe_type(FheType::Euint8), "Encrypted 8-bit Integer");
        assert_eq!(format_fhe_type(FheType::Ebool), "Encrypted Boolean");
        assert_eq!(format_fhe_type(FheType::Eaddress), "Encrypted Address");
    }
}
