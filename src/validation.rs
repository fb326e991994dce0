// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request validators for the FHE API routes.
//!
//! Each validator checks fields in a fixed order and reports the first
//! failure; the `Display` strings of [`ValidationError`] are the
//! wire-visible `error` values of the 400 responses.

use std::str::FromStr;

use serde_json::Value;

use crate::fhevm::FheType;
use crate::security::{is_valid_address, is_valid_handle, validate_numeric_input};

/// First validation failure of a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid contract address")]
    InvalidContractAddress,

    #[error("Invalid user address")]
    InvalidUserAddress,

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Value must be boolean for ebool type")]
    NotBoolean,

    #[error("Invalid address value")]
    InvalidAddressValue,

    #[error("Invalid numeric value")]
    InvalidNumericValue,

    #[error("Value out of range for {0}")]
    OutOfRange(FheType),

    #[error("Invalid handle format")]
    InvalidHandle,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid operand1 handle")]
    InvalidOperand1,

    #[error("Invalid operand2 handle")]
    InvalidOperand2,
}

/// Homomorphic operations accepted by the compute route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FheOperation {
    Add,
    Sub,
    Mul,
    Div,
}

impl FheOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FheOperation::Add => "add",
            FheOperation::Sub => "sub",
            FheOperation::Mul => "mul",
            FheOperation::Div => "div",
        }
    }
}

impl FromStr for FheOperation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(FheOperation::Add),
            "sub" => Ok(FheOperation::Sub),
            "mul" => Ok(FheOperation::Mul),
            "div" => Ok(FheOperation::Div),
            other => Err(ValidationError::InvalidOperation(other.to_string())),
        }
    }
}

/// Validate an encryption request and return the parsed FHE type.
///
/// Accepted types are euint8/16/32/64, ebool, and eaddress; the oversized
/// integer types are not encryptable through this API.
pub fn validate_encryption_request(
    value: &Value,
    fhe_type: &str,
    contract_address: &str,
    user_address: &str,
) -> Result<FheType, ValidationError> {
    if !is_valid_address(contract_address) {
        return Err(ValidationError::InvalidContractAddress);
    }

    if !is_valid_address(user_address) {
        return Err(ValidationError::InvalidUserAddress);
    }

    let parsed = FheType::from_str(fhe_type)
        .map_err(|_| ValidationError::InvalidType(fhe_type.to_string()))?;

    match parsed {
        FheType::Ebool => {
            if !value.is_boolean() {
                return Err(ValidationError::NotBoolean);
            }
        }
        FheType::Eaddress => {
            let ok = value.as_str().is_some_and(is_valid_address);
            if !ok {
                return Err(ValidationError::InvalidAddressValue);
            }
        }
        FheType::Euint8 | FheType::Euint16 | FheType::Euint32 | FheType::Euint64 => {
            let numeric = parse_numeric(value).ok_or(ValidationError::InvalidNumericValue)?;
            if !validate_numeric_input(numeric, parsed) {
                return Err(ValidationError::OutOfRange(parsed));
            }
        }
        FheType::Euint128 | FheType::Euint256 => {
            return Err(ValidationError::InvalidType(fhe_type.to_string()));
        }
    }

    Ok(parsed)
}

/// Validate a decryption request.
pub fn validate_decryption_request(
    handle: &str,
    contract_address: &str,
    user_address: &str,
) -> Result<(), ValidationError> {
    if !is_valid_handle(handle) {
        return Err(ValidationError::InvalidHandle);
    }

    if !is_valid_address(contract_address) {
        return Err(ValidationError::InvalidContractAddress);
    }

    if !is_valid_address(user_address) {
        return Err(ValidationError::InvalidUserAddress);
    }

    Ok(())
}

/// Validate a computation request and return the parsed operation.
pub fn validate_computation_request(
    operation: &str,
    operand1: &str,
    operand2: &str,
    contract_address: &str,
) -> Result<FheOperation, ValidationError> {
    let parsed = FheOperation::from_str(operation)?;

    if !is_valid_handle(operand1) {
        return Err(ValidationError::InvalidOperand1);
    }

    if !is_valid_handle(operand2) {
        return Err(ValidationError::InvalidOperand2);
    }

    if !is_valid_address(contract_address) {
        return Err(ValidationError::InvalidContractAddress);
    }

    Ok(parsed)
}

/// Parse a JSON value as a non-negative integer.
///
/// Accepts JSON numbers without a fractional part and strings in decimal or
/// `0x`-hex form.
fn parse_numeric(value: &Value) -> Option<u128> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return Some(u as u128);
            }
            // Integral floats are accepted; anything negative or fractional
            // is not a plaintext.
            let f = n.as_f64()?;
            if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
                Some(f as u128)
            } else {
                None
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                u128::from_str_radix(hex, 16).ok()
            } else {
                s.parse::<u128>().ok()
            }
        }
        _ => None,
    }
}
