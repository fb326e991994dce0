// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! FHEVM wire types and network constants.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Encrypted data types supported by the FHEVM coprocessor.
///
/// Wire names are the lowercase Solidity-style type names (`euint8`, …,
/// `ebool`, `eaddress`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FheType {
    Euint8,
    Euint16,
    Euint32,
    Euint64,
    Euint128,
    Euint256,
    Ebool,
    Eaddress,
}

impl FheType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FheType::Euint8 => "euint8",
            FheType::Euint16 => "euint16",
            FheType::Euint32 => "euint32",
            FheType::Euint64 => "euint64",
            FheType::Euint128 => "euint128",
            FheType::Euint256 => "euint256",
            FheType::Ebool => "ebool",
            FheType::Eaddress => "eaddress",
        }
    }
}

impl fmt::Display for FheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known FHE type name.
#[derive(Debug, thiserror::Error)]
#[error("unknown FHE type: {0}")]
pub struct ParseFheTypeError(pub String);

impl FromStr for FheType {
    type Err = ParseFheTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "euint8" => Ok(FheType::Euint8),
            "euint16" => Ok(FheType::Euint16),
            "euint32" => Ok(FheType::Euint32),
            "euint64" => Ok(FheType::Euint64),
            "euint128" => Ok(FheType::Euint128),
            "euint256" => Ok(FheType::Euint256),
            "ebool" => Ok(FheType::Ebool),
            "eaddress" => Ok(FheType::Eaddress),
            other => Err(ParseFheTypeError(other.to_string())),
        }
    }
}

/// Result of encrypting a batch of inputs: one ciphertext handle per value
/// plus the zero-knowledge input proof produced by the coprocessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedInput {
    /// Opaque ciphertext handles, one per added value.
    pub handles: Vec<String>,
    /// ZK proof binding the handles to the contract/user pair.
    pub input_proof: String,
}

/// A decrypted plaintext value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum DecryptedValue {
    Uint(u128),
    Bool(bool),
    Address(String),
}

/// Decryption outcome: the plaintext and the (inferred) encrypted type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DecryptionResult {
    pub value: DecryptedValue,
    #[serde(rename = "type")]
    pub fhe_type: FheType,
}

/// EIP-712 authorization material for user-specific decryption.
///
/// The signature is produced by the user's wallet; this crate only carries
/// it to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Signature {
    pub signature: String,
    pub public_key: String,
}

/// A decryption request against a ciphertext handle.
#[derive(Debug, Clone)]
pub struct DecryptionRequest {
    /// Contract that owns the ciphertext.
    pub contract_address: Address,
    /// Ciphertext handle (`0x` + hex).
    pub handle: String,
    /// Requesting user.
    pub user_address: Address,
    /// EIP-712 authorization; required for user decryption only.
    pub signature: Option<Eip712Signature>,
}

/// FHEVM deployment configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: &'static str,
    /// Decryption gateway base URL
    pub gateway_url: &'static str,
}

/// Zama devnet deployment.
pub const ZAMA_DEVNET: NetworkConfig = NetworkConfig {
    name: "Zama Devnet",
    chain_id: 8009,
    rpc_url: "https://devnet.zama.ai",
    gateway_url: "https://gateway.devnet.zama.ai",
};

/// Sepolia coprocessor deployment.
pub const ZAMA_SEPOLIA: NetworkConfig = NetworkConfig {
    name: "Sepolia",
    chain_id: 11_155_111,
    rpc_url: "https://eth-sepolia.public.blastapi.io",
    gateway_url: "https://gateway.sepolia.zama.ai",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fhe_type_round_trips_through_str() {
        for ty in [
            FheType::Euint8,
            FheType::Euint16,
            FheType::Euint32,
            FheType::Euint64,
            FheType::Euint128,
            FheType::Euint256,
            FheType::Ebool,
            FheType::Eaddress,
        ] {
            assert_eq!(ty.as_str().parse::<FheType>().unwrap(), ty);
        }

        assert!("euint512".parse::<FheType>().is_err());
        assert!("EUINT8".parse::<FheType>().is_err());
    }

    #[test]
    fn fhe_type_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&FheType::Euint32).unwrap(),
            r#""euint32""#
        );
        let parsed: FheType = serde_json::from_str(r#""eaddress""#).unwrap();
        assert_eq!(parsed, FheType::Eaddress);
    }

    #[test]
    fn encrypted_input_serializes_camel_case() {
        let input = EncryptedInput {
            handles: vec!["0x01".into()],
            input_proof: "0xff".into(),
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(json, r#"{"handles":["0x01"],"inputProof":"0xff"}"#);
    }

    #[test]
    fn decrypted_value_is_untagged() {
        assert_eq!(
            serde_json::to_string(&DecryptedValue::Uint(1000)).unwrap(),
            "1000"
        );
        assert_eq!(
            serde_json::to_string(&DecryptedValue::Bool(true)).unwrap(),
            "true"
        );
    }
}
