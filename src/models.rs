// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the FHE API routes. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! Request fields use `#[serde(default)]` so that missing fields reach the
//! validators (which produce the route's 400 messages) instead of failing
//! JSON extraction.
//!
//! ## Model Categories
//!
//! - **Encrypt / Decrypt / Compute**: the FHE operation routes
//! - **Keys**: public-key lookup and registration
//! - **Index**: the API index route

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::fhevm::FheType;

// =============================================================================
// Encryption Models
// =============================================================================

/// Request to validate/encrypt a plaintext value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRequest {
    /// Plaintext value: number, numeric string, boolean, or address.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
    /// Target encrypted type (`euint8` … `euint64`, `ebool`, `eaddress`).
    #[serde(rename = "type", default)]
    pub fhe_type: String,
    /// Contract the ciphertext is bound to.
    #[serde(default)]
    pub contract_address: String,
    /// User producing the input.
    #[serde(default)]
    pub user_address: String,
}

/// Echo of a validated encryption request.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EncryptData {
    #[schema(value_type = Object)]
    pub value: Value,
    #[serde(rename = "type")]
    pub fhe_type: String,
    pub contract_address: String,
    pub user_address: String,
}

/// Successful encryption response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EncryptResponse {
    pub success: bool,
    pub message: String,
    pub data: EncryptData,
}

// =============================================================================
// Decryption Models
// =============================================================================

/// Request to decrypt a ciphertext handle.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    /// Ciphertext handle (`0x` + hex).
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub user_address: String,
    /// EIP-712 signature authorizing user-specific decryption.
    #[serde(default)]
    pub signature: Option<String>,
}

/// Decrypted value payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DecryptData {
    /// Plaintext rendered as a string.
    pub value: String,
    #[serde(rename = "type")]
    pub fhe_type: FheType,
    pub handle: String,
}

/// Successful decryption response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DecryptResponse {
    pub success: bool,
    pub data: DecryptData,
}

// =============================================================================
// Computation Models
// =============================================================================

/// Request for a homomorphic computation on two ciphertext handles.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    /// Operation: `add`, `sub`, `mul`, or `div`.
    #[serde(default)]
    pub operation: String,
    #[serde(default)]
    pub operand1: String,
    #[serde(default)]
    pub operand2: String,
    #[serde(default)]
    pub contract_address: String,
}

/// Computation result payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputeData {
    pub operation: String,
    /// Handle of the ciphertext produced by the operation.
    pub result_handle: String,
    pub operand1: String,
    pub operand2: String,
    pub contract_address: String,
}

/// Successful computation response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ComputeResponse {
    pub success: bool,
    pub data: ComputeData,
    pub message: String,
}

// =============================================================================
// Key Models
// =============================================================================

/// Query parameters for the key lookup route.
#[derive(Debug, Deserialize, IntoParams)]
pub struct KeyQuery {
    /// Contract address to look up.
    pub contract: Option<String>,
}

/// Public key payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyData {
    pub contract_address: String,
    pub public_key: String,
    /// Key algorithm (e.g. "TFHE").
    pub algorithm: String,
}

/// Key lookup response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct KeyResponse {
    pub success: bool,
    pub data: KeyData,
}

/// Request to register a public key for a contract.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreKeyRequest {
    #[serde(default)]
    pub contract_address: String,
    /// The public key; must be a non-empty string.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub public_key: Value,
}

/// Payload echoed after storing a key.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredKeyData {
    pub contract_address: String,
    pub public_key: String,
}

/// Key registration response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StoreKeyResponse {
    pub success: bool,
    pub message: String,
    pub data: StoredKeyData,
}

// =============================================================================
// Index Models
// =============================================================================

/// Route map returned by the API index.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiEndpoints {
    pub encrypt: String,
    pub decrypt: String,
    pub compute: String,
    pub keys: String,
}

/// API index response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IndexResponse {
    pub success: bool,
    pub message: String,
    pub endpoints: ApiEndpoints,
}

/// Echo response for the index POST route.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EchoResponse {
    pub success: bool,
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_request_tolerates_missing_fields() {
        let request: EncryptRequest = serde_json::from_str("{}").unwrap();
        assert!(request.value.is_null());
        assert!(request.fhe_type.is_empty());
        assert!(request.contract_address.is_empty());
    }

    #[test]
    fn encrypt_request_reads_camel_case() {
        let request: EncryptRequest = serde_json::from_str(
            r#"{"value":5,"type":"euint8","contractAddress":"0xabc","userAddress":"0xdef"}"#,
        )
        .unwrap();
        assert_eq!(request.fhe_type, "euint8");
        assert_eq!(request.contract_address, "0xabc");
        assert_eq!(request.user_address, "0xdef");
    }

    #[test]
    fn decrypt_data_serializes_type_field() {
        let data = DecryptData {
            value: "1000".into(),
            fhe_type: FheType::Euint32,
            handle: "0xabc".into(),
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"value":"1000","type":"euint32","handle":"0xabc"}"#);
    }

    #[test]
    fn compute_data_serializes_camel_case() {
        let data = ComputeData {
            operation: "add".into(),
            result_handle: "0x01".into(),
            operand1: "0x02".into(),
            operand2: "0x03".into(),
            contract_address: "0x04".into(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("resultHandle").is_some());
        assert!(json.get("contractAddress").is_some());
    }
}
