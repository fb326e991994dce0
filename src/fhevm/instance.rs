// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The gateway seam: where encrypted-input and decryption requests leave
//! this crate.
//!
//! [`GatewayInstance`] forwards each operation as one JSON request to the
//! gateway's REST endpoints and parses the response. [`MockInstance`] is a
//! deterministic stand-in with no network.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy::primitives::{Address, U256};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use url::Url;

use super::types::{DecryptedValue, EncryptedInput};
use super::FhevmError;

/// Request timeout for gateway calls.
const GATEWAY_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed input proof returned by [`MockInstance`].
pub const MOCK_INPUT_PROOF: &str = "0x0100000000000000000000000000000000000000000000000000000000000000";

/// Fixed public key returned by [`MockInstance`].
pub const MOCK_PUBLIC_KEY: &str =
    "0xe4a2d0f8b3c1e4a2d0f8b3c1e4a2d0f8b3c1e4a2d0f8b3c1e4a2d0f8b3c1e4a2";

/// Plaintext value decrypted by [`MockInstance`] for every handle.
pub const MOCK_DECRYPTED_VALUE: u128 = 1000;

/// A typed plaintext queued for encryption.
///
/// Serialized as `{"type": "uint8", "value": ...}` on the gateway wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum InputValue {
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Uint128(u128),
    Uint256(U256),
    Bool(bool),
    Address(Address),
}

/// Operations the client delegates to the coprocessor gateway.
#[allow(async_fn_in_trait)]
pub trait FhevmInstance: Send + Sync {
    /// Encrypt a batch of plaintexts for a contract/user pair, producing
    /// ciphertext handles and an input proof.
    async fn encrypt_input(
        &self,
        contract_address: Address,
        user_address: Address,
        values: &[InputValue],
    ) -> Result<EncryptedInput, FhevmError>;

    /// Re-encrypt a ciphertext under the user's key, authorized by an
    /// EIP-712 signature, and return the plaintext.
    async fn reencrypt(
        &self,
        handle: &str,
        public_key: &str,
        signature: &str,
        contract_address: Address,
        user_address: Address,
    ) -> Result<DecryptedValue, FhevmError>;

    /// Publicly decrypt a ciphertext that the contract has marked
    /// decryptable.
    async fn public_decrypt(
        &self,
        contract_address: Address,
        handle: &str,
    ) -> Result<DecryptedValue, FhevmError>;

    /// Fetch the FHE public key registered for a contract.
    async fn fetch_public_key(&self, contract_address: Address) -> Result<String, FhevmError>;
}

#[derive(Debug, Deserialize)]
struct GatewayValue {
    value: DecryptedValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewayKey {
    public_key: String,
}

/// HTTP client for a decryption-gateway deployment.
#[derive(Debug, Clone)]
pub struct GatewayInstance {
    base_url: Url,
    acl_address: Option<Address>,
    http: Client,
}

impl GatewayInstance {
    pub fn new(base_url: &str, acl_address: Option<Address>) -> Result<Self, FhevmError> {
        let base_url: Url = base_url
            .parse()
            .map_err(|e: url::ParseError| FhevmError::Gateway(format!("invalid gateway URL: {e}")))?;

        let http = Client::builder()
            .timeout(GATEWAY_TIMEOUT)
            .build()
            .map_err(|e| FhevmError::Gateway(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            acl_address,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FhevmError> {
        self.base_url
            .join(path)
            .map_err(|e| FhevmError::Gateway(format!("invalid gateway endpoint {path}: {e}")))
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<T, FhevmError> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| FhevmError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FhevmError::Gateway(format!(
                "gateway returned {status} for {path}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FhevmError::InvalidResponse(e.to_string()))
    }
}

impl FhevmInstance for GatewayInstance {
    async fn encrypt_input(
        &self,
        contract_address: Address,
        user_address: Address,
        values: &[InputValue],
    ) -> Result<EncryptedInput, FhevmError> {
        let body = json!({
            "contractAddress": contract_address,
            "userAddress": user_address,
            "aclAddress": self.acl_address,
            "values": values,
        });
        self.post_json("v1/input-proof", &body).await
    }

    async fn reencrypt(
        &self,
        handle: &str,
        public_key: &str,
        signature: &str,
        contract_address: Address,
        user_address: Address,
    ) -> Result<DecryptedValue, FhevmError> {
        let body = json!({
            "handle": handle,
            "publicKey": public_key,
            "signature": signature,
            "contractAddress": contract_address,
            "userAddress": user_address,
        });
        let response: GatewayValue = self.post_json("v1/user-decrypt", &body).await?;
        Ok(response.value)
    }

    async fn public_decrypt(
        &self,
        contract_address: Address,
        handle: &str,
    ) -> Result<DecryptedValue, FhevmError> {
        let body = json!({
            "contractAddress": contract_address,
            "handle": handle,
        });
        let response: GatewayValue = self.post_json("v1/public-decrypt", &body).await?;
        Ok(response.value)
    }

    async fn fetch_public_key(&self, contract_address: Address) -> Result<String, FhevmError> {
        let url = self.endpoint("v1/keyurl")?;
        let response = self
            .http
            .get(url)
            .query(&[("contract", contract_address.to_string())])
            .send()
            .await
            .map_err(|e| FhevmError::Gateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FhevmError::Gateway(format!(
                "gateway returned {status} for v1/keyurl"
            )));
        }

        let key: GatewayKey = response
            .json()
            .await
            .map_err(|e| FhevmError::InvalidResponse(e.to_string()))?;
        Ok(key.public_key)
    }
}

/// Deterministic in-process instance: sequential handles, a fixed proof,
/// and a fixed plaintext for every decryption.
#[derive(Debug, Default)]
pub struct MockInstance {
    counter: AtomicU64,
}

impl MockInstance {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("0x{n:064x}")
    }
}

impl FhevmInstance for MockInstance {
    async fn encrypt_input(
        &self,
        _contract_address: Address,
        _user_address: Address,
        values: &[InputValue],
    ) -> Result<EncryptedInput, FhevmError> {
        if values.is_empty() {
            return Err(FhevmError::Encryption("no values to encrypt".into()));
        }

        let handles = values.iter().map(|_| self.next_handle()).collect();
        Ok(EncryptedInput {
            handles,
            input_proof: MOCK_INPUT_PROOF.to_string(),
        })
    }

    async fn reencrypt(
        &self,
        _handle: &str,
        _public_key: &str,
        _signature: &str,
        _contract_address: Address,
        _user_address: Address,
    ) -> Result<DecryptedValue, FhevmError> {
        Ok(DecryptedValue::Uint(MOCK_DECRYPTED_VALUE))
    }

    async fn public_decrypt(
        &self,
        _contract_address: Address,
        _handle: &str,
    ) -> Result<DecryptedValue, FhevmError> {
        Ok(DecryptedValue::Uint(MOCK_DECRYPTED_VALUE))
    }

    async fn fetch_public_key(&self, _contract_address: Address) -> Result<String, FhevmError> {
        Ok(MOCK_PUBLIC_KEY.to_string())
    }
}
