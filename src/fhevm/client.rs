// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! FHEVM client over a host chain and a decryption gateway.
//!
//! Construction is initialization: [`FhevmClient::connect`] returns a ready
//! client or an error. There is no process-wide singleton; callers hold the
//! client and pass it where it is needed.

use std::str::FromStr;

use alloy::{
    primitives::Address,
    providers::{Provider, ProviderBuilder},
};

use super::encryption::EncryptedInputBuilder;
use super::instance::{FhevmInstance, GatewayInstance};
use super::types::{NetworkConfig, ZAMA_DEVNET};
use super::FhevmError;
use crate::config::{FHEVM_ACL_ADDRESS_ENV, FHEVM_GATEWAY_URL_ENV, FHEVM_RPC_URL_ENV};

/// Connection parameters for an FHEVM deployment.
#[derive(Debug, Clone)]
pub struct FhevmClientConfig {
    /// Host-chain RPC endpoint.
    pub rpc_url: String,
    /// Decryption gateway base URL.
    pub gateway_url: String,
    /// ACL contract address, if the deployment uses one.
    pub acl_address: Option<Address>,
}

impl FhevmClientConfig {
    pub fn new(rpc_url: impl Into<String>, gateway_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            gateway_url: gateway_url.into(),
            acl_address: None,
        }
    }

    pub fn with_acl_address(mut self, acl_address: Address) -> Self {
        self.acl_address = Some(acl_address);
        self
    }

    /// Configuration for a known deployment.
    pub fn for_network(network: &NetworkConfig) -> Self {
        Self::new(network.rpc_url, network.gateway_url)
    }

    /// Read the configuration from the environment.
    ///
    /// Returns `Ok(None)` when `FHEVM_RPC_URL` is unset (mock-only mode).
    /// The gateway URL defaults to the Zama devnet gateway.
    pub fn from_env() -> Result<Option<Self>, FhevmError> {
        let Ok(rpc_url) = std::env::var(FHEVM_RPC_URL_ENV) else {
            return Ok(None);
        };

        let gateway_url = std::env::var(FHEVM_GATEWAY_URL_ENV)
            .unwrap_or_else(|_| ZAMA_DEVNET.gateway_url.to_string());

        let acl_address = match std::env::var(FHEVM_ACL_ADDRESS_ENV) {
            Ok(raw) => Some(
                Address::from_str(&raw).map_err(|e| FhevmError::InvalidAddress(e.to_string()))?,
            ),
            Err(_) => None,
        };

        Ok(Some(Self {
            rpc_url,
            gateway_url,
            acl_address,
        }))
    }
}

/// A connected FHEVM client.
///
/// Generic over the [`FhevmInstance`] seam so tests and demos can inject
/// [`MockInstance`](super::MockInstance) instead of the HTTP gateway.
pub struct FhevmClient<I> {
    config: FhevmClientConfig,
    chain_id: u64,
    instance: I,
}

impl FhevmClient<GatewayInstance> {
    /// Connect to the deployment: query the host chain id and build the
    /// gateway instance.
    pub async fn connect(config: FhevmClientConfig) -> Result<Self, FhevmError> {
        let url: url::Url = config
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| FhevmError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);
        let chain_id = provider
            .get_chain_id()
            .await
            .map_err(|e| FhevmError::Rpc(e.to_string()))?;

        let instance = GatewayInstance::new(&config.gateway_url, config.acl_address)?;

        Ok(Self {
            config,
            chain_id,
            instance,
        })
    }
}

impl<I: FhevmInstance> FhevmClient<I> {
    /// Build a client from parts, injecting the instance directly.
    pub fn with_instance(config: FhevmClientConfig, chain_id: u64, instance: I) -> Self {
        Self {
            config,
            chain_id,
            instance,
        }
    }

    pub fn config(&self) -> &FhevmClientConfig {
        &self.config
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }

    /// Start an encrypted-input batch for a contract/user pair.
    pub fn create_encrypted_input(
        &self,
        contract_address: Address,
        user_address: Address,
    ) -> EncryptedInputBuilder<'_, I> {
        EncryptedInputBuilder::new(self, contract_address, user_address)
    }

    /// Fetch the FHE public key registered for a contract.
    pub async fn get_public_key(&self, contract_address: Address) -> Result<String, FhevmError> {
        self.instance.fetch_public_key(contract_address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhevm::instance::{MockInstance, MOCK_PUBLIC_KEY};

    fn mock_client() -> FhevmClient<MockInstance> {
        let config = FhevmClientConfig::new("http://localhost:8545", "http://localhost:7077");
        FhevmClient::with_instance(config, ZAMA_DEVNET.chain_id, MockInstance::new())
    }

    #[test]
    fn with_instance_exposes_parts() {
        let client = mock_client();
        assert_eq!(client.chain_id(), 8009);
        assert_eq!(client.config().gateway_url, "http://localhost:7077");
        assert!(client.config().acl_address.is_none());
    }

    #[test]
    fn config_builder_sets_acl() {
        let config = FhevmClientConfig::new("http://localhost:8545", "http://localhost:7077")
            .with_acl_address(Address::ZERO);
        assert_eq!(config.acl_address, Some(Address::ZERO));
    }

    #[test]
    fn config_for_known_network() {
        let config = FhevmClientConfig::for_network(&crate::fhevm::ZAMA_SEPOLIA);
        assert_eq!(config.gateway_url, "https://gateway.sepolia.zama.ai");
        assert!(config.rpc_url.starts_with("https://"));
    }

    #[tokio::test]
    async fn get_public_key_delegates_to_instance() {
        let client = mock_client();
        let key = client.get_public_key(Address::ZERO).await.unwrap();
        assert_eq!(key, MOCK_PUBLIC_KEY);
    }
}
