// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Encrypted-input builder.
//!
//! Accumulates typed plaintexts for one contract/user pair; `encrypt()`
//! submits the whole batch to the instance in one call. The builder itself
//! performs no cryptography.

use alloy::primitives::{Address, U256};

use super::client::FhevmClient;
use super::instance::{FhevmInstance, InputValue};
use super::types::EncryptedInput;
use super::FhevmError;

/// Builder for a batch of encrypted inputs.
pub struct EncryptedInputBuilder<'a, I> {
    client: &'a FhevmClient<I>,
    contract_address: Address,
    user_address: Address,
    values: Vec<InputValue>,
}

impl<'a, I: FhevmInstance> EncryptedInputBuilder<'a, I> {
    pub(super) fn new(
        client: &'a FhevmClient<I>,
        contract_address: Address,
        user_address: Address,
    ) -> Self {
        Self {
            client,
            contract_address,
            user_address,
            values: Vec::new(),
        }
    }

    pub fn add8(&mut self, value: u8) -> &mut Self {
        self.values.push(InputValue::Uint8(value));
        self
    }

    pub fn add16(&mut self, value: u16) -> &mut Self {
        self.values.push(InputValue::Uint16(value));
        self
    }

    pub fn add32(&mut self, value: u32) -> &mut Self {
        self.values.push(InputValue::Uint32(value));
        self
    }

    pub fn add64(&mut self, value: u64) -> &mut Self {
        self.values.push(InputValue::Uint64(value));
        self
    }

    pub fn add128(&mut self, value: u128) -> &mut Self {
        self.values.push(InputValue::Uint128(value));
        self
    }

    pub fn add256(&mut self, value: U256) -> &mut Self {
        self.values.push(InputValue::Uint256(value));
        self
    }

    pub fn add_bool(&mut self, value: bool) -> &mut Self {
        self.values.push(InputValue::Bool(value));
        self
    }

    pub fn add_address(&mut self, value: Address) -> &mut Self {
        self.values.push(InputValue::Address(value));
        self
    }

    /// Number of values queued so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Submit the batch for encryption and proof generation.
    pub async fn encrypt(&self) -> Result<EncryptedInput, FhevmError> {
        self.client
            .instance()
            .encrypt_input(self.contract_address, self.user_address, &self.values)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhevm::client::FhevmClientConfig;
    use crate::fhevm::instance::{MockInstance, MOCK_INPUT_PROOF};

    fn mock_client() -> FhevmClient<MockInstance> {
        let config = FhevmClientConfig::new("http://localhost:8545", "http://localhost:7077");
        FhevmClient::with_instance(config, 8009, MockInstance::new())
    }

    #[tokio::test]
    async fn one_handle_per_added_value() {
        let client = mock_client();
        let mut builder = client.create_encrypted_input(Address::ZERO, Address::ZERO);
        builder.add8(42).add32(7).add_bool(true).add64(u64::MAX);
        assert_eq!(builder.len(), 4);

        let input = builder.encrypt().await.unwrap();
        assert_eq!(input.handles.len(), 4);
        assert_eq!(input.input_proof, MOCK_INPUT_PROOF);
    }

    #[tokio::test]
    async fn empty_batch_fails() {
        let client = mock_client();
        let builder = client.create_encrypted_input(Address::ZERO, Address::ZERO);
        assert!(builder.is_empty());

        let err = builder.encrypt().await.unwrap_err();
        assert!(matches!(err, FhevmError::Encryption(_)));
    }

    #[tokio::test]
    async fn all_value_types_are_accepted() {
        let client = mock_client();
        let mut builder = client.create_encrypted_input(Address::ZERO, Address::ZERO);
        builder
            .add8(1)
            .add16(2)
            .add32(3)
            .add64(4)
            .add128(5)
            .add256(U256::from(6))
            .add_bool(false)
            .add_address(Address::ZERO);

        let input = builder.encrypt().await.unwrap();
        assert_eq!(input.handles.len(), 8);
    }
}
