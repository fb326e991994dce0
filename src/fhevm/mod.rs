// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # FHEVM Client
//!
//! Thin client plumbing for an FHEVM coprocessor deployment. The FHE
//! cryptography (key generation, ciphertext encoding, input proofs, the
//! decryption oracle protocol) lives behind the gateway service; this
//! module only carries requests to it.
//!
//! ## Structure
//!
//! - [`FhevmClient`] - connected client: host-chain id + gateway instance
//! - [`FhevmInstance`] - the seam between the client and the gateway;
//!   [`GatewayInstance`] is the HTTP implementation, [`MockInstance`] a
//!   deterministic in-process one for demos and tests
//! - [`EncryptedInputBuilder`] - accumulates typed plaintexts for one
//!   contract/user pair and submits them as a batch
//! - user/public decryption helpers in [`decryption`]

pub mod client;
pub mod decryption;
pub mod encryption;
pub mod instance;
pub mod types;

pub use client::{FhevmClient, FhevmClientConfig};
pub use encryption::EncryptedInputBuilder;
pub use instance::{FhevmInstance, GatewayInstance, InputValue, MockInstance};
pub use types::{
    DecryptedValue, DecryptionRequest, DecryptionResult, Eip712Signature, EncryptedInput, FheType,
    NetworkConfig, ZAMA_DEVNET, ZAMA_SEPOLIA,
};

/// Errors from FHEVM client operations.
///
/// Failures propagate as-is; there is no retry or recovery layer.
#[derive(Debug, thiserror::Error)]
pub enum FhevmError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Gateway request failed: {0}")]
    Gateway(String),

    #[error("Gateway response was invalid: {0}")]
    InvalidResponse(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Signer authorization required for user decryption")]
    MissingSignature,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}
