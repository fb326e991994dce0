// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User and public decryption.
//!
//! User decryption re-encrypts a ciphertext under the user's key and needs
//! the user's EIP-712 authorization; public decryption works only on
//! handles the contract has marked publicly decryptable. Both delegate to
//! the instance and attach a type inferred from the handle.

use super::client::FhevmClient;
use super::instance::FhevmInstance;
use super::types::{DecryptionRequest, DecryptionResult, FheType};
use super::FhevmError;

impl<I: FhevmInstance> FhevmClient<I> {
    /// Decrypt a ciphertext for the requesting user.
    ///
    /// The request must carry the user's [`Eip712Signature`]; this crate
    /// never signs on the user's behalf.
    ///
    /// [`Eip712Signature`]: super::types::Eip712Signature
    pub async fn user_decrypt(
        &self,
        request: &DecryptionRequest,
    ) -> Result<DecryptionResult, FhevmError> {
        let signature = request
            .signature
            .as_ref()
            .ok_or(FhevmError::MissingSignature)?;

        let value = self
            .instance()
            .reencrypt(
                &request.handle,
                &signature.public_key,
                &signature.signature,
                request.contract_address,
                request.user_address,
            )
            .await?;

        Ok(DecryptionResult {
            value,
            fhe_type: infer_fhe_type(&request.handle),
        })
    }

    /// Publicly decrypt a ciphertext.
    pub async fn public_decrypt(
        &self,
        request: &DecryptionRequest,
    ) -> Result<DecryptionResult, FhevmError> {
        let value = self
            .instance()
            .public_decrypt(request.contract_address, &request.handle)
            .await?;

        Ok(DecryptionResult {
            value,
            fhe_type: infer_fhe_type(&request.handle),
        })
    }
}

/// Guess the encrypted type from the handle length.
///
/// Handles carry no type metadata on this path, so the width of the hex
/// string is the only signal available. Short handles map to the narrow
/// integer types.
pub fn infer_fhe_type(handle: &str) -> FheType {
    match handle.len() {
        0..=4 => FheType::Euint8,
        5..=6 => FheType::Euint16,
        7..=10 => FheType::Euint32,
        11..=18 => FheType::Euint64,
        19..=34 => FheType::Euint128,
        _ => FheType::Euint256,
    }
}
