// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory public-key store for FHE contracts.
//!
//! Maps contract addresses to the public key fetched for them, with
//! per-key metadata (algorithm, creation time). No eviction and no
//! persistence; keys live for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Default key algorithm recorded when none is given.
pub const DEFAULT_ALGORITHM: &str = "TFHE";

/// Metadata recorded alongside a stored public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetadata {
    /// Key algorithm (e.g. "TFHE").
    pub algorithm: String,
    /// When the key was stored.
    pub created_at: DateTime<Utc>,
    /// The contract the key belongs to (normalized form).
    pub contract_address: String,
}

#[derive(Debug, Clone)]
struct StoredKey {
    public_key: String,
    metadata: KeyMetadata,
}

/// Shared in-memory key store.
///
/// Contract addresses are normalized to lowercase on store and lookup; hex
/// case carries no meaning.
#[derive(Default)]
pub struct KeyManager {
    keys: Mutex<HashMap<String, StoredKey>>,
}

impl KeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a public key for a contract with the default algorithm.
    pub fn store_public_key(&self, contract_address: &str, public_key: impl Into<String>) {
        self.store_public_key_with_algorithm(contract_address, public_key, DEFAULT_ALGORITHM);
    }

    /// Store a public key for a contract, recording the algorithm.
    pub fn store_public_key_with_algorithm(
        &self,
        contract_address: &str,
        public_key: impl Into<String>,
        algorithm: &str,
    ) {
        let key = contract_address.to_lowercase();
        let stored = StoredKey {
            public_key: public_key.into(),
            metadata: KeyMetadata {
                algorithm: algorithm.to_string(),
                created_at: Utc::now(),
                contract_address: key.clone(),
            },
        };
        if let Ok(mut keys) = self.keys.lock() {
            keys.insert(key, stored);
        }
    }

    /// Public key stored for a contract, if any.
    pub fn get_public_key(&self, contract_address: &str) -> Option<String> {
        let key = contract_address.to_lowercase();
        let keys = self.keys.lock().ok()?;
        keys.get(&key).map(|stored| stored.public_key.clone())
    }

    /// Metadata for a stored key, if any.
    pub fn key_metadata(&self, contract_address: &str) -> Option<KeyMetadata> {
        let key = contract_address.to_lowercase();
        let keys = self.keys.lock().ok()?;
        keys.get(&key).map(|stored| stored.metadata.clone())
    }

    /// Whether a public key is stored for the contract.
    pub fn has_public_key(&self, contract_address: &str) -> bool {
        let key = contract_address.to_lowercase();
        self.keys
            .lock()
            .map(|keys| keys.contains_key(&key))
            .unwrap_or(false)
    }

    /// Remove the key (and metadata) for a contract.
    pub fn remove_key(&self, contract_address: &str) {
        let key = contract_address.to_lowercase();
        if let Ok(mut keys) = self.keys.lock() {
            keys.remove(&key);
        }
    }

    /// Drop every stored key.
    pub fn clear_keys(&self) {
        if let Ok(mut keys) = self.keys.lock() {
            keys.clear();
        }
    }

    /// All contract addresses with a stored key (normalized form).
    pub fn contract_addresses(&self) -> Vec<String> {
        self.keys
            .lock()
            .map(|keys| keys.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xAbCd000000000000000000000000000000000001";

    #[test]
    fn store_then_get_returns_key() {
        let manager = KeyManager::new();
        assert_eq!(manager.get_public_key(ADDR), None);

        manager.store_public_key(ADDR, "0xkey");
        assert_eq!(manager.get_public_key(ADDR), Some("0xkey".to_string()));
        assert!(manager.has_public_key(ADDR));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let manager = KeyManager::new();
        manager.store_public_key(ADDR, "0xkey");

        assert_eq!(
            manager.get_public_key(&ADDR.to_uppercase().replace("0X", "0x")),
            Some("0xkey".to_string())
        );
        assert_eq!(
            manager.get_public_key(&ADDR.to_lowercase()),
            Some("0xkey".to_string())
        );
    }

    #[test]
    fn remove_key_clears_entry() {
        let manager = KeyManager::new();
        manager.store_public_key(ADDR, "0xkey");
        manager.remove_key(ADDR);

        assert_eq!(manager.get_public_key(ADDR), None);
        assert_eq!(manager.key_metadata(ADDR), None);
        assert!(!manager.has_public_key(ADDR));
    }

    #[test]
    fn metadata_records_algorithm_and_address() {
        let manager = KeyManager::new();
        manager.store_public_key_with_algorithm(ADDR, "0xkey", "BFV");

        let meta = manager.key_metadata(ADDR).unwrap();
        assert_eq!(meta.algorithm, "BFV");
        assert_eq!(meta.contract_address, ADDR.to_lowercase());

        manager.store_public_key(ADDR, "0xkey2");
        let meta = manager.key_metadata(ADDR).unwrap();
        assert_eq!(meta.algorithm, DEFAULT_ALGORITHM);
    }

    #[test]
    fn clear_keys_drops_everything() {
        let manager = KeyManager::new();
        manager.store_public_key(ADDR, "0xkey");
        manager.store_public_key("0x0000000000000000000000000000000000000002", "0xother");
        assert_eq!(manager.contract_addresses().len(), 2);

        manager.clear_keys();
        assert!(manager.contract_addresses().is_empty());
    }
}
