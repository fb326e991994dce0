// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::fhevm::{FhevmClient, GatewayInstance};
use crate::keys::KeyManager;
use crate::security::RateLimiter;

/// Shared application state.
///
/// The gateway client is optional: without `FHEVM_RPC_URL` the service runs
/// mock-only, which is all the example routes need.
#[derive(Clone)]
pub struct AppState {
    pub keys: Arc<KeyManager>,
    pub limiter: Arc<RateLimiter>,
    pub fhevm: Option<Arc<FhevmClient<GatewayInstance>>>,
}

impl AppState {
    pub fn new(
        keys: KeyManager,
        limiter: RateLimiter,
        fhevm: Option<FhevmClient<GatewayInstance>>,
    ) -> Self {
        Self {
            keys: Arc::new(keys),
            limiter: Arc::new(limiter),
            fhevm: fhevm.map(Arc::new),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(KeyManager::new(), RateLimiter::default(), None)
    }
}
