// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `FHEVM_RPC_URL` | Host-chain RPC endpoint for the gateway client | Optional (mock-only without it) |
//! | `FHEVM_GATEWAY_URL` | Decryption gateway base URL | Zama devnet gateway |
//! | `FHEVM_ACL_ADDRESS` | ACL contract address | Optional |
//! | `RATE_LIMIT_MAX` | Max requests per address per window | `10` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the host-chain RPC endpoint.
///
/// When set, a gateway-backed [`FhevmClient`](crate::fhevm::FhevmClient) is
/// connected at startup and reported by the health endpoint. The mock API
/// routes work without it.
pub const FHEVM_RPC_URL_ENV: &str = "FHEVM_RPC_URL";

/// Environment variable name for the decryption gateway base URL.
pub const FHEVM_GATEWAY_URL_ENV: &str = "FHEVM_GATEWAY_URL";

/// Environment variable name for the ACL contract address.
pub const FHEVM_ACL_ADDRESS_ENV: &str = "FHEVM_ACL_ADDRESS";

/// Environment variable name for the per-address rate limit.
pub const RATE_LIMIT_MAX_ENV: &str = "RATE_LIMIT_MAX";

/// Default number of requests allowed per address per window.
pub const DEFAULT_RATE_LIMIT_MAX: usize = 10;

/// Default rate-limit window in seconds.
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;
