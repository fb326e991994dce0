// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! FHEVM Example API Service
//!
//! This crate provides the HTTP plumbing around an FHEVM coprocessor
//! deployment: request validation, public-key management, and a thin
//! gateway client for encrypted inputs and decryption. The FHE
//! cryptography itself lives behind the gateway and on-chain.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `fhevm` - Gateway-backed FHEVM client, input builder, decryption
//! - `keys` - In-memory public-key store
//! - `security` - Address/handle/range checks and rate limiting
//! - `validation` - Request validators for the API routes

pub mod api;
pub mod config;
pub mod error;
pub mod fhevm;
pub mod format;
pub mod keys;
pub mod models;
pub mod security;
pub mod state;
pub mod validation;
