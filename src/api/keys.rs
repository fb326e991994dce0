// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Public-key lookup and registration routes.

use axum::{
    extract::{Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::ApiError,
    keys::DEFAULT_ALGORITHM,
    models::{KeyData, KeyQuery, KeyResponse, StoreKeyRequest, StoredKeyData, StoreKeyResponse},
    security::is_valid_address,
    state::AppState,
};

/// A fresh mock public key for contracts that have none registered.
fn mock_public_key() -> String {
    format!("0x{}", Uuid::new_v4().simple())
}

#[utoipa::path(
    get,
    path = "/api/keys",
    params(KeyQuery),
    tag = "Keys",
    responses(
        (status = 200, body = KeyResponse),
        (status = 400, description = "Missing or invalid contract address")
    )
)]
pub async fn get_key(
    State(state): State<AppState>,
    Query(params): Query<KeyQuery>,
) -> Result<Json<KeyResponse>, ApiError> {
    let contract_address = params
        .contract
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Contract address is required"))?;

    if !is_valid_address(contract_address) {
        return Err(ApiError::bad_request("Invalid contract address"));
    }

    // First lookup for an unknown contract mints a mock key and stores it,
    // so repeated lookups agree with the store.
    let public_key = match state.keys.get_public_key(contract_address) {
        Some(key) => key,
        None => {
            let key = mock_public_key();
            state.keys.store_public_key(contract_address, key.clone());
            tracing::info!(contract = %contract_address, "generated mock public key");
            key
        }
    };

    let algorithm = state
        .keys
        .key_metadata(contract_address)
        .map(|meta| meta.algorithm)
        .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());

    Ok(Json(KeyResponse {
        success: true,
        data: KeyData {
            contract_address: contract_address.to_string(),
            public_key,
            algorithm,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/keys",
    request_body = StoreKeyRequest,
    tag = "Keys",
    responses(
        (status = 200, body = StoreKeyResponse),
        (status = 400, description = "Invalid contract address or public key")
    )
)]
pub async fn store_key(
    State(state): State<AppState>,
    Json(request): Json<StoreKeyRequest>,
) -> Result<Json<StoreKeyResponse>, ApiError> {
    if !is_valid_address(&request.contract_address) {
        return Err(ApiError::bad_request("Invalid contract address"));
    }

    let public_key = request
        .public_key
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Invalid public key"))?;

    state
        .keys
        .store_public_key(&request.contract_address, public_key);
    tracing::info!(contract = %request.contract_address, "public key stored");

    Ok(Json(StoreKeyResponse {
        success: true,
        message: "Public key stored successfully".to_string(),
        data: StoredKeyData {
            contract_address: request.contract_address,
            public_key: public_key.to_string(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn valid_addr() -> String {
        format!("0x{}", "b".repeat(40))
    }

    #[tokio::test]
    async fn get_key_requires_contract_param() {
        let state = AppState::default();

        let err = get_key(State(state.clone()), Query(KeyQuery { contract: None }))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Contract address is required");

        let err = get_key(
            State(state),
            Query(KeyQuery {
                contract: Some(String::new()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Contract address is required");
    }

    #[tokio::test]
    async fn get_key_rejects_invalid_address() {
        let state = AppState::default();
        let err = get_key(
            State(state),
            Query(KeyQuery {
                contract: Some("0x123".into()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid contract address");
    }

    #[tokio::test]
    async fn get_key_generates_then_reuses_mock_key() {
        let state = AppState::default();
        let query = || {
            Query(KeyQuery {
                contract: Some(valid_addr()),
            })
        };

        let Json(first) = get_key(State(state.clone()), query()).await.unwrap();
        assert!(first.success);
        assert_eq!(first.data.algorithm, "TFHE");
        assert!(first.data.public_key.starts_with("0x"));

        let Json(second) = get_key(State(state), query()).await.unwrap();
        assert_eq!(second.data.public_key, first.data.public_key);
    }

    #[tokio::test]
    async fn store_key_then_get_returns_it() {
        let state = AppState::default();
        let request = StoreKeyRequest {
            contract_address: valid_addr(),
            public_key: json!("0xdeadbeef"),
        };

        let Json(stored) = store_key(State(state.clone()), Json(request)).await.unwrap();
        assert!(stored.success);
        assert_eq!(stored.message, "Public key stored successfully");
        assert_eq!(stored.data.public_key, "0xdeadbeef");

        let Json(fetched) = get_key(
            State(state),
            Query(KeyQuery {
                contract: Some(valid_addr()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(fetched.data.public_key, "0xdeadbeef");
    }

    #[tokio::test]
    async fn store_key_rejects_bad_inputs() {
        let state = AppState::default();

        let err = store_key(
            State(state.clone()),
            Json(StoreKeyRequest {
                contract_address: "bad".into(),
                public_key: json!("0xkey"),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Invalid contract address");

        // Missing key.
        let err = store_key(
            State(state.clone()),
            Json(StoreKeyRequest {
                contract_address: valid_addr(),
                public_key: json!(null),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Invalid public key");

        // Non-string key.
        let err = store_key(
            State(state),
            Json(StoreKeyRequest {
                contract_address: valid_addr(),
                public_key: json!(42),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.message, "Invalid public key");
    }
}
