// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! FHE operation routes: index, encrypt, decrypt, compute.
//!
//! These are the example/mock routes: requests are fully validated, then
//! answered with echo or mock payloads. Server-side encryption and real
//! oracle decryption live behind the gateway client, not here.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::ApiError,
    fhevm::FheType,
    models::{
        ApiEndpoints, ComputeData, ComputeRequest, ComputeResponse, DecryptData, DecryptRequest,
        DecryptResponse, EchoResponse, EncryptData, EncryptRequest, EncryptResponse, IndexResponse,
    },
    state::AppState,
    validation::{
        validate_computation_request, validate_decryption_request, validate_encryption_request,
    },
};

/// Mock plaintext returned by the decrypt route.
const MOCK_DECRYPTED_VALUE: &str = "1000";

fn check_rate_limit(state: &AppState, identifier: &str) -> Result<(), ApiError> {
    if state.limiter.is_allowed(identifier) {
        Ok(())
    } else {
        Err(ApiError::too_many_requests("Too many requests"))
    }
}

/// A fresh 32-byte mock ciphertext handle.
fn mock_result_handle() -> String {
    format!(
        "0x{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

#[utoipa::path(
    get,
    path = "/api/fhe",
    tag = "FHE",
    responses((status = 200, body = IndexResponse))
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        success: true,
        message: "FHE API is running".to_string(),
        endpoints: ApiEndpoints {
            encrypt: "/api/fhe/encrypt".to_string(),
            decrypt: "/api/fhe/decrypt".to_string(),
            compute: "/api/fhe/compute".to_string(),
            keys: "/api/keys".to_string(),
        },
    })
}

#[utoipa::path(
    post,
    path = "/api/fhe",
    tag = "FHE",
    responses(
        (status = 200, body = EchoResponse),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn echo(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EchoResponse>, ApiError> {
    let Json(data) = body.map_err(|_| ApiError::bad_request("Invalid request"))?;
    Ok(Json(EchoResponse {
        success: true,
        message: "Request received".to_string(),
        data,
    }))
}

#[utoipa::path(
    post,
    path = "/api/fhe/encrypt",
    request_body = EncryptRequest,
    tag = "FHE",
    responses(
        (status = 200, body = EncryptResponse),
        (status = 400, description = "Validation failure"),
        (status = 429, description = "Rate limited")
    )
)]
pub async fn encrypt(
    State(state): State<AppState>,
    Json(request): Json<EncryptRequest>,
) -> Result<Json<EncryptResponse>, ApiError> {
    validate_encryption_request(
        &request.value,
        &request.fhe_type,
        &request.contract_address,
        &request.user_address,
    )?;
    check_rate_limit(&state, &request.user_address)?;

    tracing::info!(
        fhe_type = %request.fhe_type,
        contract = %request.contract_address,
        "encryption request validated"
    );

    Ok(Json(EncryptResponse {
        success: true,
        message: "Encryption request validated".to_string(),
        data: EncryptData {
            value: request.value,
            fhe_type: request.fhe_type,
            contract_address: request.contract_address,
            user_address: request.user_address,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/fhe/decrypt",
    request_body = DecryptRequest,
    tag = "FHE",
    responses(
        (status = 200, body = DecryptResponse),
        (status = 400, description = "Validation failure"),
        (status = 429, description = "Rate limited")
    )
)]
pub async fn decrypt(
    State(state): State<AppState>,
    Json(request): Json<DecryptRequest>,
) -> Result<Json<DecryptResponse>, ApiError> {
    validate_decryption_request(
        &request.handle,
        &request.contract_address,
        &request.user_address,
    )?;
    check_rate_limit(&state, &request.user_address)?;

    if let Some(signature) = &request.signature {
        // EIP-712 verification belongs to the gateway; the route only
        // acknowledges that a signature was supplied.
        tracing::debug!(signature = %signature, "signature verification requested");
    }

    Ok(Json(DecryptResponse {
        success: true,
        data: DecryptData {
            value: MOCK_DECRYPTED_VALUE.to_string(),
            fhe_type: FheType::Euint32,
            handle: request.handle,
        },
    }))
}

#[utoipa::path(
    post,
    path = "/api/fhe/compute",
    request_body = ComputeRequest,
    tag = "FHE",
    responses(
        (status = 200, body = ComputeResponse),
        (status = 400, description = "Validation failure"),
        (status = 429, description = "Rate limited")
    )
)]
pub async fn compute(
    State(state): State<AppState>,
    Json(request): Json<ComputeRequest>,
) -> Result<Json<ComputeResponse>, ApiError> {
    let operation = validate_computation_request(
        &request.operation,
        &request.operand1,
        &request.operand2,
        &request.contract_address,
    )?;
    check_rate_limit(&state, &request.contract_address)?;

    let result_handle = mock_result_handle();
    tracing::info!(
        operation = operation.as_str(),
        result_handle = %result_handle,
        "computation request validated"
    );

    Ok(Json(ComputeResponse {
        success: true,
        data: ComputeData {
            operation: operation.as_str().to_string(),
            result_handle,
            operand1: request.operand1,
            operand2: request.operand2,
            contract_address: request.contract_address,
        },
        message: format!(
            "{} operation completed",
            operation.as_str().to_uppercase()
        ),
    }))
}
