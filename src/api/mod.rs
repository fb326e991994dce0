// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        ApiEndpoints, ComputeData, ComputeRequest, ComputeResponse, DecryptData, DecryptRequest,
        DecryptResponse, EchoResponse, EncryptData, EncryptRequest, EncryptResponse, IndexResponse,
        KeyData, KeyResponse, StoreKeyRequest, StoredKeyData, StoreKeyResponse,
    },
    state::AppState,
};

pub mod fhe;
pub mod health;
pub mod keys;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/fhe", get(fhe::index).post(fhe::echo))
        .route("/fhe/encrypt", post(fhe::encrypt))
        .route("/fhe/decrypt", post(fhe::decrypt))
        .route("/fhe/compute", post(fhe::compute))
        .route("/keys", get(keys::get_key).post(keys::store_key));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        fhe::index,
        fhe::echo,
        fhe::encrypt,
        fhe::decrypt,
        fhe::compute,
        keys::get_key,
        keys::store_key,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            IndexResponse,
            ApiEndpoints,
            EchoResponse,
            EncryptRequest,
            EncryptData,
            EncryptResponse,
            DecryptRequest,
            DecryptData,
            DecryptResponse,
            ComputeRequest,
            ComputeData,
            ComputeResponse,
            KeyData,
            KeyResponse,
            StoreKeyRequest,
            StoredKeyData,
            StoreKeyResponse,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "FHE", description = "Encrypted-input, decryption, and computation requests"),
        (name = "Keys", description = "FHE public key management"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::default());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
