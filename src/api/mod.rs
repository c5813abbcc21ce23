//! HTTP adapter exposing the registry as REST endpoints

pub mod equipment;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Extractor for the pre-authenticated caller identity.
///
/// Identity is established upstream; the header named by
/// `identity.caller_header` carries it verbatim.
pub struct Caller(pub String);

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = state.config.identity.caller_header.as_str();

        let caller = parts
            .headers
            .get(header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Authentication(format!("Missing {} header", header)))?;

        Ok(Caller(caller.to_string()))
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs = openapi::create_openapi_router(&state.config.identity.caller_header);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Equipment
        .route("/equipment", post(equipment::register_equipment))
        .route("/equipment/:id", get(equipment::get_equipment))
        .route("/equipment/:id/status", put(equipment::update_equipment_status))
        .route("/equipment/:id/recipient", post(equipment::assign_recipient))
        // Registry
        .route("/registry/last-id", get(equipment::get_last_id))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(docs)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
