//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Registry API",
        version = "0.1.0",
        description = "Donated equipment registration, verification and recipient assignment"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        // Equipment
        equipment::register_equipment,
        equipment::get_equipment,
        equipment::update_equipment_status,
        equipment::assign_recipient,
        equipment::get_last_id,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::EquipmentRecord,
            crate::models::equipment::NewEquipment,
            crate::models::equipment::UpdateStatus,
            crate::models::equipment::AssignRecipient,
            equipment::RegisteredResponse,
            equipment::LastIdResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment lifecycle")
    )
)]
pub struct ApiDoc;

/// Documents the caller identity header as an API key scheme
struct CallerIdentityAddon<'a> {
    header: &'a str,
}

impl Modify for CallerIdentityAddon<'_> {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "caller_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(self.header))),
            );
        }
    }
}

/// OpenAPI document advertising the configured caller header
pub fn api_doc(caller_header: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    CallerIdentityAddon {
        header: caller_header,
    }
    .modify(&mut doc);
    doc
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router(caller_header: &str) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api_doc(caller_header)))
}
