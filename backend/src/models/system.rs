use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub azure_configured: bool,
    pub config_loaded: bool,
    pub database_enabled: bool,
}

/// Non-secret configuration subset for the chat widget
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    pub name: String,
    pub version: String,
    pub welcome_message: String,
    pub azure_configured: bool,
}
