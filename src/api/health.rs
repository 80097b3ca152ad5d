use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{ApiResponse, OpenApi, Tags, payload::Json};
use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi {
    db: DatabaseConnection,
}

impl HealthApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
        }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[derive(ApiResponse)]
pub enum HealthApiResponse {
    /// Service and database are reachable
    #[oai(status = 200)]
    Ok(Json<HealthResponse>),

    /// Database ping failed
    #[oai(status = 503)]
    Unavailable(Json<HealthResponse>),
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Pings the database and reports whether the service can serve requests
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> HealthApiResponse {
        let timestamp = Utc::now().to_rfc3339();

        match self.db.ping().await {
            Ok(()) => HealthApiResponse::Ok(Json(HealthResponse {
                status: "ok".to_string(),
                timestamp,
            })),
            Err(e) => {
                tracing::warn!("Health check database ping failed: {}", e);
                HealthApiResponse::Unavailable(Json(HealthResponse {
                    status: "unavailable".to_string(),
                    timestamp,
                }))
            }
        }
    }
}
