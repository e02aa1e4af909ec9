use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ReadinessResponse {
    /// Aggregate status ("ready" or "unavailable")
    pub status: String,
    /// Status of the storage backend
    pub storage: String,
    /// Current server timestamp
    pub timestamp: String,
}

/// Health API for monitoring and infrastructure checks
///
/// Liveness reports the process is up; readiness additionally pings the
/// storage backend so load balancers can hold traffic until it is reachable.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Liveness check endpoint
    ///
    /// Returns the current status of the service. This endpoint is public
    /// and does not touch the database.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Readiness check endpoint
    ///
    /// Pings the storage backend and reports whether the service can take
    /// traffic. Answers 503 when the database is unreachable.
    #[oai(path = "/health/ready", method = "get", tag = "ApiTags::Health")]
    async fn readiness_check(&self) -> ReadinessCheckResponse {
        let storage_ok = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();
        let timestamp = Utc::now().to_rfc3339();

        if storage_ok {
            ReadinessCheckResponse::Ok(Json(ReadinessResponse {
                status: "ready".to_string(),
                storage: "reachable".to_string(),
                timestamp,
            }))
        } else {
            ReadinessCheckResponse::ServiceUnavailable(Json(ReadinessResponse {
                status: "unavailable".to_string(),
                storage: "unreachable".to_string(),
                timestamp,
            }))
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReadinessCheckResponse {
    #[oai(status = 200)]
    Ok(Json<ReadinessResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ReadinessResponse>),
}
