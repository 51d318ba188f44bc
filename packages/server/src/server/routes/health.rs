use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::server::app::AxumAppState;

const DB_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: DatabaseHealth,
    connection_pool: PoolStats,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DatabaseHealth {
    fn ok() -> Self {
        Self {
            status: "ok",
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            status: "error",
            error: Some(error),
        }
    }

    fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Serialize)]
pub struct PoolStats {
    size: u32,
    idle: usize,
    max: u32,
}

impl From<&PgPool> for PoolStats {
    fn from(pool: &PgPool) -> Self {
        Self {
            size: pool.size(),
            idle: pool.num_idle(),
            max: pool.options().get_max_connections(),
        }
    }
}

/// Round-trip a trivial query, bounded by [`DB_PROBE_TIMEOUT`]
async fn probe_database(pool: &PgPool) -> DatabaseHealth {
    match tokio::time::timeout(DB_PROBE_TIMEOUT, sqlx::query("SELECT 1").execute(pool)).await {
        Ok(Ok(_)) => DatabaseHealth::ok(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Health probe query failed");
            DatabaseHealth::failed(format!("Query failed: {}", e))
        }
        Err(_) => {
            tracing::warn!("Health probe timed out");
            DatabaseHealth::failed(format!("Query timeout (>{}s)", DB_PROBE_TIMEOUT.as_secs()))
        }
    }
}

/// `GET /health`
///
/// 200 while the database answers, 503 otherwise. Failures are reported in
/// the body and never surface as an error response.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = probe_database(&state.db_pool).await;

    let (status_code, status) = if database.is_ok() {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(HealthResponse {
            status,
            database,
            connection_pool: PoolStats::from(&state.db_pool),
        }),
    )
}
