//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with `{"status":"ok"}` while
//! the process is running. Used by Kubernetes, ECS, systemd, and load balancers
//! to verify the service is alive.

use axum::Json;
use serde::Serialize;

/// Liveness payload. `status` is always `"ok"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const OK: HealthStatus = HealthStatus { status: "ok" };
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_is_always_ok() {
        let Json(status) = health().await;
        assert_eq!(status, HealthStatus::OK);
        assert_eq!(status.status, "ok");
    }

    #[test]
    fn serializes_to_single_field() {
        let body = serde_json::to_string(&HealthStatus::OK).unwrap();
        assert_eq!(body, r#"{"status":"ok"}"#);
    }
}
