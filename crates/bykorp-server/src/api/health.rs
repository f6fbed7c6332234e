//! Liveness endpoint

use actix_web::{HttpResponse, Responder, get, web};
use tracing::warn;

use crate::model::{AppState, HealthResponse};

/// GET /health
///
/// 200 when the storage backend answers, 503 otherwise.
#[get("/health")]
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    let persistence = data.persistence();
    let mode = persistence.storage_mode();

    match persistence.health_check().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::up(mode)),
        Err(e) => {
            warn!(storage = %mode, error = %e, "Storage health check failed");
            HttpResponse::ServiceUnavailable().json(HealthResponse::down(mode))
        }
    }
}
