//! Service catalogue handlers

use actix_web::{HttpResponse, get, web};

use crate::{api::storage_failure, error::AppError, model::AppState};

/// List active services
///
/// GET /api/services
#[get("")]
pub async fn list_services(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let services = data
        .persistence()
        .service_find_active()
        .await
        .map_err(storage_failure("Failed to fetch services"))?;

    Ok(HttpResponse::Ok().json(services))
}
