//! Portfolio handlers
//!
//! Both listings keep the storage ordering: featured items first, most
//! recently completed first, items without a completion date last.

use actix_web::{HttpResponse, get, web};

use crate::{api::storage_failure, error::AppError, model::AppState};

/// GET /api/portfolio
#[get("")]
pub async fn list_portfolio(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = data
        .persistence()
        .portfolio_find_all()
        .await
        .map_err(storage_failure("Failed to fetch portfolio items"))?;

    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/portfolio/featured
#[get("/featured")]
pub async fn list_featured_portfolio(
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let items = data
        .persistence()
        .portfolio_find_featured()
        .await
        .map_err(storage_failure("Failed to fetch featured portfolio items"))?;

    Ok(HttpResponse::Ok().json(items))
}
