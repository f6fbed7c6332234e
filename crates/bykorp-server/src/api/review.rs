//! Client review handlers

use actix_web::{HttpResponse, get, web};

use crate::{api::storage_failure, error::AppError, model::AppState};

/// GET /api/reviews
#[get("")]
pub async fn list_reviews(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let reviews = data
        .persistence()
        .review_find_all()
        .await
        .map_err(storage_failure("Failed to fetch reviews"))?;

    Ok(HttpResponse::Ok().json(reviews))
}

/// GET /api/reviews/featured
#[get("/featured")]
pub async fn list_featured_reviews(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let reviews = data
        .persistence()
        .review_find_featured()
        .await
        .map_err(storage_failure("Failed to fetch featured reviews"))?;

    Ok(HttpResponse::Ok().json(reviews))
}
