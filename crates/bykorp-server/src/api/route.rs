//! API routing configuration

use actix_web::{Scope, web};

use super::{health, portfolio, reservation, review, service};

/// Create the `/api` routes
///
/// Routes:
/// - GET /api/services - Active services
/// - GET /api/portfolio - All portfolio items
/// - GET /api/portfolio/featured - Featured portfolio items
/// - GET /api/reviews - All reviews
/// - GET /api/reviews/featured - Featured reviews
/// - POST /api/reservations - Submit the contact form
/// - GET /api/reservations - Admin listing of submissions
pub fn api_routes() -> Scope {
    web::scope("/api")
        .service(web::scope("/services").service(service::list_services))
        .service(
            web::scope("/portfolio")
                .service(portfolio::list_featured_portfolio)
                .service(portfolio::list_portfolio),
        )
        .service(
            web::scope("/reviews")
                .service(review::list_featured_reviews)
                .service(review::list_reviews),
        )
        .service(
            web::scope("/reservations")
                .app_data(reservation::json_config())
                .service(reservation::create_reservation)
                .service(reservation::list_reservations),
        )
}

/// Register every route on an app.
///
/// Shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_routes()).service(health::health);
}
