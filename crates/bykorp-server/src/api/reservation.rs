//! Reservation (contact form) handlers
//!
//! - POST /api/reservations - Validate and store a submission
//! - GET /api/reservations - List submissions, newest first (admin)

use actix_web::{
    HttpRequest, HttpResponse, error::InternalError, get, http::header, post, web,
};
use bykorp_common::{BykorpError, CreateReservation, ReservationCreated};
use subtle::ConstantTimeEq;
use tracing::{info, warn};

use crate::{
    api::storage_failure,
    error::AppError,
    model::{AppState, ErrorResult},
};

const BEARER_PREFIX: &str = "Bearer ";

/// JSON extractor settings for reservation bodies.
///
/// Malformed payloads are answered with the usual `{"error": ...}` envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let message = format!("Invalid request body: {}", err);
            warn!("{}", message);
            let response = HttpResponse::BadRequest().json(ErrorResult::new(message));
            InternalError::from_response(err, response).into()
        })
}

/// Create a reservation
///
/// POST /api/reservations
#[post("")]
pub async fn create_reservation(
    data: web::Data<AppState>,
    payload: web::Json<CreateReservation>,
) -> Result<HttpResponse, AppError> {
    let today = chrono::Utc::now().date_naive();
    let submission = payload.validate_submission(today).inspect_err(|e| {
        info!(reason = %e, "Rejected reservation submission");
    })?;

    let id = data
        .persistence()
        .reservation_create(&submission)
        .await
        .map_err(storage_failure("Failed to create reservation"))?;

    info!(id = %id, service_type = %submission.service_type, "Reservation created");

    Ok(HttpResponse::Created().json(ReservationCreated::new(id)))
}

/// List reservations, newest first
///
/// GET /api/reservations
///
/// Requires `Authorization: Bearer <admin.token>` when a token is configured.
#[get("")]
pub async fn list_reservations(
    req: HttpRequest,
    data: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    authorize(&req, data.admin_token.as_deref())?;

    let reservations = data
        .persistence()
        .reservation_find_all()
        .await
        .map_err(storage_failure("Failed to fetch reservations"))?;

    Ok(HttpResponse::Ok().json(reservations))
}

fn authorize(req: &HttpRequest, expected: Option<&str>) -> Result<(), BykorpError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let provided = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .unwrap_or_default();

    if bool::from(provided.as_bytes().ct_eq(expected.as_bytes())) {
        Ok(())
    } else {
        warn!(
            peer = ?req.peer_addr(),
            "Rejected reservation listing without a valid admin token"
        );
        Err(BykorpError::Unauthorized(
            "A valid admin token is required".to_string(),
        ))
    }
}
