//! HTTP server setup

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    dev::Server,
    http::{Method, header},
    middleware::{Compress, Logger},
    web,
};

use crate::{api::route, model::AppState};

/// CORS policy for the API.
///
/// An empty list (or a `*` entry) allows any origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(3600);

    if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

/// Creates and binds the API server.
///
/// Signal handling is left to [`super::spawn_shutdown_listener`] so that the
/// storage backend can be closed after the server stops.
pub fn main_server(
    app_state: AppState,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    let allowed_origins = app_state.configuration.cors_allowed_origins();
    let data = web::Data::new(app_state);

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(cors(&allowed_origins))
            .app_data(data.clone())
            .configure(route::configure)
    })
    .disable_signals()
    .bind((address, port))?
    .run())
}
