//! # Client Configuration Service
//!
//! Publishes the [`ClientConfig`] the admin frontend reads once at startup.
//! The value is fixed when the server starts.

use actix_web::web::{get, scope, Data};
use actix_web::{HttpResponse, Responder, Scope};

use common::model::config::ClientConfig;

/// The base path for the configuration endpoint.
const API_PATH: &str = "/api/config";

/// `GET /api/config` returns the `ClientConfig` stored in app data.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

pub async fn process(config: Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-store"))
        .json(config.get_ref())
}
