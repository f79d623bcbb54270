// src/api/handlers/system.rs
use std::time::Instant;

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::StatusResponse;

/// Service health probe
#[utoipa::path(
    get,
    path = "/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Service status", body = StatusResponse)
    )
)]
pub async fn get_status(started_at: web::Data<Instant>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        success: true,
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: started_at.elapsed().as_secs(),
    })
}
