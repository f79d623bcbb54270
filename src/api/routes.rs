// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator and analyzer
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password)),
    );

    // Breach lookup
    cfg.service(
        web::scope("/breach")
            .route("/check", web::post().to(handlers::breach::check_breach)),
    );

    // Password hashing
    cfg.service(
        web::scope("/hash")
            .route("/pbkdf2", web::post().to(handlers::hash::hash_password)),
    );

    // System status
    cfg.service(
        web::scope("/system")
            .route("/status", web::get().to(handlers::system::get_status)),
    );
}
