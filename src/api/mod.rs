// src/api/mod.rs
use std::time::Instant;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::breach::BreachChecker;
use crate::core::config::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // Breach endpoints
        crate::api::handlers::breach::check_breach,

        // Hashing endpoints
        crate::api::handlers::hash::hash_password,

        // System endpoints
        crate::api::handlers::system::get_status
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::GenerationRequest,
            crate::api::types::GenerationResponse,
            crate::api::types::AnalysisResponse,
            crate::api::types::BreachCheckRequest,
            crate::api::types::BreachCheckResponse,
            crate::api::types::HashRequest,
            crate::api::types::HashResponse,
            crate::api::types::StatusResponse,

            // Domain models
            crate::models::GenerationOptions,
            crate::models::StrengthReport,
            crate::models::StrengthCategory,
            crate::models::FeedbackItem,
            crate::models::FeedbackKind,
            crate::models::PasswordDetails,
            crate::models::BreachVerdict,
            crate::models::DerivedHash
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength analysis endpoints"),
        (name = "Breach", description = "k-anonymity breach lookup endpoints"),
        (name = "Hashing", description = "Password hashing endpoints"),
        (name = "System", description = "System status endpoints")
    ),
    info(
        title = "SecurePass API",
        version = "0.1.0",
        description = "Password generation, strength analysis and breach checking",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting SecurePass API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let started_at = web::Data::new(Instant::now());
    let checker = web::Data::new(BreachChecker::new(
        &config.breach_api_url,
        config.breach_timeout,
    ));
    let bind = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .app_data(checker.clone())
            .app_data(started_at.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure your regular API routes
            .configure(routes::configure_routes)
    })
    .bind(bind)?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
