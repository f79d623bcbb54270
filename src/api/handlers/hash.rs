// src/api/handlers/hash.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{HashRequest, HashResponse};
use crate::core::config::Config;
use crate::crypto;

/// Derive a PBKDF2 password hash
///
/// Returns a base64 key and salt for the caller's storage layer. Iteration
/// overrides below the configured floor are raised to it.
#[utoipa::path(
    post,
    path = "/hash/pbkdf2",
    tag = "Hashing",
    request_body = HashRequest,
    responses(
        (status = 200, description = "Derived hash", body = HashResponse),
        (status = 500, description = "Server error", body = HashResponse)
    )
)]
pub async fn hash_password(
    config: web::Data<Config>,
    req: web::Json<HashRequest>,
) -> impl Responder {
    let iterations = config.clamped_iterations(req.iterations);

    match crypto::hash_password_pbkdf2(&req.password, iterations) {
        Ok(hash) => HttpResponse::Ok().json(HashResponse {
            success: true,
            hash: Some(hash),
            error: None,
        }),
        Err(e) => HttpResponse::InternalServerError().json(HashResponse {
            success: false,
            hash: None,
            error: Some(format!("Failed to derive hash: {}", e)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::core::config::PBKDF2_ITERATION_FLOOR;

    #[actix_web::test]
    async fn test_hash_endpoint_clamps_iterations() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .route("/hash/pbkdf2", web::post().to(hash_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/hash/pbkdf2")
            .set_json(HashRequest {
                password: "hunter2".to_string(),
                iterations: Some(1),
            })
            .to_request();

        let resp: HashResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        let hash = resp.hash.unwrap();
        assert_eq!(hash.iterations, PBKDF2_ITERATION_FLOOR);
        assert_eq!(hash.method, "pbkdf2");
        assert_eq!(hash.key.len(), 44);
        assert_eq!(hash.salt.len(), 24);
    }
}
