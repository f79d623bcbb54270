// src/api/handlers/breach.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{BreachCheckRequest, BreachCheckResponse};
use crate::breach::BreachChecker;

/// Check a password against the breach corpus
///
/// Sends only the first five hex characters of the password's SHA-1 digest
/// to the range endpoint and matches the remainder locally.
#[utoipa::path(
    post,
    path = "/breach/check",
    tag = "Breach",
    request_body = BreachCheckRequest,
    responses(
        (status = 200, description = "Breach verdict", body = BreachCheckResponse),
        (status = 502, description = "Lookup failed", body = BreachCheckResponse)
    )
)]
pub async fn check_breach(
    checker: web::Data<BreachChecker>,
    req: web::Json<BreachCheckRequest>,
) -> impl Responder {
    let verdict = checker.check(&req.password).await;

    if verdict.is_error {
        return HttpResponse::BadGateway().json(BreachCheckResponse {
            success: false,
            verdict: Some(verdict),
            error: Some("Breach lookup failed; try again later".to_string()),
        });
    }

    HttpResponse::Ok().json(BreachCheckResponse {
        success: true,
        verdict: Some(verdict),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use std::time::Duration;

    #[actix_web::test]
    async fn test_lookup_failure_maps_to_bad_gateway() {
        let checker = BreachChecker::new("http://127.0.0.1:9", Duration::from_millis(500));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(checker))
                .route("/breach/check", web::post().to(check_breach)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/breach/check")
            .set_json(BreachCheckRequest {
                password: "password".to_string(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_GATEWAY);

        let body: BreachCheckResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        let verdict = body.verdict.unwrap();
        assert!(verdict.is_error);
        assert!(!verdict.is_compromised);
    }
}
