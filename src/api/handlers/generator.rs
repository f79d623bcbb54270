// src/api/handlers/generator.rs
use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{AnalysisResponse, GenerationRequest, GenerationResponse};
use crate::core::config::Config;
use crate::engine::{analyzer, generator};
use crate::models::GenerationOptions;

// API-level ceiling; the engine itself has no upper bound
const MAX_REQUEST_LENGTH: usize = 256;

/// Generate a secure password
///
/// Generates a password from the provided options and returns it together
/// with its strength report. Lengths below 8 are raised to 8; selecting no
/// character class is the same as selecting all of them.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = GenerationResponse),
        (status = 400, description = "Invalid input", body = GenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<GenerationRequest>,
) -> impl Responder {
    let options = GenerationOptions {
        length: generation_req.length.unwrap_or(config.default_password_length),
        use_lowercase: generation_req.use_lowercase.unwrap_or(true),
        use_uppercase: generation_req.use_uppercase.unwrap_or(true),
        use_digits: generation_req.use_digits.unwrap_or(true),
        use_special: generation_req.use_special.unwrap_or(true),
    };

    if options.length > MAX_REQUEST_LENGTH {
        return HttpResponse::BadRequest().json(GenerationResponse {
            success: false,
            password: None,
            report: None,
            error: Some(format!(
                "Password length must be at most {} characters",
                MAX_REQUEST_LENGTH
            )),
        });
    }

    let password = generator::generate(&options);
    let report = analyzer::check_strength(&password);

    HttpResponse::Ok().json(GenerationResponse {
        success: true,
        password: Some(password),
        report: Some(report),
        error: None,
    })
}

/// Analyze password strength
///
/// Scores the given password and returns the full report with feedback.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze (URL-encoded)")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = AnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    let password = path.into_inner();

    // URL decode the password if needed
    let decoded_password = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.to_string(),
        Err(_) => password.clone(),
    };

    let report = analyzer::check_strength(&decoded_password);

    HttpResponse::Ok().json(AnalysisResponse {
        success: true,
        report: Some(report),
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use crate::models::StrengthCategory;

    fn config() -> web::Data<Config> {
        web::Data::new(Config::default())
    }

    #[actix_web::test]
    async fn test_generate_endpoint_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(config())
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(GenerationRequest {
                length: None,
                use_lowercase: None,
                use_uppercase: None,
                use_digits: None,
                use_special: None,
            })
            .to_request();

        let resp: GenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        let password = resp.password.unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(resp.report.is_some());
    }

    #[actix_web::test]
    async fn test_generate_endpoint_rejects_oversized_length() {
        let app = test::init_service(
            App::new()
                .app_data(config())
                .route("/generator/password", web::post().to(generate_password)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(GenerationRequest {
                length: Some(10_000),
                use_lowercase: None,
                use_uppercase: None,
                use_digits: None,
                use_special: None,
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_analysis_endpoint_decodes_and_scores() {
        let app = test::init_service(App::new().route(
            "/generator/analysis/{pwd}",
            web::get().to(analyze_password),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/generator/analysis/Tr0ub4dor%263JkQm9")
            .to_request();

        let resp: AnalysisResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        let report = resp.report.unwrap();
        assert_eq!(report.strength, StrengthCategory::VeryStrong);
        assert!(report.details.has_special);
    }
}
