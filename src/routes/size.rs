use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Language;
use crate::models::{ErrorResponse, HealthResponse, RecommendSizeRequest, RecommendSizeResponse, Size};
use crate::routes::AppState;

/// Configure health and size recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/size/recommend", web::post().to(recommend_size));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::trace!("Health check (storage: {})", state.store.backend_name());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Size recommendation endpoint
///
/// POST /api/v1/size/recommend
///
/// Request body:
/// ```json
/// {
///   "profileId": "string",
///   "category": "PANTS",
///   "availableSizes": ["S", "M", "L"],
///   "language": "vi"
/// }
/// ```
///
/// A profile without stored measurements is not an error: the response has
/// `hasMeasurements: false` and a prompt to add them.
async fn recommend_size(
    state: web::Data<AppState>,
    req: web::Json<RecommendSizeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let language = req
        .language
        .as_deref()
        .map(Language::from_tag)
        .unwrap_or(state.default_language);
    let available = Size::parse_labels(&req.available_sizes);

    let measurements = state.store.load(&req.profile_id).await;
    let recommendation = state
        .advisor
        .recommend(measurements.as_ref(), &req.category, &available);
    let reasoning = state.advisor.explain(&recommendation, language);

    tracing::info!(
        "Recommendation for {}: {:?} (category {:?}, {} sizes in stock)",
        req.profile_id,
        recommendation.recommended_size,
        req.category,
        available.len()
    );

    HttpResponse::Ok().json(RecommendSizeResponse {
        recommendation,
        reasoning,
        language,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
