use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::plausibility_warnings;
use crate::models::{ErrorResponse, ExistsResponse, MeasurementsResponse, SaveMeasurementsRequest};
use crate::routes::AppState;

/// Configure measurement profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/measurements/{profile_id}", web::put().to(save_measurements))
        .route("/measurements/{profile_id}", web::get().to(get_measurements))
        .route("/measurements/{profile_id}", web::delete().to(clear_measurements))
        .route("/measurements/{profile_id}/exists", web::get().to(measurements_exist));
}

/// Save a measurement profile
///
/// PUT /api/v1/measurements/{profileId}
///
/// The whole profile is replaced; there is no partial update.
async fn save_measurements(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SaveMeasurementsRequest>,
) -> impl Responder {
    let profile_id = path.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for measurements of {}: {}", profile_id, errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let measurements = match req.into_inner().into_measurements() {
        Ok(m) => m,
        Err(e) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid measurements".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let saved = state.store.save(&profile_id, measurements).await;
    let warnings = plausibility_warnings(&saved.measurements);

    tracing::info!(
        "Saved measurements for {} (persisted: {}, warnings: {})",
        profile_id,
        saved.persisted,
        warnings.len()
    );

    HttpResponse::Ok().json(MeasurementsResponse {
        profile_id,
        measurements: saved.measurements,
        warnings,
        persisted: saved.persisted,
    })
}

/// GET /api/v1/measurements/{profileId}
async fn get_measurements(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let profile_id = path.into_inner();

    match state.store.load(&profile_id).await {
        Some(measurements) => {
            let warnings = plausibility_warnings(&measurements);
            HttpResponse::Ok().json(MeasurementsResponse {
                profile_id,
                measurements,
                warnings,
                persisted: true,
            })
        }
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Measurements not found".to_string(),
            message: format!("No measurements stored for profile {}", profile_id),
            status_code: 404,
        }),
    }
}

/// GET /api/v1/measurements/{profileId}/exists
async fn measurements_exist(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let profile_id = path.into_inner();
    let exists = state.store.exists(&profile_id).await;

    HttpResponse::Ok().json(ExistsResponse { profile_id, exists })
}

/// DELETE /api/v1/measurements/{profileId}
async fn clear_measurements(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let profile_id = path.into_inner();
    state.store.clear(&profile_id).await;

    tracing::info!("Cleared measurements for {}", profile_id);
    HttpResponse::NoContent().finish()
}
