use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateTryOnRequest, ErrorResponse};
use crate::routes::AppState;
use crate::services::{TryOnClient, TryOnError};

/// Configure virtual try-on routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/try-on/tasks", web::post().to(create_task))
        .route("/try-on/tasks/{task_id}", web::get().to(get_task));
}

fn client(state: &AppState) -> Result<Arc<TryOnClient>, HttpResponse> {
    state.try_on.clone().ok_or_else(|| {
        HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Try-on unavailable".to_string(),
            message: "Virtual try-on is not configured".to_string(),
            status_code: 503,
        })
    })
}

fn vendor_error(e: TryOnError) -> HttpResponse {
    match e {
        TryOnError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Try-on task not found".to_string(),
            message,
            status_code: 404,
        }),
        other => {
            tracing::error!("Try-on vendor call failed: {}", other);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Try-on vendor error".to_string(),
                message: other.to_string(),
                status_code: 502,
            })
        }
    }
}

/// Start a try-on task
///
/// POST /api/v1/try-on/tasks
///
/// Request body:
/// ```json
/// {
///   "modelImageUrl": "string",
///   "garmentImageUrl": "string",
///   "category": "TOPS|BOTTOMS|ONE_PIECES"
/// }
/// ```
async fn create_task(state: web::Data<AppState>, req: web::Json<CreateTryOnRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let client = match client(&state) {
        Ok(client) => client,
        Err(response) => return response,
    };

    match client
        .create_task(&req.model_image_url, &req.garment_image_url, req.category)
        .await
    {
        Ok(task) => {
            tracing::info!("Created try-on task {}", task.task_id);
            HttpResponse::Ok().json(task)
        }
        Err(e) => vendor_error(e),
    }
}

/// GET /api/v1/try-on/tasks/{taskId}
async fn get_task(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let client = match client(&state) {
        Ok(client) => client,
        Err(response) => return response,
    };

    match client.get_task(&path.into_inner()).await {
        Ok(task) => HttpResponse::Ok().json(task),
        Err(e) => vendor_error(e),
    }
}
