use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreatePenpalRequest, CreatePenpalResponse, DeletePenpalResponse, ErrorResponse};
use crate::routes::matches::AppState;

/// Configure directory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/penpals", web::post().to(create_penpal))
        .route("/penpals/{id}", web::delete().to(delete_penpal));
}

/// Join the penpal directory
///
/// POST /api/v1/penpals
async fn create_penpal(
    state: web::Data<AppState>,
    req: web::Json<CreatePenpalRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_penpal request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Every entry needs at least one exchange type; the matching engine
    // relies on this being enforced here
    if !req.exchange_types.any() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid exchange types".to_string(),
            message: "Please select at least one exchange type".to_string(),
            status_code: 400,
        });
    }

    match state.directory.create_penpal(&req).await {
        Ok(penpal) => HttpResponse::Created().json(CreatePenpalResponse {
            success: true,
            penpal_id: Some(penpal.id),
            error: None,
        }),
        Err(e) => {
            tracing::error!("Failed to create penpal: {}", e);
            HttpResponse::InternalServerError().json(CreatePenpalResponse {
                success: false,
                penpal_id: None,
                error: Some("Failed to save your information. Please try again.".to_string()),
            })
        }
    }
}

/// Leave the penpal directory
///
/// DELETE /api/v1/penpals/{id}
///
/// Deleted entries stop appearing in candidate queries immediately; their
/// match history is left intact.
async fn delete_penpal(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.directory.delete_penpal(&id).await {
        Ok(true) => HttpResponse::Ok().json(DeletePenpalResponse {
            success: true,
            error: None,
        }),
        Ok(false) => HttpResponse::NotFound().json(DeletePenpalResponse {
            success: false,
            error: Some("Entry not found".to_string()),
        }),
        Err(e) => {
            tracing::error!("Failed to delete penpal {}: {}", id, e);
            HttpResponse::InternalServerError().json(DeletePenpalResponse {
                success: false,
                error: Some("Failed to delete your information. Please try again.".to_string()),
            })
        }
    }
}
