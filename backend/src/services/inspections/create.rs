use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::inspection::NewInspection;
use log::info;

/// Handler for the admin creation form (`POST /api/inspections`).
///
/// # Returns
/// - `200 OK` with the stored `Inspection`, including its new id.
/// - `400 Bad Request` when the payload is incomplete.
/// - `503 Service Unavailable` on database errors.
pub async fn process(
    payload: web::Json<NewInspection>,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.store.create_inspection(payload.into_inner()) {
        Ok(inspection) => {
            info!(
                "Inspection {} created for {} {}",
                inspection.id,
                inspection.equipment_type,
                inspection.reference
            );
            HttpResponse::Ok().json(inspection)
        }
        Err(e) => store_error_response("Error creating inspection", &e),
    }
}
