//! # Template Retrieval Service
//!
//! Backs `GET /api/templates/{template_id}`. The inspection viewers call it
//! right after loading a template-driven inspection, with the inspection's
//! `templateId`.

use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// # Returns
/// - `200 OK` with the `InspectionTemplate` as JSON.
/// - `404 Not Found` when no template has this id.
/// - `503 Service Unavailable` on database errors.
pub async fn process(template_id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match state.store.get_template(&template_id) {
        Ok(template) => HttpResponse::Ok().json(template),
        Err(e) => store_error_response("Error retrieving template", &e),
    }
}
