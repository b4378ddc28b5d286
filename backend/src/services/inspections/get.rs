use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(id: web::Path<i64>, state: web::Data<AppState>) -> impl Responder {
    match state.store.get_inspection(id.into_inner()) {
        Ok(inspection) => HttpResponse::Ok().json(inspection),
        Err(e) => store_error_response("Error retrieving inspection", &e),
    }
}
