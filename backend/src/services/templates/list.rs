use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_templates() {
        Ok(templates) => HttpResponse::Ok().json(templates),
        Err(e) => store_error_response("Error listing templates", &e),
    }
}
