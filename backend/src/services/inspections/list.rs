use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::model::inspection::EquipmentType;
use common::requests::ListInspectionsQuery;

pub async fn process(
    query: web::Query<ListInspectionsQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let filter = match query.equipment_type.as_deref().map(str::parse::<EquipmentType>) {
        Some(Ok(ty)) => Some(ty),
        Some(Err(e)) => return HttpResponse::BadRequest().body(e),
        None => None,
    };

    match state.store.list_inspections(filter) {
        Ok(summaries) => HttpResponse::Ok().json(summaries),
        Err(e) => store_error_response("Error listing inspections", &e),
    }
}
