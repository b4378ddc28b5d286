use crate::qr::build_qr_code;
use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::QrCodeQuery;

pub async fn process(
    id: web::Path<i64>,
    query: web::Query<QrCodeQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let inspection = match state.store.get_inspection(id.into_inner()) {
        Ok(inspection) => inspection,
        Err(e) => return store_error_response("Error retrieving inspection", &e),
    };

    match build_qr_code(
        &state.http,
        &state.config,
        inspection.id,
        &inspection.reference,
        query.into_inner().codeword,
    )
    .await
    {
        Ok(qr) => HttpResponse::Ok().json(qr),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("QR generation failed: {}", e)),
    }
}
