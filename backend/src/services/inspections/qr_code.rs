//! Stores a refreshed QR image for an inspection.
//!
//! Only image data URLs and http(s) URLs are accepted: the value ends up in an
//! `<img src>` on the admin and public pages.

use crate::services::store_error_response;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{UpdateQrCodeRequest, UpdateQrCodeResponse};
use regex::Regex;
use std::sync::LazyLock;

static ACCEPTED_QR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(data:image/(png|jpeg|svg\+xml);base64,[A-Za-z0-9+/=]+|https?://\S+)$")
        .expect("QR pattern is valid")
});

pub async fn process(
    id: web::Path<i64>,
    payload: web::Json<UpdateQrCodeRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let qr_code = payload.qr_code.trim();
    if !ACCEPTED_QR.is_match(qr_code) {
        return HttpResponse::BadRequest().body("Le QR code doit être une image encodée ou une URL http(s)");
    }

    match state.store.update_qr_code(id.into_inner(), qr_code) {
        Ok(changed) => HttpResponse::Ok().json(UpdateQrCodeResponse { changed }),
        Err(e) => store_error_response("Error updating QR code", &e),
    }
}
