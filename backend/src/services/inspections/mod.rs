//! # Inspection Service Module
//!
//! API endpoints for inspection records, under `/api/inspections`.
//!
//! ## Sub-modules:
//! - `list`: summaries, optionally filtered by equipment family.
//! - `create`: admin form submission.
//! - `get`: a single inspection record.
//! - `qr_code`: storage of a refreshed QR image.
//! - `qr`: on-demand QR generation with optional brand mark and codeword badge.

mod create;
mod get;
mod list;
mod qr;
mod qr_code;

use actix_web::web::{get, patch, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/inspections";

/// Configures and returns the Actix `Scope` for inspection routes.
///
/// # Registered Routes:
///
/// *   **`GET /?equipment_type=`**: newest-first summaries; an unknown family is `400`.
/// *   **`POST /`**: creates an inspection from a `NewInspection` JSON payload and
///     returns the stored record (with its id).
/// *   **`GET /{id}`**: the full record.
/// *   **`POST|PATCH /{id}/qr-code`**: stores `{ "qrCode": … }`; answers
///     `{ "changed": bool }`, `false` when the image is unchanged.
/// *   **`GET /{id}/qr?codeword=`**: builds the QR code pointing at the public
///     viewer, see `crate::qr`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}/qr-code", post().to(qr_code::process))
        .route("/{id}/qr-code", patch().to(qr_code::process))
        .route("/{id}/qr", get().to(qr::process))
}
