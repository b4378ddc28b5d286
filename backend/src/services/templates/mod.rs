//! # Template Service Module
//!
//! API endpoints managing inspection templates, under `/api/templates`.
//!
//! ## Sub-modules:
//! - `get`: retrieval of a single template.
//! - `list`: retrieval of every template, ordered by name.
//! - `save`: creation and replacement of a template.

mod get;
mod list;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all template-related API endpoints.
const API_PATH: &str = "/api/templates";

/// Configures and returns the Actix `Scope` for all template-related routes.
///
/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`, every stored template as a JSON array.
///
/// *   **`POST /save`**: `save::process`, creates or replaces a template. The
///     payload is an `InspectionTemplate`; an empty `id` gets a fresh UUID. The
///     structure is validated (unique section and subsection ids) before it is
///     stored, and the stored template is returned.
///
/// *   **`GET /{template_id}`**: `get::process`, a single template, `404` when
///     the id is unknown.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/save", post().to(save::process))
        .route("/{template_id}", get().to(get::process))
}
