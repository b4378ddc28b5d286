//! Unauthenticated pages reached from the QR code printed on the equipment.

mod view;

use actix_web::web::{get, scope};
use actix_web::Scope;
use common::link::PUBLIC_PATH;

/// `GET /public/inspection/{slug}`: server-rendered inspection sheet. A slug
/// whose reference part is stale is redirected (`308`) to the canonical one.
pub fn configure_routes() -> Scope {
    scope(PUBLIC_PATH).route("/{slug}", get().to(view::process))
}
