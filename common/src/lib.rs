//! Shared model and rendering logic for the inspection service.
//!
//! Everything in this crate is pure: it is compiled both into the actix
//! backend (public HTML viewer) and into the yew frontend (wasm viewer), so it
//! must not touch the network, the filesystem or the DOM.

pub mod link;
pub mod model;
pub mod render;
pub mod requests;
