pub mod inspections;
pub mod public;
pub mod templates;

use crate::store::StoreError;
use actix_web::HttpResponse;
use log::error;

/// Maps a storage failure to the response every JSON endpoint returns.
pub(crate) fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(what) => HttpResponse::NotFound().body(format!("{} not found", what)),
        StoreError::Invalid(msg) => HttpResponse::BadRequest().body(msg.clone()),
        StoreError::Sqlite(_) | StoreError::Json(_) => {
            error!("{}: {}", context, err);
            HttpResponse::ServiceUnavailable().body(format!("{}: {}", context, err))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::Config;
    use crate::state::AppState;
    use crate::store::Store;
    use actix_web::web;
    use tempfile::TempDir;

    /// Application state over a throwaway database. Keep the `TempDir` alive
    /// for the duration of the test.
    pub(crate) fn app_state() -> (TempDir, web::Data<AppState>) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("test.sqlite")).unwrap();
        let config = Config {
            public_base_url: "https://epi.example.org".to_string(),
            qr_service_url: "http://127.0.0.1:9/qr".to_string(),
            ..Config::default()
        };
        (dir, web::Data::new(AppState::new(config, store)))
    }
}
