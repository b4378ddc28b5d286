use crate::config::Config;
use crate::store::Store;

/// Shared application state handed to every handler as `web::Data<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Store,
    /// Client used to fetch remote QR images.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, store: Store) -> Self {
        Self {
            config,
            store,
            http: reqwest::Client::new(),
        }
    }
}
