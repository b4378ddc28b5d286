mod config;
mod html;
mod qr;
mod services;
mod state;
mod store;

use crate::config::Config;
use crate::state::AppState;
use crate::store::Store;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Looks up the embedded file answering `request_path`, with its MIME type.
///
/// Client routes such as `/inspections/{id}` have no file of their own and get
/// `index.html`. Paths that name a file (with an extension) are never
/// redirected to it, so a missing script stays a 404.
fn embedded_asset<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<(&'a [u8], String)> {
    let path = match request_path.trim_start_matches('/') {
        "" => "index.html",
        path => path,
    };
    if let Some(file) = dir.get_file(path) {
        let mime = from_path(path).first_or_octet_stream();
        return Some((file.contents(), mime.to_string()));
    }
    let is_file_name = path.rsplit('/').next().is_some_and(|name| name.contains('.'));
    if is_file_name {
        return None;
    }
    dir.get_file("index.html")
        .map(|index| (index.contents(), "text/html; charset=utf-8".to_string()))
}

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match embedded_asset(&STATIC_DIR, req.path()) {
        Some((body, mime)) => HttpResponse::Ok().content_type(mime).body(body.to_vec()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;
    let store = Store::open(&config.database_path).map_err(|e| {
        error!("Cannot open {}: {}", config.database_path.display(), e);
        std::io::Error::other(e.to_string())
    })?;

    let url = config.bind_url();
    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!(
        "Server running at {} (database {}, public links on {})",
        url,
        config.database_path.display(),
        config.public_base_url
    );

    let bind = (config.host.clone(), config.port);
    let json_limit = config.json_limit;
    let state = web::Data::new(AppState::new(config, store));

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(state.clone())
            .service(services::inspections::configure_routes())
            .service(services::templates::configure_routes())
            .service(services::public::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::embedded_asset;
    use include_dir::{Dir, DirEntry, File};

    static ASSETS: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html></html>")),
            DirEntry::File(File::new("frontend.js", b"run()")),
        ],
    );

    #[test]
    fn files_are_served_with_their_mime_type() {
        let (body, mime) = embedded_asset(&ASSETS, "/frontend.js").unwrap();
        assert_eq!(body, b"run()");
        assert!(mime.contains("javascript"));

        let (body, mime) = embedded_asset(&ASSETS, "/").unwrap();
        assert_eq!(body, b"<html></html>");
        assert_eq!(mime, "text/html");
    }

    #[test]
    fn client_routes_fall_back_to_index_but_missing_files_do_not() {
        let (body, _) = embedded_asset(&ASSETS, "/admin/inspections/4").unwrap();
        assert_eq!(body, b"<html></html>");
        assert!(embedded_asset(&ASSETS, "/missing.wasm").is_none());
    }
}
