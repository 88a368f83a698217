mod config;
mod services;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

use crate::config::ServerConfig;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Maps a request path onto a file in the embedded bundle.
fn asset_path(request_path: &str) -> &str {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        "index.html"
    } else {
        path
    }
}

/// Serves the embedded admin UI. Unknown paths get `index.html` so the
/// single-page app can render them.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let file_path = asset_path(req.path());

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => {
                warn!("Frontend bundle missing, cannot serve {}", file_path);
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let server_config = ServerConfig::from_env().map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let url = server_config.url();

    if server_config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);
    info!("Cards API origin: {}", server_config.api_origin);

    let client_config = web::Data::new(server_config.client_config());

    HttpServer::new(move || {
        App::new()
            .app_data(client_config.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
