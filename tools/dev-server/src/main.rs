//! Development Server for the Plash wallpapers
//!
//! Serves the `web/` directory with correct MIME types for wasm, SVG and
//! JSON, and disables caching for the speed endpoint so adaptive polling
//! always reads a fresh value.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

/// File polled by adaptive mode
const SPEED_FILE: &str = "speed.json";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let root = std::env::var("WEB_DIR").unwrap_or_else(|_| "web".to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new(&root).precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(add_headers)));

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║           Plash Wallpaper Development Server      ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL: http://localhost:{}                       ║", port);
    println!("║  Serving: {:<40}║", root);
    println!("║  Try ?variant=starfield&mode=adaptive             ║");
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// Fix MIME types and caching
async fn add_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if let Some(content_type) = content_type_for(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    if is_speed_file(&path) {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    }

    response
}

/// Content type for paths the browser is strict about
fn content_type_for(path: &str) -> Option<&'static str> {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match extension {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

fn is_speed_file(path: &str) -> bool {
    path.rsplit('/').next() == Some(SPEED_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("/pkg/plash_web_bg.wasm"), Some("application/wasm"));
        assert_eq!(content_type_for("/airlogo.svg"), Some("image/svg+xml"));
        assert_eq!(
            content_type_for("/speed.json"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(content_type_for("/"), None);
        assert_eq!(content_type_for("/favicon.ico"), None);
    }

    #[test]
    fn test_speed_file_detection() {
        assert!(is_speed_file("/speed.json"));
        assert!(is_speed_file("/data/speed.json"));
        assert!(!is_speed_file("/speed.json.bak"));
        assert!(!is_speed_file("/index.html"));
    }
}
