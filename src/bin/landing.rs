use actix_files::Files;
use actix_web::{App, HttpResponse, HttpServer, Responder, get};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const VERIFY_HTML: &str = include_str!("../../static/verify.html");

/// # Landing Page
///
/// Returns the fixed landing HTML document.
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// # Verification Page
///
/// Returns the interactive verification form.
#[get("/verify")]
async fn verify() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(VERIFY_HTML)
}

/// Landing / Static File Server Entry Point
///
/// Serves the landing page on `/`, the verification form on `/verify`, and
/// any file under the `static/` directory on its own path. Runs as a
/// separate process from the validation API and reads `PORT` independently,
/// defaulting to 3000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    email_validator::logging::init();

    let port = email_validator::config::listen_port();
    tracing::info!("landing server listening on 0.0.0.0:{port}");

    HttpServer::new(|| {
        App::new()
            .service(index)
            .service(verify)
            // Fallback: everything else maps into the static root
            .service(Files::new("/", "static"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
