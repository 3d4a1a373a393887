use actix_web::{App, HttpServer};
use email_validator::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Email Validator API Entry Point
///
/// Launches the Actix-web HTTP server hosting:
/// - Batch validation: `POST /validate-emails`
/// - Health check: `GET /health`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Binds to `0.0.0.0:3000` by default; `PORT` overrides the port
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    email_validator::logging::init();

    let port = email_validator::config::listen_port();
    tracing::info!("email validation API listening on 0.0.0.0:{port}");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .configure(email_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
