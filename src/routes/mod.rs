use actix_web::web;

/// Health check endpoint, `GET /health`.
pub mod health;

/// Batch email validation endpoint, `POST /validate-emails`.
pub mod email;

/// # Route Configuration
///
/// Registers all endpoints of the validation API.
///
/// Routes are mounted at the root rather than under a version prefix; the
/// wire contract is:
///
/// ```text
/// GET  /health          - Service health status
/// POST /validate-emails - Batch email validation
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(email::configure_routes);
}
