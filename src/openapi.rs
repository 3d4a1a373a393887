use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. Generated at compile time; changes to the API surface should be
/// reflected here to keep the published contract accurate.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Batch Email Validation: `POST /validate-emails`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_emails,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::ValidateEmailsRequest,
            crate::models::email::ValidateEmailsResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Batch email deliverability checks via DNS MX lookups")
    ),
    info(
        description = "API returning the subset of submitted email addresses whose domain has at least one MX record",
        title = "Email Validator API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
