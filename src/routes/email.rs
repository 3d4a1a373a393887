use crate::models::email::{ValidateEmailsRequest, ValidateEmailsResponse};
use crate::validation::{dnsmx, syntax};
use actix_web::{HttpResponse, Responder, post, web};

/// # Batch Email Validation Endpoint
///
/// Accepts a list of candidate email addresses and returns the subset whose
/// domain has at least one MX record, in submission order.
///
/// For each entry:
/// 1. Surrounding whitespace is trimmed.
/// 2. The domain is extracted as the substring after the first `@`.
/// 3. Entries with no `@`, or a domain without a `.`, are dropped silently.
/// 4. Otherwise the domain's MX records are looked up; any lookup error or
///    an empty record set also drops the entry silently.
///
/// The response does not distinguish a syntactically hopeless entry from a
/// domain with no mail server; both are simply absent from `validEmails`.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with an `emails` array field
///
/// ## Responses
/// - **200 OK**: `{ "validEmails": [...] }` for any well-formed body,
///   including an empty input list
/// - **400 Bad Request**: body is not valid JSON, or `emails` is missing,
///   not an array, or contains non-string entries
///
/// ## Example Request
/// ```json
/// { "emails": ["user@example.com", "bad-email"] }
/// ```
#[utoipa::path(
    post,
    path = "/validate-emails",
    request_body = ValidateEmailsRequest,
    responses(
        (status = 200, description = "Emails whose domain has MX records, in submission order", body = ValidateEmailsResponse),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Email Validation"
)]
#[post("/validate-emails")]
pub async fn validate_emails(req: web::Json<ValidateEmailsRequest>) -> impl Responder {
    let mut valid_emails = Vec::new();

    // Lookups run one at a time; a batch's latency is the sum of its
    // individual DNS round-trips. Keeps outbound DNS load bounded at one
    // in-flight query per request.
    for candidate in &req.emails {
        let candidate = candidate.trim();

        let Some(domain) = syntax::domain_of(candidate) else {
            continue;
        };

        if dnsmx::domain_has_mx(domain).await {
            valid_emails.push(candidate.to_owned());
        }
    }

    HttpResponse::Ok().json(ValidateEmailsResponse { valid_emails })
}

/// Registers the batch validation route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_emails);
}
