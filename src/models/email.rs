use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Batch Validation Request
///
/// JSON body accepted by `POST /validate-emails`.
///
/// ## Fields
/// - `emails`: candidate email addresses, validated in the order given
///
/// A missing or ill-typed `emails` field fails deserialization, which the
/// endpoint surfaces as a `400 Bad Request`.
///
/// ## Example JSON
/// ```json
/// { "emails": ["user@example.com", "user2@example.org"] }
/// ```
#[derive(Deserialize, ToSchema)]
pub struct ValidateEmailsRequest {
    pub emails: Vec<String>,
}

/// # Batch Validation Response
///
/// The subset of submitted emails whose domain has at least one MX record,
/// trimmed of surrounding whitespace and preserving submission order.
///
/// ## Example JSON
/// ```json
/// { "validEmails": ["user@example.com"] }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ValidateEmailsResponse {
    #[serde(rename = "validEmails")]
    pub valid_emails: Vec<String>,
}
