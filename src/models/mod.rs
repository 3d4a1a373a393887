/// Request and response payloads for the batch validation endpoint.
pub mod email;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
pub mod health;
