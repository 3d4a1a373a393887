/// Asynchronous MX record lookups for email domains.
pub mod dnsmx;

/// Cheap plausibility checks on candidate email strings.
///
/// This is deliberately not an RFC 5322 validator: an entry only needs a
/// domain worth querying DNS for. Anything without an `@`, or whose domain
/// carries no `.`, is rejected before a lookup is attempted.
pub mod syntax;
