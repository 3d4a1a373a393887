/// Extracts the domain of a candidate email address, if it is worth a
/// DNS lookup.
///
/// The domain is the substring after the first `@`. Returns `None` when the
/// candidate has no `@` at all, or when the extracted domain contains no `.`
/// (a bare label such as `localhost` cannot carry a public MX record).
///
/// The caller is expected to have trimmed the candidate already; no
/// normalization happens here.
///
/// # Examples
/// ```
/// use email_validator::validation::syntax::domain_of;
///
/// assert_eq!(domain_of("user@example.com"), Some("example.com"));
/// assert_eq!(domain_of("bad-email"), None);
/// assert_eq!(domain_of("user@localhost"), None);
/// ```
pub fn domain_of(email: &str) -> Option<&str> {
    let (_, domain) = email.split_once('@')?;
    if domain.contains('.') { Some(domain) } else { None }
}

#[cfg(test)]
mod tests {
    use super::domain_of;

    #[test]
    fn extracts_domain_after_first_at() {
        assert_eq!(domain_of("user@example.com"), Some("example.com"));
        assert_eq!(domain_of("first.last@mail.example.co.uk"), Some("mail.example.co.uk"));
    }

    #[test]
    fn rejects_missing_at() {
        assert_eq!(domain_of("bad-email"), None);
        assert_eq!(domain_of(""), None);
    }

    #[test]
    fn rejects_dotless_domain() {
        assert_eq!(domain_of("user@localhost"), None);
        assert_eq!(domain_of("user@"), None);
    }

    #[test]
    fn splits_at_the_first_at_sign() {
        // Everything after the first @ counts as the domain, even if it is
        // itself malformed; DNS rejects it later.
        assert_eq!(domain_of("user@@example.com"), Some("@example.com"));
        assert_eq!(domain_of("\"a@b\"@example.com"), Some("b\"@example.com"));
    }

    #[test]
    fn does_not_trim() {
        assert_eq!(domain_of(" user@example.com"), Some("example.com"));
        assert_eq!(domain_of("user@example.com "), Some("example.com "));
    }
}
