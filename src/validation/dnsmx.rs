use thiserror::Error;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    error::ResolveError,
};

/// Why a domain failed the MX check.
///
/// Callers that only care about deliverability can collapse this to a
/// boolean via [`domain_has_mx`]; the distinction exists for logging.
#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain has no MX records")]
    NoRecords,
    #[error("MX lookup failed: {0}")]
    Lookup(#[from] ResolveError),
}

/// Queries DNS for the domain's MX records.
///
/// Succeeds iff the lookup completes without error and returns at least one
/// record. A single lookup is issued per call with the resolver's default
/// timeout and retry behavior; nothing is retried or cached here, so the
/// same domain asked twice is queried twice.
///
/// # Arguments
/// * `domain` - Domain name to check (without the `@` or local part)
pub async fn check_mx(domain: &str) -> Result<(), MxError> {
    // A fresh resolver per call keeps results out of any shared cache.
    let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());

    let lookup = resolver.mx_lookup(domain).await?;
    if lookup.iter().next().is_some() {
        Ok(())
    } else {
        Err(MxError::NoRecords)
    }
}

/// Boolean form of [`check_mx`]: any failure means "no mail server".
pub async fn domain_has_mx(domain: &str) -> bool {
    match check_mx(domain).await {
        Ok(()) => {
            tracing::debug!("MX records found for {domain}");
            true
        }
        Err(err) => {
            tracing::debug!("MX check failed for {domain}: {err}");
            false
        }
    }
}
