use std::env;

/// Port both server binaries listen on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Resolves the listen port from the `PORT` environment variable.
///
/// An unset, empty, or unparseable value falls back to [`DEFAULT_PORT`].
/// Both the validation API and the landing server read this independently,
/// so they can be pointed at different ports via their own environments.
pub fn listen_port() -> u16 {
    port_from(env::var("PORT").ok())
}

fn port_from(value: Option<String>) -> u16 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
