//! HTTP Basic credential construction

use base64::Engine;

/// Build the `Authorization` header value for HTTP Basic auth.
///
/// Encodes `username:password` with base64 and prefixes the `Basic` scheme.
/// Inputs are encoded exactly as given; no validation happens here.
pub fn basic_authorization(username: &str, password: &str) -> String {
    let credentials =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}
