//! Sign-in request parsing.
//!
//! The hosting pipeline hands over the request path and query as a single
//! percent-encoded string. Values inside the query (such as `wreply`) are
//! encoded a second time, so the input is decoded once here and the query
//! is then parsed by a real URL parser, which decodes each value exactly
//! once more. Splitting on `?` by hand breaks when a nested value carries
//! characters that look like delimiters.

use url::Url;

use crate::types::WsFederationMessage;

/// Base used to turn a bare path and query into an absolute URL. Only the
/// query of the result is read.
const PLACEHOLDER_BASE: &str = "https://wsfed.invalid/";

/// Extracts a sign-in request from an encoded path and query.
///
/// Returns `None` when the input has no query, when the query holds no
/// parameters, or when the action is anything other than `wsignin1.0`.
/// These are not errors: the request is simply not a sign-in message.
#[must_use]
pub fn parse_sign_in_request(encoded_url: &str) -> Option<WsFederationMessage> {
    let decoded_bytes = urlencoding::decode_binary(encoded_url.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded_bytes);

    if !decoded.contains('?') {
        return None;
    }

    let url = match Url::parse(PLACEHOLDER_BASE).and_then(|base| base.join(&decoded)) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(error = %e, "request path is not a valid URL reference");
            return None;
        }
    };

    let message = WsFederationMessage::from_pairs(url.query_pairs());
    if message.is_sign_in_message() {
        Some(message)
    } else {
        tracing::debug!(wa = ?message.wa, "request is not a WS-Federation sign-in message");
        None
    }
}
