//! Request header merging for the HTTP client wrapper.

use std::collections::HashMap;

/// A set of HTTP request headers, keyed by header name.
pub type Headers = HashMap<String, String>;

/// Merge caller-supplied headers with the client's additional headers.
///
/// If `base` is non-empty, `additional` is merged into it and wins on any key
/// collision. Otherwise `additional` is returned as-is; an empty `base` is
/// treated the same as no headers at all.
///
/// Both maps are taken by value. Callers that still need their original `base`
/// must clone it first.
pub fn build_headers_from(mut base: Headers, additional: Headers) -> Headers {
    if base.is_empty() {
        return additional;
    }
    base.extend(additional);
    base
}
