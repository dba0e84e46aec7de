//! HTTP response types for the Heroes API SDK.
//!
//! This module provides the [`HttpResponse`] type for accessing parsed
//! response data from the heroes backend.

use std::collections::HashMap;

/// A parsed response from the heroes backend.
///
/// The body is held as loosely-typed JSON; callers decode it into their
/// expected shape (a hero, a list of heroes, or an opaque acknowledgement).
///
/// # Example
///
/// ```rust
/// use heroes_api::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), json!([{"id": 1, "name": "Narco"}]));
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, with lowercase names and one entry per value.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body parsed as JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }
}
