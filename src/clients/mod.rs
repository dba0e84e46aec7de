//! HTTP client types for heroes backend communication.
//!
//! This module provides the transport layer the hero facade delegates to.
//! It handles request building, response parsing, and error mapping, and
//! nothing else: no retries, no backoff, no authentication. A request is
//! sent exactly once and resolves exactly once, with success or failure.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for backend communication
//! - [`HttpRequest`]: A request to be sent to the backend
//! - [`HttpResponse`]: A parsed response from the backend
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use heroes_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new("http://localhost:3000", None);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "api/heroes")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
