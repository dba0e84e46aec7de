//! # Heroes API Rust SDK
//!
//! An async Rust client SDK for a heroes REST backend, providing a
//! data-access facade with uniform error containment and a user-facing
//! activity log.
//!
//! ## Overview
//!
//! This SDK provides:
//! - A CRUD/search facade over the heroes collection via [`HeroService`]
//! - Fail-open error recovery: operations return fallback values, never errors
//! - An append-only activity log via [`MessageLog`]
//! - A best-effort diagnostic seam via [`DiagnosticSink`]
//! - Type-safe configuration via [`HeroesConfig`] and [`HeroesConfigBuilder`]
//! - An async HTTP transport layer via [`clients`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use heroes_api::{BaseUrl, Hero, HeroesConfig, HeroService, MessageLog};
//!
//! # async fn run() {
//! // Configure the SDK using the builder pattern
//! let config = HeroesConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // The activity log is shared between the service and its display surface
//! let messages = MessageLog::new();
//! let service = HeroService::from_config(&config, messages.clone());
//!
//! // Operations never fail from the caller's point of view
//! let heroes = service.fetch_all().await;
//! let hero = service.fetch_one(11).await;
//! let created = service.create(&Hero::new("Zorg")).await;
//! let matches = service.search("tor").await;
//!
//! // Failures surface through the activity log instead
//! for entry in messages.entries() {
//!     println!("{entry}");
//! }
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the log and diagnostics are injected collaborators
//! - **Fail-open at the facade**: a backend outage degrades to empty results
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod heroes;
pub mod messages;

// Re-export public types at crate root for convenience
pub use config::{BaseUrl, HeroesConfig, HeroesConfigBuilder, DEFAULT_RESOURCE_PATH};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::ConfigError;
pub use heroes::{Ack, Hero, HeroRef, HeroService};
pub use messages::MessageLog;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
