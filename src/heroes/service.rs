//! The hero facade: CRUD and search over the remote heroes collection.
//!
//! [`HeroService`] translates each data-access intent into one HTTP call,
//! pairs it with an activity-log entry, and absorbs every failure into a
//! fallback value. Callers never see an error: a backend outage degrades
//! to empty lists, absent heroes, and no-op writes, each accompanied by a
//! log entry naming the failed operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use heroes_api::{BaseUrl, HeroesConfig, HeroService, MessageLog};
//!
//! let config = HeroesConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000")?)
//!     .build()?;
//!
//! let messages = MessageLog::new();
//! let service = HeroService::from_config(&config, messages.clone());
//!
//! let heroes = service.fetch_all().await;
//! for entry in messages.entries() {
//!     println!("{entry}");
//! }
//! ```

use std::future::Future;
use std::sync::Arc;

use crate::clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError,
};
use crate::config::{HeroesConfig, DEFAULT_RESOURCE_PATH};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::heroes::hero::{Ack, Hero, HeroRef};
use crate::messages::MessageLog;

/// Client-side facade over the remote heroes collection.
///
/// The service owns the collection's base path and three collaborators:
/// the transport client, the activity log, and a diagnostic sink. It holds
/// no hero state between calls; each operation is an independent request/
/// response cycle.
///
/// # Error Recovery
///
/// Every operation funnels failures through one recovery policy: report
/// the error to the diagnostic sink, append `"<operation> failed: <msg>"`
/// to the activity log, and return the operation's fallback value as if it
/// were a success. No error crosses the facade boundary.
///
/// # Thread Safety
///
/// `HeroService` is `Send + Sync`; operations take `&self` and can run
/// concurrently. No ordering is guaranteed between concurrent calls.
pub struct HeroService {
    /// Transport client requests are delegated to.
    client: HttpClient,
    /// The user-facing activity log.
    messages: MessageLog,
    /// Best-effort sink for absorbed errors.
    diagnostics: Arc<dyn DiagnosticSink>,
    /// Path of the heroes collection under the client's base URI.
    heroes_path: String,
}

// Verify HeroService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HeroService>();
};

impl std::fmt::Debug for HeroService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeroService")
            .field("client", &self.client)
            .field("heroes_path", &self.heroes_path)
            .finish_non_exhaustive()
    }
}

impl HeroService {
    /// Creates a new service over the given transport client and log.
    ///
    /// The collection path defaults to `api/heroes` and diagnostics go to
    /// the `tracing` infrastructure; see [`with_resource_path`](Self::with_resource_path)
    /// and [`with_diagnostics`](Self::with_diagnostics) to override either.
    #[must_use]
    pub fn new(client: HttpClient, messages: MessageLog) -> Self {
        Self {
            client,
            messages,
            diagnostics: Arc::new(TracingSink),
            heroes_path: DEFAULT_RESOURCE_PATH.to_string(),
        }
    }

    /// Creates a service wired from a [`HeroesConfig`].
    #[must_use]
    pub fn from_config(config: &HeroesConfig, messages: MessageLog) -> Self {
        let client = HttpClient::new(config.base_url().as_ref(), Some(config));
        Self::new(client, messages).with_resource_path(config.resource_path())
    }

    /// Overrides the path of the heroes collection under the base URI.
    #[must_use]
    pub fn with_resource_path(mut self, path: impl Into<String>) -> Self {
        self.heroes_path = path.into();
        self
    }

    /// Overrides the diagnostic sink absorbed errors are reported to.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Fetches every hero in the collection.
    ///
    /// Sends `GET <base>`. On failure the fallback is an empty vector,
    /// never an error.
    pub async fn fetch_all(&self) -> Vec<Hero> {
        self.recover("fetch_all", Vec::new(), async {
            let request = HttpRequest::builder(HttpMethod::Get, &self.heroes_path).build()?;
            let response = self.client.request(request).await?;
            let heroes: Vec<Hero> = serde_json::from_value(response.body)?;
            self.log("fetched heroes");
            Ok(heroes)
        })
        .await
    }

    /// Fetches a single hero by id.
    ///
    /// Sends `GET <base>/<id>`. Returns `None` when the hero does not
    /// exist or the backend is unreachable; the two are indistinguishable
    /// here. An eager log entry is emitted before the request is issued,
    /// regardless of its eventual outcome.
    pub async fn fetch_one(&self, id: u64) -> Option<Hero> {
        self.messages
            .add(format!("HeroService: fetched hero id={id}"));
        self.recover(&format!("fetch_one id={id}"), None, async {
            let request =
                HttpRequest::builder(HttpMethod::Get, format!("{}/{id}", self.heroes_path))
                    .build()?;
            let response = self.client.request(request).await?;
            let hero: Hero = serde_json::from_value(response.body)?;
            self.log(format!("fetched hero id={id}"));
            Ok(Some(hero))
        })
        .await
    }

    /// Searches heroes whose name contains the given term.
    ///
    /// A term that is empty after trimming short-circuits to an empty
    /// vector: no request is sent and no log entry is written. Otherwise
    /// sends `GET <base>/?name=<term>` with the term percent-encoded as a
    /// query parameter.
    pub async fn search(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            tracing::debug!("empty search term, skipping request");
            return Vec::new();
        }

        self.recover("search", Vec::new(), async {
            let request = HttpRequest::builder(HttpMethod::Get, format!("{}/", self.heroes_path))
                .query_param("name", term)
                .build()?;
            let response = self.client.request(request).await?;
            let heroes: Vec<Hero> = serde_json::from_value(response.body)?;
            self.log(format!("found heroes matching \"{term}\""));
            Ok(heroes)
        })
        .await
    }

    /// Updates an existing hero on the backend.
    ///
    /// Sends `PUT <base>` with the full hero as the JSON body. Returns the
    /// backend's opaque acknowledgement, or `None` on failure — a caller
    /// cannot tell a substituted fallback from a genuinely empty ack.
    pub async fn update(&self, hero: &Hero) -> Option<Ack> {
        self.recover("update", None, async {
            let body = serde_json::to_value(hero)?;
            let request = HttpRequest::builder(HttpMethod::Put, &self.heroes_path)
                .body(body)
                .body_type(DataType::Json)
                .build()?;
            let response = self.client.request(request).await?;
            self.log(format!("updated hero id={}", display_id(hero.id)));
            Ok(Some(response.body))
        })
        .await
    }

    /// Creates a new hero on the backend.
    ///
    /// Sends `POST <base>` with the hero as the JSON body; the id may be
    /// absent and is assigned by the backend. Returns the created hero,
    /// including its new id, or `None` on failure.
    pub async fn create(&self, hero: &Hero) -> Option<Hero> {
        self.recover("create", None, async {
            let body = serde_json::to_value(hero)?;
            let request = HttpRequest::builder(HttpMethod::Post, &self.heroes_path)
                .body(body)
                .body_type(DataType::Json)
                .build()?;
            let response = self.client.request(request).await?;
            let created: Hero = serde_json::from_value(response.body)?;
            self.log(format!("add hero id={}", display_id(created.id)));
            Ok(Some(created))
        })
        .await
    }

    /// Removes a hero from the backend, by id or by value.
    ///
    /// Sends `DELETE <base>/<id>`. Returns the backend's last-known
    /// representation of the removed hero where it provides one; an empty
    /// success body yields `None`, the same value an absorbed failure
    /// yields.
    pub async fn remove(&self, hero: impl Into<HeroRef>) -> Option<Hero> {
        let hero_ref = hero.into();
        self.recover("remove", None, async {
            let id = hero_ref.id().ok_or(InvalidHttpRequestError::MissingId)?;
            let request =
                HttpRequest::builder(HttpMethod::Delete, format!("{}/{id}", self.heroes_path))
                    .header("Content-Type", DataType::Json.as_content_type())
                    .build()?;
            let response = self.client.request(request).await?;
            self.log(format!("delete hero id={id}"));
            Ok(serde_json::from_value(response.body).ok())
        })
        .await
    }

    /// Runs an operation under the shared fail-open recovery policy.
    ///
    /// On failure the error is reported to the diagnostic sink, a
    /// `"<operation> failed: <msg>"` entry is logged, and `fallback` is
    /// returned as the operation's result.
    async fn recover<T, F>(&self, operation: &str, fallback: T, call: F) -> T
    where
        F: Future<Output = Result<T, HttpError>>,
    {
        match call.await {
            Ok(value) => value,
            Err(error) => {
                self.diagnostics.report(&error);
                self.log(format!("{operation} failed: {error}"));
                fallback
            }
        }
    }

    /// Writes a service-prefixed entry to the activity log.
    fn log(&self, message: impl Into<String>) {
        self.messages
            .add(format!("HeroService: {}", message.into()));
    }
}

/// Formats an optional backend id for log messages.
fn display_id(id: Option<u64>) -> String {
    id.map_or_else(|| "unknown".to_string(), |id| id.to_string())
}
