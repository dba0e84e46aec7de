//! Configuration types for the Heroes API SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for communication with a heroes backend.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HeroesConfig`]: The main configuration struct holding all SDK settings
//! - [`HeroesConfigBuilder`]: A builder for constructing [`HeroesConfig`] instances
//! - [`BaseUrl`]: A validated base URL newtype
//!
//! # Example
//!
//! ```rust
//! use heroes_api::{BaseUrl, HeroesConfig};
//!
//! let config = HeroesConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.resource_path(), "api/heroes");
//! ```

use crate::error::ConfigError;

/// Default path of the heroes collection under the base URL.
pub const DEFAULT_RESOURCE_PATH: &str = "api/heroes";

/// A validated base URL for the heroes backend.
///
/// This newtype ensures the URL is non-empty and normalizes it by stripping
/// trailing slashes, so paths can be appended with a single `/` separator.
///
/// # Example
///
/// ```rust
/// use heroes_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// Trailing slashes are stripped during construction.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the URL is empty after
    /// normalization.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self(url.to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Configuration for the Heroes API SDK.
///
/// This struct holds all configuration needed for SDK operations: the host
/// the backend is served from, the path of the heroes collection under it,
/// and an optional User-Agent prefix for outgoing requests.
///
/// # Thread Safety
///
/// `HeroesConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use heroes_api::{BaseUrl, HeroesConfig};
///
/// let config = HeroesConfig::builder()
///     .base_url(BaseUrl::new("https://example.com").unwrap())
///     .resource_path("api/villains")
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.resource_path(), "api/villains");
/// ```
#[derive(Clone, Debug)]
pub struct HeroesConfig {
    base_url: BaseUrl,
    resource_path: String,
    user_agent_prefix: Option<String>,
}

impl HeroesConfig {
    /// Creates a new builder for constructing a `HeroesConfig`.
    #[must_use]
    pub fn builder() -> HeroesConfigBuilder {
        HeroesConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the path of the heroes collection under the base URL.
    #[must_use]
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`HeroesConfig`] instances.
///
/// The base URL is required; all other settings have defaults.
#[derive(Debug, Default)]
pub struct HeroesConfigBuilder {
    base_url: Option<BaseUrl>,
    resource_path: Option<String>,
    user_agent_prefix: Option<String>,
}

impl HeroesConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the path of the heroes collection under the base URL.
    ///
    /// Defaults to [`DEFAULT_RESOURCE_PATH`]. Leading and trailing slashes
    /// are stripped so the path composes cleanly into request URLs.
    #[must_use]
    pub fn resource_path(mut self, path: impl Into<String>) -> Self {
        self.resource_path = Some(path.into());
        self
    }

    /// Sets a prefix for the User-Agent header on outgoing requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HeroesConfig`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no base URL was set,
    /// or [`ConfigError::EmptyResourcePath`] if the resource path is empty
    /// after normalization.
    pub fn build(self) -> Result<HeroesConfig, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingRequiredField {
            field: "base_url",
        })?;

        let resource_path = match self.resource_path {
            Some(path) => {
                let path = path.trim_matches('/');
                if path.is_empty() {
                    return Err(ConfigError::EmptyResourcePath);
                }
                path.to_string()
            }
            None => DEFAULT_RESOURCE_PATH.to_string(),
        };

        Ok(HeroesConfig {
            base_url,
            resource_path,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
