//! Blocking HTTP client for the KABU+ price files.

use bytes::Bytes;
use chrono::NaiveDate;
use kabuplus_types::Credentials;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::url::{BASE_URL, price_url};

/// Configuration for the price client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the CSV share.
    pub base_url: String,
    /// Whole-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    /// Connection timeout. `None` keeps the HTTP client's default.
    pub connect_timeout: Option<Duration>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            user_agent: format!("kabuplus/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned anything other than `200 OK`.
    #[error("Server returned {status}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
    },
}

/// HTTP client holding the login for the price files.
///
/// Each call to [`PriceClient::fetch`] performs exactly one request. Nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct PriceClient {
    client: Client,
    credentials: Credentials,
    config: ClientConfig,
}

impl PriceClient {
    /// Creates a new client with the given login and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the raw price file for `date`.
    ///
    /// The body is returned only for a `200 OK` response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on transport failure and
    /// [`FetchError::Status`] for any other status code.
    pub fn fetch(&self, date: NaiveDate) -> Result<Bytes, FetchError> {
        let url = price_url(&self.config.base_url, date);
        debug!(%url, %date, "requesting price file");

        let response = self
            .client
            .get(&url)
            .basic_auth(self.credentials.user(), Some(self.credentials.password()))
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, %date, "price file request rejected");
            return Err(FetchError::Status { status });
        }

        let body = response.bytes()?;
        debug!(bytes = body.len(), %date, "downloaded price file");
        Ok(body)
    }
}
