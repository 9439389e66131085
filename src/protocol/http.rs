// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport built on `reqwest`.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::{HttpRequest, HttpResponse, Method, Transport};

// ============================================================================
// HttpConfig - Transport configuration
// ============================================================================

/// Configuration of the HTTP transport.
///
/// # Examples
///
/// ```
/// use ariston_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_user_agent("my-app/1.0");
///
/// assert_eq!(config.timeout(), Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    timeout: Duration,
    user_agent: Option<String>,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent, if set.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Creates an `HttpTransport` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, ProtocolError> {
        let mut builder = Client::builder().timeout(self.timeout);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(HttpTransport {
            client,
            timeout: self.timeout,
        })
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HttpTransport
// ============================================================================

/// `reqwest`-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpConfig::new().into_transport()
    }

    fn map_error(&self, error: reqwest::Error) -> ProtocolError {
        if error.is_timeout() {
            #[allow(clippy::cast_possible_truncation)]
            let millis = self.timeout.as_millis() as u64;
            ProtocolError::Timeout(millis)
        } else if error.is_connect() {
            ProtocolError::ConnectionFailed(error.to_string())
        } else if error.is_builder() {
            ProtocolError::InvalidAddress(error.to_string())
        } else {
            ProtocolError::Http(error)
        }
    }
}

impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ProtocolError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let announced = response.content_length();
        let body = response.text().await.map_err(|e| self.map_error(e))?;
        let content_length = announced.unwrap_or(body.len() as u64);

        Ok(HttpResponse::with_content_length(
            status,
            content_length,
            body,
        ))
    }
}
