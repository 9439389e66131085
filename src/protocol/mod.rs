// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport abstraction for the Ariston NET API.
//!
//! The remote access layer only needs to send a JSON request and read back
//! the status code, the content length and the body. Any type implementing
//! [`Transport`] can carry it; [`HttpTransport`] is the default
//! implementation built on `reqwest`.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ParseError, ProtocolError};

/// HTTP verb of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
}

impl Method {
    /// Returns the verb as text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP verb.
    pub method: Method,
    /// Absolute URL, including the query string.
    pub url: String,
    /// Extra headers.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Returns the value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    content_length: u64,
    body: String,
}

impl HttpResponse {
    /// Creates a response; the content length is taken from the body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status,
            content_length: body.len() as u64,
            body,
        }
    }

    /// Creates a response with an explicit content length.
    #[must_use]
    pub fn with_content_length(status: u16, content_length: u64, body: impl Into<String>) -> Self {
        Self {
            status,
            content_length,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the announced content length.
    #[must_use]
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body.
    ///
    /// An empty body decodes to `None`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if a non-empty body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<Option<T>, ParseError> {
        if self.content_length == 0 || self.body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&self.body)
            .map(Some)
            .map_err(Into::into)
    }
}

/// Trait for transports that can carry requests to the remote service.
///
/// Implementations only move bytes: status handling, authentication and
/// retries belong to [`AristonApi`](crate::api::AristonApi).
pub trait Transport: Send + Sync {
    /// Sends the request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if no response could be obtained.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ProtocolError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_absent() {
        let response = HttpResponse::new(200, "");
        assert_eq!(response.json::<Value>().unwrap(), None);
    }

    #[test]
    fn zero_content_length_is_absent() {
        let response = HttpResponse::with_content_length(200, 0, "{}");
        assert_eq!(response.json::<Value>().unwrap(), None);
    }

    #[test]
    fn body_is_decoded() {
        let response = HttpResponse::new(200, r#"{"token": "t"}"#);
        let value: Value = response.json().unwrap().unwrap();
        assert_eq!(value["token"], "t");
    }

    #[test]
    fn invalid_body_is_error() {
        let response = HttpResponse::new(200, "<html>");
        assert!(response.json::<Value>().is_err());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest::new(Method::Get, "http://x").with_header("ar.authToken", "t");
        assert_eq!(request.header("AR.AUTHTOKEN"), Some("t"));
        assert_eq!(request.header("other"), None);
    }

    #[test]
    fn success_range() {
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
    }
}
