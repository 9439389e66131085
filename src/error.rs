// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Ariston library.
//!
//! The hierarchy mirrors the layers of the library: transport failures,
//! authentication failures, non-success server answers, response decoding,
//! and coordinator-level lookups.
//!
//! A remote "not found" answer is not an error:
//! the remote access layer maps it to `Ok(None)`.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while talking to the remote service.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Login failed or the session token was rejected twice.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Server {
        /// The HTTP status code.
        status: u16,
    },

    /// The server rejected a write because the previous value did not match.
    #[error("stale write rejected for {id} (zone {zone})")]
    StaleWrite {
        /// Property identifier.
        id: String,
        /// Zone number.
        zone: u32,
    },

    /// Error occurred while parsing a response.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A value could not be converted into a typed enum.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The remote service does not know the requested device.
    #[error("device not found")]
    DeviceNotFound,

    /// The property is not part of the cached snapshot.
    #[error("unknown property {id} (zone {zone})")]
    UnknownProperty {
        /// Property identifier.
        id: String,
        /// Zone number.
        zone: u32,
    },

    /// The coordinator has not completed its first refresh yet.
    #[error("device state is not initialized")]
    NotInitialized,
}

/// Errors related to the transport layer.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to the remote service failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to the session token lifecycle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Re-login after a session expiry did not succeed.
    #[error("login failed (password changed?)")]
    LoginFailed,

    /// The token was rejected again right after a successful re-login.
    #[error("invalid token")]
    InvalidToken,
}

/// Errors related to parsing responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors raised when converting raw values into typed enums.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The numeric code does not map to a known variant.
    #[error("unknown {kind} value: {value}")]
    UnknownVariant {
        /// Name of the target enum.
        kind: &'static str,
        /// The raw value that was provided.
        value: i64,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display() {
        let err = Error::Server { status: 500 };
        assert_eq!(err.to_string(), "server returned HTTP 500");
    }

    #[test]
    fn auth_error_converts() {
        let err: Error = AuthError::InvalidToken.into();
        assert!(matches!(err, Error::Auth(AuthError::InvalidToken)));
        assert_eq!(err.to_string(), "authentication error: invalid token");
    }

    #[test]
    fn unknown_property_display() {
        let err = Error::UnknownProperty {
            id: "ZoneMode".to_string(),
            zone: 2,
        };
        assert_eq!(err.to_string(), "unknown property ZoneMode (zone 2)");
    }

    #[test]
    fn value_error_display() {
        let err = ValueError::UnknownVariant {
            kind: "PlantMode",
            value: 42,
        };
        assert_eq!(err.to_string(), "unknown PlantMode value: 42");
    }
}
