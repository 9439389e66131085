// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Login response parsing.

use serde::Deserialize;

use crate::error::ParseError;

/// Response of the `accounts/login` endpoint.
///
/// ```
/// use ariston_lib::response::LoginResponse;
///
/// let response: LoginResponse = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
/// assert_eq!(response.into_token().unwrap(), "abc");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Session token to send in the `ar.authToken` header.
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// Returns the session token.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the response carries no token.
    pub fn into_token(self) -> Result<String, ParseError> {
        self.token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ParseError::MissingField("token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_error() {
        let response: LoginResponse = serde_json::from_str(r#"{"expires": 3600}"#).unwrap();
        assert!(matches!(
            response.into_token(),
            Err(ParseError::MissingField(field)) if field == "token"
        ));
    }
}
