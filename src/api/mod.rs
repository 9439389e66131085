// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Remote access layer for the Ariston NET cloud.
//!
//! [`AristonApi`] maps each intent to one endpoint and owns the session
//! token. Every call goes through the same execution policy:
//!
//! 1. The request carries the current token in the `ar.authToken` header.
//! 2. A 401/405 answer means the session expired: the API logs in again and
//!    retries the request once. A failed login is an [`AuthError::LoginFailed`].
//! 3. A 401/405 answer to the retry is an [`AuthError::InvalidToken`].
//! 4. A 404 answer is an absent result (`Ok(None)`), not an error.
//! 5. Any other non-success answer is an [`Error::Server`].
//! 6. An empty body is an absent result.
//!
//! # Examples
//!
//! ```no_run
//! use ariston_lib::AristonApi;
//!
//! # async fn example() -> ariston_lib::Result<()> {
//! let api = AristonApi::http("me@example.com", "secret")?;
//! if !api.connect().await? {
//!     eprintln!("invalid credentials");
//!     return Ok(());
//! }
//!
//! for device in api.list_devices().await?.unwrap_or_default() {
//!     println!("{}", device.label());
//! }
//! # Ok(())
//! # }
//! ```

mod endpoints;

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::command::{
    GetPropertiesRequest, HolidayRequest, LoginRequest, SetItem, SetPropertiesRequest,
    request_items,
};
use crate::error::{AuthError, Error, ParseError, Result};
use crate::features::FeatureSet;
use crate::protocol::{HttpRequest, HttpResponse, Method, Transport};
use crate::response::{
    ConsumptionsSettings, DeviceSummary, LoginResponse, PropertiesResponse, PropertyValue,
};
use crate::state::PropertyKey;
use crate::types::{ItemValue, UnitSystem};

#[cfg(feature = "http")]
use crate::protocol::{HttpConfig, HttpTransport};

/// Default base URL of the Ariston NET API.
pub const DEFAULT_BASE_URL: &str = "https://www.ariston-net.remotethermo.com/api/v2/";

/// Header carrying the session token.
pub const AUTH_HEADER: &str = "ar.authToken";

/// Account credentials.
#[derive(Clone)]
pub struct Credentials {
    /// Account user name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client of the Ariston NET API.
///
/// The only state is the session token, replaced wholesale by each successful
/// [`connect`](Self::connect). The API is safe to share between tasks.
pub struct AristonApi<T: Transport> {
    transport: T,
    base_url: String,
    credentials: Credentials,
    token: RwLock<String>,
}

impl<T: Transport> fmt::Debug for AristonApi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AristonApi")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("has_token", &self.has_token())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "http")]
impl AristonApi<HttpTransport> {
    /// Creates an API client over the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn http(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_http_config(HttpConfig::new(), username, password)
    }

    /// Creates an API client over an HTTP transport with custom settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn with_http_config(
        config: HttpConfig,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let transport = config.into_transport()?;
        Ok(Self::new(transport, username, password))
    }
}

impl<T: Transport> AristonApi<T> {
    /// Creates an API client over the given transport.
    #[must_use]
    pub fn new(transport: T, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            token: RwLock::new(String::new()),
        }
    }

    /// Sets a custom base URL.
    ///
    /// A trailing slash is added if missing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the current session token (empty before the first login).
    #[must_use]
    pub fn token(&self) -> String {
        self.token.read().clone()
    }

    /// Returns `true` once a login succeeded.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.read().is_empty()
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Logs in and stores a fresh session token.
    ///
    /// Returns `Ok(false)` when the service rejects the credentials. The
    /// previous token is kept on any failure.
    ///
    /// # Errors
    ///
    /// Returns error if the service cannot be reached or answers with a body
    /// that is not a login response.
    pub async fn connect(&self) -> Result<bool> {
        let body = to_body(&LoginRequest {
            usr: &self.credentials.username,
            pwd: &self.credentials.password,
        })?;
        let request = HttpRequest::new(Method::Post, self.url(endpoints::LOGIN)).with_body(body);

        tracing::debug!(username = %self.credentials.username, "Logging in");

        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status(), "Login rejected");
            return Ok(false);
        }

        match response.json::<LoginResponse>()? {
            Some(login) => {
                let token = login.into_token()?;
                *self.token.write() = token;
                tracing::debug!("Login succeeded");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // =========================================================================
    // Devices and features
    // =========================================================================

    /// Lists the plants of the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list_devices(&self) -> Result<Option<Vec<DeviceSummary>>> {
        self.request(Method::Get, &endpoints::plants_lite(), None)
            .await
    }

    /// Lists the plants of the account with their full details.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn list_devices_detailed(&self) -> Result<Option<Vec<DeviceSummary>>> {
        self.request(Method::Get, &endpoints::plants(), None).await
    }

    /// Fetches the feature set of a plant.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_features(&self, gw_id: &str) -> Result<Option<FeatureSet>> {
        self.request(Method::Get, &endpoints::features(gw_id), None)
            .await
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Fetches every catalog property of a plant.
    ///
    /// The requested items are derived from `features` with
    /// [`request_items`](crate::command::request_items).
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_properties(
        &self,
        gw_id: &str,
        features: &FeatureSet,
        locale: &str,
        umsys: UnitSystem,
    ) -> Result<Option<HashMap<PropertyKey, PropertyValue>>> {
        let body = to_body(&GetPropertiesRequest {
            items: request_items(features),
            features,
            culture: locale,
        })?;
        let response: Option<PropertiesResponse> = self
            .request(
                Method::Post,
                &endpoints::get_properties(gw_id, umsys),
                Some(body),
            )
            .await?;
        Ok(response.map(PropertiesResponse::into_map))
    }

    /// Writes one property, conditioned on the previously observed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StaleWrite`] if the server answers 409 Conflict, or
    /// any other error of the request.
    #[allow(clippy::too_many_arguments)]
    pub async fn set_property(
        &self,
        gw_id: &str,
        zone: u32,
        features: &FeatureSet,
        property: &str,
        value: &ItemValue,
        prev_value: Option<&ItemValue>,
        umsys: UnitSystem,
    ) -> Result<()> {
        let body = to_body(&SetPropertiesRequest {
            items: vec![SetItem {
                id: property,
                prev_value,
                value,
                zone,
            }],
            features,
        })?;
        let result: Result<Option<Value>> = self
            .request(
                Method::Post,
                &endpoints::set_properties(gw_id, umsys),
                Some(body),
            )
            .await;
        match result {
            Ok(_) => Ok(()),
            Err(Error::Server { status: 409 }) => Err(Error::StaleWrite {
                id: property.to_string(),
                zone,
            }),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Energy reports
    // =========================================================================

    /// Fetches the energy account report.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_energy_account(&self, gw_id: &str) -> Result<Option<Value>> {
        self.request(Method::Get, &endpoints::energy_account(gw_id), None)
            .await
    }

    /// Fetches the consumption sequences.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_consumptions_sequences(
        &self,
        gw_id: &str,
        has_boiler: bool,
        has_slp: bool,
    ) -> Result<Option<Value>> {
        let path = endpoints::consumptions_sequences(gw_id, has_boiler, has_slp);
        self.request(Method::Get, &path, None).await
    }

    /// Fetches the consumption tariff settings.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_consumptions_settings(
        &self,
        gw_id: &str,
    ) -> Result<Option<ConsumptionsSettings>> {
        self.request(
            Method::Post,
            &endpoints::get_consumptions_settings(gw_id),
            Some(Value::Object(serde_json::Map::new())),
        )
        .await
    }

    /// Stores the consumption tariff settings.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_consumptions_settings(
        &self,
        gw_id: &str,
        settings: &ConsumptionsSettings,
    ) -> Result<Option<Value>> {
        let body = to_body(settings)?;
        self.request(
            Method::Post,
            &endpoints::set_consumptions_settings(gw_id),
            Some(body),
        )
        .await
    }

    // =========================================================================
    // Programs and holidays
    // =========================================================================

    /// Fetches the heating time program of a zone.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn get_time_programs(
        &self,
        gw_id: &str,
        zone: u32,
        umsys: UnitSystem,
    ) -> Result<Option<Value>> {
        self.request(
            Method::Get,
            &endpoints::time_programs(gw_id, zone, umsys),
            None,
        )
        .await
    }

    /// Sets the last day of the holiday, or clears it with `None`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_holiday(&self, gw_id: &str, end_date: Option<NaiveDate>) -> Result<()> {
        let body = to_body(&HolidayRequest { new: end_date })?;
        let _: Option<Value> = self
            .request(Method::Post, &endpoints::holiday(gw_id), Some(body))
            .await?;
        Ok(())
    }

    // =========================================================================
    // Request execution
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, method: Method, url: &str, body: Option<Value>) -> Result<HttpResponse> {
        let mut request = HttpRequest::new(method, url).with_header(AUTH_HEADER, self.token());
        if let Some(body) = body {
            request = request.with_body(body);
        }

        tracing::debug!(%method, url = %url, body = ?request.body, "Sending request");

        let response = self.transport.execute(request).await?;

        tracing::debug!(
            status = response.status(),
            body = %response.body(),
            "Received response"
        );

        Ok(response)
    }

    /// Executes a request with the session-expiry retry policy.
    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<R>> {
        let url = self.url(path);

        let mut response = self.send(method, &url, body.clone()).await?;

        if is_session_expired(response.status()) {
            tracing::info!(status = response.status(), "Session expired, logging in again");
            match self.connect().await {
                Ok(true) => {}
                Ok(false) => return Err(AuthError::LoginFailed.into()),
                Err(e) => {
                    tracing::warn!(error = %e, "Re-login failed");
                    return Err(AuthError::LoginFailed.into());
                }
            }

            response = self.send(method, &url, body).await?;
            if is_session_expired(response.status()) {
                return Err(AuthError::InvalidToken.into());
            }
        }

        decode(&response)
    }
}

fn is_session_expired(status: u16) -> bool {
    status == 401 || status == 405
}

fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<Option<R>> {
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.is_success() {
        return Err(Error::Server {
            status: response.status(),
        });
    }
    response.json().map_err(Error::Parse)
}

fn to_body<B: Serialize>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| Error::Parse(ParseError::Json(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_maps_not_found_to_none() {
        let response = HttpResponse::new(404, "not here");
        assert!(decode::<Value>(&response).unwrap().is_none());
    }

    #[test]
    fn decode_maps_other_status_to_server_error() {
        let response = HttpResponse::new(500, "");
        assert!(matches!(
            decode::<Value>(&response),
            Err(Error::Server { status: 500 })
        ));
    }

    #[test]
    fn session_expiry_statuses() {
        assert!(is_session_expired(401));
        assert!(is_session_expired(405));
        assert!(!is_session_expired(403));
    }

    #[test]
    fn credentials_debug_hides_password() {
        let credentials = Credentials {
            username: "me".to_string(),
            password: "secret".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("me"));
        assert!(!debug.contains("secret"));
    }
}
