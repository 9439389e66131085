// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request body definitions.

use chrono::NaiveDate;
use serde::Serialize;

use crate::features::FeatureSet;
use crate::types::ItemValue;

use super::ItemRequest;

/// Body of `accounts/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account user name.
    pub usr: &'a str,
    /// Account password.
    pub pwd: &'a str,
}

/// Body of `dataItems/{gw}/get`.
#[derive(Debug, Clone, Serialize)]
pub struct GetPropertiesRequest<'a> {
    /// Requested properties.
    pub items: Vec<ItemRequest>,
    /// The feature set, echoed back verbatim.
    pub features: &'a FeatureSet,
    /// Locale used for option texts, e.g. `en-US`.
    pub culture: &'a str,
}

/// Body of `dataItems/{gw}/set`.
#[derive(Debug, Clone, Serialize)]
pub struct SetPropertiesRequest<'a> {
    /// Written properties.
    pub items: Vec<SetItem<'a>>,
    /// The feature set, echoed back verbatim.
    pub features: &'a FeatureSet,
}

/// One conditional write.
///
/// `prev_value` is the value the client last observed, so the server can
/// detect writes based on stale data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetItem<'a> {
    /// Property id.
    pub id: &'a str,
    /// Value the client last observed.
    pub prev_value: Option<&'a ItemValue>,
    /// Requested value.
    pub value: &'a ItemValue,
    /// Zone number.
    pub zone: u32,
}

/// Body of `plantData/{gw}/holiday`.
///
/// `None` clears the holiday.
#[derive(Debug, Clone, Serialize)]
pub struct HolidayRequest {
    /// Last day of the holiday.
    pub new: Option<NaiveDate>,
}
