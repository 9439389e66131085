// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request bodies sent to the Ariston NET API.
//!
//! # Available Requests
//!
//! | Request | Endpoint | Purpose |
//! |---------|----------|---------|
//! | [`LoginRequest`] | `accounts/login` | Obtain a session token |
//! | [`GetPropertiesRequest`] | `remote/dataItems/{gw}/get` | Read every catalog property |
//! | [`SetPropertiesRequest`] | `remote/dataItems/{gw}/set` | Conditional write of one property |
//! | [`HolidayRequest`] | `remote/plantData/{gw}/holiday` | Set or clear the holiday end date |
//!
//! # Item Derivation
//!
//! The property read request is derived from the feature set alone, see
//! [`request_items`]:
//!
//! ```
//! use ariston_lib::command::request_items;
//! use ariston_lib::features::{FeatureSet, Zone};
//! use ariston_lib::types::{DeviceProperty, ThermostatProperty};
//!
//! let features = FeatureSet::with_zones(vec![Zone::new(1), Zone::new(2)]);
//! let items = request_items(&features);
//!
//! assert_eq!(
//!     items.len(),
//!     DeviceProperty::ALL.len() + 2 * ThermostatProperty::ALL.len()
//! );
//! ```

mod items;
mod requests;

pub use items::{ItemRequest, request_items};
pub use requests::{
    GetPropertiesRequest, HolidayRequest, LoginRequest, SetItem, SetPropertiesRequest,
};
