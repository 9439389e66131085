// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for Ariston NET JSON documents.
//!
//! This module provides structures for deserializing the JSON documents
//! returned by the remote service. Each type corresponds to one endpoint or a
//! part of its payload.

mod consumption;
mod device;
mod login;
mod property;

pub use consumption::ConsumptionsSettings;
pub use device::DeviceSummary;
pub use login::LoginResponse;
pub use property::{PropertiesResponse, PropertyValue};
