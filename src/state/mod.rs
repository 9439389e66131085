// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! This module provides the local mirror of one plant. The [`DeviceState`]
//! struct holds the cached properties together with the bookkeeping of
//! in-flight writes, while [`PropertyChange`] describes one cached value that
//! changed.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//!
//! use ariston_lib::FeatureSet;
//! use ariston_lib::response::{DeviceSummary, PropertyValue};
//! use ariston_lib::state::{DeviceState, PropertyKey};
//! use ariston_lib::types::ItemValue;
//!
//! let mut state = DeviceState::new(DeviceSummary::new("F0AD4E0590BD"), FeatureSet::default());
//!
//! let fetched = HashMap::from([(
//!     PropertyKey::new("DhwTemp", 0),
//!     PropertyValue::new("DhwTemp", 0, 45.0),
//! )]);
//! state.merge(fetched);
//!
//! assert_eq!(
//!     state.value(&PropertyKey::new("DhwTemp", 0)),
//!     Some(&ItemValue::Float(45.0))
//! );
//! ```

mod device_state;
mod energy_state;
mod property_change;
mod property_key;

pub use device_state::{DeviceState, MergeOutcome};
pub use energy_state::EnergyState;
pub use property_change::PropertyChange;
pub use property_key::PropertyKey;
