// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ariston Lib - A Rust client for Ariston NET heating plants.
//!
//! This library provides async APIs to read and control boilers and heat
//! pumps registered on the Ariston NET cloud service.
//!
//! # Supported Features
//!
//! - **Session handling**: Login, transparent re-login on session expiry
//! - **Device discovery**: Plant list, feature sets, zones
//! - **Properties**: Cached reads, optimistic conditional writes
//! - **Energy reports**: Energy account, consumption sequences and tariffs
//! - **Programs**: Holiday end date, zone time programs
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ariston_lib::{AristonApi, CoordinatorConfig, CoordinatorEvent, DeviceCoordinator};
//! use ariston_lib::types::{DeviceProperty, ThermostatProperty};
//!
//! #[tokio::main]
//! async fn main() -> ariston_lib::Result<()> {
//!     let api = Arc::new(AristonApi::http("me@example.com", "secret")?);
//!     if !api.connect().await? {
//!         return Ok(());
//!     }
//!
//!     let Some(device) = api.list_devices().await?.and_then(|d| d.into_iter().next()) else {
//!         return Ok(());
//!     };
//!
//!     let coordinator = Arc::new(DeviceCoordinator::new(api, device, CoordinatorConfig::new()));
//!     let mut events = coordinator.subscribe();
//!     let _polling = coordinator.spawn_polling();
//!
//!     // Wait for the first refresh
//!     while let Ok(event) = events.recv().await {
//!         if matches!(event, CoordinatorEvent::Refreshed { .. }) {
//!             break;
//!         }
//!     }
//!
//!     for zone in coordinator.zone_numbers() {
//!         let temp = coordinator.get_value(ThermostatProperty::ZoneMeasuredTemp.as_str(), zone);
//!         println!("Zone {zone}: {temp:?}");
//!     }
//!
//!     coordinator
//!         .set_property_by_id(DeviceProperty::DhwTemp.as_str(), 0, 50.0)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Logging
//!
//! The library logs through `tracing` and installs no subscriber. Requests and
//! responses are logged at `debug`, skipped refresh cycles at `warn`.

pub mod api;
pub mod command;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod features;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use api::{AristonApi, Credentials};
pub use coordinator::{CoordinatorConfig, DeviceCoordinator, PollingHandle};
pub use error::{AuthError, Error, ParseError, ProtocolError, Result, ValueError};
pub use event::CoordinatorEvent;
pub use features::{FeatureSet, Zone};
#[cfg(feature = "http")]
pub use protocol::{HttpConfig, HttpTransport};
pub use protocol::{HttpRequest, HttpResponse, Method, Transport};
pub use response::{ConsumptionsSettings, DeviceSummary, PropertyValue};
pub use state::{DeviceState, EnergyState, PropertyChange, PropertyKey};
pub use types::{ItemValue, UnitSystem};
