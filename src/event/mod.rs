// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for coordinator notifications.
//!
//! Observers learn about refreshed and written properties through an
//! [`EventBus`] built on tokio's broadcast channel, so any number of
//! subscribers receive every event.
//!
//! # Examples
//!
//! ```
//! use ariston_lib::event::{CoordinatorEvent, EventBus};
//!
//! let bus = EventBus::new();
//!
//! // Subscribe to events
//! let mut rx = bus.subscribe();
//!
//! // Publish an event
//! bus.publish(CoordinatorEvent::EnergyRefreshed);
//! ```

mod coordinator_event;
mod event_bus;

pub use coordinator_event::CoordinatorEvent;
pub use event_bus::EventBus;
